// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Accordion: coordination primitives for collapsible panel groups.
//!
//! This crate models the state behind an accordion (a group of collapsible
//! panels) without knowing anything about widgets, styling, or a particular UI
//! framework. A host describes its children, renders them through a
//! [`Group`], draws whatever the returned [`Rendered`] entries say, and feeds
//! user toggles back in.
//!
//! The core concepts are:
//!
//! - [`Child`]: a host child with an explicit capability tag (panel, header,
//!   detail, or passthrough). [`classify`] unwraps grouping wrappers and drops
//!   non-renderable children.
//! - [`GroupId`] / [`PanelId`]: a group's id prefix is created once; every
//!   panel's id is that prefix plus its ordinal among panel children
//!   ([`assign_identities`]).
//! - [`PanelState`]: one panel's open/closed state machine, with strict
//!   priority for [`PanelProps::always_open`] and edge-triggered
//!   synchronization of the caller's controlled [`PanelProps::opened`].
//! - [`Group`]: owns the exclusivity [`Mode`], the active panel, and the
//!   durable per-panel state. In [`Mode::Single`], activating a panel closes
//!   its siblings; in [`Mode::Multi`], panels are independent.
//! - [`ReflowHint`]: an injectable hook fired after committed toggles, for
//!   hosts that need a layout nudge ([`ScrollNudge`]) or nothing ([`NoReflow`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_accordion::{Child, Group, GroupConfig, GroupId, Mode, PanelProps};
//!
//! let mut group = Group::with_id(GroupId::new("faq"), GroupConfig::with_mode(Mode::Single));
//! let children = || {
//!     vec![
//!         Child::Passthrough("Frequently asked"),
//!         Child::Panel(PanelProps::default(), "Shipping"),
//!         Child::Panel(PanelProps::default(), "Returns"),
//!     ]
//! };
//!
//! let render = group.render(children());
//! let shipping = render.panels().next().unwrap().id.clone();
//! assert_eq!(shipping.to_string(), "faq_0");
//!
//! // Open "Shipping", then "Returns": single mode closes "Shipping" again.
//! group.toggle(&shipping);
//! let returns = group.panel_id(1).unwrap().clone();
//! group.toggle(&returns);
//!
//! let render = group.render(children());
//! let open: Vec<_> = render.panels().filter(|p| p.is_open()).map(|p| p.content).collect();
//! assert_eq!(open, ["Returns"]);
//! ```
//!
//! ## Notifications
//!
//! Every committed open/close transition is reported as a [`Change`]:
//! [`Group::toggle`] returns the user-driven one, and [`Render::changes`]
//! lists the ones caused by a changed controlled value. Forced closes in
//! single mode are not reported.
//!
//! ## Identity and state
//!
//! Ids always follow position. Durable open state follows position too,
//! unless a panel carries a [`PanelKey`], in which case its state follows the
//! key across insertions and reorders. The active panel of a single-mode
//! group follows the same identity as its state, and is cleared when that
//! panel is no longer rendered.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for optional dependencies.
//! - `uuid` (default): [`Group::new`] and [`GroupId::random`] draw random prefixes.
//! - `serde`: [`GroupSnapshot`] and its parts implement `Serialize`/`Deserialize`.
//! - `tracing`: emits `tracing` events for toggles, forced closes, external
//!   syncs, and slot pruning, and a span per render.
//! - `sticky_adapter`: enables the [`adapters::sticky`] module, which places
//!   panel headers with `understory_sticky`.
//! - `libm`: `no_std` floating-point math for the sticky adapter.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "sticky_adapter")]
pub mod adapters;

mod classify;
mod group;
mod identity;
mod panel;
mod reflow;
mod snapshot;

pub use classify::{Child, Classified, PanelParts, Tag, classify};
pub use group::{
    Cause, Change, Group, GroupConfig, Mode, PanelView, Presentation, PresentationSymbol, Render,
    Rendered,
};
pub use identity::{
    GroupId, Identified, IdentifiedPanel, PanelId, PanelKey, SlotKey, assign_identities,
};
pub use panel::{PanelFlags, PanelProps, PanelState};
pub use reflow::{NoReflow, ReflowHint, ScrollNudge};
pub use snapshot::{GroupSnapshot, SlotSnapshot};
