// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Sticky: pin a header to the viewport edge while it would scroll away.
//!
//! Given a header's natural rectangle in content coordinates, the current
//! scroll offset, and whether stickiness is engaged (for an accordion: the
//! panel is sticky *and* open), [`place`] decides whether the header stays in
//! normal flow or is pinned at a fixed offset from the top of the viewport.
//!
//! - [`StickyConfig`]: the pin offset from the viewport top (default `0.0`).
//! - [`Placement`]: the decision, resolvable to a viewport-space rectangle with
//!   [`Placement::rect`].
//! - [`StickyPositioner`]: a small controller owning scroll state, answering
//!   placements for every header in one scroll container.
//!
//! When the header's containing bounds are known, a pinned header is pushed
//! up so it never extends past the bottom of its container; as the container
//! scrolls out of view, its header scrolls out with it.
//!
//! This crate does not perform layout or rendering. Coordinates are in a
//! caller-chosen space where `y` grows downward (typically logical pixels).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_sticky::{Placement, StickyConfig, StickyPositioner};
//!
//! let header = Rect::new(0.0, 100.0, 200.0, 120.0);
//! let panel = Rect::new(0.0, 100.0, 200.0, 400.0);
//! let mut sticky = StickyPositioner::new(StickyConfig::default());
//!
//! // Not scrolled past the header yet: normal flow.
//! sticky.set_scroll_offset(50.0);
//! assert_eq!(sticky.place(header, Some(panel), true), Placement::Flow);
//!
//! // Scrolled past it: pinned to the top edge.
//! sticky.set_scroll_offset(150.0);
//! assert_eq!(sticky.place(header, Some(panel), true), Placement::Pinned { y: 0.0 });
//!
//! // Disengaged (for example, the panel closed): back to normal flow.
//! assert_eq!(sticky.place(header, Some(panel), false), Placement::Flow);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

mod positioner;

pub use positioner::{Placement, StickyConfig, StickyPositioner, place};
