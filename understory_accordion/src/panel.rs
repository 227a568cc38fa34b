// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-panel open state and its precedence rules.
//!
//! Three inputs compete for a panel's open state:
//!
//! 1. the always-open override ([`PanelProps::always_open`]),
//! 2. the caller's controlled value ([`PanelProps::opened`]), and
//! 3. the panel's own toggled state.
//!
//! Always-open has strict priority. The controlled value is a one-shot
//! synchronization: it only takes effect on the render where it changes.
//! Between such changes, toggles and forced closes own the state.

use crate::PanelKey;

/// Caller-supplied properties of a panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelProps {
    /// Controlled open state.
    ///
    /// Used as the initial state when the panel first mounts. Afterwards, a
    /// *change* of this value between renders forces the panel to match it and
    /// reports a [`Change`](crate::Change) with [`Cause::External`](crate::Cause::External).
    pub opened: Option<bool>,
    /// Pin the panel open. Toggles and forced closes are ignored.
    pub always_open: bool,
    /// Whether the panel's header participates in sticky positioning.
    pub sticky: bool,
    /// Optional content identity for the panel's durable state slot.
    ///
    /// Without a key, state follows the panel's position.
    pub key: Option<PanelKey>,
}

impl PanelProps {
    /// Props for a panel with a controlled open state.
    pub fn opened(opened: bool) -> Self {
        Self {
            opened: Some(opened),
            ..Self::default()
        }
    }

    /// Props for an always-open panel.
    pub fn always_open() -> Self {
        Self {
            always_open: true,
            ..Self::default()
        }
    }

    /// Returns these props with sticky positioning enabled.
    #[must_use]
    pub fn with_sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    /// Returns these props with a content key.
    #[must_use]
    pub fn with_key(mut self, key: PanelKey) -> Self {
        self.key = Some(key);
        self
    }
}

bitflags::bitflags! {
    /// Derived per-render flags of a panel.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PanelFlags: u8 {
        /// The panel is open.
        const OPEN        = 0b0000_0001;
        /// The panel is pinned open.
        const ALWAYS_OPEN = 0b0000_0010;
        /// The panel's header is sticky.
        const STICKY      = 0b0000_0100;
        /// First panel of its group (draws the leading divider).
        const FIRST       = 0b0000_1000;
        /// Last panel of its group (draws the trailing divider).
        const LAST        = 0b0001_0000;
    }
}

/// Open/closed state machine of a single panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
    always_open: bool,
    /// Controlled value observed on the previous render.
    observed: Option<bool>,
}

impl PanelState {
    /// Initial state for a newly mounted panel.
    ///
    /// `always_open ? Open : opened.unwrap_or(false)`.
    pub fn new(props: &PanelProps) -> Self {
        Self {
            open: props.always_open || props.opened.unwrap_or(false),
            always_open: props.always_open,
            observed: props.opened,
        }
    }

    /// Returns `true` if the panel is open.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if the panel is pinned open.
    pub const fn is_always_open(&self) -> bool {
        self.always_open
    }

    /// Handle a user toggle.
    ///
    /// Returns the new open state, or `None` if the toggle was ignored because
    /// the panel is pinned open.
    pub fn toggle(&mut self) -> Option<bool> {
        if self.always_open {
            return None;
        }
        self.open = !self.open;
        Some(self.open)
    }

    /// Close the panel on behalf of its group.
    ///
    /// Returns `true` if the panel transitioned from open to closed.
    pub fn force_close(&mut self) -> bool {
        if self.always_open || !self.open {
            return false;
        }
        self.open = false;
        true
    }

    /// Observe the caller's controlled value for this render.
    ///
    /// When the value differs from the one observed on the previous render
    /// (including `None` to `Some`), the panel conforms to it and this returns
    /// the new open state so the change can be reported. The report happens
    /// even when the state already matched. A value that disappears (`Some`
    /// to `None`) ends observation without a transition. Pinned panels never
    /// conform to `Some(false)` and report nothing.
    pub fn sync(&mut self, controlled: Option<bool>) -> Option<bool> {
        let previous = core::mem::replace(&mut self.observed, controlled);
        let value = controlled?;
        if previous == Some(value) || self.always_open {
            return None;
        }
        self.open = value;
        Some(value)
    }

    /// Re-apply the always-open override for this render.
    pub fn pin(&mut self, always_open: bool) {
        self.always_open = always_open;
        if always_open {
            self.open = true;
        }
    }

    /// Overwrite the open state, as when restoring a snapshot.
    ///
    /// Pinned panels stay open. Returns `true` if the state changed.
    pub fn restore(&mut self, open: bool) -> bool {
        let open = open || self.always_open;
        let changed = self.open != open;
        self.open = open;
        changed
    }
}
