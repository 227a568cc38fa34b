// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistable open state of a group.

use alloc::vec::Vec;

use crate::SlotKey;

/// Open state of one durable slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotSnapshot {
    /// Slot the state belongs to.
    pub slot: SlotKey,
    /// Whether the panel was open.
    pub open: bool,
}

/// Open state of a whole group, produced by [`Group::snapshot`](crate::Group::snapshot).
///
/// Slots are sorted by key so equal states produce equal snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSnapshot {
    /// Slot of the active panel (single mode only).
    pub active: Option<SlotKey>,
    /// Per-slot open state.
    pub slots: Vec<SlotSnapshot>,
}

impl GroupSnapshot {
    /// Returns the recorded state of `slot`, if present.
    pub fn open_state(&self, slot: SlotKey) -> Option<bool> {
        self.slots.iter().find(|s| s.slot == slot).map(|s| s.open)
    }
}
