// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reflow hints issued after a panel toggles.
//!
//! Some hosts cache a stale scroll height after a panel's body animates open
//! or closed. A group calls its [`ReflowHint`] after every committed user
//! toggle so the host can force a recalculation. Hosts without that problem
//! use [`NoReflow`].

use core::fmt;

/// Host hook invoked after a committed user toggle.
pub trait ReflowHint {
    /// Ask the host to recompute layout and scroll extents.
    fn reflow(&mut self);
}

/// A reflow hint that does nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoReflow;

impl ReflowHint for NoReflow {
    fn reflow(&mut self) {}
}

/// Nudges the scroll position by one unit and back.
///
/// The closure receives a scroll delta: first `1.0`, then `-1.0`.
///
/// ```
/// use understory_accordion::{ReflowHint, ScrollNudge};
///
/// let mut deltas = Vec::new();
/// let mut nudge = ScrollNudge(|dy: f64| deltas.push(dy));
/// nudge.reflow();
/// drop(nudge);
/// assert_eq!(deltas, [1.0, -1.0]);
/// ```
pub struct ScrollNudge<F>(pub F);

impl<F: FnMut(f64)> ReflowHint for ScrollNudge<F> {
    fn reflow(&mut self) {
        (self.0)(1.0);
        (self.0)(-1.0);
    }
}

impl<F> fmt::Debug for ScrollNudge<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollNudge").finish_non_exhaustive()
    }
}

impl<R: ReflowHint + ?Sized> ReflowHint for &mut R {
    fn reflow(&mut self) {
        (**self).reflow();
    }
}
