// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky header placement for rendered panels.
//!
//! A panel's header is sticky only while the panel is both marked
//! [`sticky`](crate::PanelProps::sticky) and open. The header never extends
//! past the panel's own bounds.

use kurbo::Rect;
use understory_sticky::{Placement, StickyPositioner};

use crate::PanelView;

/// Place the header of `view`.
///
/// `header` and `panel` are the header's and the whole panel's natural
/// rectangles in content coordinates.
#[must_use]
pub fn place_header<T>(
    view: &PanelView<T>,
    positioner: &StickyPositioner,
    header: Rect,
    panel: Rect,
) -> Placement {
    if !view.is_sticky() {
        return Placement::Flow;
    }
    positioner.place(header, Some(panel), view.is_open())
}

/// Viewport-space rectangle of the header of `view`.
#[must_use]
pub fn header_rect<T>(
    view: &PanelView<T>,
    positioner: &StickyPositioner,
    header: Rect,
    panel: Rect,
) -> Rect {
    place_header(view, positioner, header, panel).rect(header, positioner.scroll_offset())
}
