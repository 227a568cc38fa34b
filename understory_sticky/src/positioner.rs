// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky placement and a scroll-owning controller.

use kurbo::{Point, Rect, Vec2};

/// Configuration of sticky placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StickyConfig {
    /// Distance from the viewport top at which a header is pinned.
    pub top_offset: f64,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self { top_offset: 0.0 }
    }
}

/// Where a header should be drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Placement {
    /// Normal flow: the header scrolls with its content.
    Flow,
    /// Pinned with its top edge at `y` in viewport coordinates.
    Pinned {
        /// Viewport-space top edge.
        y: f64,
    },
}

impl Placement {
    /// Returns `true` if the header is pinned.
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        matches!(self, Self::Pinned { .. })
    }

    /// Resolve to a viewport-space rectangle.
    ///
    /// `header` is the header's natural rectangle in content coordinates.
    #[must_use]
    pub fn rect(self, header: Rect, scroll_offset: f64) -> Rect {
        match self {
            Self::Flow => header - Vec2::new(0.0, scroll_offset),
            Self::Pinned { y } => header.with_origin(Point::new(header.x0, y)),
        }
    }
}

/// Decide where a header goes.
///
/// - `header`: the header's natural rectangle in content coordinates.
/// - `bounds`: optional containing rectangle (for example, the whole panel),
///   also in content coordinates.
/// - `scroll_offset`: content coordinate at the top of the viewport.
/// - `engaged`: whether stickiness applies right now.
///
/// The header is pinned only while engaged and while its natural top would be
/// above `config.top_offset` in the viewport.
#[must_use]
pub fn place(
    header: Rect,
    bounds: Option<Rect>,
    scroll_offset: f64,
    config: &StickyConfig,
    engaged: bool,
) -> Placement {
    if !engaged {
        return Placement::Flow;
    }
    let natural = header.y0 - scroll_offset;
    if natural >= config.top_offset {
        return Placement::Flow;
    }
    let mut y = config.top_offset;
    if let Some(bounds) = bounds {
        // Stay inside the container's bottom edge.
        y = y.min(bounds.y1 - scroll_offset - header.height());
    }
    if y <= natural {
        Placement::Flow
    } else {
        Placement::Pinned { y }
    }
}

/// Controller owning the scroll offset of one scroll container.
///
/// It does not track headers; call [`place`](Self::place) for each header
/// whenever scroll, layout, or engagement changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StickyPositioner {
    config: StickyConfig,
    scroll_offset: f64,
}

impl StickyPositioner {
    /// Creates a positioner scrolled to the top.
    #[must_use]
    pub fn new(config: StickyConfig) -> Self {
        Self {
            config,
            scroll_offset: 0.0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &StickyConfig {
        &self.config
    }

    /// Sets the pin offset from the viewport top. Negative values clamp to zero.
    pub fn set_top_offset(&mut self, top_offset: f64) {
        self.config.top_offset = top_offset.max(0.0);
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the scroll offset. Negative values clamp to zero.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Placement of one header at the current scroll offset.
    #[must_use]
    pub fn place(&self, header: Rect, bounds: Option<Rect>, engaged: bool) -> Placement {
        place(header, bounds, self.scroll_offset, &self.config, engaged)
    }

    /// Viewport-space rectangle of one header at the current scroll offset.
    #[must_use]
    pub fn header_rect(&self, header: Rect, bounds: Option<Rect>, engaged: bool) -> Rect {
        self.place(header, bounds, engaged)
            .rect(header, self.scroll_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: Rect = Rect::new(0.0, 100.0, 200.0, 120.0);
    const PANEL: Rect = Rect::new(0.0, 100.0, 200.0, 300.0);

    #[test]
    fn flow_until_header_reaches_top() {
        let config = StickyConfig::default();
        assert_eq!(place(HEADER, None, 0.0, &config, true), Placement::Flow);
        // Exactly at the top edge still counts as normal flow.
        assert_eq!(place(HEADER, None, 100.0, &config, true), Placement::Flow);
        assert_eq!(
            place(HEADER, None, 101.0, &config, true),
            Placement::Pinned { y: 0.0 }
        );
    }

    #[test]
    fn disengaged_header_never_pins() {
        let config = StickyConfig::default();
        assert_eq!(place(HEADER, None, 500.0, &config, false), Placement::Flow);
    }

    #[test]
    fn top_offset_moves_the_pin_line() {
        let config = StickyConfig { top_offset: 40.0 };
        // Natural top at 70 in the viewport: below the pin line.
        assert_eq!(place(HEADER, None, 30.0, &config, true), Placement::Flow);
        // Natural top at 30: above the pin line, so pinned at 40.
        assert_eq!(
            place(HEADER, None, 70.0, &config, true),
            Placement::Pinned { y: 40.0 }
        );
    }

    #[test]
    fn pinned_header_is_pushed_up_by_container_bottom() {
        let config = StickyConfig::default();
        // Panel bottom at 300; header is 20 tall. At scroll 290 the panel
        // bottom is 10 below the viewport top, so the header sits at -10.
        assert_eq!(
            place(HEADER, Some(PANEL), 290.0, &config, true),
            Placement::Pinned { y: -10.0 }
        );
        // Well inside the panel: plain pin.
        assert_eq!(
            place(HEADER, Some(PANEL), 150.0, &config, true),
            Placement::Pinned { y: 0.0 }
        );
    }

    #[test]
    fn header_filling_its_container_stays_in_flow() {
        let config = StickyConfig::default();
        assert_eq!(
            place(HEADER, Some(HEADER), 110.0, &config, true),
            Placement::Flow
        );
    }

    #[test]
    fn placement_rects() {
        assert_eq!(
            Placement::Flow.rect(HEADER, 30.0),
            Rect::new(0.0, 70.0, 200.0, 90.0)
        );
        assert_eq!(
            Placement::Pinned { y: 5.0 }.rect(HEADER, 30.0),
            Rect::new(0.0, 5.0, 200.0, 25.0)
        );
        assert!(Placement::Pinned { y: 0.0 }.is_pinned());
        assert!(!Placement::Flow.is_pinned());
    }

    #[test]
    fn positioner_tracks_scroll() {
        let mut sticky = StickyPositioner::new(StickyConfig::default());
        sticky.set_scroll_offset(-10.0);
        assert_eq!(sticky.scroll_offset(), 0.0);
        sticky.scroll_by(150.0);
        assert_eq!(
            sticky.header_rect(HEADER, Some(PANEL), true),
            Rect::new(0.0, 0.0, 200.0, 20.0)
        );
        // Scrolling back below the header reverts to normal flow.
        sticky.scroll_by(-100.0);
        assert_eq!(sticky.place(HEADER, Some(PANEL), true), Placement::Flow);
        assert_eq!(
            sticky.header_rect(HEADER, Some(PANEL), true),
            Rect::new(0.0, 50.0, 200.0, 70.0)
        );
    }

    #[test]
    fn negative_top_offset_clamps() {
        let mut sticky = StickyPositioner::default();
        sticky.set_top_offset(-3.0);
        assert_eq!(sticky.config().top_offset, 0.0);
        sticky.set_top_offset(12.0);
        assert_eq!(sticky.config().top_offset, 12.0);
    }
}
