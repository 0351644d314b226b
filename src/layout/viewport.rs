//! Scroll state of the grid container.

use serde::{Deserialize, Serialize};

use super::CoordinateManager;

/// Scroll offsets owned by the container element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollState {
    /// Horizontal scroll in pixels
    pub scroll_left: f32,
    /// Vertical scroll in pixels
    pub scroll_top: f32,
}

impl ScrollState {
    pub fn new(scroll_left: f32, scroll_top: f32) -> Self {
        Self {
            scroll_left,
            scroll_top,
        }
    }

    /// Largest valid `(scroll_left, scroll_top)` for the given geometry.
    pub fn max_scroll(coords: &CoordinateManager) -> (f32, f32) {
        (
            (coords.total_width() - coords.container_width()).max(0.0),
            (coords.total_height() - coords.container_height()).max(0.0),
        )
    }

    /// Clamp both offsets to `[0, content size - container size]`.
    pub fn clamp(&mut self, coords: &CoordinateManager) {
        let (max_x, max_y) = Self::max_scroll(coords);
        self.scroll_left = self.scroll_left.clamp(0.0, max_x);
        self.scroll_top = self.scroll_top.clamp(0.0, max_y);
    }

    /// Scroll by delta amounts. Returns the applied delta, or `None` if
    /// clamping left the position unchanged.
    pub fn scroll_by(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        coords: &CoordinateManager,
    ) -> Option<(f32, f32)> {
        let before = *self;
        self.scroll_left += delta_x;
        self.scroll_top += delta_y;
        self.clamp(coords);
        let dx = self.scroll_left - before.scroll_left;
        let dy = self.scroll_top - before.scroll_top;
        if dx.abs() > f32::EPSILON || dy.abs() > f32::EPSILON {
            Some((dx, dy))
        } else {
            None
        }
    }

    /// Set absolute scroll position (clamped).
    pub fn set_scroll(&mut self, x: f32, y: f32, coords: &CoordinateManager) {
        self.scroll_left = x;
        self.scroll_top = y;
        self.clamp(coords);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::layout::{CoordinateParams, RowHeights};

    fn coords() -> CoordinateManager {
        CoordinateManager::new(CoordinateParams {
            column_widths: vec![100.0; 10],
            freeze_column_count: 0,
            row_count: 100,
            row_heights: RowHeights::Uniform(32.0),
            header_height: 32.0,
            row_header_width: 0.0,
            container_width: 400.0,
            container_height: 300.0,
        })
    }

    #[test]
    fn test_clamp_bounds() {
        let coords = coords();
        let mut scroll = ScrollState::new(-10.0, 1.0e6);
        scroll.clamp(&coords);
        assert_eq!(scroll.scroll_left, 0.0);
        assert_eq!(scroll.scroll_top, 32.0 + 3200.0 - 300.0);
    }

    #[test]
    fn test_scroll_by_reports_delta() {
        let coords = coords();
        let mut scroll = ScrollState::default();
        assert_eq!(scroll.scroll_by(0.0, -5.0, &coords), None);
        assert_eq!(scroll.scroll_by(50.0, 0.0, &coords), Some((50.0, 0.0)));
        assert_eq!(scroll.scroll_by(1000.0, 0.0, &coords), Some((550.0, 0.0)));
    }

    #[test]
    fn test_small_content_cannot_scroll() {
        let coords = CoordinateManager::new(CoordinateParams {
            column_widths: vec![100.0],
            freeze_column_count: 0,
            row_count: 1,
            row_heights: RowHeights::Uniform(32.0),
            header_height: 32.0,
            row_header_width: 0.0,
            container_width: 400.0,
            container_height: 300.0,
        });
        let mut scroll = ScrollState::default();
        scroll.set_scroll(20.0, 20.0, &coords);
        assert_eq!(scroll, ScrollState::default());
    }
}
