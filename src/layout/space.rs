//! Coordinate-space tags.
//!
//! Absolute positions are measured inside the full scrollable content, with the
//! row header and column header included. Viewport positions are what the
//! pointer reports: absolute minus scroll for scrollable content, unchanged for
//! frozen content (frozen columns, the row header and the column header).

use serde::{Deserialize, Serialize};

/// Horizontal position in absolute content space.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct AbsoluteX(pub f32);

/// Vertical position in absolute content space.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct AbsoluteY(pub f32);

/// Horizontal position in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct ViewportX(pub f32);

/// Vertical position in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct ViewportY(pub f32);

/// Map a viewport x to absolute space.
///
/// Everything left of `freeze_region_width` is pinned and ignores
/// `scroll_left`; everything right of it scrolls. This is the only place the
/// frozen/scrollable branch is decided.
pub fn absolute_x(x: ViewportX, scroll_left: f32, freeze_region_width: f32) -> AbsoluteX {
    if x.0 < freeze_region_width {
        AbsoluteX(x.0)
    } else {
        AbsoluteX(x.0 + scroll_left)
    }
}

/// Map a viewport y to absolute space. The column header is pinned.
pub fn absolute_y(y: ViewportY, scroll_top: f32, header_height: f32) -> AbsoluteY {
    if y.0 < header_height {
        AbsoluteY(y.0)
    } else {
        AbsoluteY(y.0 + scroll_top)
    }
}
