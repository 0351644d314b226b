//! Data model shared by the layout, region and interaction modules.

mod column;
mod config;
mod region;
mod row;
mod selection;
mod theme;

pub use column::{Column, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
pub use config::GridConfig;
pub use region::{GridIndex, RegionType, ResolvedRegion};
pub use row::{LinearRow, RowHeightLevel};
pub use selection::{CombinedSelection, RangeBounds, SelectionRange, SelectionRegionType};
pub use theme::{GridFeatures, GridTheme};
