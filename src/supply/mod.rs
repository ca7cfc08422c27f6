mod colors;
mod level;
mod markers;

pub use colors::expand_colors;
pub use level::{compute_fill, SupplyLevel, FILL_SCALE, MIN_FILL};
pub use markers::{build_markers, is_supported_marker_type, MarkerInfo, MarkerSupplies};
