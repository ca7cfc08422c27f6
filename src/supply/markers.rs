use log::debug;

use super::{compute_fill, expand_colors, SupplyLevel};

const TONER_TYPES: [&str; 2] = ["toner", "toner-cartridge"];
const INK_TYPES: [&str; 3] = ["ink", "inkCartridge", "ink-cartridge"];

/// Marker attributes as reported by the printer, one entry per marker in
/// each list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSupplies {
    pub names: Vec<String>,
    pub types: Vec<String>,
    pub colors: Vec<String>,
    pub levels: Vec<i32>,
    pub high_levels: Vec<i32>,
    pub low_levels: Vec<i32>,
}

/// A single colored supply, ready to be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerInfo {
    pub marker_type: String,
    pub name: Option<String>,
    pub color: String,
    pub high_level: i32,
    pub low_level: i32,
    pub level: i32,
}

impl MarkerInfo {
    pub fn supply_level(&self) -> SupplyLevel {
        compute_fill(self.level, self.high_level, self.low_level)
    }
}

pub fn is_supported_marker_type(marker_type: &str) -> bool {
    TONER_TYPES.contains(&marker_type) || INK_TYPES.contains(&marker_type)
}

/// Builds one [`MarkerInfo`] per color of every ink or toner marker.
///
/// Markers with a negative level (unknown or unsupported) are left out, as
/// are markers missing one of their level or color entries.
pub fn build_markers(supplies: &MarkerSupplies) -> Vec<MarkerInfo> {
    let mut markers = Vec::new();

    for (i, marker_type) in supplies.types.iter().enumerate() {
        if !is_supported_marker_type(marker_type) {
            debug!("Skipping marker {i} of type '{marker_type}'");
            continue;
        }

        let (Some(colors), Some(&level), Some(&high_level), Some(&low_level)) = (
            supplies.colors.get(i),
            supplies.levels.get(i),
            supplies.high_levels.get(i),
            supplies.low_levels.get(i),
        ) else {
            debug!("Skipping marker {i}: incomplete marker attributes");
            continue;
        };

        if level < 0 {
            debug!("Skipping marker {i}: level {level} is not supported");
            continue;
        }

        let name = supplies.names.get(i).filter(|name| !name.is_empty()).cloned();
        markers.extend(expand_colors(colors).into_iter().map(|color| MarkerInfo {
            marker_type: marker_type.clone(),
            name: name.clone(),
            color,
            high_level,
            low_level,
            level,
        }));
    }

    markers
}
