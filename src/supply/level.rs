/// Fill values are expressed on a 0..=10000 scale.
pub const FILL_SCALE: i32 = 10_000;

/// Shown for empty or unreliable levels so the bar never renders blank (1%).
pub const MIN_FILL: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyLevel {
    pub fill_per_myriad: i32,
    pub is_low: bool,
}

/// Computes the fill value and low-supply flag of a marker.
///
/// Levels of 0 and 1 are placeholders on some devices, as is a high level of
/// 0; both fall back to [`MIN_FILL`].
pub fn compute_fill(level: i32, high_level: i32, low_level: i32) -> SupplyLevel {
    let is_low = level <= low_level;
    let fill_per_myriad = if high_level != 0 && level > 1 {
        let fill = i64::from(level) * i64::from(FILL_SCALE) / i64::from(high_level);
        fill.clamp(0, i64::from(FILL_SCALE)) as i32
    } else {
        MIN_FILL
    };

    SupplyLevel { fill_per_myriad, is_low }
}
