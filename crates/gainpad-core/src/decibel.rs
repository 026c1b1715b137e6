//! Decibel helpers.
//!
//! Pure functions, no hidden state. The floor is a hard cut: anything at or
//! below [`MIN_DB`] maps to exact silence rather than a tiny coefficient.

/// Lowest gain the plugin exposes, treated as -inf.
pub const MIN_DB: f32 = -90.0;

/// Highest gain the plugin exposes.
pub const MAX_DB: f32 = 30.0;

/// Clamp `value` into `[min, max]`.
///
/// NaN maps to `min`, since `f32::max` ignores a NaN operand.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    max.min(min.max(value))
}

/// Convert a gain in decibels to a linear amplitude coefficient.
///
/// ```text
/// coefficient = 10^(dB / 20)   for dB > -90
///             = 0              otherwise
/// ```
#[inline]
pub fn db_to_coefficient(db: f32) -> f32 {
    if db > MIN_DB {
        10.0_f32.powf(db * 0.05)
    } else {
        0.0
    }
}
