//! Sample type abstraction for f32/f64 audio processing.
//!
//! Lets the render loop be written once and monomorphized for both 32-bit
//! and 64-bit hosts. The gain stage itself runs in f64; a [`Sample`] only
//! has to convert in and out.

/// Trait for audio sample types (f32, f64).
pub trait Sample: Copy + Send + Sync + 'static {
    /// Zero value (0.0), read for missing input.
    const ZERO: Self;

    /// Convert from f64.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($t:ty) => {
        impl Sample for $t {
            const ZERO: Self = 0.0;

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_sample!(f32);
impl_sample!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn scale<S: Sample>(value: S, gain: f64) -> S {
        S::from_f64(value.to_f64() * gain)
    }

    #[test]
    fn test_generic_scaling() {
        assert_eq!(scale(0.5_f32, 2.0), 1.0_f32);
        assert_eq!(scale(0.5_f64, 2.0), 1.0_f64);
        assert_eq!(scale(f32::ZERO, 8.0), 0.0);
    }

    #[test]
    fn test_f32_round_trip_through_f64_is_exact() {
        let value = 0.123_456_79_f32;
        assert_eq!(f32::from_f64(value.to_f64()), value);
    }
}
