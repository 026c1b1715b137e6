//! Control-value smoothing for avoiding zipper noise on gain changes.
//!
//! [`Smoother`] is a one-pole exponential interpolator for a single control
//! value. The time constant is given in milliseconds and converted to a
//! per-sample coefficient whenever the sample rate changes:
//!
//! ```text
//! coefficient = 1 - e^(-1 / (tau * sample_rate))
//! current    += coefficient * (target - current)
//! ```
//!
//! ```ignore
//! let mut smoother = Smoother::new(20.0);
//! smoother.set_sample_rate(48_000.0);
//! smoother.set_target(0.5);
//! smoother.snap_to_target();      // on activation: no ramp
//! let gain = smoother.next();     // once per frame
//! ```
//!
//! `Smoother` advances through `&mut self` and is meant to live on the audio
//! thread only. It never allocates.

/// Distance below which the smoother snaps onto its target.
const SNAP_THRESHOLD: f64 = 1e-8;

/// Per-sample one-pole smoother for a single control value.
///
/// Covers ~63% of the remaining distance per time constant and approaches
/// the target asymptotically, landing on it once closer than 1e-8.
#[derive(Debug, Clone)]
pub struct Smoother {
    time_ms: f64,
    sample_rate: f64,
    current: f64,
    target: f64,
    coefficient: f64,
}

impl Smoother {
    /// Create a smoother at rest on 0.0 with a time constant of `time_ms`.
    ///
    /// Until [`set_sample_rate()`](Self::set_sample_rate) is called the
    /// value jumps straight to its target.
    pub fn new(time_ms: f64) -> Self {
        Self {
            time_ms,
            sample_rate: 0.0,
            current: 0.0,
            target: 0.0,
            coefficient: 1.0,
        }
    }

    /// The sample rate the coefficient was computed for.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Set the sample rate and recompute the per-sample coefficient so the
    /// time constant holds in wall-clock time.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        let samples_per_tau = self.time_ms / 1000.0 * sample_rate;
        self.coefficient = if samples_per_tau > 0.0 {
            1.0 - (-1.0 / samples_per_tau).exp()
        } else {
            1.0
        };
    }

    /// Set a new target. Smoothing starts from the current value.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to the current target.
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }

    /// Set both current value and target to `value`.
    pub fn reset(&mut self, value: f64) {
        self.target = value;
        self.snap_to_target();
    }

    /// Advance one sample and return the new value.
    #[inline]
    pub fn next(&mut self) -> f64 {
        self.current += self.coefficient * (self.target - self.current);
        if (self.target - self.current).abs() < SNAP_THRESHOLD {
            self.current = self.target;
        }
        self.current
    }

    /// Current value, without advancing.
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Target value.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }
}
