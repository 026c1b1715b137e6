//! # gainpad-engine
//!
//! The realtime half of the gainpad plugin: a smoothed gain stage over a
//! pluggable [`Instrument`], plus the authoritative parameter and file
//! state the host pushes in.
//!
//! ```ignore
//! let mut engine = AudioEngine::new();
//! engine.set_sample_rate(48_000.0);
//! engine.set_parameter_value(PARAM_GAIN, -6.0);
//! engine.activate();
//! engine.render(&mut buffer, &midi_events);
//! ```

pub mod engine;
pub mod instrument;

pub use engine::{AudioEngine, DEFAULT_SAMPLE_RATE, GAIN_SMOOTHING_MS};
pub use instrument::{Instrument, Silence};
