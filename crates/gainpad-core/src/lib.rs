//! # gainpad-core
//!
//! Shared vocabulary for the gainpad plugin: the engine and the control
//! surface both build on these types and never on each other.
//!
//! ## Main Types
//!
//! - [`ParameterInfo`] / [`StateInfo`] - declared parameters and state slots
//! - [`Smoother`] - per-sample control smoothing
//! - [`Buffer`] - stereo audio I/O for one render call
//! - [`MidiEvent`] / [`MidiMessage`] - raw and decoded MIDI input
//! - [`UiHost`] - requests the surface sends back through the host
//! - [`PluginConfig`] / [`EditorConstraints`] - static metadata
//! - [`PluginError`] - error types for non-realtime entry points

pub mod bridge;
pub mod buffer;
pub mod config;
pub mod decibel;
pub mod editor;
pub mod error;
pub mod midi;
pub mod parameter_info;
pub mod sample;
pub mod smoothing;
pub mod types;

// Re-exports for convenience
pub use bridge::{HostRequest, UiHost};
pub use buffer::{Buffer, MAX_CHANNELS};
pub use config::{fourcc, PluginConfig};
pub use decibel::{clamp, db_to_coefficient, MAX_DB, MIN_DB};
pub use editor::EditorConstraints;
pub use error::{PluginError, PluginResult};
pub use midi::{
    status, ControlChange, MidiChannel, MidiEvent, MidiMessage, MidiNote, NoteOff, NoteOn,
    PitchBend, ProgramChange, MAX_MIDI_EVENT_SIZE,
};
pub use parameter_info::{
    parameter_info, state_info, ParameterFlags, ParameterInfo, StateInfo, PARAMETERS,
    PARAM_COUNT, PARAM_GAIN, PARAM_VOICE, STATES, STATE_FILE,
};
pub use sample::Sample;
pub use smoothing::Smoother;
pub use types::{ParameterId, ParameterValue, Point, Size};
