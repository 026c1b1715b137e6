//! # gainpad
//!
//! A gain plugin template: a realtime engine with a smoothed gain stage and
//! a file slot, and an immediate-mode control surface, kept apart and
//! connected only through host messages.
//!
//! ## Architecture
//!
//! ```text
//!              parameter / state pushes
//!   host ───────────────┬──────────────────▶ AudioEngine  (audio thread)
//!    ▲                  └──────────────────▶ ControlSurface (UI thread)
//!    │  edit_parameter / set_parameter_value / request_state_file
//!    └──────────────────────────────────────── ControlSurface
//! ```
//!
//! Host-integration glue calls [`create_engine()`] and [`create_surface()`]
//! and adapts them to a plugin ABI. [`Loopback`] stands in for the host in
//! tests and demos.

pub mod loopback;

pub use gainpad_core as core;
pub use gainpad_engine as engine;
pub use gainpad_surface as surface;

pub use loopback::{EditGroup, Loopback};

use gainpad_core::{fourcc, PluginConfig};
use gainpad_engine::AudioEngine;
use gainpad_surface::ControlSurface;

/// Plugin metadata reported to the host.
pub static CONFIG: PluginConfig = PluginConfig::new("ImGui Gain")
    .with_label("imgui_gain")
    .with_description("Gain plugin template with an immediate-mode control panel")
    .with_maker("gainpad contributors")
    .with_license("ISC")
    .with_version(1, 0, 0)
    .with_unique_id(fourcc(b"abcd"))
    .with_category("Fx")
    .with_editor();

/// Create a fresh engine instance.
pub fn create_engine() -> AudioEngine {
    AudioEngine::new()
}

/// Create a fresh control surface, titled after the plugin.
pub fn create_surface() -> ControlSurface {
    ControlSurface::new(CONFIG.name)
}

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use gainpad::prelude::*;
/// ```
pub mod prelude {
    pub use gainpad_core::{
        // Buffers and samples
        Buffer, Sample,
        // Parameters and state
        ParameterId, ParameterInfo, ParameterValue, StateInfo, PARAMETERS,
        PARAM_GAIN, PARAM_VOICE, STATES, STATE_FILE,
        // MIDI
        ControlChange, MidiEvent, MidiMessage, NoteOff, NoteOn, PitchBend, ProgramChange,
        // Host bridge
        HostRequest, UiHost,
        // Metadata and geometry
        EditorConstraints, PluginConfig, Point, Size,
        // Errors
        PluginError, PluginResult,
        // Helpers
        db_to_coefficient,
    };
    pub use gainpad_engine::{AudioEngine, Instrument, Silence};
    pub use gainpad_surface::{ControlSurface, ItemResponse, PanelFlags, Ui};

    pub use crate::{create_engine, create_surface, Loopback, CONFIG};
}
