//! The control surface.
//!
//! [`ControlSurface`] keeps a display copy of the gain and the selected
//! file, and draws one panel per frame: a "Load a file..." button and a
//! gain slider. It owns no engine reference. Host pushes arrive through
//! [`parameter_changed()`](ControlSurface::parameter_changed) and
//! [`state_changed()`](ControlSurface::state_changed); user edits leave
//! through [`UiHost`].
//!
//! # Gain gesture
//!
//! ```text
//!            activated / changed: edit_parameter(GAIN, true)
//!   Idle  ─────────────────────────────────────────────▶  Dragging
//!    ▲                                                      │  changed: set_parameter_value(GAIN, v)
//!    └──────────────────────────────────────────────────────┘
//!            deactivated: edit_parameter(GAIN, false)
//! ```

use gainpad_core::{
    parameter_info, EditorConstraints, ParameterId, ParameterValue, PluginError, PluginResult,
    Point, Size, UiHost, MAX_DB, MIN_DB, PARAM_GAIN, PARAM_VOICE, STATE_FILE,
};

use crate::ui::{ItemResponse, PanelFlags, Ui};

/// Label of the file button.
pub const LOAD_BUTTON_LABEL: &str = "Load a file...";

/// Label of the gain slider.
pub const GAIN_SLIDER_LABEL: &str = "Gain (dB)";

/// Whether the user is currently holding the gain slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging,
}

/// Immediate-mode panel mirroring the engine's state.
#[derive(Debug)]
pub struct ControlSurface {
    title: &'static str,
    constraints: EditorConstraints,
    size: Size,
    gain: f32,
    selected_file: Option<String>,
    gesture: Gesture,
    needs_repaint: bool,
}

impl ControlSurface {
    /// Create a surface with the default window constraints.
    pub fn new(title: &'static str) -> Self {
        Self::with_constraints(title, EditorConstraints::default())
    }

    /// Create a surface opening at `constraints.default_size`.
    pub fn with_constraints(title: &'static str, constraints: EditorConstraints) -> Self {
        Self {
            title,
            constraints,
            size: constraints.default_size,
            gain: parameter_info(PARAM_GAIN).map_or(0.0, |info| info.default),
            selected_file: None,
            gesture: Gesture::Idle,
            needs_repaint: true,
        }
    }

    // =========================================================================
    // Host pushes
    // =========================================================================

    /// A parameter changed on the engine side.
    pub fn parameter_changed(&mut self, id: ParameterId, value: ParameterValue) {
        match id {
            PARAM_GAIN => {
                if let Some(value) = parameter_info(id).and_then(|info| info.sanitize(value)) {
                    self.gain = value;
                }
            }
            // Nothing on the panel shows the voice yet.
            PARAM_VOICE => {}
            _ => log::warn!("Parameter change for unknown id {}", id),
        }
        self.needs_repaint = true;
    }

    /// A state value changed on the engine side.
    ///
    /// Any key is accepted; only `"file"` updates the panel. An empty value
    /// is reported and dropped without touching the display.
    pub fn state_changed(&mut self, key: &str, value: &str) -> PluginResult<()> {
        log::debug!("State changed: {} = {:?}", key, value);
        if value.is_empty() {
            log::error!("Empty value for state {:?}", key);
            return Err(PluginError::empty_state(key));
        }
        if key == STATE_FILE {
            self.selected_file = Some(value.to_owned());
        }
        self.needs_repaint = true;
        Ok(())
    }

    // =========================================================================
    // Window
    // =========================================================================

    /// The host resized the window. Returns the size actually applied.
    pub fn resize(&mut self, requested: Size) -> Size {
        self.size = self.constraints.constrain(requested);
        self.needs_repaint = true;
        self.size
    }

    /// Current window size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Window constraints to report to the host.
    pub fn constraints(&self) -> EditorConstraints {
        self.constraints
    }

    /// Returns true if something changed since the last
    /// [`take_repaint()`](Self::take_repaint).
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Read and clear the repaint flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    // =========================================================================
    // Display cache
    // =========================================================================

    /// Gain shown on the slider, in dB.
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// File shown under the button.
    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    /// Current gain gesture state.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw one frame and forward any user edits to `host`.
    pub fn render(&mut self, ui: &mut impl Ui, host: &mut impl UiHost) {
        if ui.begin_panel(self.title, Point::ORIGIN, self.size, PanelFlags::FIXED) {
            if ui.button(LOAD_BUTTON_LABEL) {
                host.request_state_file(STATE_FILE);
            }
            if let Some(file) = &self.selected_file {
                ui.text(file);
            }

            let response = ui.slider_f32(GAIN_SLIDER_LABEL, &mut self.gain, MIN_DB, MAX_DB);
            self.track_gain_gesture(response, host);
        } else if self.gesture == Gesture::Dragging {
            // The slider can't report its release while hidden.
            self.end_gesture(host);
        }
        ui.end_panel();
    }

    fn track_gain_gesture(&mut self, response: ItemResponse, host: &mut impl UiHost) {
        if response.activated || response.changed {
            self.begin_gesture(host);
        }
        if response.changed {
            host.set_parameter_value(PARAM_GAIN, self.gain);
        }
        if response.deactivated {
            self.end_gesture(host);
        }
    }

    fn begin_gesture(&mut self, host: &mut impl UiHost) {
        if self.gesture == Gesture::Idle {
            host.edit_parameter(PARAM_GAIN, true);
            self.gesture = Gesture::Dragging;
        }
    }

    fn end_gesture(&mut self, host: &mut impl UiHost) {
        if self.gesture == Gesture::Dragging {
            host.edit_parameter(PARAM_GAIN, false);
            self.gesture = Gesture::Idle;
        }
    }
}
