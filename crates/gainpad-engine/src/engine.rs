//! The audio engine.
//!
//! [`AudioEngine`] holds the authoritative parameter values, the gain
//! smoother and the selected file. The host drives it from two contexts:
//!
//! - audio thread: [`render()`](AudioEngine::render),
//!   [`set_parameter_value()`](AudioEngine::set_parameter_value),
//!   [`parameter_value()`](AudioEngine::parameter_value). These never block,
//!   allocate or log.
//! - main thread: [`set_state()`](AudioEngine::set_state),
//!   [`activate()`](AudioEngine::activate),
//!   [`set_sample_rate()`](AudioEngine::set_sample_rate).
//!
//! # Gain path
//!
//! ```text
//! set_parameter_value(GAIN, dB) -> clamp [-90, 30] -> db_to_coefficient -> smoother target
//! render: per frame  gain = smoother.next();  out = instrument.next_sample(input) * gain
//! ```

use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::slice::Iter;

use gainpad_core::{
    db_to_coefficient, parameter_info, state_info, Buffer, MidiEvent, MidiMessage, ParameterId,
    ParameterInfo, ParameterValue, PluginError, PluginResult, Sample, Smoother,
    StateInfo, PARAMETERS, PARAM_GAIN, PARAM_VOICE, STATE_FILE,
};

use crate::instrument::{Instrument, Silence};

/// Sample rate assumed until the host reports one.
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Time constant of the gain smoother in milliseconds.
pub const GAIN_SMOOTHING_MS: f64 = 20.0;

/// Realtime gain stage with a pluggable signal source.
pub struct AudioEngine<I: Instrument = Silence> {
    gain_db: f32,
    voice: i32,
    smooth_gain: Smoother,
    file: Option<PathBuf>,
    active: bool,
    instrument: I,
}

impl AudioEngine<Silence> {
    /// Create an engine with the silent template source.
    pub fn new() -> Self {
        Self::with_instrument(Silence)
    }
}

impl Default for AudioEngine<Silence> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Instrument> AudioEngine<I> {
    /// Create an engine around `instrument`, with every parameter at its
    /// declared default and the smoother resting on the default gain.
    pub fn with_instrument(mut instrument: I) -> Self {
        let gain_db = PARAMETERS[PARAM_GAIN as usize].default;
        let mut smooth_gain = Smoother::new(GAIN_SMOOTHING_MS);
        smooth_gain.set_sample_rate(DEFAULT_SAMPLE_RATE);
        smooth_gain.reset(db_to_coefficient(gain_db) as f64);
        instrument.set_sample_rate(DEFAULT_SAMPLE_RATE);

        Self {
            gain_db,
            voice: 0,
            smooth_gain,
            file: None,
            active: false,
            instrument,
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Descriptor of parameter `id`, as reported to the host at load time.
    pub fn parameter_info(id: ParameterId) -> Option<&'static ParameterInfo> {
        parameter_info(id)
    }

    /// Descriptor of state slot `index`.
    pub fn state_info(index: usize) -> Option<&'static StateInfo> {
        state_info(index)
    }

    // =========================================================================
    // Parameters (realtime-safe)
    // =========================================================================

    /// Current plain value of parameter `id`.
    ///
    /// Unknown ids read as 0.0.
    #[inline]
    pub fn parameter_value(&self, id: ParameterId) -> ParameterValue {
        match id {
            PARAM_GAIN => self.gain_db,
            PARAM_VOICE => self.voice as ParameterValue,
            _ => 0.0,
        }
    }

    /// Store a new plain value for parameter `id`.
    ///
    /// Gain is clamped into [-90, 30] dB and retargets the smoother. Voice is
    /// truncated toward zero and clamped into [0, 128]. NaN and unknown ids
    /// are ignored.
    #[inline]
    pub fn set_parameter_value(&mut self, id: ParameterId, value: ParameterValue) {
        let Some(value) = parameter_info(id).and_then(|info| info.sanitize(value)) else {
            return;
        };
        match id {
            PARAM_GAIN => {
                self.gain_db = value;
                self.smooth_gain.set_target(db_to_coefficient(value) as f64);
            }
            PARAM_VOICE => {
                self.voice = value as i32;
                self.instrument.voice_changed(self.voice);
            }
            _ => {}
        }
    }

    /// Checked variant of [`set_parameter_value()`](Self::set_parameter_value)
    /// for callers off the audio thread.
    ///
    /// An id outside the declared set is an error here instead of a silent
    /// no-op. The value itself is still clamped, never rejected.
    pub fn try_set_parameter_value(
        &mut self,
        id: ParameterId,
        value: ParameterValue,
    ) -> PluginResult<()> {
        if parameter_info(id).is_none() {
            log::warn!("Rejecting value {} for unknown parameter id {}", value, id);
            return Err(PluginError::InvalidParameter(id));
        }
        self.set_parameter_value(id, value);
        Ok(())
    }

    /// The linear gain coefficient the next frame starts from.
    #[inline]
    pub fn current_gain(&self) -> f32 {
        self.smooth_gain.current() as f32
    }

    /// The linear gain coefficient the smoother is heading for.
    #[inline]
    pub fn target_gain(&self) -> f32 {
        self.smooth_gain.target() as f32
    }

    // =========================================================================
    // State (main thread)
    // =========================================================================

    /// Receive a state value from the host.
    ///
    /// For `"file"` a non-empty value becomes the selected path. An empty
    /// value is rejected and the previous selection kept.
    pub fn set_state(&mut self, key: &str, value: &str) -> PluginResult<()> {
        if key != STATE_FILE {
            log::warn!("Ignoring unknown state key {:?}", key);
            return Err(PluginError::UnknownState(key.to_owned()));
        }
        if value.is_empty() {
            log::error!("Empty value for state {:?}, keeping previous selection", key);
            return Err(PluginError::empty_state(key));
        }
        log::debug!("Selected file {}", value);
        self.file = Some(PathBuf::from(value));
        Ok(())
    }

    /// The selected file, if any.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    // =========================================================================
    // Lifecycle (main thread)
    // =========================================================================

    /// Prepare for processing. The gain jumps straight to its target so a
    /// freshly started plugin does not fade in.
    pub fn activate(&mut self) {
        self.smooth_gain.snap_to_target();
        self.instrument.reset();
        self.active = true;
        log::debug!("Activated at {} Hz, gain {} dB", self.sample_rate(), self.gain_db);
    }

    /// Stop processing.
    pub fn deactivate(&mut self) {
        self.active = false;
        log::debug!("Deactivated");
    }

    /// Returns true between [`activate()`](Self::activate) and
    /// [`deactivate()`](Self::deactivate).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.smooth_gain.sample_rate()
    }

    /// Apply a new sample rate so the smoothing time stays 20 ms.
    ///
    /// Hosts only change the rate while the engine is inactive; a change
    /// while active is applied anyway and logged. Non-positive or
    /// non-finite rates are ignored.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            log::warn!("Ignoring invalid sample rate {}", sample_rate);
            return;
        }
        if self.active {
            log::warn!("Sample rate changed while active");
        }
        self.smooth_gain.set_sample_rate(sample_rate);
        self.instrument.set_sample_rate(sample_rate);
        log::info!("Sample rate changed to {}", sample_rate);
    }

    // =========================================================================
    // Rendering (realtime)
    // =========================================================================

    /// Render one block.
    ///
    /// Every output frame advances the gain smoother by one step and writes
    /// `source * gain` to all output channels. The block length comes from
    /// the outputs alone; missing or short inputs read as silence. MIDI
    /// events are routed to the instrument at their frame offset; events
    /// past the end of the block are routed after the last frame. Events are
    /// expected in frame order, as hosts deliver them.
    pub fn render<S: Sample>(&mut self, buffer: &mut Buffer<S>, midi: &[MidiEvent]) {
        let mut pending = midi.iter().peekable();

        for frame in 0..buffer.num_samples() {
            self.route_due_midi(&mut pending, frame);
            let input = buffer.input_sample(0, frame).to_f64() as f32;
            let gain = self.smooth_gain.next();
            let sample = self.instrument.next_sample(input) as f64 * gain;
            buffer.write_frame(frame, S::from_f64(sample));
        }

        for event in pending {
            self.route_midi(event);
        }
    }

    #[inline]
    fn route_due_midi(&mut self, pending: &mut Peekable<Iter<'_, MidiEvent>>, frame: usize) {
        while let Some(event) = pending.next_if(|event| event.frame as usize <= frame) {
            self.route_midi(event);
        }
    }

    /// Dispatch one event to the instrument by status nibble.
    pub fn route_midi(&mut self, event: &MidiEvent) {
        match event.decode() {
            MidiMessage::NoteOn(note) => self.instrument.note_on(&note),
            MidiMessage::NoteOff(note) => self.instrument.note_off(&note),
            MidiMessage::PitchBend(bend) => self.instrument.pitch_bend(&bend),
            MidiMessage::ProgramChange(program) => self.instrument.program_change(&program),
            MidiMessage::ControlChange(cc) => self.instrument.control_change(&cc),
            MidiMessage::Other(raw) => self.instrument.other_midi(&raw),
        }
    }

    /// The signal source.
    pub fn instrument(&self) -> &I {
        &self.instrument
    }
}
