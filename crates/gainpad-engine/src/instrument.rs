//! The signal source behind the gain stage.
//!
//! [`AudioEngine`](crate::AudioEngine) owns the gain parameter and the
//! smoother; an [`Instrument`] supplies the sample that gets scaled and
//! receives the MIDI messages the engine routes by status nibble. It is
//! handed the host's input for the frame and may synthesize, process or
//! ignore it.
//!
//! Every method runs on the audio thread. Implementations must not block,
//! allocate or lock.
//!
//! # Example
//!
//! ```ignore
//! struct Sine { phase: f32, step: f32 }
//!
//! impl Instrument for Sine {
//!     fn set_sample_rate(&mut self, sample_rate: f64) {
//!         self.step = 440.0 / sample_rate as f32;
//!     }
//!
//!     fn next_sample(&mut self, _input: f32) -> f32 {
//!         self.phase = (self.phase + self.step).fract();
//!         (self.phase * std::f32::consts::TAU).sin()
//!     }
//! }
//! ```

use gainpad_core::{ControlChange, MidiEvent, NoteOff, NoteOn, PitchBend, ProgramChange};

/// Signal source and MIDI receiver for the engine.
///
/// All methods have no-op defaults, so an implementation only overrides the
/// messages it cares about.
pub trait Instrument: Send + 'static {
    /// Produce the next mono sample, before gain. `input` is the host's
    /// first input channel at this frame, 0.0 when there is none.
    fn next_sample(&mut self, _input: f32) -> f32 {
        0.0
    }

    /// The engine's sample rate changed (only while inactive).
    fn set_sample_rate(&mut self, _sample_rate: f64) {}

    /// The engine was activated; clear oscillators and envelopes.
    fn reset(&mut self) {}

    /// The "Voice" parameter changed.
    fn voice_changed(&mut self, _voice: i32) {}

    fn note_on(&mut self, _note: &NoteOn) {}

    fn note_off(&mut self, _note: &NoteOff) {}

    fn pitch_bend(&mut self, _bend: &PitchBend) {}

    fn program_change(&mut self, _program: &ProgramChange) {}

    fn control_change(&mut self, _cc: &ControlChange) {}

    /// Any message without a dedicated branch.
    fn other_midi(&mut self, _event: &MidiEvent) {}
}

/// The template's source: constant silence, input and MIDI ignored.
///
/// Rendering through [`Silence`] always yields all-zero output whatever the
/// gain. Swap in a real [`Instrument`] to hear anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silence;

impl Instrument for Silence {}
