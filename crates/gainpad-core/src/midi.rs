//! MIDI input for the render path.
//!
//! The host hands over raw channel-voice messages ([`MidiEvent`]). The
//! engine decodes each one by its status nibble into a [`MidiMessage`] and
//! routes it to a handler. Every type here is `Copy`; decoding never
//! allocates.

/// MIDI channel (0-15).
pub type MidiChannel = u8;

/// MIDI note number (0-127, where 60 = middle C).
pub type MidiNote = u8;

/// Status nibbles for channel-voice messages (upper four bits of byte 0).
pub mod status {
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
    pub const POLY_PRESSURE: u8 = 0xA0;
    pub const CONTROLLER: u8 = 0xB0;
    pub const PROGRAM_CHANGE: u8 = 0xC0;
    pub const CHANNEL_PRESSURE: u8 = 0xD0;
    pub const PITCH_BEND: u8 = 0xE0;
}

/// Largest message the host delivers inline.
pub const MAX_MIDI_EVENT_SIZE: usize = 4;

/// A raw, sample-accurate MIDI message as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MidiEvent {
    /// Frame offset within the current block (0 = start of block).
    pub frame: u32,
    /// Number of valid bytes in `data`.
    pub size: u8,
    /// Message bytes; only the first `size` are meaningful.
    pub data: [u8; MAX_MIDI_EVENT_SIZE],
}

impl MidiEvent {
    /// Build an event from up to [`MAX_MIDI_EVENT_SIZE`] bytes. Extra bytes
    /// are dropped.
    pub fn new(frame: u32, bytes: &[u8]) -> Self {
        let size = bytes.len().min(MAX_MIDI_EVENT_SIZE);
        let mut data = [0; MAX_MIDI_EVENT_SIZE];
        data[..size].copy_from_slice(&bytes[..size]);
        Self {
            frame,
            size: size as u8,
            data,
        }
    }

    /// The valid message bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data[..(self.size as usize).min(MAX_MIDI_EVENT_SIZE)]
    }

    /// Status nibble (byte 0 with the channel masked off).
    #[inline]
    pub fn status(&self) -> u8 {
        self.data[0] & 0xF0
    }

    /// Channel (low nibble of byte 0).
    #[inline]
    pub fn channel(&self) -> MidiChannel {
        self.data[0] & 0x0F
    }

    /// Decode into a typed message.
    ///
    /// Messages shorter than their status requires decode as
    /// [`MidiMessage::Other`]. A note-on with velocity 0 is a note-off by
    /// MIDI convention and decodes as one.
    pub fn decode(&self) -> MidiMessage {
        let bytes = self.bytes();
        let channel = self.channel();
        let data1 = bytes.get(1).map(|b| b & 0x7F);
        let data2 = bytes.get(2).map(|b| b & 0x7F);

        match (self.status(), data1, data2) {
            (status::NOTE_ON, Some(pitch), Some(0)) => MidiMessage::NoteOff(NoteOff {
                channel,
                pitch,
                velocity: 0.0,
            }),
            (status::NOTE_OFF, Some(pitch), Some(velocity)) => MidiMessage::NoteOff(NoteOff {
                channel,
                pitch,
                velocity: normalize_7bit(velocity),
            }),
            (status::NOTE_ON, Some(pitch), Some(velocity)) => MidiMessage::NoteOn(NoteOn {
                channel,
                pitch,
                velocity: normalize_7bit(velocity),
            }),
            (status::CONTROLLER, Some(controller), Some(value)) => {
                MidiMessage::ControlChange(ControlChange {
                    channel,
                    controller,
                    value: normalize_7bit(value),
                })
            }
            (status::PROGRAM_CHANGE, Some(program), _) => {
                MidiMessage::ProgramChange(ProgramChange { channel, program })
            }
            (status::PITCH_BEND, Some(lsb), Some(msb)) => {
                let raw = ((msb as u16) << 7) | lsb as u16;
                MidiMessage::PitchBend(PitchBend {
                    channel,
                    value: (raw as f32 - 8192.0) / 8192.0,
                })
            }
            _ => MidiMessage::Other(*self),
        }
    }
}

#[inline]
fn normalize_7bit(value: u8) -> f32 {
    value as f32 / 127.0
}

/// A note-on event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteOn {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Note number (0-127).
    pub pitch: MidiNote,
    /// Velocity (0.0 to 1.0, exclusive of 0).
    pub velocity: f32,
}

/// A note-off event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteOff {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Note number (0-127).
    pub pitch: MidiNote,
    /// Release velocity (0.0 to 1.0).
    pub velocity: f32,
}

/// Pitch bend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchBend {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Bend amount (-1.0 to just under +1.0, 0.0 = center).
    pub value: f32,
}

/// Program change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramChange {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Program number (0-127).
    pub program: u8,
}

/// Control change (CC).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlChange {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Controller number (0-127).
    pub controller: u8,
    /// Controller value (0.0 to 1.0, normalized from 0-127).
    pub value: f32,
}

/// A decoded channel-voice message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MidiMessage {
    NoteOn(NoteOn),
    NoteOff(NoteOff),
    PitchBend(PitchBend),
    ProgramChange(ProgramChange),
    ControlChange(ControlChange),
    /// Anything the router has no branch for (aftertouch, system, short
    /// or malformed messages). Carries the raw event.
    Other(MidiEvent),
}
