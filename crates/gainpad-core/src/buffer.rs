//! Audio buffer for block rendering.
//!
//! [`Buffer`] wraps the host's channel slices for one render call. It uses
//! fixed-size stack storage, so building one inside the audio callback never
//! allocates.
//!
//! ```ignore
//! let mut buffer = Buffer::new([&in_l[..], &in_r[..]], [&mut out_l[..], &mut out_r[..]], frames);
//! for frame in 0..buffer.num_samples() {
//!     let dry = buffer.input_sample(0, frame);
//!     buffer.write_frame(frame, dry);
//! }
//! ```

use crate::sample::Sample;

/// Maximum number of channels per direction. The plugin is stereo.
pub const MAX_CHANNELS: usize = 2;

/// Audio I/O for a single render call.
///
/// The `'a` lifetime ties the buffer to the host's audio data; a buffer is
/// only valid for one call. Channels beyond [`MAX_CHANNELS`] are ignored.
///
/// The block length is the host's frame count, clipped to the shortest
/// *output* slice. Inputs never shorten the block: a missing or short input
/// channel reads as silence past its end.
pub struct Buffer<'a, S: Sample = f32> {
    inputs: [Option<&'a [S]>; MAX_CHANNELS],
    outputs: [Option<&'a mut [S]>; MAX_CHANNELS],
    num_samples: usize,
}

impl<'a, S: Sample> Buffer<'a, S> {
    /// Create a buffer from channel slices and the host's frame count.
    pub fn new(
        inputs: impl IntoIterator<Item = &'a [S]>,
        outputs: impl IntoIterator<Item = &'a mut [S]>,
        num_samples: usize,
    ) -> Self {
        let mut input_arr: [Option<&'a [S]>; MAX_CHANNELS] = [None; MAX_CHANNELS];
        for (slot, slice) in input_arr.iter_mut().zip(inputs) {
            *slot = Some(slice);
        }

        let mut num_samples = num_samples;
        // &mut slices aren't Copy, so no [None; N]
        let mut output_arr: [Option<&'a mut [S]>; MAX_CHANNELS] = std::array::from_fn(|_| None);
        for (slot, slice) in output_arr.iter_mut().zip(outputs) {
            num_samples = num_samples.min(slice.len());
            *slot = Some(slice);
        }

        Self {
            inputs: input_arr,
            outputs: output_arr,
            num_samples,
        }
    }

    /// Number of frames in this block.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// One input sample, or silence if the channel is absent or too short.
    #[inline]
    pub fn input_sample(&self, channel: usize, frame: usize) -> S {
        self.inputs
            .get(channel)
            .and_then(|opt| opt.as_ref())
            .and_then(|ch| ch.get(frame))
            .copied()
            .unwrap_or(S::ZERO)
    }

    /// Write `sample` to every output channel at `frame`. Frames past the
    /// end of the block are dropped.
    #[inline]
    pub fn write_frame(&mut self, frame: usize, sample: S) {
        if frame >= self.num_samples {
            return;
        }
        for channel in self.outputs.iter_mut().flatten() {
            channel[frame] = sample;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_layout() {
        let in_l = [0.1_f32; 8];
        let in_r = [0.2_f32; 8];
        let mut out_l = [0.0_f32; 8];
        let mut out_r = [0.0_f32; 8];
        let mut buffer = Buffer::new([&in_l[..], &in_r[..]], [&mut out_l[..], &mut out_r[..]], 8);

        assert_eq!(buffer.num_samples(), 8);
        assert_eq!(buffer.input_sample(1, 0), 0.2);
        assert_eq!(buffer.input_sample(5, 0), 0.0);

        buffer.write_frame(0, 1.0);
        buffer.write_frame(7, -1.0);
        buffer.write_frame(8, 9.0);
        drop(buffer);
        assert_eq!((out_l[0], out_r[0]), (1.0, 1.0));
        assert_eq!((out_l[7], out_r[7]), (-1.0, -1.0));
    }

    #[test]
    fn test_frame_count_clipped_to_shortest_output() {
        let mut out_l = [0.0_f64; 4];
        let mut out_r = [0.0_f64; 3];
        let buffer = Buffer::new(std::iter::empty::<&[f64]>(), [&mut out_l[..], &mut out_r[..]], 16);
        assert_eq!(buffer.num_samples(), 3);
    }

    #[test]
    fn test_short_input_does_not_shrink_block() {
        let input = [0.5_f32; 2];
        let mut out_l = [0.0_f32; 4];
        let mut out_r = [0.0_f32; 4];
        let buffer = Buffer::new([&input[..], &[][..]], [&mut out_l[..], &mut out_r[..]], 4);

        assert_eq!(buffer.num_samples(), 4);
        assert_eq!(buffer.input_sample(0, 1), 0.5);
        assert_eq!(buffer.input_sample(0, 3), 0.0);
        assert_eq!(buffer.input_sample(1, 0), 0.0);
    }

    #[test]
    fn test_mono_output() {
        let mut out = [0.5_f32; 4];
        let mut buffer = Buffer::new(std::iter::empty::<&[f32]>(), [&mut out[..]], 4);
        for frame in 0..4 {
            buffer.write_frame(frame, 0.0);
        }
        drop(buffer);
        assert_eq!(out, [0.0; 4]);
    }
}
