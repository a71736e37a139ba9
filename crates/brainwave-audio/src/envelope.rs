//! Linear fade-in/fade-out amplitude envelope.

use crate::params::{FADE_IN_SECONDS, FADE_OUT_SECONDS};

/// Amplitude envelope with a linear ramp at each end of the buffer.
///
/// The branch order matters on buffers shorter than the combined fades: the
/// fade-in ramp wins wherever both ramps would apply, which is the behavior
/// callers depend on for short previews.
#[derive(Debug, Clone, Copy)]
pub struct FadeEnvelope {
    fade_in_frames: f64,
    fade_out_frames: f64,
    frame_count: f64,
}

impl FadeEnvelope {
    /// Creates the standard 3 s in / 3 s out envelope for a buffer of
    /// `frame_count` frames at `sample_rate` Hz.
    pub fn new(sample_rate: u32, frame_count: usize) -> Self {
        Self {
            fade_in_frames: FADE_IN_SECONDS * sample_rate as f64,
            fade_out_frames: FADE_OUT_SECONDS * sample_rate as f64,
            frame_count: frame_count as f64,
        }
    }

    /// Returns the amplitude multiplier for frame `frame`.
    pub fn amplitude_at(&self, frame: usize) -> f64 {
        let i = frame as f64;
        if i < self.fade_in_frames {
            i / self.fade_in_frames
        } else if i > self.frame_count - self.fade_out_frames {
            (self.frame_count - i) / self.fade_out_frames
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: u32 = 44100;

    #[test]
    fn test_starts_at_zero() {
        let frame_count = 10 * SAMPLE_RATE as usize;
        let env = FadeEnvelope::new(SAMPLE_RATE, frame_count);
        assert_eq!(env.amplitude_at(0), 0.0);
    }

    #[test]
    fn test_full_scale_after_fade_in() {
        let frame_count = 10 * SAMPLE_RATE as usize;
        let env = FadeEnvelope::new(SAMPLE_RATE, frame_count);
        let fade_in_frames = 3 * SAMPLE_RATE as usize;
        assert_eq!(env.amplitude_at(fade_in_frames), 1.0);
        assert_eq!(env.amplitude_at(frame_count / 2), 1.0);
    }

    #[test]
    fn test_ramps_are_linear() {
        let frame_count = 10 * SAMPLE_RATE as usize;
        let env = FadeEnvelope::new(SAMPLE_RATE, frame_count);
        let fade_in_frames = 3.0 * SAMPLE_RATE as f64;
        let quarter = (fade_in_frames / 4.0) as usize;
        assert!((env.amplitude_at(quarter) - 0.25).abs() < 1e-4);

        // Fade-out mirrors the ramp down toward the final frame.
        let last = frame_count - 1;
        let expected = (frame_count as f64 - last as f64) / (3.0 * SAMPLE_RATE as f64);
        assert!((env.amplitude_at(last) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_short_buffer_fade_in_wins() {
        // A 1 s buffer is entirely inside the 3 s fade-in window, so the
        // whole buffer is one rising ramp and the fade-out branch is never
        // reached.
        let frame_count = SAMPLE_RATE as usize;
        let env = FadeEnvelope::new(SAMPLE_RATE, frame_count);
        let fade_in_frames = 3.0 * SAMPLE_RATE as f64;
        for &frame in &[0, frame_count / 2, frame_count - 1] {
            let expected = frame as f64 / fade_in_frames;
            assert_eq!(env.amplitude_at(frame), expected);
        }
    }
}
