//! Binaural-beat signal generator.
//!
//! Produces a stereo buffer in which channel 0 carries a pure tone at the
//! carrier frequency and channel 1 carries the carrier offset by the
//! entrainment frequency. The beat itself is never synthesized; it exists
//! only as the inter-aural difference. A shared pink-noise texture and a
//! linear fade envelope are applied to both channels.

use std::f64::consts::TAU;

use rand_pcg::Pcg32;

use crate::buffer::SampleBuffer;
use crate::envelope::FadeEnvelope;
use crate::error::AudioResult;
use crate::noise::PinkNoiseFilter;
use crate::params::GenerationParams;
use crate::rng::{create_rng, white_sample};

/// Number of output channels. One ear each.
const CHANNELS: usize = 2;

/// Generates a stereo binaural-beat buffer.
///
/// Randomness is injected through `rng` so the output is fully determined
/// by `(params, sample_rate, rng state)`. One pink-noise filter instance is
/// threaded through both channel loops in sequence; the filter advances on
/// every frame even at noise level zero, so the tone content is unaffected
/// by the noise level while the RNG stream stays aligned.
///
/// # Errors
/// Fails when `duration_seconds` is not strictly positive or any parameter
/// is non-finite or out of range.
pub fn generate(
    params: &GenerationParams,
    sample_rate: u32,
    rng: &mut Pcg32,
) -> AudioResult<SampleBuffer> {
    params.validate()?;

    let rate = sample_rate as f64;
    let frame_count = (rate * params.duration_seconds).round() as usize;
    let envelope = FadeEnvelope::new(sample_rate, frame_count);
    let mut pink = PinkNoiseFilter::new();

    let mut channels = Vec::with_capacity(CHANNELS);
    for channel in 0..CHANNELS {
        // Left: carrier. Right: carrier + target offset.
        let frequency = if channel == 0 {
            params.carrier_frequency
        } else {
            params.carrier_frequency + params.target_frequency
        };

        let mut samples = Vec::with_capacity(frame_count);
        for i in 0..frame_count {
            let time = i as f64 / rate;
            let amplitude = envelope.amplitude_at(i);

            let tone = (TAU * frequency * time).sin() * amplitude * params.volume;
            let noise = pink.next(white_sample(rng)) * params.pink_noise_level * amplitude;

            samples.push(tone + noise);
        }
        channels.push(samples);
    }

    SampleBuffer::new(sample_rate, channels)
}

/// Generates with a fresh PCG32 built from `seed`.
///
/// Convenience wrapper over [`generate`] for callers that only care about
/// reproducibility, not about supplying their own generator.
pub fn generate_seeded(
    params: &GenerationParams,
    sample_rate: u32,
    seed: u32,
) -> AudioResult<SampleBuffer> {
    let mut rng = create_rng(seed);
    generate(params, sample_rate, &mut rng)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::AudioError;
    use crate::params::FADE_IN_SECONDS;

    const SAMPLE_RATE: u32 = 44100;

    fn tone_only(duration_seconds: f64) -> GenerationParams {
        GenerationParams {
            target_frequency: 6.0,
            carrier_frequency: 200.0,
            volume: 0.5,
            pink_noise_level: 0.0,
            duration_seconds,
        }
    }

    /// Counts rising zero crossings, a cheap instantaneous-frequency probe.
    fn rising_zero_crossings(samples: &[f64]) -> usize {
        samples
            .windows(2)
            .filter(|w| w[0] <= 0.0 && w[1] > 0.0)
            .count()
    }

    #[test]
    fn test_frame_count_law() {
        for &duration in &[0.25, 1.0, 2.5, 10.0] {
            let params = tone_only(duration);
            let buffer = generate_seeded(&params, SAMPLE_RATE, 1).unwrap();
            let expected = (SAMPLE_RATE as f64 * duration).round() as usize;
            assert_eq!(buffer.frame_count(), expected);
            assert_eq!(buffer.channel(0).len(), buffer.channel(1).len());
        }
    }

    #[test]
    fn test_invalid_params_rejected() {
        let zero = tone_only(0.0);
        assert!(matches!(
            generate_seeded(&zero, SAMPLE_RATE, 1),
            Err(AudioError::InvalidDuration { .. })
        ));

        let nan = GenerationParams {
            carrier_frequency: f64::NAN,
            ..tone_only(1.0)
        };
        assert!(matches!(
            generate_seeded(&nan, SAMPLE_RATE, 1),
            Err(AudioError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_channel_frequencies() {
        // Long enough that the 3 s fades leave a full-scale middle region.
        let params = GenerationParams {
            target_frequency: 10.0,
            carrier_frequency: 100.0,
            volume: 0.5,
            pink_noise_level: 0.0,
            duration_seconds: 10.0,
        };
        let buffer = generate_seeded(&params, SAMPLE_RATE, 1).unwrap();

        // Count cycles over the middle 4 seconds to stay clear of the fades.
        let start = 3 * SAMPLE_RATE as usize;
        let end = 7 * SAMPLE_RATE as usize;
        let left = rising_zero_crossings(&buffer.channel(0)[start..end]);
        let right = rising_zero_crossings(&buffer.channel(1)[start..end]);

        // 4 seconds at 100 Hz and 110 Hz.
        assert!((left as i64 - 400).abs() <= 1, "left crossings: {left}");
        assert!((right as i64 - 440).abs() <= 1, "right crossings: {right}");
    }

    #[test]
    fn test_fade_envelope_edges() {
        let params = tone_only(10.0);
        let buffer = generate_seeded(&params, SAMPLE_RATE, 1).unwrap();

        assert_eq!(buffer.channel(0)[0], 0.0);

        // Past the fade-in the peak amplitude reaches volume.
        let fade_in_frames = (FADE_IN_SECONDS * SAMPLE_RATE as f64) as usize;
        let mid = &buffer.channel(0)[fade_in_frames..fade_in_frames + SAMPLE_RATE as usize];
        let peak = mid.iter().fold(0.0_f64, |m, s| m.max(s.abs()));
        assert!((peak - params.volume).abs() < 1e-3, "peak: {peak}");
    }

    #[test]
    fn test_reference_scenario_half_volume_200hz() {
        // generate(6 Hz target, 200 Hz carrier, 0.5 volume, no noise, 1 s):
        // both channels are pure sines scaled by the fade-in ramp, since a
        // 1 s buffer sits entirely inside the 3 s fade-in.
        let params = tone_only(1.0);
        let buffer = generate_seeded(&params, SAMPLE_RATE, 1).unwrap();
        let rate = SAMPLE_RATE as f64;
        let fade_in_frames = FADE_IN_SECONDS * rate;

        for &i in &[0usize, 1, 100, 22050, 44099] {
            let t = i as f64 / rate;
            let ramp = i as f64 / fade_in_frames;
            let left = (TAU * 200.0 * t).sin() * ramp * 0.5;
            let right = (TAU * 206.0 * t).sin() * ramp * 0.5;
            assert!((buffer.channel(0)[i] - left).abs() < 1e-12);
            assert!((buffer.channel(1)[i] - right).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_noise_level_is_bit_identical_to_pure_tone() {
        // The noise term multiplies to exactly 0.0, so the filter state and
        // RNG stream cannot leak into the output.
        let params = tone_only(2.0);
        let a = generate_seeded(&params, SAMPLE_RATE, 1).unwrap();
        let b = generate_seeded(&params, SAMPLE_RATE, 0xDEAD_BEEF).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_seed_same_buffer() {
        let params = GenerationParams {
            pink_noise_level: 0.3,
            ..tone_only(2.0)
        };
        let a = generate_seeded(&params, SAMPLE_RATE, 77).unwrap();
        let b = generate_seeded(&params, SAMPLE_RATE, 77).unwrap();
        assert_eq!(a, b);

        let c = generate_seeded(&params, SAMPLE_RATE, 78).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_noise_state_threads_across_channels() {
        // The second channel's noise must continue the filter and RNG state
        // from the first channel, not restart it. If it restarted, both
        // channels minus their tones would be identical.
        let noisy = GenerationParams {
            target_frequency: 0.0,
            carrier_frequency: 0.0,
            volume: 0.0,
            pink_noise_level: 1.0,
            duration_seconds: 0.1,
        };
        let buffer = generate_seeded(&noisy, SAMPLE_RATE, 3).unwrap();
        assert_ne!(buffer.channel(0), buffer.channel(1));
    }
}
