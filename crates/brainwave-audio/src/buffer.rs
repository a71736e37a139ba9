//! Multi-channel sample buffer.

use crate::error::{AudioError, AudioResult};

/// A finite, fully-materialized multi-channel buffer of float samples.
///
/// `sample_rate` is the source of truth for all timing. Samples nominally
/// sit in [-1.0, 1.0] but are not hard-clamped until encoding. The buffer
/// is immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f64>>,
}

impl SampleBuffer {
    /// Creates a buffer from per-channel sample vectors.
    ///
    /// Fails if there are no channels or the channels differ in length.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f64>>) -> AudioResult<Self> {
        if channels.is_empty() {
            return Err(AudioError::invalid_param(
                "channels",
                "at least one channel is required",
            ));
        }
        let frame_count = channels[0].len();
        if channels.iter().any(|c| c.len() != frame_count) {
            return Err(AudioError::invalid_param(
                "channels",
                "all channels must have the same length",
            ));
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Creates a stereo buffer from left and right channels.
    pub fn stereo(sample_rate: u32, left: Vec<f64>, right: Vec<f64>) -> AudioResult<Self> {
        Self::new(sample_rate, vec![left, right])
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames per channel.
    pub fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    /// Buffer length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Returns the samples of one channel.
    ///
    /// # Panics
    /// Panics if `index >= channel_count()`.
    pub fn channel(&self, index: usize) -> &[f64] {
        &self.channels[index]
    }

    /// Iterates over the channels in order.
    pub fn channels(&self) -> impl Iterator<Item = &[f64]> {
        self.channels.iter().map(Vec::as_slice)
    }

    /// Mixes all channels down to mono by averaging.
    pub fn to_mono(&self) -> Vec<f64> {
        let n = self.channel_count() as f64;
        (0..self.frame_count())
            .map(|i| self.channels.iter().map(|c| c[i]).sum::<f64>() / n)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_accessors() {
        let buffer = SampleBuffer::stereo(44100, vec![0.0, 0.5], vec![1.0, -1.0]).unwrap();
        assert_eq!(buffer.sample_rate(), 44100);
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.frame_count(), 2);
        assert_eq!(buffer.channel(0), &[0.0, 0.5]);
        assert_eq!(buffer.channel(1), &[1.0, -1.0]);
    }

    #[test]
    fn test_mismatched_channel_lengths_rejected() {
        assert!(SampleBuffer::stereo(44100, vec![0.0], vec![0.0, 1.0]).is_err());
    }

    #[test]
    fn test_empty_channel_list_rejected() {
        assert!(SampleBuffer::new(44100, Vec::new()).is_err());
    }

    #[test]
    fn test_to_mono_averages() {
        let buffer = SampleBuffer::stereo(48000, vec![1.0, 0.0], vec![0.0, 1.0]).unwrap();
        assert_eq!(buffer.to_mono(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_duration() {
        let buffer = SampleBuffer::stereo(100, vec![0.0; 250], vec![0.0; 250]).unwrap();
        assert_eq!(buffer.duration_seconds(), 2.5);
    }
}
