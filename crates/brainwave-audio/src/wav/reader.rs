//! 16-bit PCM WAV parsing.
//!
//! Only linear PCM at 16 bits per sample is accepted; anything else is an
//! [`AudioError::UnsupportedFormat`]. Arbitrary compressed-audio decoding
//! is a host concern, not handled here.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Header metadata of a parsed WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of frames (samples per channel).
    pub frame_count: usize,
}

/// Parses a WAV byte stream into header metadata and the raw PCM payload.
///
/// # Errors
/// Fails with [`AudioError::UnsupportedFormat`] when the stream is not a
/// well-formed 16-bit PCM WAV file.
pub fn parse(wav_data: &[u8]) -> AudioResult<(WavInfo, &[u8])> {
    if wav_data.len() < 44 {
        return Err(AudioError::unsupported_format(format!(
            "file too short: {} bytes, need at least 44",
            wav_data.len()
        )));
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return Err(AudioError::unsupported_format("missing RIFF/WAVE header"));
    }

    let (fmt_offset, fmt_size) =
        find_chunk(wav_data, b"fmt ").ok_or_else(|| AudioError::unsupported_format("missing fmt chunk"))?;
    if fmt_size < 16 {
        return Err(AudioError::unsupported_format("fmt chunk too short"));
    }
    // The declared size can lie about what the file actually holds.
    if fmt_offset + 16 > wav_data.len() {
        return Err(AudioError::unsupported_format(
            "fmt chunk extends beyond end of file",
        ));
    }

    let fmt = &wav_data[fmt_offset..];
    let audio_format = u16::from_le_bytes([fmt[0], fmt[1]]);
    let channels = u16::from_le_bytes([fmt[2], fmt[3]]);
    let sample_rate = u32::from_le_bytes([fmt[4], fmt[5], fmt[6], fmt[7]]);
    let bits_per_sample = u16::from_le_bytes([fmt[14], fmt[15]]);

    if audio_format != 1 {
        return Err(AudioError::unsupported_format(format!(
            "audio format code {audio_format}, only PCM (1) is supported"
        )));
    }
    if bits_per_sample != 16 {
        return Err(AudioError::unsupported_format(format!(
            "{bits_per_sample} bits per sample, only 16 is supported"
        )));
    }
    if channels == 0 {
        return Err(AudioError::unsupported_format("zero channels"));
    }

    let (data_offset, data_size) =
        find_chunk(wav_data, b"data").ok_or_else(|| AudioError::unsupported_format("missing data chunk"))?;
    if data_offset + data_size > wav_data.len() {
        return Err(AudioError::unsupported_format(
            "data chunk extends beyond end of file",
        ));
    }

    let frame_count = data_size / (2 * channels as usize);
    let info = WavInfo {
        channels,
        sample_rate,
        bits_per_sample,
        frame_count,
    };
    Ok((info, &wav_data[data_offset..data_offset + data_size]))
}

/// Decodes a 16-bit PCM WAV byte stream into a sample buffer.
///
/// Inverse of [`super::encode`] up to the 16-bit quantization: each PCM
/// value maps back to `value / 32767.0`.
pub fn decode(wav_data: &[u8]) -> AudioResult<SampleBuffer> {
    let (info, pcm) = parse(wav_data)?;
    if info.frame_count == 0 {
        return Err(AudioError::EmptyBuffer);
    }

    let mut channels = vec![Vec::with_capacity(info.frame_count); info.channels as usize];
    for frame in pcm.chunks_exact(2 * info.channels as usize) {
        for (channel, bytes) in channels.iter_mut().zip(frame.chunks_exact(2)) {
            let value = i16::from_le_bytes([bytes[0], bytes[1]]);
            channel.push(value as f64 / 32767.0);
        }
    }

    SampleBuffer::new(info.sample_rate, channels)
}

/// Finds a chunk by id and returns its payload offset and size.
fn find_chunk(wav_data: &[u8], chunk_id: &[u8; 4]) -> Option<(usize, usize)> {
    let mut offset = 12;

    while offset + 8 <= wav_data.len() {
        let id = &wav_data[offset..offset + 4];
        let size = u32::from_le_bytes([
            wav_data[offset + 4],
            wav_data[offset + 5],
            wav_data[offset + 6],
            wav_data[offset + 7],
        ]) as usize;

        if id == chunk_id {
            return Some((offset + 8, size));
        }

        // Chunks are word-aligned.
        offset += 8 + size + (size % 2);
    }

    None
}
