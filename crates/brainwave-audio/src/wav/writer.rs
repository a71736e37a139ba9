//! WAV header writing and PCM conversion.

use std::io::{self, Write};

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts a sample buffer to frame-interleaved 16-bit PCM bytes.
///
/// For each frame, all channels are written in order before the next frame
/// starts (never channel-planar). Each sample is clamped to [-1, 1] first,
/// then scaled to 16 bits; the clamp-then-scale order keeps the output
/// comparable bit-for-bit across implementations.
pub fn interleave_pcm16(buffer: &SampleBuffer) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(buffer.frame_count() * buffer.channel_count() * 2);

    for i in 0..buffer.frame_count() {
        for channel in buffer.channels() {
            let clipped = channel[i].clamp(-1.0, 1.0);
            let pcm_value = (clipped * 32767.0).round() as i16;
            pcm.extend_from_slice(&pcm_value.to_le_bytes());
        }
    }

    pcm
}

/// Encodes a sample buffer as a complete 16-bit PCM WAV byte stream.
///
/// # Errors
/// Fails with [`AudioError::EmptyBuffer`] when the buffer has no frames.
pub fn encode(buffer: &SampleBuffer) -> AudioResult<Vec<u8>> {
    if buffer.frame_count() == 0 {
        return Err(AudioError::EmptyBuffer);
    }

    let format = WavFormat::new(buffer.channel_count() as u16, buffer.sample_rate());
    let pcm = interleave_pcm16(buffer);
    Ok(write_wav_to_vec(&format, &pcm))
}
