//! PCM data hashing utilities.

use super::reader;

/// Computes the BLAKE3 hash of raw PCM bytes.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the PCM hash of a complete WAV file.
///
/// Hashes the audio payload only, so two files differing in header detail
/// but carrying the same samples compare equal.
///
/// # Returns
/// BLAKE3 hash of the data chunk, or None if the format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    reader::parse(wav_data).ok().map(|(_, pcm)| pcm_hash(pcm))
}
