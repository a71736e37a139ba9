//! 16-bit PCM WAV encoding and decoding.
//!
//! The writer emits a fixed 44-byte RIFF/WAVE/fmt/data header followed by
//! frame-interleaved little-endian PCM, with no timestamps or variable
//! metadata, so identical buffers always serialize to identical bytes. The
//! reader walks RIFF chunks and accepts only 16-bit PCM.

mod format;
mod pcm;
mod reader;
mod writer;


pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, pcm_hash};
pub use reader::{decode, parse, WavInfo};
pub use writer::{encode, interleave_pcm16, write_wav, write_wav_to_vec};
