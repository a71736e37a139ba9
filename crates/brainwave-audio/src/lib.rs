//! Binaural-beat synthesis core.
//!
//! This crate generates brainwave-entrainment audio: a carrier tone in one
//! ear, the carrier offset by the target frequency in the other, and an
//! optional pink-noise texture, all shaped by a linear fade envelope. The
//! result is a plain in-memory [`SampleBuffer`] that the WAV module turns
//! into a canonical 16-bit PCM byte stream.
//!
//! # Determinism
//!
//! All randomness flows through an injected PCG32 generator, so the same
//! parameters and seed always produce byte-identical output. BLAKE3 hashes
//! of the PCM payload are available for output validation.
//!
//! # Example
//!
//! ```
//! use brainwave_audio::{generate_seeded, wav, BrainwaveBand, GenerationParams};
//!
//! let params = GenerationParams {
//!     duration_seconds: 1.0,
//!     ..GenerationParams::for_band(BrainwaveBand::Theta)
//! };
//! let buffer = generate_seeded(&params, 44100, 42)?;
//! let bytes = wav::encode(&buffer)?;
//! assert_eq!(&bytes[0..4], b"RIFF");
//! # Ok::<(), brainwave_audio::AudioError>(())
//! ```
//!
//! # Crate structure
//!
//! - [`generator`] - the binaural-beat signal generator
//! - [`params`] - generation parameters and fixed fade/volume constants
//! - [`band`] - the five EEG band presets
//! - [`noise`] - pink-noise filter (Kellet's economy approximation)
//! - [`envelope`] - linear fade-in/out envelope
//! - [`analysis`] - windowed FFT band-power snapshots for visualization sinks
//! - [`wav`] - deterministic WAV encoder, parser, and PCM hashing
//! - [`rng`] - deterministic RNG construction

pub mod analysis;
pub mod band;
pub mod buffer;
pub mod envelope;
pub mod error;
pub mod generator;
pub mod noise;
pub mod params;
pub mod rng;
pub mod wav;

// Re-export main types at crate root
pub use analysis::{BandPowerAnalyzer, BandSnapshot, FrameSink};
pub use band::BrainwaveBand;
pub use buffer::SampleBuffer;
pub use error::{AudioError, AudioResult};
pub use generator::{generate, generate_seeded};
pub use noise::PinkNoiseFilter;
pub use params::{GenerationParams, DEFAULT_SAMPLE_RATE};
