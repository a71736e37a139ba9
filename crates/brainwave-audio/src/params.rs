//! Generation parameters and fixed audio configuration.

use serde::{Deserialize, Serialize};

use crate::band::BrainwaveBand;
use crate::error::{AudioError, AudioResult};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Linear fade-in duration applied to every generated buffer, in seconds.
pub const FADE_IN_SECONDS: f64 = 3.0;

/// Linear fade-out duration applied to every generated buffer, in seconds.
pub const FADE_OUT_SECONDS: f64 = 3.0;

/// Upper bound for the volume parameter exposed to callers.
pub const MAX_VOLUME: f64 = 0.8;

/// Parameters for one binaural-beat generation pass.
///
/// The left channel carries a pure tone at `carrier_frequency`; the right
/// channel carries `carrier_frequency + target_frequency`. The perceived
/// beat at `target_frequency` is never synthesized directly, only implied
/// by the inter-aural difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Entrainment frequency in Hz (the inter-aural offset).
    pub target_frequency: f64,
    /// Carrier tone frequency in Hz.
    pub carrier_frequency: f64,
    /// Tone volume, 0.0 to 1.0.
    pub volume: f64,
    /// Pink noise mix level, 0.0 to 1.0.
    pub pink_noise_level: f64,
    /// Length of the generated buffer in seconds.
    pub duration_seconds: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            target_frequency: 6.0,
            carrier_frequency: 200.0,
            volume: 0.5,
            pink_noise_level: 0.1,
            duration_seconds: 300.0,
        }
    }
}

impl GenerationParams {
    /// Creates parameters for a band preset, using the band's midpoint as
    /// the entrainment frequency and defaults for everything else.
    pub fn for_band(band: BrainwaveBand) -> Self {
        Self {
            target_frequency: band.default_target_frequency(),
            ..Self::default()
        }
    }

    /// Returns the band the entrainment frequency falls into, if any.
    pub fn band(&self) -> Option<BrainwaveBand> {
        BrainwaveBand::containing(self.target_frequency)
    }

    /// Validates all fields.
    ///
    /// Every numeric field must be finite and non-negative, volume and noise
    /// level must not exceed 1.0, and the duration must be strictly positive.
    pub fn validate(&self) -> AudioResult<()> {
        let fields = [
            ("target_frequency", self.target_frequency),
            ("carrier_frequency", self.carrier_frequency),
            ("volume", self.volume),
            ("pink_noise_level", self.pink_noise_level),
            ("duration_seconds", self.duration_seconds),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AudioError::invalid_param(name, "must be finite"));
            }
            if value < 0.0 {
                return Err(AudioError::invalid_param(name, "must be non-negative"));
            }
        }
        if self.volume > 1.0 {
            return Err(AudioError::invalid_param("volume", "must be at most 1.0"));
        }
        if self.pink_noise_level > 1.0 {
            return Err(AudioError::invalid_param(
                "pink_noise_level",
                "must be at most 1.0",
            ));
        }
        if self.duration_seconds <= 0.0 {
            return Err(AudioError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        Ok(())
    }
}
