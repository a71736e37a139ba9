//! Brainwave band definitions.
//!
//! The five classical EEG bands, used both as generation presets (each band
//! has a default entrainment frequency at its midpoint) and as the frequency
//! windows for band-power analysis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AudioError;

/// A classical EEG frequency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrainwaveBand {
    /// Deep sleep and physical recovery (0.5-4 Hz).
    Delta,
    /// Meditation, creativity, memory consolidation (4-8 Hz).
    Theta,
    /// Relaxation and pre-focus calm (8-13 Hz).
    Alpha,
    /// Active concentration and logical thought (13-30 Hz).
    Beta,
    /// Higher cognition and insight (30-100 Hz).
    Gamma,
}

impl BrainwaveBand {
    /// All bands in ascending frequency order.
    pub const ALL: [BrainwaveBand; 5] = [
        BrainwaveBand::Delta,
        BrainwaveBand::Theta,
        BrainwaveBand::Alpha,
        BrainwaveBand::Beta,
        BrainwaveBand::Gamma,
    ];

    /// Returns the band's frequency range in Hz as `(min, max)`.
    pub fn range_hz(&self) -> (f64, f64) {
        match self {
            BrainwaveBand::Delta => (0.5, 4.0),
            BrainwaveBand::Theta => (4.0, 8.0),
            BrainwaveBand::Alpha => (8.0, 13.0),
            BrainwaveBand::Beta => (13.0, 30.0),
            BrainwaveBand::Gamma => (30.0, 100.0),
        }
    }

    /// Default entrainment frequency for the band (range midpoint).
    pub fn default_target_frequency(&self) -> f64 {
        let (min, max) = self.range_hz();
        (min + max) / 2.0
    }

    /// Lowercase band name, used in filenames and CLI arguments.
    pub fn label(&self) -> &'static str {
        match self {
            BrainwaveBand::Delta => "delta",
            BrainwaveBand::Theta => "theta",
            BrainwaveBand::Alpha => "alpha",
            BrainwaveBand::Beta => "beta",
            BrainwaveBand::Gamma => "gamma",
        }
    }

    /// Returns the band containing the given frequency, if any.
    pub fn containing(frequency_hz: f64) -> Option<BrainwaveBand> {
        Self::ALL.into_iter().find(|band| {
            let (min, max) = band.range_hz();
            frequency_hz >= min && frequency_hz < max
        })
    }
}

impl fmt::Display for BrainwaveBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BrainwaveBand {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "delta" => Ok(BrainwaveBand::Delta),
            "theta" => Ok(BrainwaveBand::Theta),
            "alpha" => Ok(BrainwaveBand::Alpha),
            "beta" => Ok(BrainwaveBand::Beta),
            "gamma" => Ok(BrainwaveBand::Gamma),
            other => Err(AudioError::invalid_param(
                "band",
                format!("unknown band '{other}' (expected delta, theta, alpha, beta, or gamma)"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_cover_half_to_hundred_hz() {
        let mut upper = 0.5;
        for band in BrainwaveBand::ALL {
            let (min, max) = band.range_hz();
            assert_eq!(min, upper, "bands must be contiguous");
            assert!(max > min);
            upper = max;
        }
        assert_eq!(upper, 100.0);
    }

    #[test]
    fn test_default_target_is_inside_range() {
        for band in BrainwaveBand::ALL {
            let (min, max) = band.range_hz();
            let target = band.default_target_frequency();
            assert!(target > min && target < max);
        }
    }

    #[test]
    fn test_containing() {
        assert_eq!(BrainwaveBand::containing(6.0), Some(BrainwaveBand::Theta));
        assert_eq!(BrainwaveBand::containing(10.0), Some(BrainwaveBand::Alpha));
        assert_eq!(BrainwaveBand::containing(200.0), None);
    }

    #[test]
    fn test_from_str_round_trip() {
        for band in BrainwaveBand::ALL {
            let parsed: BrainwaveBand = band.label().parse().unwrap();
            assert_eq!(parsed, band);
        }
        assert!("epsilon".parse::<BrainwaveBand>().is_err());
    }
}
