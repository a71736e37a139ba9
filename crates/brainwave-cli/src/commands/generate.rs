//! Generate command implementation.
//!
//! Builds generation parameters from a band preset, individual flags, or a
//! JSON parameter file, synthesizes the buffer, and writes the WAV file.

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;

use brainwave_audio::params::MAX_VOLUME;
use brainwave_audio::{generate_seeded, wav, BrainwaveBand, GenerationParams};

/// Arguments to the generate command.
pub struct GenerateArgs {
    pub band: Option<String>,
    pub target_freq: Option<f64>,
    pub carrier_freq: Option<f64>,
    pub volume: Option<f64>,
    pub noise: Option<f64>,
    pub duration: Option<f64>,
    pub sample_rate: u32,
    pub seed: u32,
    pub params: Option<String>,
    pub output: Option<String>,
}

/// Runs the generate command.
///
/// # Returns
/// Exit code: 0 on success, 1 on parameter or I/O failure.
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let start = Instant::now();
    let mut params = resolve_params(args)?;

    if params.volume > MAX_VOLUME {
        println!(
            "{} volume {} capped to {}",
            "note:".dimmed(),
            params.volume,
            MAX_VOLUME
        );
        params.volume = MAX_VOLUME;
    }

    let buffer = generate_seeded(&params, args.sample_rate, args.seed)
        .context("failed to generate audio")?;
    let bytes = wav::encode(&buffer).context("failed to encode WAV")?;
    let pcm_hash = wav::compute_pcm_hash(&bytes).unwrap_or_default();

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_filename(&params));
    fs::write(&output, &bytes).with_context(|| format!("failed to write {output}"))?;

    println!("{} {}", "Wrote:".cyan().bold(), output);
    println!(
        "  {} {:.1} s, {} frames at {} Hz",
        "Audio:".dimmed(),
        buffer.duration_seconds(),
        buffer.frame_count(),
        buffer.sample_rate()
    );
    println!(
        "  {} {:.1} Hz beat on a {:.1} Hz carrier, noise {:.2}",
        "Beat:".dimmed(),
        params.target_frequency,
        params.carrier_frequency,
        params.pink_noise_level
    );
    println!("  {} {} bytes", "Size:".dimmed(), bytes.len());
    println!("  {} {}", "PCM hash:".dimmed(), pcm_hash);
    println!(
        "{} in {:.2}s",
        "Done".green().bold(),
        start.elapsed().as_secs_f64()
    );

    Ok(ExitCode::SUCCESS)
}

/// Resolves the final parameter set from file, preset, and flags.
///
/// Precedence: a `--params` file wins outright; otherwise flags override
/// the band preset (or the defaults when no band is given).
fn resolve_params(args: &GenerateArgs) -> Result<GenerationParams> {
    if let Some(path) = &args.params {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
        let params: GenerationParams =
            serde_json::from_str(&text).with_context(|| format!("invalid parameter file {path}"))?;
        return Ok(params);
    }

    let mut params = match &args.band {
        Some(name) => GenerationParams::for_band(name.parse::<BrainwaveBand>()?),
        None => GenerationParams::default(),
    };
    if let Some(target) = args.target_freq {
        params.target_frequency = target;
    }
    if let Some(carrier) = args.carrier_freq {
        params.carrier_frequency = carrier;
    }
    if let Some(volume) = args.volume {
        params.volume = volume;
    }
    if let Some(noise) = args.noise {
        params.pink_noise_level = noise;
    }
    if let Some(duration) = args.duration {
        params.duration_seconds = duration;
    }
    Ok(params)
}

/// Default output filename: `brainwave_<band>_<timestamp>.wav`.
fn default_filename(params: &GenerationParams) -> String {
    let band = params
        .band()
        .map(|b| b.label())
        .unwrap_or("custom");
    format!("brainwave_{band}_{}.wav", Utc::now().timestamp_millis())
}
