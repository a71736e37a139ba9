//! Inspect command implementation.
//!
//! Parses a WAV file, prints its header fields, and (for 16-bit PCM) a
//! per-band power table averaged over the whole file.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;

use brainwave_audio::{wav, BandPowerAnalyzer, BrainwaveBand};

/// Runs the inspect command.
///
/// # Returns
/// Exit code: 0 on success, 1 when the file cannot be read or decoded.
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let bytes = fs::read(input).with_context(|| format!("failed to read {input}"))?;
    let (info, _) = wav::parse(&bytes).with_context(|| format!("cannot inspect {input}"))?;

    let buffer = wav::decode(&bytes)?;
    let snapshots = BandPowerAnalyzer::new().snapshots(&buffer);
    let averages = average_powers(&snapshots);

    if json_output {
        let output = json!({
            "file": input,
            "channels": info.channels,
            "sample_rate": info.sample_rate,
            "bits_per_sample": info.bits_per_sample,
            "frame_count": info.frame_count,
            "duration_seconds": buffer.duration_seconds(),
            "band_powers": BrainwaveBand::ALL
                .iter()
                .enumerate()
                .map(|(i, band)| (band.label().to_string(), serde_json::Value::from(averages[i])))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "File:".cyan().bold(), input);
    println!(
        "  {} {} ch, {} Hz, {} bit, {} frames ({:.2} s)",
        "Format:".dimmed(),
        info.channels,
        info.sample_rate,
        info.bits_per_sample,
        info.frame_count,
        buffer.duration_seconds()
    );

    if snapshots.is_empty() {
        println!("  {} too short for band analysis", "Bands:".dimmed());
        return Ok(ExitCode::SUCCESS);
    }

    println!("  {}", "Band power (0-100, file average):".dimmed());
    for (index, band) in BrainwaveBand::ALL.into_iter().enumerate() {
        let (min, max) = band.range_hz();
        let bar_len = (averages[index] / 5.0).round() as usize;
        println!(
            "    {:>5} {:>9} {:5.1} {}",
            band.label(),
            format!("{min}-{max} Hz"),
            averages[index],
            "#".repeat(bar_len).green()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Averages snapshot powers over the whole file.
fn average_powers(snapshots: &[brainwave_audio::BandSnapshot]) -> [f64; 5] {
    let mut sums = [0.0; 5];
    if snapshots.is_empty() {
        return sums;
    }
    for snapshot in snapshots {
        for (sum, power) in sums.iter_mut().zip(snapshot.powers) {
            *sum += power;
        }
    }
    for sum in &mut sums {
        *sum /= snapshots.len() as f64;
    }
    sums
}
