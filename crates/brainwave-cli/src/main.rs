//! Brainwave CLI - binaural-beat generation and WAV inspection.
//!
//! This binary generates entrainment audio as 16-bit PCM WAV files and
//! inspects existing WAV files for per-band spectral content.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

/// Brainwave - binaural-beat audio generator
#[derive(Parser)]
#[command(name = "brainwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a binaural-beat WAV file
    Generate {
        /// Brainwave band preset (delta, theta, alpha, beta, gamma)
        #[arg(short, long)]
        band: Option<String>,

        /// Entrainment frequency in Hz (overrides the band midpoint)
        #[arg(long)]
        target_freq: Option<f64>,

        /// Carrier tone frequency in Hz
        #[arg(long)]
        carrier_freq: Option<f64>,

        /// Tone volume, 0.0 to 1.0
        #[arg(long)]
        volume: Option<f64>,

        /// Pink noise level, 0.0 to 1.0
        #[arg(long)]
        noise: Option<f64>,

        /// Duration in seconds
        #[arg(short, long)]
        duration: Option<f64>,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// RNG seed for the pink-noise texture
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Path to a JSON parameter file (overrides all parameter flags)
        #[arg(short, long)]
        params: Option<String>,

        /// Output file path (default: brainwave_<band>_<timestamp>.wav)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a WAV file: header fields and per-band power
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            band,
            target_freq,
            carrier_freq,
            volume,
            noise,
            duration,
            sample_rate,
            seed,
            params,
            output,
        } => commands::generate::run(&commands::generate::GenerateArgs {
            band,
            target_freq,
            carrier_freq,
            volume,
            noise,
            duration,
            sample_rate,
            seed,
            params,
            output,
        }),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
