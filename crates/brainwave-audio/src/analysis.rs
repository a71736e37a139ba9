//! Band-power analysis over a sample buffer.
//!
//! Replaces realtime analyser plumbing with a pure transform: the analyzer
//! walks a buffer in fixed-size windows, computes a magnitude spectrum per
//! window, and reduces it to one normalized power figure per brainwave
//! band. Consumers plug in through [`FrameSink`]; a visualization layer is
//! just one possible sink.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::band::BrainwaveBand;
use crate::buffer::SampleBuffer;

/// Analysis window length in samples.
pub const FFT_SIZE: usize = 4096;

/// Hop between consecutive analysis windows (50% overlap).
const HOP_SIZE: usize = FFT_SIZE / 2;

/// Normalized band powers for one analysis window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSnapshot {
    /// Offset of the window start from the beginning of the buffer.
    pub time_seconds: f64,
    /// Power per band in [0, 100], indexed like [`BrainwaveBand::ALL`].
    pub powers: [f64; 5],
}

impl BandSnapshot {
    /// Power of one band, 0 to 100.
    pub fn power(&self, band: BrainwaveBand) -> f64 {
        let index = BrainwaveBand::ALL
            .iter()
            .position(|b| *b == band)
            .expect("band is one of ALL");
        self.powers[index]
    }
}

/// Receiver for periodic band-power snapshots.
pub trait FrameSink {
    /// Called once per analysis window, in time order.
    fn on_snapshot(&mut self, snapshot: &BandSnapshot);
}

impl FrameSink for Vec<BandSnapshot> {
    fn on_snapshot(&mut self, snapshot: &BandSnapshot) {
        self.push(*snapshot);
    }
}

/// Windowed FFT band-power analyzer.
///
/// Pure and synchronous; any realtime scheduling lives with the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandPowerAnalyzer;

impl BandPowerAnalyzer {
    /// Creates an analyzer with the standard window size.
    pub fn new() -> Self {
        Self
    }

    /// Analyzes the buffer and feeds every window's snapshot to `sink`.
    ///
    /// Channels are averaged to mono first. Buffers shorter than one
    /// window produce no snapshots.
    pub fn analyze(&self, buffer: &SampleBuffer, sink: &mut dyn FrameSink) {
        let mono = buffer.to_mono();
        if mono.len() < FFT_SIZE {
            return;
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(FFT_SIZE);
        let nyquist = buffer.sample_rate() as f64 / 2.0;

        let mut window_start = 0;
        while window_start + FFT_SIZE <= mono.len() {
            let mut spectrum: Vec<Complex<f64>> = mono[window_start..window_start + FFT_SIZE]
                .iter()
                .enumerate()
                .map(|(i, &s)| Complex::new(s * hann_window(i, FFT_SIZE), 0.0))
                .collect();
            fft.process(&mut spectrum);

            let magnitudes: Vec<f64> = spectrum[..FFT_SIZE / 2].iter().map(|c| c.norm()).collect();
            let snapshot = BandSnapshot {
                time_seconds: window_start as f64 / buffer.sample_rate() as f64,
                powers: band_powers(&magnitudes, nyquist),
            };
            sink.on_snapshot(&snapshot);

            window_start += HOP_SIZE;
        }
    }

    /// Convenience wrapper collecting all snapshots into a vector.
    pub fn snapshots(&self, buffer: &SampleBuffer) -> Vec<BandSnapshot> {
        let mut log = Vec::new();
        self.analyze(buffer, &mut log);
        log
    }
}

/// Reduces a magnitude spectrum to per-band powers.
///
/// Each band averages the magnitude bins inside its Hz range, then scales
/// against the window's peak bin so the result reads as a 0-100 meter.
fn band_powers(magnitudes: &[f64], nyquist: f64) -> [f64; 5] {
    let bin_count = magnitudes.len();
    let peak = magnitudes.iter().fold(0.0_f64, |m, &x| m.max(x));
    if peak == 0.0 {
        return [0.0; 5];
    }

    let mut powers = [0.0; 5];
    for (index, band) in BrainwaveBand::ALL.into_iter().enumerate() {
        let (min_hz, max_hz) = band.range_hz();
        let min_bin = ((min_hz / nyquist) * bin_count as f64).floor() as usize;
        let max_bin = (((max_hz / nyquist) * bin_count as f64).floor() as usize).min(bin_count - 1);
        // Bands entirely above Nyquist have no bins and read zero.
        if min_bin > max_bin {
            continue;
        }

        let mut sum = 0.0;
        for &magnitude in &magnitudes[min_bin..=max_bin] {
            sum += magnitude;
        }
        let mean = sum / (max_bin - min_bin + 1) as f64;
        powers[index] = (mean / peak * 100.0).clamp(0.0, 100.0);
    }
    powers
}

/// Hann window coefficient for position `i` in a window of `size`.
fn hann_window(i: usize, size: usize) -> f64 {
    0.5 * (1.0 - (std::f64::consts::TAU * i as f64 / size as f64).cos())
}
