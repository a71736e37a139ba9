//! Pink noise via Paul Kellet's economy filter.
//!
//! Seven one-pole accumulators turn a white-noise stream into an
//! approximation of a 1/f spectrum. The coefficients are fixed; changing
//! them changes the output bit-for-bit, so they are part of the contract.

/// Running state of the pink-noise filter.
///
/// One instance is created per generation pass, starts zeroed, and advances
/// once per sample. The same instance threads through both channel loops of
/// a stereo pass, so channel 1 continues from the state channel 0 left
/// behind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinkNoiseFilter {
    b0: f64,
    b1: f64,
    b2: f64,
    b3: f64,
    b4: f64,
    b5: f64,
    b6: f64,
}

impl PinkNoiseFilter {
    /// Creates a filter with all accumulators at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one white-noise sample through the filter and returns the next
    /// pink-noise sample.
    ///
    /// `white` is expected in [-1, 1]. The output is scaled by 0.11 to sit
    /// roughly within [-1, 1]; exact peaks depend on the input sequence.
    pub fn next(&mut self, white: f64) -> f64 {
        self.b0 = 0.99886 * self.b0 + white * 0.0555179;
        self.b1 = 0.99332 * self.b1 + white * 0.0750759;
        self.b2 = 0.96900 * self.b2 + white * 0.1538520;
        self.b3 = 0.86650 * self.b3 + white * 0.3104856;
        self.b4 = 0.55000 * self.b4 + white * 0.5329522;
        self.b5 = -0.7616 * self.b5 - white * 0.0168980;

        let pink =
            self.b0 + self.b1 + self.b2 + self.b3 + self.b4 + self.b5 + self.b6 + white * 0.5362;
        self.b6 = white * 0.115926;

        pink * 0.11
    }
}
