//! Deterministic RNG using PCG32.
//!
//! All randomness in the synthesis core flows through an injected PCG32
//! generator so that the same seed always produces the same buffer.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Draws one white-noise sample, uniform in [-1, 1).
pub fn white_sample(rng: &mut Pcg32) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);

        let values1: Vec<f64> = (0..100).map(|_| white_sample(&mut rng1)).collect();
        let values2: Vec<f64> = (0..100).map(|_| white_sample(&mut rng2)).collect();

        assert_eq!(values1, values2);
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(43);

        let values1: Vec<f64> = (0..10).map(|_| white_sample(&mut rng1)).collect();
        let values2: Vec<f64> = (0..10).map(|_| white_sample(&mut rng2)).collect();

        assert_ne!(values1, values2);
    }

    #[test]
    fn test_white_sample_range() {
        let mut rng = create_rng(7);
        for _ in 0..10_000 {
            let w = white_sample(&mut rng);
            assert!((-1.0..1.0).contains(&w));
        }
    }
}
