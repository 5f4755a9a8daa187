//! ChaCha20-backed uniform sampler.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// 2^-53, the spacing of doubles in [0.5, 1).
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Generates uniform samples in [0, 1).
pub struct SampleGenerator {
    inner: ChaCha20Rng,
    /// Values generated so far.
    generated: u64,
}

impl SampleGenerator {
    /// Creates a reproducible generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
            generated: 0,
        }
    }

    /// Creates a generator seeded from the OS entropy source.
    pub fn from_os_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand_core::OsRng.fill_bytes(&mut seed);
        Self {
            inner: ChaCha20Rng::from_seed(seed),
            generated: 0,
        }
    }

    /// Next value in [0, 1), using the top 53 bits of a 64-bit draw.
    pub fn next_unit(&mut self) -> f64 {
        self.generated += 1;
        (self.inner.next_u64() >> 11) as f64 * UNIT_SCALE
    }

    /// Draws `n` values.
    pub fn sample(&mut self, n: usize) -> Vec<f64> {
        let values: Vec<f64> = (0..n).map(|_| self.next_unit()).collect();
        tracing::debug!(n, total = self.generated, "Generated demonstration sample");
        values
    }

    /// Total values generated by this instance.
    pub fn generated(&self) -> u64 {
        self.generated
    }
}

impl std::fmt::Debug for SampleGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleGenerator")
            .field("generated", &self.generated)
            .finish_non_exhaustive()
    }
}
