//! Deterministic random sources.
//!
//! Every random draw in the engine goes through [`RandomSource`]. Two
//! [`DeterministicRng`] instances built from the same seed produce the same
//! sequence, which is what makes every preset reproducible per seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Advance the source and return the next draw.
    fn next_f64(&mut self) -> f64;

    /// The next draw mapped from `[0, 1)` to `[-1, 1)`.
    #[inline]
    fn next_signed_f64(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

impl RandomSource for DeterministicRng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.gen_f64()
    }
}

/// A source that replays a fixed list of draws, wrapping around at the end.
///
/// Useful for reproducing a scenario exactly, independent of the PRNG.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ReplaySource {
    /// Create a replay source. An empty list replays `0.0` forever.
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ReplaySource {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
