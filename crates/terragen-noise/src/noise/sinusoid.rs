//! Phase-shifted sinusoid over any number of axes.

use std::f64::consts::PI;

use super::NoiseFunction;

/// `sin(2π · frequency · Σ coordinates + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sinusoid {
    frequency: f64,
    phase: f64,
}

impl Sinusoid {
    /// Sinusoid with an explicit phase.
    pub fn new(frequency: f64, phase: f64) -> Self {
        Self { frequency, phase }
    }

    /// Sinusoid whose phase is one evaluation of `phase_fn`, taken now.
    ///
    /// The phase function sees an empty point. With a
    /// [`PhaseGenerator`](super::PhaseGenerator) this consumes exactly one
    /// draw.
    pub fn from_phase_fn(phase_fn: &NoiseFunction, frequency: f64) -> Self {
        Self::new(frequency, phase_fn.evaluate(&[]))
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Evaluate at `point`.
    #[inline]
    pub fn sample(&self, point: &[f64]) -> f64 {
        let sum: f64 = point.iter().sum();
        (2.0 * PI * self.frequency * sum + self.phase).sin()
    }
}
