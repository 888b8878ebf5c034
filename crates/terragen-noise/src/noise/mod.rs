//! Noise functions.
//!
//! A [`NoiseFunction`] maps a point (one coordinate per axis) to a value.
//! The set of function kinds is closed; composites are built from the
//! primitives at construction time and never change afterwards, except for
//! grid caches memoizing new lattice points.

mod octave;
mod perlin;
mod phase;
mod sinusoid;

pub use octave::{Octave, OctaveComponent};
pub use perlin::Perlin;
pub use phase::PhaseGenerator;
pub use sinusoid::Sinusoid;

use crate::float_eq;

/// Half-width of the probe lattice used by [`NoiseFunction::is_equal`].
const PROBE_EXTENT: f64 = 10.0;
/// Step of the probe lattice used by [`NoiseFunction::is_equal`].
const PROBE_STEP: f64 = 0.5;

/// A noise function.
#[derive(Debug)]
pub enum NoiseFunction {
    /// The same value everywhere.
    Constant(f64),
    /// Next draw of a random source on every evaluation.
    Phase(PhaseGenerator),
    /// Phase-shifted sinusoid of the coordinate sum.
    Sinusoid(Sinusoid),
    /// Weighted sum of octave components.
    Octave(Octave),
    /// 2D lattice gradient noise.
    Perlin(Perlin),
}

impl NoiseFunction {
    /// Evaluate the function at `point`.
    ///
    /// Perlin reads the first two coordinates; a missing one reads as `0`.
    pub fn evaluate(&self, point: &[f64]) -> f64 {
        match self {
            NoiseFunction::Constant(value) => *value,
            NoiseFunction::Phase(phase) => phase.draw(),
            NoiseFunction::Sinusoid(sinusoid) => sinusoid.sample(point),
            NoiseFunction::Octave(octave) => octave.sample(point),
            NoiseFunction::Perlin(perlin) => {
                let x = point.first().copied().unwrap_or(0.0);
                let y = point.get(1).copied().unwrap_or(0.0);
                perlin.sample(x, y)
            }
        }
    }

    /// Short name of the function kind.
    pub fn kind(&self) -> &'static str {
        match self {
            NoiseFunction::Constant(_) => "constant",
            NoiseFunction::Phase(_) => "phase",
            NoiseFunction::Sinusoid(_) => "sinusoid",
            NoiseFunction::Octave(_) => "octave",
            NoiseFunction::Perlin(_) => "perlin",
        }
    }

    /// Number of axes the function is defined over, or `None` for any.
    pub fn dimension(&self) -> Option<usize> {
        match self {
            NoiseFunction::Perlin(_) => Some(2),
            NoiseFunction::Octave(octave) => octave.dimension(),
            NoiseFunction::Constant(_) | NoiseFunction::Phase(_) | NoiseFunction::Sinusoid(_) => {
                None
            }
        }
    }

    /// Compare two functions over a probe lattice of `dimension` axes.
    ///
    /// Both functions are evaluated at every point of `[-10, 10]` per axis,
    /// step `0.5`, in the same order; values must agree within 1e-14.
    pub fn is_equal(&self, other: &NoiseFunction, dimension: usize) -> bool {
        let steps = (2.0 * PROBE_EXTENT / PROBE_STEP) as usize + 1;
        let mut index = vec![0usize; dimension];
        let mut point = vec![-PROBE_EXTENT; dimension];

        loop {
            if !float_eq(self.evaluate(&point), other.evaluate(&point)) {
                return false;
            }

            // Odometer increment, last axis fastest.
            let mut axis = dimension;
            loop {
                if axis == 0 {
                    return true;
                }
                axis -= 1;
                index[axis] += 1;
                if index[axis] < steps {
                    point[axis] = -PROBE_EXTENT + index[axis] as f64 * PROBE_STEP;
                    break;
                }
                index[axis] = 0;
                point[axis] = -PROBE_EXTENT;
            }
        }
    }
}

impl From<Sinusoid> for NoiseFunction {
    fn from(sinusoid: Sinusoid) -> Self {
        NoiseFunction::Sinusoid(sinusoid)
    }
}

impl From<Octave> for NoiseFunction {
    fn from(octave: Octave) -> Self {
        NoiseFunction::Octave(octave)
    }
}

impl From<Perlin> for NoiseFunction {
    fn from(perlin: Perlin) -> Self {
        NoiseFunction::Perlin(perlin)
    }
}

impl From<PhaseGenerator> for NoiseFunction {
    fn from(phase: PhaseGenerator) -> Self {
        NoiseFunction::Phase(phase)
    }
}
