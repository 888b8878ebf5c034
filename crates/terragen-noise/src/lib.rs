//! Terragen Noise Synthesis Engine
//!
//! This crate procedurally synthesizes scalar noise fields over
//! n-dimensional coordinate spaces, for use as terrain and texture input.
//! All output is reproducible given the same seed and parameters.
//!
//! # Features
//!
//! - **Spectral presets**: violet, blue, white, pink and red noise built from
//!   randomly phased sinusoid octaves weighted by `frequency^exponent`
//! - **Lattice gradient noise**: 2D Perlin noise over a lazily memoized grid
//!   of random unit gradients
//! - **Sampling**: discretize any noise function over a half-open box at a
//!   fixed number of samples per unit
//!
//! # Example
//!
//! ```
//! use terragen_noise::preset::{self, DEFAULT_FREQUENCIES};
//! use terragen_noise::sampling::generate_preset;
//!
//! let white = preset::lookup("white").unwrap();
//! let result = generate_preset(white, 42, &DEFAULT_FREQUENCIES, &[0.0], &[1.0], 50).unwrap();
//! assert_eq!(result.len(), 50);
//! let json = result.to_json().unwrap();
//! assert!(json.contains("\"noiseFunction\":\"white\""));
//! ```
//!
//! # Determinism
//!
//! - Same preset + same seed + same frequencies = identical values
//! - PCG32 is used for all random draws
//! - Octave phases are drawn at construction, in frequency list order
//! - The Perlin grid is pre-warmed in a fixed order; misses draw in sample
//!   enumeration order, so sampling is sequential

pub mod error;
pub mod grid;
pub mod interpolation;
pub mod noise;
pub mod preset;
pub mod request;
pub mod rng;
pub mod sampling;
pub mod vector;

// Re-export main types for convenience
pub use error::{NoiseError, NoiseResult};
pub use grid::{CoordinateGridCache, GridCache, RandomGridCache};
pub use interpolation::{Easing, Interpolator};
pub use noise::{NoiseFunction, Octave, Perlin, PhaseGenerator, Sinusoid};
pub use preset::{Preset, PresetFamily, DEFAULT_FREQUENCIES};
pub use request::{NoiseRequest, MAX_COORDINATE};
pub use rng::{DeterministicRng, RandomSource, ReplaySource};
pub use sampling::{generate, generate_preset, SamplingResult};
pub use vector::Vec2;

/// Tolerance for float comparisons.
pub const EPSILON: f64 = 1e-14;

/// Whether two floats differ by at most [`EPSILON`].
#[inline]
pub fn float_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}
