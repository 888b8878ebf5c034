//! Named noise presets.
//!
//! The catalog is fixed: five spectral presets built from randomly phased
//! sinusoid octaves weighted by `frequency^exponent`, and one lattice
//! preset producing raw Perlin noise.
//!
//! | Preset | Exponent |
//! |--------|----------|
//! | violet | 2 |
//! | blue | 1 |
//! | white | 0 |
//! | pink | -1 |
//! | red | -2 |

use std::fmt;
use std::str::FromStr;

use crate::error::{NoiseError, NoiseResult};
use crate::grid::RandomGridCache;
use crate::interpolation::{Easing, Interpolator};
use crate::noise::{NoiseFunction, Octave, Perlin, PhaseGenerator, Sinusoid};
use crate::rng::{DeterministicRng, RandomSource};

/// Frequencies used when a caller does not pick its own.
pub const DEFAULT_FREQUENCIES: [f64; 7] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];

/// Preset families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetFamily {
    /// Frequency-weighted sinusoid octaves.
    Spectral,
    /// Gradient noise over an integer lattice.
    Lattice,
}

/// A named noise preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Violet,
    Blue,
    White,
    Pink,
    Red,
    RawPerlin,
}

/// Every preset with its catalog name.
pub static CATALOG: [(&str, Preset); 6] = [
    ("violet", Preset::Violet),
    ("blue", Preset::Blue),
    ("white", Preset::White),
    ("pink", Preset::Pink),
    ("red", Preset::Red),
    ("rawPerlin", Preset::RawPerlin),
];

/// Find a preset by exact name.
pub fn lookup(name: &str) -> NoiseResult<Preset> {
    CATALOG
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, preset)| *preset)
        .ok_or_else(|| NoiseError::unknown_preset(name))
}

/// Presets of one family, in catalog order.
pub fn family(family: PresetFamily) -> impl Iterator<Item = Preset> {
    CATALOG
        .iter()
        .map(|(_, preset)| *preset)
        .filter(move |preset| preset.family() == family)
}

impl Preset {
    /// Catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Violet => "violet",
            Preset::Blue => "blue",
            Preset::White => "white",
            Preset::Pink => "pink",
            Preset::Red => "red",
            Preset::RawPerlin => "rawPerlin",
        }
    }

    pub fn family(self) -> PresetFamily {
        match self {
            Preset::RawPerlin => PresetFamily::Lattice,
            _ => PresetFamily::Spectral,
        }
    }

    /// Octave weight exponent for spectral presets.
    pub fn exponent(self) -> Option<f64> {
        match self {
            Preset::Violet => Some(2.0),
            Preset::Blue => Some(1.0),
            Preset::White => Some(0.0),
            Preset::Pink => Some(-1.0),
            Preset::Red => Some(-2.0),
            Preset::RawPerlin => None,
        }
    }

    /// Build the preset's noise function from a seed.
    pub fn build(self, seed: u64, frequencies: &[f64]) -> NoiseFunction {
        self.build_with_source(DeterministicRng::new(seed), frequencies)
    }

    /// Build the preset's noise function, drawing randomness from `source`.
    ///
    /// Lattice presets ignore `frequencies`.
    pub fn build_with_source<S>(self, source: S, frequencies: &[f64]) -> NoiseFunction
    where
        S: RandomSource + Send + 'static,
    {
        log::debug!(
            "building preset '{}' ({:?}, {} frequencies)",
            self.name(),
            self.family(),
            frequencies.len()
        );
        match self.exponent() {
            Some(exponent) => spectral(source, frequencies, exponent),
            None => raw_perlin(source),
        }
    }
}

/// Sinusoid octaves sharing one phase generator, weighted `f^exponent`.
///
/// Each octave takes its phase from the generator at construction, in
/// frequency list order.
fn spectral<S>(source: S, frequencies: &[f64], exponent: f64) -> NoiseFunction
where
    S: RandomSource + Send + 'static,
{
    let phase_fn = NoiseFunction::Phase(PhaseGenerator::new(source));
    Octave::synthesize(
        |frequency| Sinusoid::from_phase_fn(&phase_fn, frequency).into(),
        |frequency| frequency.powf(exponent),
        frequencies,
    )
    .into()
}

fn raw_perlin<S>(source: S) -> NoiseFunction
where
    S: RandomSource + Send + 'static,
{
    Perlin::new(
        RandomGridCache::new(source),
        Interpolator::new(Easing::DampedCubic),
    )
    .into()
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
    }
}
