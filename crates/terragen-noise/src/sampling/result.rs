//! Sampling result and its JSON shape.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::error::NoiseResult;
use crate::float_eq;

/// Largest number of samples reserved up front.
const MAX_RESERVE: usize = 1 << 20;

/// Samples of a noise function over a box.
///
/// `coordinates[i][k]` is the `i`-th coordinate of sample `k` and
/// `values[k]` the function's value there.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingResult {
    coordinates: Vec<Vec<f64>>,
    values: Vec<f64>,
    from: Vec<f64>,
    to: Vec<f64>,
    resolution: u32,
    noise_function: String,
}

impl SamplingResult {
    pub(crate) fn with_capacity(
        noise_function: String,
        from: Vec<f64>,
        to: Vec<f64>,
        resolution: u32,
        capacity: usize,
    ) -> Self {
        let capacity = capacity.min(MAX_RESERVE);
        Self {
            coordinates: (0..from.len())
                .map(|_| Vec::with_capacity(capacity))
                .collect(),
            values: Vec::with_capacity(capacity),
            from,
            to,
            resolution,
            noise_function,
        }
    }

    pub(crate) fn push(&mut self, point: &[f64], value: f64) {
        for (axis, &coord) in self.coordinates.iter_mut().zip(point) {
            axis.push(coord);
        }
        self.values.push(value);
    }

    /// Per-axis coordinate arrays.
    pub fn coordinates(&self) -> &[Vec<f64>] {
        &self.coordinates
    }

    /// Coordinates along one axis.
    pub fn axis(&self, axis: usize) -> Option<&[f64]> {
        self.coordinates.get(axis).map(Vec::as_slice)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn from(&self) -> &[f64] {
        &self.from
    }

    pub fn to(&self) -> &[f64] {
        &self.to
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Preset name the samples came from; empty for unnamed functions.
    pub fn noise_function(&self) -> &str {
        &self.noise_function
    }

    /// Number of axes.
    pub fn dimensions(&self) -> usize {
        self.from.len()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coordinates of sample `k`.
    pub fn point(&self, k: usize) -> Option<Vec<f64>> {
        if k >= self.values.len() {
            return None;
        }
        Some(self.coordinates.iter().map(|axis| axis[k]).collect())
    }

    /// Compare with another result.
    ///
    /// Coordinates and values must agree within 1e-14; bounds, resolution
    /// and preset name must match exactly.
    pub fn is_equal(&self, other: &SamplingResult) -> bool {
        let close = |a: &[f64], b: &[f64]| {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| float_eq(*x, *y))
        };
        self.from == other.from
            && self.to == other.to
            && self.resolution == other.resolution
            && self.noise_function == other.noise_function
            && close(&self.values, &other.values)
            && self.coordinates.len() == other.coordinates.len()
            && self
                .coordinates
                .iter()
                .zip(&other.coordinates)
                .all(|(a, b)| close(a, b))
    }

    /// BLAKE3 hex digest of the parameters and every sample's bits.
    pub fn hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.noise_function.as_bytes());
        hasher.update(&self.resolution.to_le_bytes());
        hasher.update(&(self.from.len() as u64).to_le_bytes());
        for bound in self.from.iter().chain(&self.to) {
            hasher.update(&bound.to_bits().to_le_bytes());
        }
        for axis in &self.coordinates {
            for coord in axis {
                hasher.update(&coord.to_bits().to_le_bytes());
            }
        }
        for value in &self.values {
            hasher.update(&value.to_bits().to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> NoiseResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Key for axis `axis`: `"x"` for a 1D result, `"t1".."tn"` otherwise.
    pub fn axis_name(&self, axis: usize) -> String {
        if self.coordinates.len() == 1 {
            "x".to_string()
        } else {
            format!("t{}", axis + 1)
        }
    }
}

/// The `rawNoise` object: one array per axis plus `value`.
struct RawNoise<'a>(&'a SamplingResult);

impl Serialize for RawNoise<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let result = self.0;
        let mut map = serializer.serialize_map(Some(result.coordinates.len() + 1))?;
        for (axis, coords) in result.coordinates.iter().enumerate() {
            map.serialize_entry(&result.axis_name(axis), coords)?;
        }
        map.serialize_entry("value", &result.values)?;
        map.end()
    }
}

impl Serialize for SamplingResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SamplingResult", 5)?;
        state.serialize_field("rawNoise", &RawNoise(self))?;
        state.serialize_field("from", &self.from)?;
        state.serialize_field("to", &self.to)?;
        state.serialize_field("resolution", &self.resolution)?;
        state.serialize_field("noiseFunction", &self.noise_function)?;
        state.end()
    }
}
