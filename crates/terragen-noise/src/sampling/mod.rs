//! Sampling engine.
//!
//! Discretizes a noise function over a half-open box `[from, to)` at a
//! fixed number of samples per unit. Along axis `i` the coordinates are
//! `lat + r / resolution` for every integer step `lat` from `from[i]` while
//! `lat < to[i]`, and every `r` in `0..resolution`. The full sample set is
//! the Cartesian product of the axes, enumerated with the last axis
//! varying fastest. That order is part of the reproducibility contract:
//! grid cache misses draw randomness in enumeration order.

mod result;


pub use result::SamplingResult;

use crate::error::{NoiseError, NoiseResult};
use crate::noise::NoiseFunction;
use crate::preset::Preset;

/// Sample `function` over `[from, to)` at `resolution` samples per unit.
///
/// The result carries an empty preset name; see [`generate_preset`] for a
/// labeled run. A non-positive range on any axis yields an empty result.
pub fn generate(
    from: &[f64],
    to: &[f64],
    resolution: u32,
    function: &NoiseFunction,
) -> NoiseResult<SamplingResult> {
    sample(String::new(), from, to, resolution, function)
}

/// Build `preset` from `seed` and `frequencies`, then sample it.
pub fn generate_preset(
    preset: Preset,
    seed: u64,
    frequencies: &[f64],
    from: &[f64],
    to: &[f64],
    resolution: u32,
) -> NoiseResult<SamplingResult> {
    check_dimensions(from, to)?;
    let function = preset.build(seed, frequencies);
    sample(preset.name().to_string(), from, to, resolution, &function)
}

fn check_dimensions(from: &[f64], to: &[f64]) -> NoiseResult<()> {
    if from.len() != to.len() {
        return Err(NoiseError::DimensionMismatch {
            from: from.len(),
            to: to.len(),
        });
    }
    Ok(())
}

/// Coordinates visited along one axis, in order.
pub fn axis_coordinates(from: f64, to: f64, resolution: u32) -> Vec<f64> {
    let mut coords = Vec::new();
    let mut step = 0u64;
    let mut previous = f64::NEG_INFINITY;
    loop {
        let lattice = from + step as f64;
        // NaN bounds visit nothing; a step too small to move the lattice ends the axis.
        if lattice.is_nan() || to.is_nan() || lattice >= to || lattice <= previous {
            break;
        }
        previous = lattice;
        for r in 0..resolution {
            coords.push(lattice + r as f64 / resolution as f64);
        }
        step += 1;
    }
    coords
}

fn sample(
    noise_function: String,
    from: &[f64],
    to: &[f64],
    resolution: u32,
    function: &NoiseFunction,
) -> NoiseResult<SamplingResult> {
    check_dimensions(from, to)?;
    let dimensions = from.len();

    if let Some(expected) = function.dimension() {
        if expected != dimensions {
            let label = if noise_function.is_empty() {
                function.kind().to_string()
            } else {
                noise_function
            };
            return Err(NoiseError::UnsupportedDimension {
                function: label,
                expected,
                found: dimensions,
            });
        }
    }

    let axes: Vec<Vec<f64>> = from
        .iter()
        .zip(to.iter())
        .map(|(&lo, &hi)| axis_coordinates(lo, hi, resolution))
        .collect();
    let total = axes
        .iter()
        .try_fold(1usize, |acc, axis| acc.checked_mul(axis.len()))
        .unwrap_or(usize::MAX);
    let total = if axes.iter().any(Vec::is_empty) { 0 } else { total };

    log::info!(
        "sampling {} over {} axes at resolution {} ({} samples)",
        if noise_function.is_empty() {
            function.kind()
        } else {
            noise_function.as_str()
        },
        dimensions,
        resolution,
        total
    );

    let mut result = SamplingResult::with_capacity(
        noise_function,
        from.to_vec(),
        to.to_vec(),
        resolution,
        total,
    );
    if total == 0 {
        return Ok(result);
    }

    // Odometer over per-axis indices, last axis fastest.
    let mut index = vec![0usize; dimensions];
    let mut point: Vec<f64> = axes.iter().map(|axis| axis[0]).collect();
    loop {
        let value = function.evaluate(&point);
        result.push(&point, value);

        let mut axis = dimensions;
        loop {
            if axis == 0 {
                return Ok(result);
            }
            axis -= 1;
            index[axis] += 1;
            if index[axis] < axes[axis].len() {
                point[axis] = axes[axis][index[axis]];
                break;
            }
            index[axis] = 0;
            point[axis] = axes[axis][0];
        }
    }
}
