//! Noise request parameters.
//!
//! A [`NoiseRequest`] is what an outer layer (an HTTP handler, a CLI) hands
//! to the engine: the domain, resolution, preset name, seed and octave
//! frequencies. Missing fields take the defaults below.
//!
//! | Field | Default |
//! |-------|---------|
//! | `from` | `[0, 0]` |
//! | `to` | `[5, 5]` |
//! | `resolution` | `20` |
//! | `noiseFunction` | `"red"` |
//! | `seed` | wall clock seconds |
//! | `frequencies` | `[1, 2, 4, 8, 16, 32, 64]` |

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::preset::{self, Preset, DEFAULT_FREQUENCIES};
use crate::sampling::{generate_preset, SamplingResult};

/// Largest accepted bound magnitude (2^53).
///
/// Past this a unit lattice step no longer changes an `f64`, and every
/// lattice cell index still fits in `i64`.
pub const MAX_COORDINATE: f64 = 9_007_199_254_740_992.0;

fn default_from() -> Vec<f64> {
    vec![0.0, 0.0]
}

fn default_to() -> Vec<f64> {
    vec![5.0, 5.0]
}

fn default_resolution() -> u32 {
    20
}

fn default_noise_function() -> String {
    "red".to_string()
}

fn default_frequencies() -> Vec<f64> {
    DEFAULT_FREQUENCIES.to_vec()
}

/// Parameters for one noise generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NoiseRequest {
    /// Lower corner of the domain (inclusive).
    #[serde(default = "default_from")]
    pub from: Vec<f64>,
    /// Upper corner of the domain (exclusive).
    #[serde(default = "default_to")]
    pub to: Vec<f64>,
    /// Samples per unit along each axis.
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    /// Preset name.
    #[serde(default = "default_noise_function")]
    pub noise_function: String,
    /// Seed for the random source. `None` picks one from the clock.
    ///
    /// Negative seeds are accepted and reinterpreted bit for bit as `u64`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Octave frequencies for spectral presets.
    #[serde(default = "default_frequencies")]
    pub frequencies: Vec<f64>,
}

impl Default for NoiseRequest {
    fn default() -> Self {
        Self {
            from: default_from(),
            to: default_to(),
            resolution: default_resolution(),
            noise_function: default_noise_function(),
            seed: None,
            frequencies: default_frequencies(),
        }
    }
}

impl NoiseRequest {
    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> NoiseResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every parameter and resolve the preset.
    pub fn validate(&self) -> NoiseResult<Preset> {
        if self.from.is_empty() {
            return Err(NoiseError::EmptyRange { field: "from" });
        }
        if self.to.is_empty() {
            return Err(NoiseError::EmptyRange { field: "to" });
        }
        if self.from.len() != self.to.len() {
            return Err(NoiseError::DimensionMismatch {
                from: self.from.len(),
                to: self.to.len(),
            });
        }
        for (axis, (&from, &to)) in self.from.iter().zip(&self.to).enumerate() {
            let in_bounds = |v: f64| v.is_finite() && v.abs() <= MAX_COORDINATE;
            if !in_bounds(from) || !in_bounds(to) || to <= from {
                return Err(NoiseError::InvalidRange { axis, from, to });
            }
        }
        if self.resolution < 1 {
            return Err(NoiseError::InvalidResolution {
                resolution: self.resolution,
            });
        }
        preset::lookup(&self.noise_function)
    }

    /// The request's seed, or the current Unix time in seconds.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.map(|seed| seed as u64).unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        })
    }

    /// Validate, build the preset and sample it.
    pub fn run(&self) -> NoiseResult<SamplingResult> {
        let preset = self.validate()?;
        let seed = self.resolve_seed();
        log::debug!("running {self:?} with seed {seed}");
        generate_preset(
            preset,
            seed,
            &self.frequencies,
            &self.from,
            &self.to,
            self.resolution,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let request = NoiseRequest::from_json("{}").unwrap();
        assert_eq!(request, NoiseRequest::default());
        assert_eq!(request.from, vec![0.0, 0.0]);
        assert_eq!(request.to, vec![5.0, 5.0]);
        assert_eq!(request.resolution, 20);
        assert_eq!(request.noise_function, "red");
        assert_eq!(request.seed, None);
        assert_eq!(request.frequencies, DEFAULT_FREQUENCIES.to_vec());
    }

    #[test]
    fn test_parse_camel_case() {
        let request = NoiseRequest::from_json(
            r#"{"from":[0],"to":[1],"resolution":50,"noiseFunction":"white","seed":42}"#,
        )
        .unwrap();
        assert_eq!(request.noise_function, "white");
        assert_eq!(request.seed, Some(42));
        assert_eq!(request.validate().unwrap(), Preset::White);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = NoiseRequest::from_json(r#"{"colour":"red"}"#).unwrap_err();
        assert!(matches!(err, NoiseError::Json(_)));
    }

    #[test]
    fn test_validate_errors() {
        let mut request = NoiseRequest {
            from: vec![],
            ..NoiseRequest::default()
        };
        assert!(matches!(
            request.validate(),
            Err(NoiseError::EmptyRange { field: "from" })
        ));

        request.from = vec![0.0];
        assert!(matches!(
            request.validate(),
            Err(NoiseError::DimensionMismatch { from: 1, to: 2 })
        ));

        request.from = vec![0.0, 5.0];
        assert!(matches!(
            request.validate(),
            Err(NoiseError::InvalidRange { axis: 1, .. })
        ));

        request.from = vec![0.0, 0.0];
        request.resolution = 0;
        assert!(matches!(
            request.validate(),
            Err(NoiseError::InvalidResolution { resolution: 0 })
        ));

        request.resolution = 1;
        request.noise_function = "green".to_string();
        assert!(matches!(
            request.validate(),
            Err(NoiseError::UnknownPreset { .. })
        ));

        request.noise_function = "rawPerlin".to_string();
        assert_eq!(request.validate().unwrap(), Preset::RawPerlin);
    }

    #[test]
    fn test_nan_bound_rejected() {
        let request = NoiseRequest {
            from: vec![0.0],
            to: vec![f64::NAN],
            noise_function: "white".to_string(),
            ..NoiseRequest::default()
        };
        assert!(matches!(
            request.validate(),
            Err(NoiseError::InvalidRange { axis: 0, .. })
        ));
    }

    #[test]
    fn test_out_of_range_bounds_rejected() {
        let request = NoiseRequest {
            from: vec![1e19, 0.0],
            to: vec![2e19, 1.0],
            resolution: 1,
            noise_function: "rawPerlin".to_string(),
            seed: Some(1),
            ..NoiseRequest::default()
        };
        assert!(matches!(
            request.validate(),
            Err(NoiseError::InvalidRange { axis: 0, .. })
        ));
        assert!(request.run().is_err());

        let request = NoiseRequest {
            from: vec![0.0, f64::NEG_INFINITY],
            to: vec![1.0, 1.0],
            ..NoiseRequest::default()
        };
        assert!(matches!(
            request.validate(),
            Err(NoiseError::InvalidRange { axis: 1, .. })
        ));

        let request = NoiseRequest {
            from: vec![0.0, 0.0],
            to: vec![1.0, MAX_COORDINATE * 2.0],
            ..NoiseRequest::default()
        };
        assert!(matches!(
            request.validate(),
            Err(NoiseError::InvalidRange { axis: 1, .. })
        ));
    }

    #[test]
    fn test_largest_domain_runs_bounded() {
        let request = NoiseRequest {
            from: vec![MAX_COORDINATE - 2.0, -MAX_COORDINATE],
            to: vec![MAX_COORDINATE, 2.0 - MAX_COORDINATE],
            resolution: 4,
            noise_function: "rawPerlin".to_string(),
            seed: Some(1),
            ..NoiseRequest::default()
        };
        assert_eq!(request.validate().unwrap(), Preset::RawPerlin);
        let result = request.run().unwrap();
        assert_eq!(result.len(), 8 * 8);
        let bound = 2f64.sqrt();
        assert!(result.values().iter().all(|v| v.abs() <= bound));
    }

    #[test]
    fn test_negative_seed() {
        let request = NoiseRequest::from_json(
            r#"{"from":[0],"to":[1],"resolution":8,"noiseFunction":"pink","seed":-5}"#,
        )
        .unwrap();
        assert_eq!(request.seed, Some(-5));
        assert_eq!(request.resolve_seed(), u64::MAX - 4);
        assert!(request.run().unwrap().is_equal(&request.run().unwrap()));
    }

    #[test]
    fn test_run() {
        let request = NoiseRequest {
            from: vec![0.0],
            to: vec![1.0],
            resolution: 50,
            noise_function: "white".to_string(),
            seed: Some(42),
            ..NoiseRequest::default()
        };
        let result = request.run().unwrap();
        assert_eq!(result.len(), 50);
        assert_eq!(result.noise_function(), "white");
        assert!(result.is_equal(&request.run().unwrap()));
    }

    #[test]
    fn test_run_default_red_2d() {
        let request = NoiseRequest {
            seed: Some(1),
            ..NoiseRequest::default()
        };
        let result = request.run().unwrap();
        assert_eq!(result.len(), 100 * 100);
        assert_eq!(result.dimensions(), 2);
    }

    #[test]
    fn test_resolve_seed() {
        let request = NoiseRequest {
            seed: Some(7),
            ..NoiseRequest::default()
        };
        assert_eq!(request.resolve_seed(), 7);
        assert!(NoiseRequest::default().resolve_seed() > 0);
    }
}
