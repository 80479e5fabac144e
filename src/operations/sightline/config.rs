use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, SightlineError};
use crate::tessellation::TessellationParams;

/// Tunable constants of the sightline computation.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SightlineConfig {
    /// Half-angle of the light's field of view, in radians.
    pub light_half_angle: f64,
    /// Scale applied to light→tangent-point to get the extended tangent
    /// segments.
    pub tangent_extension: f64,
    /// Scale applied to light→arc-intersection to get the far corners of the
    /// obstruction quadrilateral.
    pub obstruction_extension: f64,
    /// The obstruction radius is the larger horizontal box extent divided by
    /// this value.
    pub radius_divisor: f64,
    /// Stroking of arcs before region booleans.
    pub tessellation: TessellationParams,
}

impl Default for SightlineConfig {
    fn default() -> Self {
        Self {
            light_half_angle: PI / 9.0,
            tangent_extension: 4.0,
            obstruction_extension: 5.0,
            radius_divisor: 2.0,
            tessellation: TessellationParams::default(),
        }
    }
}

impl SightlineConfig {
    /// Parses a JSON configuration and validates it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::Invalid` for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.light_half_angle > 0.0 && self.light_half_angle < FRAC_PI_2) {
            return Err(invalid("light_half_angle", self.light_half_angle, "(0, π/2)"));
        }
        if !(self.tangent_extension > 1.0 && self.tangent_extension.is_finite()) {
            return Err(invalid("tangent_extension", self.tangent_extension, "(1, ∞)"));
        }
        if !(self.obstruction_extension > 1.0 && self.obstruction_extension.is_finite()) {
            return Err(invalid(
                "obstruction_extension",
                self.obstruction_extension,
                "(1, ∞)",
            ));
        }
        if !(self.radius_divisor > 0.0 && self.radius_divisor.is_finite()) {
            return Err(invalid("radius_divisor", self.radius_divisor, "(0, ∞)"));
        }
        self.tessellation
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("tessellation: {e}")).into())
    }
}

fn invalid(field: &str, value: f64, range: &str) -> SightlineError {
    ConfigError::Invalid(format!("{field} = {value} is outside {range}")).into()
}
