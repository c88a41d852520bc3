//! Sampling configuration.
//!
//! All geometric parameters of a single pose draw. The configuration is
//! supplied per call; nothing here is global or cached.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GraspError, Result};

/// Default rejection-sampling budget for the hemisphere sampler.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Parameters for one candidate-pose draw.
///
/// # Example
///
/// ```
/// use grasp_types::SamplingConfig;
/// use nalgebra::Point3;
///
/// let config = SamplingConfig::around(Point3::new(0.0, 0.0, 0.05))
///     .with_radius(0.3)
///     .with_clearance(0.12);
///
/// assert!(config.validate().is_ok());
/// assert!((config.z_min() - 0.12).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplingConfig {
    /// Object center in world coordinates (meters).
    pub center: Point3<f64>,
    /// Hemisphere radius (meters, > 0).
    pub radius: f64,
    /// Height of the support surface (meters).
    pub table_z: f64,
    /// Minimum clearance above the support surface (meters, >= 0).
    pub min_clearance: f64,
    /// Maximum deviation of the approach axis from the ideal one (degrees, [0, 180]).
    pub max_angle_deg: f64,
    /// Maximum roll about the approach axis (degrees, [0, 180]).
    pub max_roll_deg: f64,
    /// Rejected hemisphere draws tolerated before giving up (> 0).
    pub max_attempts: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: 0.3,
            table_z: 0.0,
            min_clearance: 0.12,
            max_angle_deg: 10.0,
            max_roll_deg: 180.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SamplingConfig {
    /// Default parameters around the given object center.
    #[must_use]
    pub fn around(center: Point3<f64>) -> Self {
        Self {
            center,
            ..Default::default()
        }
    }

    /// Set the object center.
    #[must_use]
    pub fn with_center(mut self, center: Point3<f64>) -> Self {
        self.center = center;
        self
    }

    /// Set the hemisphere radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the support surface height.
    #[must_use]
    pub fn with_table_z(mut self, table_z: f64) -> Self {
        self.table_z = table_z;
        self
    }

    /// Set the minimum clearance above the support surface.
    #[must_use]
    pub fn with_clearance(mut self, min_clearance: f64) -> Self {
        self.min_clearance = min_clearance;
        self
    }

    /// Set the approach cone half-angle in degrees.
    #[must_use]
    pub fn with_max_angle_deg(mut self, degrees: f64) -> Self {
        self.max_angle_deg = degrees;
        self
    }

    /// Set the roll bound in degrees.
    #[must_use]
    pub fn with_max_roll_deg(mut self, degrees: f64) -> Self {
        self.max_roll_deg = degrees;
        self
    }

    /// Set the rejection-sampling budget.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Lowest admissible gripper height.
    #[must_use]
    pub fn z_min(&self) -> f64 {
        self.table_z + self.min_clearance
    }

    /// Highest point of the hemisphere.
    #[must_use]
    pub fn max_z(&self) -> f64 {
        self.center.z + self.radius
    }

    /// Cone half-angle in radians.
    #[must_use]
    pub fn max_angle_rad(&self) -> f64 {
        self.max_angle_deg.to_radians()
    }

    /// Roll bound in radians.
    #[must_use]
    pub fn max_roll_rad(&self) -> f64 {
        self.max_roll_deg.to_radians()
    }

    /// Validate the configuration.
    ///
    /// Rejects non-finite values, a non-positive radius, negative clearance,
    /// angle bounds outside `[0, 180]` degrees and a zero attempt budget.
    pub fn validate(&self) -> Result<()> {
        if !self.center.coords.iter().all(|c| c.is_finite()) {
            return Err(GraspError::invalid_config("center must be finite"));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GraspError::invalid_config(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !self.table_z.is_finite() {
            return Err(GraspError::invalid_config("table_z must be finite"));
        }
        if !self.min_clearance.is_finite() || self.min_clearance < 0.0 {
            return Err(GraspError::invalid_config(format!(
                "min_clearance must be >= 0, got {}",
                self.min_clearance
            )));
        }
        check_degrees("max_angle_deg", self.max_angle_deg)?;
        check_degrees("max_roll_deg", self.max_roll_deg)?;
        if self.max_attempts == 0 {
            return Err(GraspError::invalid_config("max_attempts must be > 0"));
        }
        Ok(())
    }
}

fn check_degrees(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(GraspError::invalid_config(format!(
            "{name} must be in [0, 180], got {value}"
        )))
    }
}
