//! Error types for pose sampling.

use thiserror::Error;

/// Errors that can occur while validating a configuration or sampling a pose.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraspError {
    /// Invalid sampling configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// The height constraint cannot be met by any point of the hemisphere.
    #[error("unsatisfiable height constraint: z_min {z_min} above reachable z {max_z}")]
    Unsatisfiable {
        /// Requested minimum height.
        z_min: f64,
        /// Highest z reachable on the hemisphere.
        max_z: f64,
    },

    /// Every draw of the attempt budget was rejected.
    #[error("no sample met the height constraint in {attempts} attempts (z_min {z_min:?})")]
    AttemptsExhausted {
        /// Requested minimum height, if any.
        z_min: Option<f64>,
        /// Number of draws made before giving up.
        attempts: usize,
    },

    /// Unknown gripper rig name.
    #[error("unknown gripper '{0}' (expected 2f or 3f)")]
    UnknownGripper(String),

    /// Unknown target object name.
    #[error("unknown object '{0}' (expected cube or cylinder)")]
    UnknownObject(String),

    /// Label value outside `{0, 1}`.
    #[error("invalid grasp label {0} (expected 0 or 1)")]
    InvalidLabel(i64),
}

impl GraspError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an unsatisfiable-constraint error.
    #[must_use]
    pub const fn unsatisfiable(z_min: f64, max_z: f64) -> Self {
        Self::Unsatisfiable { z_min, max_z }
    }

    /// Create an exhausted-budget error.
    #[must_use]
    pub const fn attempts_exhausted(z_min: Option<f64>, attempts: usize) -> Self {
        Self::AttemptsExhausted { z_min, attempts }
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }

    /// Check if sampling failed to find a point above `z_min`.
    #[must_use]
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(
            self,
            Self::Unsatisfiable { .. } | Self::AttemptsExhausted { .. }
        )
    }
}
