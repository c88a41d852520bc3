//! Value types for grasp pose sampling.
//!
//! - [`Pose`] - Gripper position and orientation
//! - [`EulerAngles`] - Roll/pitch/yaw view of an orientation
//! - [`SamplingConfig`] - Geometric bounds of one candidate-pose draw
//! - [`GripperKind`], [`TargetObject`] - Rig and object constants
//! - [`GraspLabel`], [`GraspOutcome`] - Grasp results
//!
//! # Design Philosophy
//!
//! These types are **pure data**. Sampling lives in `grasp-sampler`, datasets
//! in `grasp-dataset`, and everything that touches a physics engine or a
//! trained model in `grasp-harness`.
//!
//! # Coordinate System
//!
//! - Z: up (the support surface is a plane of constant z)
//! - Right-handed
//! - The gripper approaches along its local +Z axis
//!
//! # Example
//!
//! ```
//! use grasp_types::{Pose, SamplingConfig, TargetObject};
//!
//! let config = TargetObject::Cube.sampling_config();
//! assert!(config.validate().is_ok());
//! assert!(config.z_min() > config.table_z);
//!
//! let pose = Pose::identity();
//! assert!(pose.is_finite());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::missing_errors_doc,        // Error docs added where non-obvious
)]

mod config;
mod error;
mod label;
mod pose;
mod rig;

pub use config::{DEFAULT_MAX_ATTEMPTS, SamplingConfig};
pub use error::GraspError;
pub use label::{GraspLabel, GraspOutcome, SUCCESS_HEIGHT};
pub use pose::{EulerAngles, Pose};
pub use rig::{GripperKind, TargetObject};

// Re-export math types for convenience
pub use nalgebra::{Matrix3, Point3, UnitQuaternion, Vector3};

/// Result type for sampling operations.
pub type Result<T> = std::result::Result<T, GraspError>;
