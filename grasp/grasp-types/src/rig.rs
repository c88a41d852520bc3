//! Gripper rigs and target objects.
//!
//! Rig constants come from the two physical grippers the grasp harness drives:
//! a parallel two-finger gripper and a three-finger hand.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{EulerAngles, GraspError, Pose, SamplingConfig};

/// Gripper rig used for a grasp attempt.
///
/// # Example
///
/// ```
/// use grasp_types::GripperKind;
///
/// let gripper: GripperKind = "3f".parse().unwrap();
/// assert_eq!(gripper, GripperKind::ThreeFinger);
/// assert_eq!(gripper.to_string(), "3f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GripperKind {
    /// Parallel two-finger gripper ("2f").
    #[default]
    TwoFinger,
    /// Three-finger hand ("3f").
    ThreeFinger,
}

impl GripperKind {
    /// Fraction of the candidate offset kept when closing in on the object.
    #[must_use]
    pub const fn approach_ratio(self) -> f64 {
        match self {
            Self::TwoFinger => 0.35,
            Self::ThreeFinger => 0.45,
        }
    }

    /// Rest pose: half a meter above the table, pointing down.
    #[must_use]
    pub fn home_pose(self) -> Pose {
        Pose::from_position_euler(Point3::new(0.0, 0.0, 0.5), EulerAngles::new(PI, 0.0, 0.0))
    }

    /// Short name used on the command line and in file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoFinger => "2f",
            Self::ThreeFinger => "3f",
        }
    }
}

impl fmt::Display for GripperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GripperKind {
    type Err = GraspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2f" => Ok(Self::TwoFinger),
            "3f" => Ok(Self::ThreeFinger),
            other => Err(GraspError::UnknownGripper(other.to_string())),
        }
    }
}

/// Object resting on the table at the world origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetObject {
    /// Cube.
    #[default]
    Cube,
    /// Upright cylinder.
    Cylinder,
}

impl TargetObject {
    /// Object height in meters.
    #[must_use]
    pub const fn height(self) -> f64 {
        match self {
            Self::Cube | Self::Cylinder => 0.1,
        }
    }

    /// Object center when resting on a table at `z = 0`.
    #[must_use]
    pub fn center(self) -> Point3<f64> {
        Point3::new(0.0, 0.0, self.height() / 2.0)
    }

    /// Default sampling configuration around this object.
    #[must_use]
    pub fn sampling_config(self) -> SamplingConfig {
        SamplingConfig::around(self.center())
    }

    /// Short name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Cylinder => "cylinder",
        }
    }
}

impl fmt::Display for TargetObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetObject {
    type Err = GraspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cube" => Ok(Self::Cube),
            "cylinder" => Ok(Self::Cylinder),
            other => Err(GraspError::UnknownObject(other.to_string())),
        }
    }
}
