//! Gripper pose types.
//!
//! A [`Pose`] is the sampler's output: a world position and a unit quaternion.
//! [`EulerAngles`] is the alternate representation written to datasets.

use nalgebra::{Point3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Roll, pitch and yaw in radians.
///
/// Fixed-axis XYZ convention: the rotation is `Rz(yaw) * Ry(pitch) * Rx(roll)`.
///
/// # Example
///
/// ```
/// use grasp_types::EulerAngles;
///
/// let euler = EulerAngles::new(0.1, -0.2, 0.3);
/// let back = EulerAngles::from_quaternion(&euler.to_quaternion());
/// assert!((back.roll - 0.1).abs() < 1e-12);
/// assert!((back.pitch + 0.2).abs() < 1e-12);
/// assert!((back.yaw - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EulerAngles {
    /// Rotation about world X (radians).
    pub roll: f64,
    /// Rotation about world Y (radians).
    pub pitch: f64,
    /// Rotation about world Z (radians).
    pub yaw: f64,
}

impl EulerAngles {
    /// Create Euler angles from roll, pitch and yaw.
    #[must_use]
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Extract Euler angles from a unit quaternion.
    #[must_use]
    pub fn from_quaternion(q: &UnitQuaternion<f64>) -> Self {
        let (roll, pitch, yaw) = q.euler_angles();
        Self { roll, pitch, yaw }
    }

    /// Convert to a unit quaternion.
    #[must_use]
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_euler_angles(self.roll, self.pitch, self.yaw)
    }

    /// Angles as an array `[roll, pitch, yaw]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }
}

/// Position and orientation of the gripper.
///
/// The gripper approaches along its local +Z axis, so [`Pose::forward`] is the
/// approach direction in world coordinates.
///
/// # Example
///
/// ```
/// use grasp_types::Pose;
/// use nalgebra::{Point3, UnitQuaternion, Vector3};
///
/// let pose = Pose::new(Point3::new(0.0, 0.0, 0.5), UnitQuaternion::identity());
/// assert_eq!(pose.forward(), Vector3::z());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Position in world coordinates (meters).
    pub position: Point3<f64>,
    /// Orientation as a unit quaternion.
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Create a pose from position and rotation.
    #[must_use]
    pub const fn new(position: Point3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self { position, rotation }
    }

    /// Identity pose at the origin.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a pose from a position and Euler angles.
    #[must_use]
    pub fn from_position_euler(position: Point3<f64>, euler: EulerAngles) -> Self {
        Self {
            position,
            rotation: euler.to_quaternion(),
        }
    }

    /// Orientation as Euler angles.
    #[must_use]
    pub fn euler_angles(&self) -> EulerAngles {
        EulerAngles::from_quaternion(&self.rotation)
    }

    /// Approach direction (local +Z in world coordinates).
    #[must_use]
    pub fn forward(&self) -> Vector3<f64> {
        self.rotation * Vector3::z()
    }

    /// Local +X in world coordinates.
    #[must_use]
    pub fn right(&self) -> Vector3<f64> {
        self.rotation * Vector3::x()
    }

    /// Local +Y in world coordinates.
    #[must_use]
    pub fn up(&self) -> Vector3<f64> {
        self.rotation * Vector3::y()
    }

    /// Same orientation at a different position.
    #[must_use]
    pub fn with_position(&self, position: Point3<f64>) -> Self {
        Self {
            position,
            rotation: self.rotation,
        }
    }

    /// Flatten to `[x, y, z, roll, pitch, yaw]`.
    #[must_use]
    pub fn to_features(&self) -> [f64; 6] {
        let e = self.euler_angles();
        [
            self.position.x,
            self.position.y,
            self.position.z,
            e.roll,
            e.pitch,
            e.yaw,
        ]
    }

    /// Check if the pose contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|x| x.is_finite())
            && self.rotation.coords.iter().all(|x| x.is_finite())
    }
}
