//! Flat dataset rows.

use grasp_types::{EulerAngles, GraspLabel, Pose, Point3};
use serde::{Deserialize, Serialize};

/// Feature column names of the pose schema, in feature order.
pub const POSE_FEATURES: [&str; 6] = ["x", "y", "z", "roll", "pitch", "yaw"];

/// Label column name of the pose schema.
pub const LABEL_COLUMN: &str = "label";

/// An unlabeled candidate pose.
///
/// Serializes as the CSV header `x,y,z,roll,pitch,yaw`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    /// Position x (meters).
    pub x: f64,
    /// Position y (meters).
    pub y: f64,
    /// Position z (meters).
    pub z: f64,
    /// Roll (radians).
    pub roll: f64,
    /// Pitch (radians).
    pub pitch: f64,
    /// Yaw (radians).
    pub yaw: f64,
}

impl PoseRecord {
    /// Flatten a pose.
    #[must_use]
    pub fn from_pose(pose: &Pose) -> Self {
        let [x, y, z, roll, pitch, yaw] = pose.to_features();
        Self {
            x,
            y,
            z,
            roll,
            pitch,
            yaw,
        }
    }

    /// Feature vector `[x, y, z, roll, pitch, yaw]`.
    #[must_use]
    pub const fn features(&self) -> [f64; 6] {
        [self.x, self.y, self.z, self.roll, self.pitch, self.yaw]
    }

    /// Rebuild the pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose::from_position_euler(
            Point3::new(self.x, self.y, self.z),
            EulerAngles::new(self.roll, self.pitch, self.yaw),
        )
    }

    /// Attach a label.
    #[must_use]
    pub const fn with_label(self, label: GraspLabel) -> GraspRecord {
        GraspRecord {
            x: self.x,
            y: self.y,
            z: self.z,
            roll: self.roll,
            pitch: self.pitch,
            yaw: self.yaw,
            label,
        }
    }
}

impl From<Pose> for PoseRecord {
    fn from(pose: Pose) -> Self {
        Self::from_pose(&pose)
    }
}

/// A labeled grasp attempt.
///
/// Serializes as the CSV header `x,y,z,roll,pitch,yaw,label` with the label
/// written as `0` or `1`.
///
/// # Example
///
/// ```
/// use grasp_dataset::GraspRecord;
/// use grasp_types::{GraspLabel, Pose};
///
/// let record = GraspRecord::from_pose(&Pose::identity(), GraspLabel::Success);
/// assert_eq!(record.features(), [0.0; 6]);
/// assert!(record.label.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraspRecord {
    /// Position x (meters).
    pub x: f64,
    /// Position y (meters).
    pub y: f64,
    /// Position z (meters).
    pub z: f64,
    /// Roll (radians).
    pub roll: f64,
    /// Pitch (radians).
    pub pitch: f64,
    /// Yaw (radians).
    pub yaw: f64,
    /// Grasp outcome.
    pub label: GraspLabel,
}

impl GraspRecord {
    /// Flatten a pose and its outcome.
    #[must_use]
    pub fn from_pose(pose: &Pose, label: GraspLabel) -> Self {
        PoseRecord::from_pose(pose).with_label(label)
    }

    /// Feature vector `[x, y, z, roll, pitch, yaw]`.
    #[must_use]
    pub const fn features(&self) -> [f64; 6] {
        [self.x, self.y, self.z, self.roll, self.pitch, self.yaw]
    }

    /// Rebuild the pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose_record().pose()
    }

    /// Drop the label.
    #[must_use]
    pub const fn pose_record(&self) -> PoseRecord {
        PoseRecord {
            x: self.x,
            y: self.y,
            z: self.z,
            roll: self.roll,
            pitch: self.pitch,
            yaw: self.yaw,
        }
    }
}
