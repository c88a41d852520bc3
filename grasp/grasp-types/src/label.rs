//! Grasp outcome labels.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GraspError;

/// Object height above which a lifted object counts as grasped (meters).
pub const SUCCESS_HEIGHT: f64 = 0.1;

/// Binary grasp label.
///
/// Encoded as `0` (failure) and `1` (success) in datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub enum GraspLabel {
    /// The object was not lifted.
    Failure,
    /// The object was lifted.
    Success,
}

impl GraspLabel {
    /// Both labels, in class-index order.
    pub const ALL: [Self; 2] = [Self::Failure, Self::Success];

    /// Integer class index (0 or 1).
    #[must_use]
    pub const fn as_index(self) -> usize {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    /// Check if this is a success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<bool> for GraspLabel {
    fn from(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }
}

impl From<GraspLabel> for i64 {
    fn from(label: GraspLabel) -> Self {
        match label {
            GraspLabel::Failure => 0,
            GraspLabel::Success => 1,
        }
    }
}

impl TryFrom<i64> for GraspLabel {
    type Error = GraspError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Failure),
            1 => Ok(Self::Success),
            other => Err(GraspError::InvalidLabel(other)),
        }
    }
}

impl fmt::Display for GraspLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i64::from(*self))
    }
}

/// What the physics harness observed after the lift.
///
/// # Example
///
/// ```
/// use grasp_types::{GraspLabel, GraspOutcome};
///
/// assert_eq!(GraspOutcome::new(0.3).label(), GraspLabel::Success);
/// assert_eq!(GraspOutcome::new(0.05).label(), GraspLabel::Failure);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraspOutcome {
    /// Height of the object's center after the lift (meters).
    pub object_height: f64,
}

impl GraspOutcome {
    /// Create an outcome from the measured object height.
    #[must_use]
    pub const fn new(object_height: f64) -> Self {
        Self { object_height }
    }

    /// Success iff the object ended strictly above [`SUCCESS_HEIGHT`].
    #[must_use]
    pub fn label(&self) -> GraspLabel {
        GraspLabel::from(self.object_height > SUCCESS_HEIGHT)
    }
}
