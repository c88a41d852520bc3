//! Scripted grasp attempt as data.
//!
//! A grasp attempt is: open, move to the candidate pose, close in along the
//! candidate orientation, close the fingers, lift, hold, measure. The
//! simulator executes an [`ApproachPlan`]; the plan itself carries every
//! pose, force limit and step count.

use grasp_types::{GripperKind, Point3, Pose, TargetObject};
use serde::{Deserialize, Serialize};

/// Physics step length (seconds).
pub const TIMESTEP: f64 = 1.0 / 240.0;

/// Motor force limit when moving to the candidate pose (newtons).
pub const DEFAULT_FORCE: f64 = 1200.0;

/// Motor force limit while closing in on the object (newtons).
pub const APPROACH_FORCE: f64 = 1100.0;

/// Motor force limit while lifting (newtons).
pub const LIFT_FORCE: f64 = 500.0;

/// Gripper height at the end of the lift (meters).
pub const LIFT_HEIGHT: f64 = 0.3;

/// Extra fraction of the vertical offset kept during the approach.
pub const APPROACH_Z_MARGIN: f64 = 0.05;

/// One commanded gripper pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Target pose.
    pub pose: Pose,
    /// Motor force limit (newtons).
    pub max_force: f64,
    /// Physics steps to run after commanding the pose.
    pub settle_steps: u32,
}

/// Full scripted grasp attempt for one candidate pose.
///
/// # Example
///
/// ```
/// use grasp_harness::ApproachPlan;
/// use grasp_types::{GripperKind, Point3, Pose, TargetObject};
///
/// let candidate = Pose::identity().with_position(Point3::new(0.2, 0.0, 0.25));
/// let plan = ApproachPlan::new(candidate, GripperKind::TwoFinger, TargetObject::Cube);
///
/// // Horizontal offset shrinks to 35% for the two-finger gripper.
/// assert!((plan.approach.pose.position.x - 0.07).abs() < 1e-12);
/// assert_eq!(plan.lift.pose.position.z, 0.3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachPlan {
    /// Gripper rig.
    pub gripper: GripperKind,
    /// Object being grasped.
    pub object: TargetObject,
    /// Rest pose the gripper is placed at when the world is reset.
    pub home: Pose,
    /// Steps with the fingers open before moving.
    pub open_settle_steps: u32,
    /// Move to the sampled candidate pose.
    pub pre_grasp: Waypoint,
    /// Close in on the object along the candidate orientation.
    pub approach: Waypoint,
    /// Steps after closing the fingers.
    pub close_settle_steps: u32,
    /// Lift above the object.
    pub lift: Waypoint,
    /// Steps held at the lift pose before measuring.
    pub hold_steps: u32,
    /// Physics step length (seconds).
    pub timestep: f64,
}

impl ApproachPlan {
    /// Build the plan for `candidate`.
    #[must_use]
    pub fn new(candidate: Pose, gripper: GripperKind, object: TargetObject) -> Self {
        let center = object.center();
        let near = approach_position(&candidate.position, &center, gripper.approach_ratio());
        let lifted = Point3::new(center.x, center.y, LIFT_HEIGHT);

        Self {
            gripper,
            object,
            home: gripper.home_pose(),
            open_settle_steps: 50,
            pre_grasp: Waypoint {
                pose: candidate,
                max_force: DEFAULT_FORCE,
                settle_steps: 50,
            },
            approach: Waypoint {
                pose: candidate.with_position(near),
                max_force: APPROACH_FORCE,
                settle_steps: 30,
            },
            close_settle_steps: 50,
            lift: Waypoint {
                pose: candidate.with_position(lifted),
                max_force: LIFT_FORCE,
                settle_steps: 50,
            },
            hold_steps: 50,
            timestep: TIMESTEP,
        }
    }

    /// The three commanded poses, in execution order.
    #[must_use]
    pub const fn waypoints(&self) -> [&Waypoint; 3] {
        [&self.pre_grasp, &self.approach, &self.lift]
    }

    /// Physics steps in the whole attempt.
    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.open_settle_steps
            + self.close_settle_steps
            + self.hold_steps
            + self.waypoints().iter().map(|w| w.settle_steps).sum::<u32>()
    }

    /// Simulated duration of the whole attempt (seconds).
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        f64::from(self.total_steps()) * self.timestep
    }
}

/// Position pulled from `candidate` toward `center`.
///
/// The horizontal offset is scaled by `ratio` and the vertical offset by
/// `ratio + 0.05`, so the fingers end slightly above the center.
#[must_use]
pub fn approach_position(candidate: &Point3<f64>, center: &Point3<f64>, ratio: f64) -> Point3<f64> {
    Point3::new(
        center.x + (candidate.x - center.x) * ratio,
        center.y + (candidate.y - center.y) * ratio,
        center.z + (candidate.z - center.z) * (ratio + APPROACH_Z_MARGIN),
    )
}
