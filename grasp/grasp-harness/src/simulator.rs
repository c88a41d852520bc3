//! Physics backend seam and dataset collection.

use grasp_dataset::GraspRecord;
use grasp_sampler::generate_random_gripper_pose;
use grasp_types::{GraspOutcome, GripperKind, Pose, SamplingConfig, TargetObject};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::approach::ApproachPlan;
use crate::error::{HarnessError, Result};

/// A physics world that can run scripted grasp attempts.
///
/// Implement this trait for your physics backend. The world holds one
/// gripper and one object; [`reset`](Self::reset) returns both to their rest
/// poses before each attempt.
pub trait GraspSimulator {
    /// Put the gripper and the object back at their rest poses.
    fn reset(&mut self) -> Result<()>;

    /// Run `plan` to completion and report where the object ended up.
    ///
    /// The gripper starts from [`ApproachPlan::home`].
    fn execute(&mut self, plan: &ApproachPlan) -> Result<GraspOutcome>;
}

/// Default number of trials per run.
pub const DEFAULT_NUM_TRIALS: usize = 100;

/// Settings for a batch of grasp trials.
///
/// # Example
///
/// ```
/// use grasp_harness::CollectionConfig;
/// use grasp_types::{GripperKind, TargetObject};
///
/// let config = CollectionConfig::new(GripperKind::ThreeFinger, TargetObject::Cylinder)
///     .with_num_trials(500);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.sampling.center, TargetObject::Cylinder.center());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Gripper rig.
    pub gripper: GripperKind,
    /// Object to grasp.
    pub object: TargetObject,
    /// Number of attempts.
    pub num_trials: usize,
    /// Candidate pose bounds.
    pub sampling: SamplingConfig,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::new(GripperKind::default(), TargetObject::default())
    }
}

impl CollectionConfig {
    /// Default settings for a gripper and object pair.
    #[must_use]
    pub fn new(gripper: GripperKind, object: TargetObject) -> Self {
        Self {
            gripper,
            object,
            num_trials: DEFAULT_NUM_TRIALS,
            sampling: object.sampling_config(),
        }
    }

    /// Set the number of attempts.
    #[must_use]
    pub const fn with_num_trials(mut self, num_trials: usize) -> Self {
        self.num_trials = num_trials;
        self
    }

    /// Replace the candidate pose bounds.
    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Validate the sampling bounds.
    pub fn validate(&self) -> Result<()> {
        self.sampling.validate().map_err(HarnessError::from)
    }
}

/// Reset the world, sample one candidate and run its plan.
pub fn run_trial<S, R>(
    sim: &mut S,
    config: &CollectionConfig,
    rng: &mut R,
) -> Result<(Pose, GraspOutcome)>
where
    S: GraspSimulator + ?Sized,
    R: Rng + ?Sized,
{
    sim.reset()?;
    let candidate = generate_random_gripper_pose(&config.sampling, rng)?;
    let plan = ApproachPlan::new(candidate, config.gripper, config.object);
    let outcome = sim.execute(&plan)?;
    Ok((candidate, outcome))
}

/// Run `config.num_trials` attempts and record each candidate with its label.
///
/// Trials run one after another in the same world.
///
/// # Errors
///
/// Returns the first configuration, sampling or simulator error.
pub fn collect_dataset<S, R>(
    sim: &mut S,
    config: &CollectionConfig,
    rng: &mut R,
) -> Result<Vec<GraspRecord>>
where
    S: GraspSimulator + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;
    info!(
        gripper = %config.gripper,
        object = %config.object,
        trials = config.num_trials,
        "Collecting grasp dataset"
    );

    let mut records = Vec::with_capacity(config.num_trials);
    for trial in 0..config.num_trials {
        let (candidate, outcome) = run_trial(sim, config, rng)?;
        let label = outcome.label();
        debug!(
            trial,
            success = label.is_success(),
            object_z = outcome.object_height,
            "Grasp trial finished"
        );
        records.push(GraspRecord::from_pose(&candidate, label));
    }

    let successes = records.iter().filter(|r| r.label.is_success()).count();
    #[allow(clippy::cast_precision_loss)]
    let success_ratio = if records.is_empty() {
        0.0
    } else {
        successes as f64 / records.len() as f64
    };
    info!(
        trials = records.len(),
        successes,
        success_ratio,
        "Grasp dataset collected"
    );

    Ok(records)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use grasp_types::GraspLabel;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Succeeds whenever the approach stays within `reach` of the object.
    struct ReachSimulator {
        reach: f64,
        resets: usize,
        executed: usize,
    }

    impl GraspSimulator for ReachSimulator {
        fn reset(&mut self) -> Result<()> {
            self.resets += 1;
            Ok(())
        }

        fn execute(&mut self, plan: &ApproachPlan) -> Result<GraspOutcome> {
            self.executed += 1;
            let offset = plan.approach.pose.position - plan.object.center();
            let height = if offset.norm() < self.reach { 0.25 } else { 0.05 };
            Ok(GraspOutcome::new(height))
        }
    }

    struct BrokenSimulator;

    impl GraspSimulator for BrokenSimulator {
        fn reset(&mut self) -> Result<()> {
            Err(HarnessError::simulator("disconnected"))
        }

        fn execute(&mut self, _plan: &ApproachPlan) -> Result<GraspOutcome> {
            unreachable!("reset always fails")
        }
    }

    #[test]
    fn test_collects_one_record_per_trial() {
        let mut sim = ReachSimulator {
            reach: 0.11,
            resets: 0,
            executed: 0,
        };
        let config = CollectionConfig::default().with_num_trials(40);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let records = collect_dataset(&mut sim, &config, &mut rng).unwrap();

        assert_eq!(records.len(), 40);
        assert_eq!(sim.resets, 40);
        assert_eq!(sim.executed, 40);
        assert!(records.iter().all(|r| r.z >= config.sampling.z_min()));
    }

    #[test]
    fn test_labels_follow_outcome() {
        let mut always = ReachSimulator {
            reach: f64::INFINITY,
            resets: 0,
            executed: 0,
        };
        let config = CollectionConfig::default().with_num_trials(5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let records = collect_dataset(&mut always, &config, &mut rng).unwrap();
        assert!(records.iter().all(|r| r.label == GraspLabel::Success));

        let mut never = ReachSimulator {
            reach: 0.0,
            resets: 0,
            executed: 0,
        };
        let records = collect_dataset(&mut never, &config, &mut rng).unwrap();
        assert!(records.iter().all(|r| r.label == GraspLabel::Failure));
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let config = CollectionConfig::default().with_num_trials(10);
        let mut sim = ReachSimulator {
            reach: 0.11,
            resets: 0,
            executed: 0,
        };

        let a = collect_dataset(&mut sim, &config, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        let b = collect_dataset(&mut sim, &config, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulator_error_propagates() {
        let config = CollectionConfig::default().with_num_trials(3);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err = collect_dataset(&mut BrokenSimulator, &config, &mut rng).unwrap_err();
        assert!(matches!(err, HarnessError::Simulator(_)));
    }

    #[test]
    fn test_invalid_sampling_rejected_before_reset() {
        let config = CollectionConfig::default()
            .with_sampling(SamplingConfig::default().with_radius(-1.0));
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err = collect_dataset(&mut BrokenSimulator, &config, &mut rng).unwrap_err();
        assert!(matches!(err, HarnessError::Grasp(_)));
    }

    #[test]
    fn test_zero_trials() {
        let config = CollectionConfig::default().with_num_trials(0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let records = collect_dataset(&mut BrokenSimulator, &config, &mut rng).unwrap();
        assert!(records.is_empty());
    }
}
