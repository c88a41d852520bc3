//! Grasp trial orchestration.
//!
//! Runs sampled candidate poses through a physics backend and scores trained
//! models against the outcomes. The physics engine and the model are not part
//! of this crate; they plug in through two traits:
//!
//! - [`GraspSimulator`] - Executes an [`ApproachPlan`] and reports the object
//!   height after the lift
//! - [`GraspClassifier`] - Predicts success from pose features
//!
//! # Workflows
//!
//! - [`collect_dataset`] - Sample, simulate and label `N` candidates
//! - [`evaluate_in_simulation`] - Predict, simulate and compare `N` candidates
//! - [`score_records`] - Compare predictions with recorded labels
//! - [`ClassificationReport`] - Per-class precision, recall and F1
//!
//! # Example
//!
//! ```
//! use grasp_harness::{
//!     ApproachPlan, CollectionConfig, GraspSimulator, Result, collect_dataset,
//! };
//! use grasp_types::GraspOutcome;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! /// Every grasp from above 0.2 m lifts the object.
//! struct HighIsGood;
//!
//! impl GraspSimulator for HighIsGood {
//!     fn reset(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn execute(&mut self, plan: &ApproachPlan) -> Result<GraspOutcome> {
//!         let high = plan.pre_grasp.pose.position.z > 0.2;
//!         Ok(GraspOutcome::new(if high { 0.3 } else { 0.05 }))
//!     }
//! }
//!
//! let config = CollectionConfig::default().with_num_trials(20);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let records = collect_dataset(&mut HighIsGood, &config, &mut rng).unwrap();
//!
//! assert_eq!(records.len(), 20);
//! assert!(records.iter().all(|r| r.label.is_success() == (r.z > 0.2)));
//! ```

#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod approach;
mod classifier;
mod error;
mod evaluate;
mod metrics;
mod simulator;

pub use approach::{
    APPROACH_FORCE, APPROACH_Z_MARGIN, ApproachPlan, DEFAULT_FORCE, LIFT_FORCE, LIFT_HEIGHT,
    TIMESTEP, Waypoint, approach_position,
};
pub use classifier::{GraspClassifier, MIN_DECISION_RANGE, proba_from_decision};
pub use error::{HarnessError, Result};
pub use evaluate::{EvaluationReport, TrialResult, evaluate_in_simulation, score_records};
pub use metrics::{ClassMetrics, ClassificationReport, ConfusionMatrix, REPORT_DIGITS};
pub use simulator::{
    CollectionConfig, DEFAULT_NUM_TRIALS, GraspSimulator, collect_dataset, run_trial,
};
