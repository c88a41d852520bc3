//! Scoring a classifier against simulated or recorded outcomes.

use grasp_dataset::GraspRecord;
use grasp_types::{GraspLabel, Pose};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classifier::GraspClassifier;
use crate::error::{HarnessError, Result};
use crate::metrics::{ClassificationReport, ConfusionMatrix};
use crate::simulator::{CollectionConfig, GraspSimulator, run_trial};

/// One evaluated candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Sampled candidate pose.
    pub pose: Pose,
    /// Classifier output.
    pub predicted: GraspLabel,
    /// Simulated outcome.
    pub actual: GraspLabel,
}

impl TrialResult {
    /// Returns true if the prediction matched the outcome.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }
}

/// Outcome of [`evaluate_in_simulation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Per-trial results, in trial order.
    pub trials: Vec<TrialResult>,
    /// Matching predictions over trials.
    pub accuracy: f64,
    /// Full per-class breakdown.
    pub report: ClassificationReport,
}

impl EvaluationReport {
    /// Build from trial results.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Empty`] if there are no trials.
    pub fn from_trials(trials: Vec<TrialResult>) -> Result<Self> {
        let mut confusion = ConfusionMatrix::default();
        for t in &trials {
            confusion.add(t.actual, t.predicted);
        }
        if confusion.total() == 0 {
            return Err(HarnessError::Empty);
        }

        Ok(Self {
            accuracy: confusion.accuracy(),
            report: ClassificationReport::from_confusion(confusion),
            trials,
        })
    }

    /// Number of matching predictions.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.report.confusion.correct()
    }
}

/// Sample fresh candidates, predict each, then simulate it and compare.
///
/// # Errors
///
/// [`HarnessError::Empty`] when `config.num_trials` is zero, otherwise the
/// first configuration, sampling, simulator or classifier error.
pub fn evaluate_in_simulation<S, C, R>(
    sim: &mut S,
    classifier: &C,
    config: &CollectionConfig,
    rng: &mut R,
) -> Result<EvaluationReport>
where
    S: GraspSimulator + ?Sized,
    C: GraspClassifier + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;
    if config.num_trials == 0 {
        return Err(HarnessError::Empty);
    }
    info!(
        gripper = %config.gripper,
        object = %config.object,
        trials = config.num_trials,
        "Evaluating classifier in simulation"
    );

    let mut trials = Vec::with_capacity(config.num_trials);
    for trial in 0..config.num_trials {
        let (pose, outcome) = run_trial(sim, config, rng)?;
        let predicted = classifier.predict(&pose.to_features())?;
        let result = TrialResult {
            pose,
            predicted,
            actual: outcome.label(),
        };
        debug!(
            trial,
            predicted = %result.predicted,
            actual = %result.actual,
            correct = result.is_correct(),
            "Evaluation trial"
        );
        trials.push(result);
    }

    let report = EvaluationReport::from_trials(trials)?;
    info!(
        correct = report.correct(),
        trials = report.trials.len(),
        accuracy = report.accuracy,
        "Evaluation finished"
    );
    Ok(report)
}

/// Score a classifier on recorded attempts, e.g. a validation split.
///
/// # Errors
///
/// [`HarnessError::Empty`] if `records` is empty, or the first classifier
/// error.
pub fn score_records<C>(classifier: &C, records: &[GraspRecord]) -> Result<ClassificationReport>
where
    C: GraspClassifier + ?Sized,
{
    let features: Vec<[f64; 6]> = records.iter().map(GraspRecord::features).collect();
    let predicted = classifier.predict_batch(&features)?;
    let actual: Vec<GraspLabel> = records.iter().map(|r| r.label).collect();

    let report = ClassificationReport::from_labels(&actual, &predicted)?;
    info!(
        samples = records.len(),
        accuracy = report.accuracy,
        "Scored classifier on records"
    );
    Ok(report)
}
