//! Trained-model seam.

use grasp_types::GraspLabel;

use crate::error::Result;

/// Decision range below which scores carry no ranking information.
pub const MIN_DECISION_RANGE: f64 = 1e-8;

/// A trained grasp success predictor.
///
/// Features are `[x, y, z, roll, pitch, yaw]` of the candidate pose, the same
/// order as [`GraspRecord::features`](grasp_dataset::GraspRecord::features).
/// Implementations should return [`HarnessError::NotTrained`](crate::HarnessError::NotTrained)
/// when no model is loaded.
pub trait GraspClassifier {
    /// Predict the grasp outcome.
    fn predict(&self, features: &[f64; 6]) -> Result<GraspLabel>;

    /// Probability of success in `[0, 1]`.
    ///
    /// Defaults to a hard `0.0` / `1.0` from [`predict`](Self::predict).
    fn predict_proba(&self, features: &[f64; 6]) -> Result<f64> {
        Ok(if self.predict(features)?.is_success() {
            1.0
        } else {
            0.0
        })
    }

    /// Predict many rows.
    fn predict_batch(&self, rows: &[[f64; 6]]) -> Result<Vec<GraspLabel>> {
        rows.iter().map(|row| self.predict(row)).collect()
    }
}

/// Class probabilities `[failure, success]` from raw decision scores.
///
/// For models without calibrated probabilities: scores are min-max scaled
/// over the batch, so the lowest score maps to `[1, 0]` and the highest to
/// `[0, 1]`. If all scores are within [`MIN_DECISION_RANGE`] of each other,
/// every row is `[0.5, 0.5]`.
///
/// # Example
///
/// ```
/// use grasp_harness::proba_from_decision;
///
/// let proba = proba_from_decision(&[-2.0, 0.0, 2.0]);
/// assert_eq!(proba, vec![[1.0, 0.0], [0.5, 0.5], [0.0, 1.0]]);
///
/// assert_eq!(proba_from_decision(&[3.0, 3.0]), vec![[0.5, 0.5]; 2]);
/// ```
#[must_use]
pub fn proba_from_decision(decision: &[f64]) -> Vec<[f64; 2]> {
    let (min, max) = decision
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| {
            (lo.min(d), hi.max(d))
        });

    if decision.is_empty() || max - min < MIN_DECISION_RANGE {
        return vec![[0.5, 0.5]; decision.len()];
    }

    decision
        .iter()
        .map(|&d| {
            let success = (d - min) / (max - min);
            [1.0 - success, success]
        })
        .collect()
}
