//! Binary classification metrics.

use std::fmt;

use grasp_types::GraspLabel;
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

/// Digits printed by [`ClassificationReport::summary`].
pub const REPORT_DIGITS: usize = 4;

fn check_pairs(actual: &[GraspLabel], predicted: &[GraspLabel]) -> Result<()> {
    if actual.len() != predicted.len() {
        return Err(HarnessError::length_mismatch(actual.len(), predicted.len()));
    }
    if actual.is_empty() {
        return Err(HarnessError::Empty);
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}

/// Success-positive confusion matrix.
///
/// # Example
///
/// ```
/// use grasp_harness::ConfusionMatrix;
/// use grasp_types::GraspLabel::{Failure, Success};
///
/// let cm = ConfusionMatrix::from_labels(
///     &[Success, Success, Failure, Failure],
///     &[Success, Failure, Failure, Success],
/// )
/// .unwrap();
///
/// assert_eq!(cm.true_positives, 1);
/// assert_eq!(cm.false_negatives, 1);
/// assert!((cm.accuracy() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Predicted success, was success.
    pub true_positives: usize,
    /// Predicted failure, was failure.
    pub true_negatives: usize,
    /// Predicted success, was failure.
    pub false_positives: usize,
    /// Predicted failure, was success.
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    /// Count label pairs.
    ///
    /// # Errors
    ///
    /// [`HarnessError::LengthMismatch`] if the slices differ in length,
    /// [`HarnessError::Empty`] if both are empty.
    pub fn from_labels(actual: &[GraspLabel], predicted: &[GraspLabel]) -> Result<Self> {
        check_pairs(actual, predicted)?;

        let mut cm = Self::default();
        for (&a, &p) in actual.iter().zip(predicted) {
            cm.add(a, p);
        }
        Ok(cm)
    }

    /// Record one pair.
    pub fn add(&mut self, actual: GraspLabel, predicted: GraspLabel) {
        match (actual, predicted) {
            (GraspLabel::Success, GraspLabel::Success) => self.true_positives += 1,
            (GraspLabel::Failure, GraspLabel::Failure) => self.true_negatives += 1,
            (GraspLabel::Failure, GraspLabel::Success) => self.false_positives += 1,
            (GraspLabel::Success, GraspLabel::Failure) => self.false_negatives += 1,
        }
    }

    /// Number of pairs.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    /// Number of matching pairs.
    #[must_use]
    pub const fn correct(&self) -> usize {
        self.true_positives + self.true_negatives
    }

    /// Fraction of matching pairs.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total())
    }

    /// Metrics with `label` treated as the positive class.
    #[must_use]
    pub fn class_metrics(&self, label: GraspLabel) -> ClassMetrics {
        let (hit, false_alarm, miss) = match label {
            GraspLabel::Success => (
                self.true_positives,
                self.false_positives,
                self.false_negatives,
            ),
            GraspLabel::Failure => (
                self.true_negatives,
                self.false_negatives,
                self.false_positives,
            ),
        };

        let precision = ratio(hit, hit + false_alarm);
        let recall = ratio(hit, hit + miss);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        ClassMetrics {
            precision,
            recall,
            f1,
            support: hit + miss,
        }
    }
}

/// Precision, recall and F1 for one class.
///
/// Undefined ratios (no predictions or no support) are reported as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Correct among predicted.
    pub precision: f64,
    /// Found among actual.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// Actual occurrences of the class.
    pub support: usize,
}

/// Per-class metrics with accuracy and averages.
///
/// # Example
///
/// ```
/// use grasp_harness::ClassificationReport;
/// use grasp_types::GraspLabel::{Failure, Success};
///
/// let report = ClassificationReport::from_labels(
///     &[Success, Failure, Success, Failure],
///     &[Success, Failure, Failure, Failure],
/// )
/// .unwrap();
///
/// assert!((report.accuracy - 0.75).abs() < 1e-12);
/// assert!((report.class(Success).recall - 0.5).abs() < 1e-12);
/// println!("{}", report.summary());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Metrics indexed by [`GraspLabel::as_index`].
    pub classes: [ClassMetrics; 2],
    /// Fraction of matching pairs.
    pub accuracy: f64,
    /// Unweighted mean over classes.
    pub macro_avg: ClassMetrics,
    /// Support-weighted mean over classes.
    pub weighted_avg: ClassMetrics,
    /// Underlying counts.
    pub confusion: ConfusionMatrix,
}

impl ClassificationReport {
    /// Build the report from label pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ConfusionMatrix::from_labels`].
    pub fn from_labels(actual: &[GraspLabel], predicted: &[GraspLabel]) -> Result<Self> {
        ConfusionMatrix::from_labels(actual, predicted).map(Self::from_confusion)
    }

    /// Build the report from counts.
    #[must_use]
    pub fn from_confusion(confusion: ConfusionMatrix) -> Self {
        let classes = GraspLabel::ALL.map(|label| confusion.class_metrics(label));
        let total = confusion.total();

        let average = |weight: &dyn Fn(&ClassMetrics) -> f64| {
            let norm: f64 = classes.iter().map(weight).sum();
            let mean = |field: fn(&ClassMetrics) -> f64| {
                if norm > 0.0 {
                    classes.iter().map(|c| field(c) * weight(c)).sum::<f64>() / norm
                } else {
                    0.0
                }
            };
            ClassMetrics {
                precision: mean(|c| c.precision),
                recall: mean(|c| c.recall),
                f1: mean(|c| c.f1),
                support: total,
            }
        };

        #[allow(clippy::cast_precision_loss)]
        let weighted_avg = average(&|c| c.support as f64);
        let macro_avg = average(&|_| 1.0);

        Self {
            classes,
            accuracy: confusion.accuracy(),
            macro_avg,
            weighted_avg,
            confusion,
        }
    }

    /// Metrics of one class.
    #[must_use]
    pub const fn class(&self, label: GraspLabel) -> &ClassMetrics {
        &self.classes[label.as_index()]
    }

    /// Number of scored pairs.
    #[must_use]
    pub const fn support(&self) -> usize {
        self.confusion.total()
    }

    /// Plain-text table, one row per class plus accuracy and averages.
    ///
    /// ```text
    ///               precision    recall  f1-score   support
    ///
    ///            0     1.0000    0.5000    0.6667         2
    ///            1     0.6667    1.0000    0.8000         2
    ///
    ///     accuracy                         0.7500         4
    ///    macro avg     0.8333    0.7500    0.7333         4
    /// weighted avg     0.8333    0.7500    0.7333         4
    /// ```
    #[must_use]
    #[allow(clippy::let_underscore_must_use)] // String::write_fmt is infallible
    pub fn summary(&self) -> String {
        use std::fmt::Write;

        const WIDTH: usize = 12;
        const D: usize = REPORT_DIGITS;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>WIDTH$}  {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        );
        let _ = writeln!(out);

        let row = |out: &mut String, name: &str, m: &ClassMetrics| {
            let _ = writeln!(
                out,
                "{name:>WIDTH$}  {:>9.D$} {:>9.D$} {:>9.D$} {:>9}",
                m.precision, m.recall, m.f1, m.support
            );
        };

        for label in GraspLabel::ALL {
            row(&mut out, &label.to_string(), self.class(label));
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:>WIDTH$}  {:>9} {:>9} {:>9.D$} {:>9}",
            "accuracy",
            "",
            "",
            self.accuracy,
            self.support()
        );
        row(&mut out, "macro avg", &self.macro_avg);
        row(&mut out, "weighted avg", &self.weighted_avg);

        out
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
