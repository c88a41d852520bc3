//! Dataset summary and statistics.

use serde::{Deserialize, Serialize};

use crate::dataset::GraspDataset;
use crate::record::GraspRecord;

/// Largest distance of the success ratio from one half that still counts as
/// balanced in [`DatasetSummary::to_report`].
pub const BALANCE_TOLERANCE: f64 = 0.1;

/// Range and mean of one feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    /// Column name.
    pub name: String,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
}

/// Summary statistics for a grasp dataset.
///
/// # Example
///
/// ```
/// use grasp_dataset::{DatasetSummary, GraspRecord};
/// use grasp_types::{GraspLabel, Pose};
///
/// let records = vec![
///     GraspRecord::from_pose(&Pose::identity(), GraspLabel::Success),
///     GraspRecord::from_pose(&Pose::identity(), GraspLabel::Failure),
/// ];
///
/// let summary = DatasetSummary::from_records(&records);
/// assert_eq!(summary.total_samples, 2);
/// assert_eq!(summary.successes, 1);
/// assert!((summary.success_ratio - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Total number of rows.
    pub total_samples: usize,

    /// Rows labeled success.
    pub successes: usize,

    /// Rows labeled failure.
    pub failures: usize,

    /// Success ratio (0 to 1).
    pub success_ratio: f64,

    /// Per-column statistics, in feature order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FeatureStats>,
}

impl DatasetSummary {
    /// Summarizes a loaded dataset.
    #[must_use]
    pub fn from_dataset(dataset: &GraspDataset) -> Self {
        if dataset.is_empty() {
            return Self::default();
        }

        let total_samples = dataset.len();
        let successes = dataset.labels().iter().filter(|l| l.is_success()).count();

        let features = dataset
            .feature_names()
            .iter()
            .enumerate()
            .map(|(col, name)| column_stats(name, dataset.features().iter().map(|row| row[col])))
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let success_ratio = successes as f64 / total_samples as f64;

        Self {
            total_samples,
            successes,
            failures: total_samples - successes,
            success_ratio,
            features,
        }
    }

    /// Summarizes pose-schema records.
    #[must_use]
    pub fn from_records(records: &[GraspRecord]) -> Self {
        Self::from_dataset(&GraspDataset::from_records(records))
    }

    /// Returns true if the dataset is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_samples == 0
    }

    /// Returns true if both labels occur.
    #[must_use]
    pub const fn has_both_classes(&self) -> bool {
        self.successes > 0 && self.failures > 0
    }

    /// Checks if the success ratio is within `tolerance` of one half.
    ///
    /// [`to_report`](Self::to_report) uses [`BALANCE_TOLERANCE`].
    #[must_use]
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        (self.success_ratio - 0.5).abs() <= tolerance
    }

    /// Returns a human-readable summary string.
    #[must_use]
    #[allow(clippy::let_underscore_must_use)] // String::write_fmt is infallible
    pub fn to_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        let _ = writeln!(report, "Dataset Summary");
        let _ = writeln!(report, "===============");
        let _ = writeln!(report, "Total samples: {}", self.total_samples);
        let _ = writeln!(
            report,
            "Successes: {} ({:.1}%)",
            self.successes,
            self.success_ratio * 100.0
        );
        let _ = writeln!(
            report,
            "Failures: {} ({:.1}%)",
            self.failures,
            if self.is_empty() {
                0.0
            } else {
                (1.0 - self.success_ratio) * 100.0
            }
        );

        if !self.is_empty() {
            let balance = if self.is_balanced(BALANCE_TOLERANCE) {
                "balanced"
            } else {
                "imbalanced"
            };
            let _ = writeln!(report, "Classes: {balance}");
        }

        if !self.features.is_empty() {
            let _ = writeln!(
                report,
                "\n{:<10} {:>10} {:>10} {:>10}",
                "feature", "min", "max", "mean"
            );
            for f in &self.features {
                let _ = writeln!(
                    report,
                    "{:<10} {:>10.4} {:>10.4} {:>10.4}",
                    f.name, f.min, f.max, f.mean
                );
            }
        }

        report
    }
}

fn column_stats(name: &str, values: impl Iterator<Item = f64>) -> FeatureStats {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;

    for v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
        count += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = if count > 0 { sum / count as f64 } else { 0.0 };

    FeatureStats {
        name: name.to_owned(),
        min,
        max,
        mean,
    }
}
