//! Error types for grasp-harness crate.

use grasp_dataset::DatasetError;
use grasp_types::GraspError;
use thiserror::Error;

/// Errors that can occur while running grasp trials or scoring them.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Pose sampling or configuration failed.
    #[error(transparent)]
    Grasp(#[from] GraspError),

    /// Dataset IO or processing failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// The physics backend reported a failure.
    #[error("simulator error: {0}")]
    Simulator(String),

    /// The classifier reported a failure.
    #[error("classifier error: {0}")]
    Classifier(String),

    /// The classifier was used before it was trained or loaded.
    #[error("classifier is not trained")]
    NotTrained,

    /// Paired inputs have different lengths.
    #[error("length mismatch: {expected} labels vs {actual} predictions")]
    LengthMismatch {
        /// Number of ground-truth labels.
        expected: usize,
        /// Number of predictions.
        actual: usize,
    },

    /// Nothing to evaluate.
    #[error("no samples to evaluate")]
    Empty,
}

impl HarnessError {
    /// Creates a simulator error.
    #[must_use]
    pub fn simulator(reason: impl Into<String>) -> Self {
        Self::Simulator(reason.into())
    }

    /// Creates a classifier error.
    #[must_use]
    pub fn classifier(reason: impl Into<String>) -> Self {
        Self::Classifier(reason.into())
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}

/// Result type for grasp-harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_simulator() {
        let err = HarnessError::simulator("world exploded");
        assert!(err.to_string().contains("world exploded"));
    }

    #[test]
    fn error_length_mismatch() {
        let err = HarnessError::length_mismatch(3, 2);
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn error_from_grasp_error() {
        let err: HarnessError = GraspError::invalid_config("radius").into();
        assert!(matches!(err, HarnessError::Grasp(_)));
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn error_from_dataset_error() {
        let err: HarnessError = DatasetError::EmptyDataset.into();
        assert!(matches!(err, HarnessError::Dataset(DatasetError::EmptyDataset)));
    }
}
