//! Dataset summary command.

use std::path::Path;

use anyhow::{Context, Result};
use grasp_dataset::{DatasetSummary, GraspDataset};
use tracing::warn;

/// Load `dataset` and render its summary.
pub fn run(dataset: &Path, label: &str) -> Result<String> {
    let table = GraspDataset::from_csv(dataset, label, None)
        .with_context(|| format!("Failed to load dataset {}", dataset.display()))?;

    let summary = DatasetSummary::from_dataset(&table);
    if let Some(message) = class_warning(&summary) {
        warn!(
            successes = summary.successes,
            failures = summary.failures,
            "{message}"
        );
    }

    Ok(summary.to_report())
}

fn class_warning(summary: &DatasetSummary) -> Option<&'static str> {
    if summary.is_empty() {
        Some("Dataset has no rows")
    } else if !summary.has_both_classes() {
        Some("Dataset contains a single class")
    } else {
        None
    }
}
