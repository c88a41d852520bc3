//! Classification report command.

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use grasp_dataset::GraspDataset;
use grasp_harness::ClassificationReport;

const NO_FEATURES: &[&str] = &[];

/// Compare the `prediction` column against the `label` column.
pub fn run(dataset: &Path, label: &str, prediction: &str) -> Result<String> {
    let load = |column: &str| {
        GraspDataset::from_csv(dataset, column, Some(NO_FEATURES))
            .with_context(|| format!("Failed to read column '{column}' of {}", dataset.display()))
    };
    let actual = load(label)?;
    let predicted = load(prediction)?;

    let report = ClassificationReport::from_labels(actual.labels(), predicted.labels())?;

    let mut out = String::new();
    writeln!(out, "Accuracy: {:.2}%", report.accuracy * 100.0)?;
    writeln!(out, "Classification report:")?;
    out.push_str(&report.summary());
    Ok(out)
}
