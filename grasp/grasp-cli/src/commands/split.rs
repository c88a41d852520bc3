//! Stratified train/validation split command.

use std::path::Path;

use anyhow::{Context, Result};
use grasp_dataset::{GraspDataset, SplitRatio};
use tracing::info;

/// Split `dataset` and write both halves.
///
/// Returns the number of training and validation rows.
pub fn run(
    dataset: &Path,
    label: &str,
    train_output: &Path,
    val_output: &Path,
    test_size: f64,
    seed: u64,
) -> Result<(usize, usize)> {
    let ratio = SplitRatio::from_test_size(test_size)?;
    let table = GraspDataset::from_csv(dataset, label, None)
        .with_context(|| format!("Failed to load dataset {}", dataset.display()))?;

    let (train, val) = table.split(ratio, seed)?;
    train
        .write_csv(train_output)
        .with_context(|| format!("Failed to write {}", train_output.display()))?;
    val.write_csv(val_output)
        .with_context(|| format!("Failed to write {}", val_output.display()))?;

    info!(
        train = train.len(),
        val = val.len(),
        train_output = %train_output.display(),
        val_output = %val_output.display(),
        "Dataset split written"
    );
    Ok((train.len(), val.len()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use grasp_dataset::LABEL_COLUMN;

    #[test]
    fn splits_into_two_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("grasps.csv");
        let mut text = String::from("x,y,z,roll,pitch,yaw,label\n");
        for i in 0..20 {
            text.push_str(&format!("{i},0,0.2,0,0,0,{}\n", i % 2));
        }
        std::fs::write(&input, text).unwrap();

        let train_path = dir.path().join("train.csv");
        let val_path = dir.path().join("val.csv");
        let (n_train, n_val) =
            run(&input, LABEL_COLUMN, &train_path, &val_path, 0.2, 42).unwrap();
        assert_eq!((n_train, n_val), (16, 4));

        let val = GraspDataset::from_csv(&val_path, LABEL_COLUMN, None).unwrap();
        assert_eq!(val.len(), 4);
        assert_eq!(val.labels().iter().filter(|l| l.is_success()).count(), 2);
        assert!(val.has_pose_schema());
    }

    #[test]
    fn keeps_custom_label_column() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("grasps.csv");
        let mut text = String::from("x,z,success\n");
        for i in 0..10 {
            text.push_str(&format!("{i},0.2,{}\n", i % 2));
        }
        std::fs::write(&input, text).unwrap();

        let train_path = dir.path().join("train.csv");
        let val_path = dir.path().join("val.csv");
        run(&input, "success", &train_path, &val_path, 0.2, 7).unwrap();

        for path in [&train_path, &val_path] {
            let header = std::fs::read_to_string(path).unwrap();
            assert_eq!(header.lines().next(), Some("x,z,success"));
            assert!(GraspDataset::from_csv(path, "success", None).is_ok());
        }
    }

    #[test]
    fn rejects_bad_test_size() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("x.csv");
        assert!(run(&p, LABEL_COLUMN, &p, &p, 1.0, 0).is_err());
    }
}
