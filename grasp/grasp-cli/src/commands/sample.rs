//! Candidate pose sampling command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grasp_dataset::{PoseRecord, write_records};
use grasp_harness::ApproachPlan;
use grasp_sampler::sample_poses;
use grasp_types::{GripperKind, SamplingConfig, TargetObject};
use serde_json::Value;
use tracing::info;

/// Arguments of `grasp sample`.
pub struct SampleArgs {
    pub gripper: GripperKind,
    pub object: TargetObject,
    pub num: usize,
    pub output: PathBuf,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub plans: Option<PathBuf>,
}

/// Sampling bounds for `object`, overridden by the fields present in `path`.
///
/// A file without `center` keeps the object's center.
pub fn load_sampling_config(object: TargetObject, path: Option<&Path>) -> Result<SamplingConfig> {
    let Some(path) = path else {
        return Ok(object.sampling_config());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;

    if let Some(fields) = value.as_object_mut() {
        if !fields.contains_key("center") {
            fields.insert("center".to_owned(), serde_json::to_value(object.center())?);
        }
    }

    let config: SamplingConfig = serde_json::from_value(value)
        .with_context(|| format!("Invalid sampling config in {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Run the command.
pub fn run(args: &SampleArgs) -> Result<Vec<PoseRecord>> {
    let config = load_sampling_config(args.object, args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(rand::random);

    info!(
        gripper = %args.gripper,
        object = %args.object,
        num = args.num,
        seed,
        "Sampling candidate grasps"
    );

    let poses = sample_poses(&config, args.num, seed)?;
    let records: Vec<PoseRecord> = poses.iter().map(PoseRecord::from_pose).collect();
    write_records(&args.output, &records)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if let Some(plans_path) = &args.plans {
        let plans: Vec<ApproachPlan> = poses
            .iter()
            .map(|&pose| ApproachPlan::new(pose, args.gripper, args.object))
            .collect();
        fs::write(plans_path, serde_json::to_string_pretty(&plans)?)
            .with_context(|| format!("Failed to write {}", plans_path.display()))?;
        info!(path = %plans_path.display(), "Wrote approach plans");
    }

    info!(path = %args.output.display(), count = records.len(), "Candidates written");
    Ok(records)
}
