//! Collect, store, split and score with stand-in physics and model.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use grasp_dataset::{
    GraspDataset, GraspRecord, LABEL_COLUMN, SplitRatio, read_records, write_records,
};
use grasp_harness::{
    ApproachPlan, CollectionConfig, GraspClassifier, GraspSimulator, HarnessError, Result,
    collect_dataset, evaluate_in_simulation, score_records,
};
use grasp_types::{GraspLabel, GraspOutcome, GripperKind, TargetObject};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const GOOD_HEIGHT: f64 = 0.25;

/// Lifts the object whenever the candidate starts above `GOOD_HEIGHT`.
#[derive(Default)]
struct HeightSimulator {
    plans: Vec<ApproachPlan>,
}

impl GraspSimulator for HeightSimulator {
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    fn execute(&mut self, plan: &ApproachPlan) -> Result<GraspOutcome> {
        self.plans.push(plan.clone());
        let lifted = plan.pre_grasp.pose.position.z > GOOD_HEIGHT;
        Ok(GraspOutcome::new(if lifted { 0.28 } else { 0.05 }))
    }
}

/// Knows the simulator's rule exactly.
struct Oracle;

impl GraspClassifier for Oracle {
    fn predict(&self, features: &[f64; 6]) -> Result<GraspLabel> {
        Ok(GraspLabel::from(features[2] > GOOD_HEIGHT))
    }
}

/// Always predicts success.
struct Optimist;

impl GraspClassifier for Optimist {
    fn predict(&self, _features: &[f64; 6]) -> Result<GraspLabel> {
        Ok(GraspLabel::Success)
    }
}

struct Untrained;

impl GraspClassifier for Untrained {
    fn predict(&self, _features: &[f64; 6]) -> Result<GraspLabel> {
        Err(HarnessError::NotTrained)
    }
}

fn config() -> CollectionConfig {
    CollectionConfig::new(GripperKind::ThreeFinger, TargetObject::Cylinder).with_num_trials(200)
}

#[test]
fn collected_dataset_round_trips_through_csv_and_split() {
    let mut sim = HeightSimulator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let records = collect_dataset(&mut sim, &config(), &mut rng).unwrap();

    let successes = records.iter().filter(|r| r.label.is_success()).count();
    assert!(successes > 0 && successes < records.len());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cylinder_3f.csv");
    write_records(&path, &records).unwrap();

    let reloaded: Vec<GraspRecord> = read_records(&path).unwrap();
    assert_eq!(reloaded, records);

    let dataset = GraspDataset::from_csv(&path, LABEL_COLUMN, None).unwrap();
    let (train, val) = dataset.split(SplitRatio::EIGHTY_TWENTY, 42).unwrap();
    assert_eq!(train.len() + val.len(), records.len());

    let report = score_records(&Oracle, &val.records().unwrap()).unwrap();
    assert_eq!(report.accuracy, 1.0);
    assert_eq!(report.support(), val.len());
}

#[test]
fn plans_use_the_configured_rig() {
    let mut sim = HeightSimulator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    collect_dataset(&mut sim, &config().with_num_trials(5), &mut rng).unwrap();

    assert_eq!(sim.plans.len(), 5);
    for plan in &sim.plans {
        assert_eq!(plan.gripper, GripperKind::ThreeFinger);
        assert_eq!(plan.object, TargetObject::Cylinder);
        assert_eq!(plan.home, GripperKind::ThreeFinger.home_pose());
        assert_eq!(plan.approach.pose.rotation, plan.pre_grasp.pose.rotation);
    }
}

#[test]
fn oracle_scores_perfectly_in_simulation() {
    let mut sim = HeightSimulator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let eval = evaluate_in_simulation(&mut sim, &Oracle, &config(), &mut rng).unwrap();

    assert_eq!(eval.trials.len(), 200);
    assert_eq!(eval.accuracy, 1.0);
    assert!(eval.trials.iter().all(|t| t.is_correct()));
}

#[test]
fn optimist_accuracy_equals_success_ratio() {
    let mut sim = HeightSimulator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let eval = evaluate_in_simulation(&mut sim, &Optimist, &config(), &mut rng).unwrap();
    let successes = eval.trials.iter().filter(|t| t.actual.is_success()).count();

    assert_eq!(eval.correct(), successes);
    assert_eq!(eval.report.class(GraspLabel::Success).recall, 1.0);
    assert_eq!(eval.report.class(GraspLabel::Failure).recall, 0.0);
}

#[test]
fn evaluation_is_reproducible() {
    let run = |seed| {
        let mut sim = HeightSimulator::default();
        evaluate_in_simulation(&mut sim, &Oracle, &config(), &mut ChaCha8Rng::seed_from_u64(seed))
            .unwrap()
    };
    assert_eq!(run(9), run(9));
}

#[test]
fn evaluation_errors() {
    let mut sim = HeightSimulator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let err = evaluate_in_simulation(&mut sim, &Untrained, &config(), &mut rng).unwrap_err();
    assert!(matches!(err, HarnessError::NotTrained));

    let err = evaluate_in_simulation(&mut sim, &Oracle, &config().with_num_trials(0), &mut rng)
        .unwrap_err();
    assert!(matches!(err, HarnessError::Empty));

    assert!(matches!(score_records(&Oracle, &[]), Err(HarnessError::Empty)));
}

#[test]
fn evaluation_report_serializes() {
    let mut sim = HeightSimulator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let eval =
        evaluate_in_simulation(&mut sim, &Oracle, &config().with_num_trials(4), &mut rng).unwrap();

    let json = serde_json::to_string(&eval).unwrap();
    assert!(json.contains("\"accuracy\":1.0"));
}
