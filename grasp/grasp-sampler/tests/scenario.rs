//! End-to-end checks of the cube-on-table sampling scenario.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use grasp_sampler::{generate_random_gripper_pose, sample_poses};
use grasp_types::{EulerAngles, Pose, SamplingConfig};
use nalgebra::{Point3, Vector3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn cube_scenario() -> SamplingConfig {
    SamplingConfig::around(Point3::new(0.0, 0.0, 0.05))
        .with_radius(0.3)
        .with_table_z(0.0)
        .with_clearance(0.12)
        .with_max_angle_deg(10.0)
        .with_max_roll_deg(180.0)
}

#[test]
fn scenario_constraints_hold_through_euler_output() {
    let config = cube_scenario();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..200 {
        let pose = generate_random_gripper_pose(&config, &mut rng).unwrap();

        // Consumers receive Euler angles; rebuild the orientation from them.
        let euler: EulerAngles = pose.euler_angles();
        let rebuilt = Pose::from_position_euler(pose.position, euler);
        let to_center = config.center - rebuilt.position;

        assert!(rebuilt.position.z >= 0.12);
        assert_relative_eq!(to_center.norm(), 0.3, epsilon = 1e-12);
        assert!(rebuilt.forward().angle(&to_center).to_degrees() <= 10.0 + 1e-4);
        assert_relative_eq!(rebuilt.forward(), pose.forward(), epsilon = 1e-6);
    }
}

#[test]
fn scenario_is_reproducible_for_fixed_seed() {
    let config = cube_scenario();

    let first = generate_random_gripper_pose(&config, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    let second = generate_random_gripper_pose(&config, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();

    assert_eq!(first.position, second.position);
    assert_eq!(first.rotation, second.rotation);
    assert_eq!(first.euler_angles(), second.euler_angles());
}

#[test]
fn scenario_gripper_points_downward_overall() {
    // Every sampled position is above the object center, so the approach
    // axis always has a downward component.
    let config = cube_scenario();
    let poses = sample_poses(&config, 500, 1).unwrap();

    for pose in &poses {
        assert!(pose.forward().dot(&-Vector3::z()) > 0.0);
    }
}

#[test]
fn scenario_roll_spans_full_range() {
    // With a 180 degree roll bound the gripper's local X axis should point
    // in every horizontal direction over enough samples.
    let config = cube_scenario()
        .with_clearance(0.34)
        .with_max_angle_deg(0.0);
    let poses = sample_poses(&config, 400, 2).unwrap();

    let mut octants = [false; 8];
    for pose in &poses {
        let right = pose.right();
        let angle = right.y.atan2(right.x) + std::f64::consts::PI;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bin = ((angle / (2.0 * std::f64::consts::PI) * 8.0) as usize).min(7);
        octants[bin] = true;
    }
    assert!(octants.iter().all(|&seen| seen));
}
