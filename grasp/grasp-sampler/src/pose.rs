//! Candidate gripper pose generation.

use grasp_types::{Pose, Result, SamplingConfig};
use rand::Rng;
use tracing::trace;

use crate::hemisphere::sample_point_on_upper_hemisphere;
use crate::orientation::orientation_from_forward_and_roll;
use crate::perturb::perturb_direction;

/// Generate one random gripper pose around `config.center`.
///
/// 1. Position on the upper hemisphere, at least `table_z + min_clearance` high.
/// 2. Ideal approach axis from the position toward the center.
/// 3. Approach axis perturbed within a cone of `max_angle_deg`.
/// 4. Random roll of up to `max_roll_deg` about the approach axis.
///
/// The gripper's local +Z axis is the approach axis ([`Pose::forward`]).
/// Output depends only on `config` and the state of `rng`.
///
/// # Errors
///
/// - [`GraspError::InvalidConfig`](grasp_types::GraspError::InvalidConfig)
///   if `config` fails validation.
/// - [`GraspError::Unsatisfiable`](grasp_types::GraspError::Unsatisfiable)
///   if no hemisphere point clears the table.
/// - [`GraspError::AttemptsExhausted`](grasp_types::GraspError::AttemptsExhausted)
///   if `config.max_attempts` draws were all rejected.
///
/// # Example
///
/// ```
/// use grasp_sampler::generate_random_gripper_pose;
/// use grasp_types::SamplingConfig;
/// use nalgebra::Point3;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let config = SamplingConfig::around(Point3::new(0.0, 0.0, 0.05));
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
///
/// let pose = generate_random_gripper_pose(&config, &mut rng).unwrap();
/// assert!(pose.position.z >= config.z_min());
///
/// let to_center = config.center - pose.position;
/// assert!(pose.forward().angle(&to_center) <= config.max_angle_rad() + 1e-9);
/// ```
pub fn generate_random_gripper_pose<R: Rng + ?Sized>(
    config: &SamplingConfig,
    rng: &mut R,
) -> Result<Pose> {
    config.validate()?;

    let position = sample_point_on_upper_hemisphere(
        &config.center,
        config.radius,
        Some(config.z_min()),
        config.max_attempts,
        rng,
    )?;

    let ideal_forward = config.center - position;
    let forward = perturb_direction(&ideal_forward, config.max_angle_rad(), rng);
    let rotation = orientation_from_forward_and_roll(&forward, config.max_roll_rad(), rng);

    let pose = Pose::new(position, rotation);
    trace!(
        x = position.x,
        y = position.y,
        z = position.z,
        deviation_deg = forward.angle(&ideal_forward).to_degrees(),
        "Sampled gripper pose"
    );
    Ok(pose)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use grasp_types::{GraspError, Point3, Vector3};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_chacha::ChaCha8Rng;

    fn scenario() -> SamplingConfig {
        SamplingConfig::around(Point3::new(0.0, 0.0, 0.05))
            .with_radius(0.3)
            .with_table_z(0.0)
            .with_clearance(0.12)
            .with_max_angle_deg(10.0)
            .with_max_roll_deg(180.0)
    }

    #[test]
    fn test_scenario_constraints() {
        let config = scenario();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        for _ in 0..1000 {
            let pose = generate_random_gripper_pose(&config, &mut rng).unwrap();
            let to_center = config.center - pose.position;

            assert!(pose.position.z >= 0.12);
            assert_relative_eq!(to_center.norm(), 0.3, epsilon = 1e-12);
            assert!(pose.forward().angle(&to_center) <= 10.0_f64.to_radians() + 1e-9);
            assert_relative_eq!(pose.rotation.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_seeded_determinism() {
        let config = scenario();
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let pa = generate_random_gripper_pose(&config, &mut a).unwrap();
            let pb = generate_random_gripper_pose(&config, &mut b).unwrap();
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = scenario();
        let pa = generate_random_gripper_pose(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        let pb = generate_random_gripper_pose(&config, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_ne!(pa.position, pb.position);
    }

    #[test]
    fn test_zero_cone_aims_at_center() {
        let config = scenario().with_max_angle_deg(0.0).with_max_roll_deg(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let pose = generate_random_gripper_pose(&config, &mut rng).unwrap();
        let ideal = (config.center - pose.position).normalize();
        assert_relative_eq!(pose.forward(), ideal, epsilon = 1e-12);
    }

    #[test]
    fn test_config_not_mutated() {
        let config = scenario();
        let before = config.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let _ = generate_random_gripper_pose(&config, &mut rng).unwrap();
        assert_eq!(config, before);
    }

    #[test]
    fn test_invalid_config_fails_before_sampling() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let config = scenario().with_radius(-1.0);
        let err = generate_random_gripper_pose(&config, &mut rng).unwrap_err();
        assert!(err.is_config_error());

        let config = scenario().with_max_angle_deg(200.0);
        assert!(generate_random_gripper_pose(&config, &mut rng).is_err());

        let config = scenario().with_clearance(-0.5);
        assert!(generate_random_gripper_pose(&config, &mut rng).is_err());
    }

    #[test]
    fn test_table_above_hemisphere_is_unsatisfiable() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let config = scenario().with_table_z(0.5);
        let err = generate_random_gripper_pose(&config, &mut rng).unwrap_err();
        assert!(matches!(err, GraspError::Unsatisfiable { .. }));
    }

    #[test]
    fn test_vertical_approach_from_apex_region() {
        // Clearance close to the apex forces near-vertical approaches, which
        // exercise the world-up fallback.
        let config = scenario()
            .with_clearance(0.349)
            .with_max_angle_deg(0.0)
            .with_max_roll_deg(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let pose = generate_random_gripper_pose(&config, &mut rng).unwrap();
        assert!(pose.is_finite());
        assert!(pose.forward().dot(&-Vector3::z()) > 0.99);
    }
}
