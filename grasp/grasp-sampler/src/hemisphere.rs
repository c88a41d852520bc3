//! Upper-hemisphere position sampling.

use std::f64::consts::PI;

use grasp_types::{GraspError, Point3, Result, Vector3};
use rand::Rng;
use tracing::{trace, warn};

/// Sample a point on the upper hemisphere of radius `radius` around `center`.
///
/// The polar angle is drawn as `theta = acos(u)` with `u ~ U[0, 1)` and the
/// azimuth as `phi ~ U[0, 2pi)`, so the height above the center is uniform on
/// `[0, radius)`. Recorded datasets depend on this exact draw sequence; keep
/// it when changing the sampler.
///
/// When `z_min` is given, draws below it are rejected and redrawn.
///
/// # Errors
///
/// - [`GraspError::Unsatisfiable`] immediately when `z_min` lies above the
///   top of the hemisphere.
/// - [`GraspError::AttemptsExhausted`] when none of `max_attempts` draws was
///   accepted.
///
/// # Example
///
/// ```
/// use grasp_sampler::sample_point_on_upper_hemisphere;
/// use nalgebra::Point3;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let center = Point3::new(0.0, 0.0, 0.05);
/// let p = sample_point_on_upper_hemisphere(&center, 0.3, Some(0.12), 1000, &mut rng).unwrap();
///
/// assert!(p.z >= 0.12);
/// assert!(((p - center).norm() - 0.3).abs() < 1e-12);
/// ```
pub fn sample_point_on_upper_hemisphere<R: Rng + ?Sized>(
    center: &Point3<f64>,
    radius: f64,
    z_min: Option<f64>,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Point3<f64>> {
    debug_assert!(radius > 0.0, "hemisphere radius must be positive");

    let max_z = center.z + radius;
    if let Some(z_min) = z_min {
        if z_min > max_z {
            warn!(z_min, max_z, "Height constraint above hemisphere apex");
            return Err(GraspError::unsatisfiable(z_min, max_z));
        }
    }

    for attempt in 0..max_attempts {
        let u: f64 = rng.gen();
        let theta = u.acos();
        let phi = 2.0 * PI * rng.gen::<f64>();

        let offset = Vector3::new(
            radius * theta.sin() * phi.cos(),
            radius * theta.sin() * phi.sin(),
            radius * theta.cos(),
        );
        let point = center + offset;

        match z_min {
            Some(z_min) if point.z < z_min => {
                trace!(attempt, z = point.z, z_min, "Rejected hemisphere sample");
            }
            _ => return Ok(point),
        }
    }

    warn!(
        z_min = ?z_min,
        max_z,
        attempts = max_attempts,
        "Hemisphere sampling exhausted its attempt budget"
    );
    Err(GraspError::attempts_exhausted(z_min, max_attempts))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_points_lie_on_upper_hemisphere() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let center = Point3::new(0.2, -0.1, 0.05);

        for _ in 0..500 {
            let p = sample_point_on_upper_hemisphere(&center, 0.3, None, 1, &mut rng).unwrap();
            assert_relative_eq!((p - center).norm(), 0.3, epsilon = 1e-12);
            assert!(p.z >= center.z - 1e-12);
        }
    }

    #[test]
    fn test_height_constraint_respected() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let center = Point3::new(0.0, 0.0, 0.05);

        for _ in 0..500 {
            let p =
                sample_point_on_upper_hemisphere(&center, 0.3, Some(0.3), 10_000, &mut rng).unwrap();
            assert!(p.z >= 0.3);
        }
    }

    #[test]
    fn test_unreachable_height_fails_fast() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let center = Point3::new(0.0, 0.0, 0.05);

        let err =
            sample_point_on_upper_hemisphere(&center, 0.3, Some(0.5), 10_000, &mut rng).unwrap_err();
        match err {
            GraspError::Unsatisfiable { z_min, max_z } => {
                assert_relative_eq!(z_min, 0.5);
                assert_relative_eq!(max_z, 0.35);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_attempt_budget_exhaustion() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let center = Point3::origin();

        // Reachable only at the exact apex, which u in [0, 1) never hits.
        let err =
            sample_point_on_upper_hemisphere(&center, 1.0, Some(1.0), 50, &mut rng).unwrap_err();
        assert_eq!(err, GraspError::attempts_exhausted(Some(1.0), 50));
        assert!(!err.to_string().contains("reachable"));
    }

    #[test]
    fn test_empty_budget_without_constraint() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let err =
            sample_point_on_upper_hemisphere(&Point3::origin(), 1.0, None, 0, &mut rng).unwrap_err();

        assert_eq!(err, GraspError::attempts_exhausted(None, 0));
        assert!(!err.to_string().contains("inf"));
    }

    #[test]
    fn test_polar_angle_distribution_is_uniform_in_cosine() {
        // cos(theta) = u, so height above the center is U[0, r):
        // mean r / 2, variance r^2 / 12. A uniform-in-theta draw would
        // give a mean of r * 2 / pi instead.
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let center = Point3::origin();
        let n = 20_000;
        let heights: Vec<f64> = (0..n)
            .map(|_| {
                sample_point_on_upper_hemisphere(&center, 1.0, None, 1, &mut rng)
                    .unwrap()
                    .z
            })
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let nf = n as f64;
        let mean = heights.iter().sum::<f64>() / nf;
        let var = heights.iter().map(|h| (h - mean).powi(2)).sum::<f64>() / nf;

        assert!((mean - 0.5).abs() < 0.01, "mean height {mean}");
        assert!((var - 1.0 / 12.0).abs() < 0.005, "height variance {var}");
    }

    #[test]
    fn test_seeded_reproducibility() {
        let center = Point3::new(0.0, 0.0, 0.05);
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..10 {
            let pa = sample_point_on_upper_hemisphere(&center, 0.3, Some(0.12), 100, &mut a).unwrap();
            let pb = sample_point_on_upper_hemisphere(&center, 0.3, Some(0.12), 100, &mut b).unwrap();
            assert_eq!(pa, pb);
        }
    }
}
