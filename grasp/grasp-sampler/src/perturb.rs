//! Cone-bounded perturbation of a direction vector.

use std::f64::consts::PI;

use grasp_types::Vector3;
use rand::Rng;
use rand_distr::StandardNormal;

/// Helper vectors closer than this (in |cos|) to the direction are replaced.
const PARALLEL_COS: f64 = 0.99;

/// Below this norm a fallback helper vector is considered degenerate.
const DEGENERATE_NORM: f64 = 1e-8;

/// Rotate `direction` by a random angle in `[0, max_angle_rad)` about a random
/// axis perpendicular to it.
///
/// The result is a unit vector whose angle to `normalize(direction)` is at
/// most `max_angle_rad`; the azimuth around `direction` is uniform.
///
/// A Gaussian helper vector spans the perpendicular plane. When it is nearly
/// parallel to `direction` it is replaced by `(d.y, -d.x, 0)`, or by
/// `(0, 1, 0)` when `direction` is along the z-axis.
///
/// `direction` must be non-zero.
///
/// # Example
///
/// ```
/// use grasp_sampler::perturb_direction;
/// use nalgebra::Vector3;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let d = Vector3::new(0.0, 0.0, -2.0);
/// let max_angle = 10.0_f64.to_radians();
///
/// let p = perturb_direction(&d, max_angle, &mut rng);
/// assert!((p.norm() - 1.0).abs() < 1e-12);
/// assert!(p.angle(&d) <= max_angle + 1e-12);
/// ```
pub fn perturb_direction<R: Rng + ?Sized>(
    direction: &Vector3<f64>,
    max_angle_rad: f64,
    rng: &mut R,
) -> Vector3<f64> {
    debug_assert!(direction.norm() > 0.0, "direction must be non-zero");
    let d = direction.normalize();

    let helper = Vector3::<f64>::from_fn(|_, _| rng.sample(StandardNormal))
        .try_normalize(0.0)
        .filter(|r| r.dot(&d).abs() <= PARALLEL_COS)
        .unwrap_or_else(|| fallback_helper(&d));

    let v = d.cross(&helper).normalize();
    let w = d.cross(&v);

    let a = rng.gen::<f64>() * max_angle_rad;
    let b = rng.gen::<f64>() * 2.0 * PI;

    d * a.cos() + (v * b.cos() + w * b.sin()) * a.sin()
}

/// Deterministic helper perpendicular to `d`.
fn fallback_helper(d: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(d.y, -d.x, 0.0)
        .try_normalize(DEGENERATE_NORM)
        .unwrap_or_else(Vector3::y)
}
