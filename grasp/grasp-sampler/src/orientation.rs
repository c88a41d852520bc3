//! Orientation from an approach axis plus a bounded random roll.

use grasp_types::{Matrix3, UnitQuaternion, Vector3};
use rand::Rng;

use crate::quaternion::rotation_matrix_to_quaternion;

/// Forward axes closer than this (in |cos|) to world up switch reference.
const VERTICAL_COS: f64 = 0.99;

/// Build an orientation whose local +Z axis is `normalize(forward)`.
///
/// The local +Y axis is kept as close to world up `(0, 0, 1)` as the forward
/// axis allows; for a nearly vertical forward axis `(0, 1, 0)` is used as the
/// reference instead. A roll drawn from `U[-max_roll_rad, max_roll_rad]` is
/// then applied about the forward axis.
///
/// With `max_roll_rad == 0` the result does not depend on the random draw.
/// `forward` must be non-zero.
///
/// # Example
///
/// ```
/// use grasp_sampler::orientation_from_forward_and_roll;
/// use nalgebra::Vector3;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let forward = Vector3::new(1.0, -1.0, -2.0);
/// let q = orientation_from_forward_and_roll(&forward, 0.0, &mut rng);
///
/// let axis = q * Vector3::z();
/// assert!((axis - forward.normalize()).norm() < 1e-12);
/// ```
pub fn orientation_from_forward_and_roll<R: Rng + ?Sized>(
    forward: &Vector3<f64>,
    max_roll_rad: f64,
    rng: &mut R,
) -> UnitQuaternion<f64> {
    let roll = (rng.gen::<f64>() * 2.0 - 1.0) * max_roll_rad;
    rotation_matrix_to_quaternion(&rolled_frame(forward, roll))
}

/// Right-handed frame with columns `[right, up, forward]`, rolled by `roll`
/// radians about `forward`.
pub(crate) fn rolled_frame(forward: &Vector3<f64>, roll: f64) -> Matrix3<f64> {
    debug_assert!(forward.norm() > 0.0, "forward must be non-zero");
    let f = forward.normalize();

    let world_up = if f.dot(&Vector3::z()).abs() > VERTICAL_COS {
        Vector3::y()
    } else {
        Vector3::z()
    };

    let right = world_up.cross(&f).normalize();
    let up = f.cross(&right);

    let (s, c) = roll.sin_cos();
    let right_rolled = right * c + up * s;
    let up_rolled = up * c - right * s;

    Matrix3::from_columns(&[right_rolled, up_rolled, f])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_orthonormal(m: &Matrix3<f64>) {
        assert_relative_eq!(m.transpose() * m, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_is_orthonormal_right_handed() {
        let forwards = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.3, -0.4, -0.8),
            Vector3::new(-1.0, 2.0, 0.5),
        ];
        for f in &forwards {
            for roll in [-PI, -1.0, 0.0, 0.4, FRAC_PI_2, PI] {
                let m = rolled_frame(f, roll);
                assert_orthonormal(&m);
                assert_relative_eq!(m.column(2).into_owned(), f.normalize(), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_roll_keeps_up_near_world_up() {
        let f = Vector3::new(1.0, 0.0, -1.0);
        let m = rolled_frame(&f, 0.0);
        let up = m.column(1).into_owned();

        // Up is the projection of world up onto the plane orthogonal to f.
        assert!(up.z > 0.0);
        assert_relative_eq!(up.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vertical_forward_uses_fallback_reference() {
        for f in [Vector3::z(), -Vector3::z(), Vector3::new(0.001, 0.0, 1.0)] {
            let m = rolled_frame(&f, 0.3);
            assert!(m.iter().all(|x| x.is_finite()));
            assert_orthonormal(&m);
        }

        let m = rolled_frame(&Vector3::z(), 0.0);
        assert_relative_eq!(m.column(0).into_owned(), Vector3::x(), epsilon = 1e-15);
        assert_relative_eq!(m.column(1).into_owned(), Vector3::y(), epsilon = 1e-15);
    }

    #[test]
    fn test_zero_max_roll_is_deterministic() {
        let f = Vector3::new(0.2, 0.1, -0.9);
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(2);

        let qa = orientation_from_forward_and_roll(&f, 0.0, &mut a);
        let qb = orientation_from_forward_and_roll(&f, 0.0, &mut b);

        assert_relative_eq!(qa, qb, epsilon = 1e-15);
        assert_relative_eq!(qa * Vector3::z(), f.normalize(), epsilon = 1e-12);
    }

    #[test]
    fn test_roll_stays_within_bound() {
        let f = Vector3::new(0.0, 1.0, -1.0);
        let reference = rolled_frame(&f, 0.0);
        let max_roll = 0.25;
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..200 {
            let q = orientation_from_forward_and_roll(&f, max_roll, &mut rng);
            assert_relative_eq!(q * Vector3::z(), f.normalize(), epsilon = 1e-12);

            let right = q * Vector3::x();
            let ref_right = reference.column(0).into_owned();
            let roll = right.angle(&ref_right);
            assert!(roll <= max_roll + 1e-9, "roll {roll} exceeds {max_roll}");
        }
    }

    #[test]
    fn test_roll_direction_is_about_forward() {
        // A positive roll turns right toward up.
        let f = Vector3::new(1.0, 0.0, 0.0);
        let base = rolled_frame(&f, 0.0);
        let rolled = rolled_frame(&f, FRAC_PI_2);
        assert_relative_eq!(
            rolled.column(0).into_owned(),
            base.column(1).into_owned(),
            epsilon = 1e-12
        );
    }
}
