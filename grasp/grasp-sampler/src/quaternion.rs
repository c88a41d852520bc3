//! Rotation matrix to quaternion conversion.
//!
//! Shepperd's method: pick the formula whose divisor is largest so that no
//! branch divides by a value near zero.

use grasp_types::{Matrix3, UnitQuaternion};
use nalgebra::Quaternion;

/// Which of Shepperd's four formulas applies to a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    /// `trace > 0`: `w` is the dominant component.
    Trace,
    /// `m00` is the largest diagonal element.
    X,
    /// `m11` is the largest diagonal element.
    Y,
    /// `m22` is the largest diagonal element (or ties).
    Z,
}

fn select_branch(m: &Matrix3<f64>) -> Branch {
    if m.trace() > 0.0 {
        Branch::Trace
    } else if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
        Branch::X
    } else if m[(1, 1)] > m[(2, 2)] {
        Branch::Y
    } else {
        Branch::Z
    }
}

/// Convert an orthonormal, right-handed rotation matrix into a unit quaternion.
///
/// The input is trusted to be a rotation; the result is renormalized only to
/// absorb rounding.
///
/// # Example
///
/// ```
/// use grasp_sampler::rotation_matrix_to_quaternion;
/// use nalgebra::{Rotation3, Vector3};
///
/// let r = Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
/// let q = rotation_matrix_to_quaternion(r.matrix());
///
/// assert!((q.to_rotation_matrix().matrix() - r.matrix()).norm() < 1e-12);
/// ```
#[must_use]
pub fn rotation_matrix_to_quaternion(m: &Matrix3<f64>) -> UnitQuaternion<f64> {
    let (x, y, z, w) = match select_branch(m) {
        Branch::Trace => {
            let s = 0.5 / (m.trace() + 1.0).sqrt();
            (
                (m[(2, 1)] - m[(1, 2)]) * s,
                (m[(0, 2)] - m[(2, 0)]) * s,
                (m[(1, 0)] - m[(0, 1)]) * s,
                0.25 / s,
            )
        }
        Branch::X => {
            let s = 2.0 * (1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt();
            (
                0.25 * s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(2, 1)] - m[(1, 2)]) / s,
            )
        }
        Branch::Y => {
            let s = 2.0 * (1.0 + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt();
            (
                (m[(0, 1)] + m[(1, 0)]) / s,
                0.25 * s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                (m[(0, 2)] - m[(2, 0)]) / s,
            )
        }
        Branch::Z => {
            let s = 2.0 * (1.0 + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt();
            (
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                0.25 * s,
                (m[(1, 0)] - m[(0, 1)]) / s,
            )
        }
    };

    UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z))
}
