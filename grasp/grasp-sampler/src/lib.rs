//! Randomized candidate-pose sampler for grasp simulation.
//!
//! Generates a gripper approach pose around a target object under geometric
//! constraints:
//!
//! - position on the upper hemisphere around the object,
//! - clearance above the support surface,
//! - bounded deviation from the ideal approach axis,
//! - bounded roll about the approach axis.
//!
//! # Pipeline
//!
//! ```text
//! SamplingConfig
//!   -> sample_point_on_upper_hemisphere   (position)
//!   -> center - position                  (ideal approach axis)
//!   -> perturb_direction                  (cone-bounded axis)
//!   -> orientation_from_forward_and_roll  (frame + roll)
//!        -> rotation_matrix_to_quaternion
//!   -> Pose
//! ```
//!
//! Every function takes the random source as `&mut R where R: Rng`, so a
//! seeded generator reproduces a draw exactly. [`sample_poses`] runs many
//! draws in parallel with one stream per sample.
//!
//! # Example
//!
//! ```
//! use grasp_sampler::generate_random_gripper_pose;
//! use grasp_types::SamplingConfig;
//! use nalgebra::Point3;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = SamplingConfig::around(Point3::new(0.0, 0.0, 0.05))
//!     .with_max_angle_deg(10.0)
//!     .with_max_roll_deg(180.0);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let pose = generate_random_gripper_pose(&config, &mut rng).unwrap();
//!
//! let euler = pose.euler_angles();
//! println!(
//!     "pos = {:?}, rpy = ({:.3}, {:.3}, {:.3})",
//!     pose.position, euler.roll, euler.pitch, euler.yaw
//! );
//! ```

#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod batch;
mod hemisphere;
mod orientation;
mod perturb;
mod pose;
mod quaternion;

pub use batch::{sample_poses, stream_rng};
pub use hemisphere::sample_point_on_upper_hemisphere;
pub use orientation::orientation_from_forward_and_roll;
pub use perturb::perturb_direction;
pub use pose::generate_random_gripper_pose;
pub use quaternion::rotation_matrix_to_quaternion;
