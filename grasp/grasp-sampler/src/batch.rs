//! Parallel batch sampling.
//!
//! Each sample owns its random stream, so the batch is reproducible from a
//! single seed no matter how rayon schedules the work.

use grasp_types::{Pose, Result, SamplingConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::pose::generate_random_gripper_pose;

/// Random stream for sample `index` of a batch seeded with `seed`.
///
/// # Example
///
/// ```
/// use grasp_sampler::stream_rng;
/// use rand::Rng;
///
/// let a: u64 = stream_rng(42, 3).gen();
/// let b: u64 = stream_rng(42, 3).gen();
/// let c: u64 = stream_rng(42, 4).gen();
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[must_use]
pub fn stream_rng(seed: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    rng
}

/// Generate `count` candidate poses in parallel.
///
/// Sample `i` is drawn from [`stream_rng`]`(seed, i)`, so `sample_poses(c, n,
/// s)[i]` is the same for every `n > i`.
///
/// # Errors
///
/// Returns the first configuration or sampling error encountered.
///
/// # Example
///
/// ```
/// use grasp_sampler::sample_poses;
/// use grasp_types::TargetObject;
///
/// let config = TargetObject::Cube.sampling_config();
/// let poses = sample_poses(&config, 16, 42).unwrap();
///
/// assert_eq!(poses.len(), 16);
/// assert!(poses.iter().all(|p| p.position.z >= config.z_min()));
/// ```
pub fn sample_poses(config: &SamplingConfig, count: usize, seed: u64) -> Result<Vec<Pose>> {
    config.validate()?;
    info!(count, seed, radius = config.radius, "Sampling candidate poses");

    let poses = (0..count)
        .into_par_iter()
        .map(|index| generate_random_gripper_pose(config, &mut stream_rng(seed, index)))
        .collect::<Result<Vec<_>>>()?;

    debug!(generated = poses.len(), "Candidate pose batch complete");
    Ok(poses)
}
