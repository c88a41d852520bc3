//! Dataset splitting utilities.

use grasp_types::GraspLabel;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::GraspDataset;
use crate::error::{DatasetError, Result};

/// Seed used when the caller does not pick one.
pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// Ratio for splitting datasets into train/validation sets.
///
/// The ratio specifies the proportion of data to use for training.
/// The remainder goes to validation.
///
/// # Example
///
/// ```
/// use grasp_dataset::SplitRatio;
///
/// // 20% held out
/// let ratio = SplitRatio::from_test_size(0.2).unwrap();
/// assert!((ratio.train_ratio() - 0.8).abs() < 1e-12);
/// assert_eq!(ratio.split_point(10), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatio {
    train: f64,
}

impl SplitRatio {
    /// Creates a split ratio, returning `None` unless `train` is in `(0, 1)`.
    #[must_use]
    pub fn try_new(train: f64) -> Option<Self> {
        if train > 0.0 && train < 1.0 {
            Some(Self { train })
        } else {
            None
        }
    }

    /// Creates a split ratio from the validation fraction.
    ///
    /// # Errors
    ///
    /// [`DatasetError::InvalidSplitRatio`] unless `test_size` is in `(0, 1)`.
    pub fn from_test_size(test_size: f64) -> Result<Self> {
        if test_size > 0.0 && test_size < 1.0 {
            Ok(Self {
                train: 1.0 - test_size,
            })
        } else {
            Err(DatasetError::invalid_split_ratio(test_size))
        }
    }

    /// Returns the training ratio.
    #[must_use]
    pub const fn train_ratio(&self) -> f64 {
        self.train
    }

    /// Returns the validation ratio.
    #[must_use]
    pub fn val_ratio(&self) -> f64 {
        1.0 - self.train
    }

    /// Computes the split point for a given dataset size.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn split_point(&self, total: usize) -> usize {
        (total as f64 * self.train).round() as usize
    }

    /// Common 80/20 split.
    pub const EIGHTY_TWENTY: Self = Self { train: 0.8 };

    /// Common 70/30 split.
    pub const SEVENTY_THIRTY: Self = Self { train: 0.7 };
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self::EIGHTY_TWENTY
    }
}

fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}

/// Splits items into training and validation sets.
///
/// Items are shuffled with `seed` (entropy when `None`) and cut at
/// [`SplitRatio::split_point`]. With two or more items each side gets at
/// least one.
///
/// # Example
///
/// ```
/// use grasp_dataset::{SplitRatio, split_dataset};
///
/// let items: Vec<u32> = (0..10).collect();
/// let (train, val) = split_dataset(&items, SplitRatio::EIGHTY_TWENTY, Some(42));
/// assert_eq!(train.len(), 8);
/// assert_eq!(val.len(), 2);
/// ```
#[must_use]
pub fn split_dataset<T: Clone>(
    items: &[T],
    ratio: SplitRatio,
    seed: Option<u64>,
) -> (Vec<T>, Vec<T>) {
    if items.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.shuffle(&mut rng_for(seed));

    let split = ratio.split_point(items.len()).max(1).min(items.len() - 1);

    let train = indices[..split].iter().map(|&i| items[i].clone()).collect();
    let val = indices[split..].iter().map(|&i| items[i].clone()).collect();
    (train, val)
}

/// Splits items so both sets keep the success/failure proportions.
///
/// Each label group is split on its own, then both sets are shuffled. Seeds
/// are derived from `seed` so the result is reproducible.
///
/// # Example
///
/// ```
/// use grasp_dataset::{SplitRatio, split_stratified};
/// use grasp_types::GraspLabel;
///
/// let labels: Vec<GraspLabel> = (0..10).map(|i| GraspLabel::from(i < 5)).collect();
/// let (train, val) = split_stratified(&labels, |l| *l, SplitRatio::EIGHTY_TWENTY, Some(42));
///
/// assert_eq!(train.iter().filter(|l| l.is_success()).count(), 4);
/// assert_eq!(val.iter().filter(|l| l.is_success()).count(), 1);
/// ```
#[must_use]
pub fn split_stratified<T, F>(
    items: &[T],
    label_of: F,
    ratio: SplitRatio,
    seed: Option<u64>,
) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T) -> GraspLabel,
{
    if items.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let (successes, failures): (Vec<T>, Vec<T>) =
        items.iter().cloned().partition(|item| label_of(item).is_success());

    let (mut train, mut val) = split_dataset(&successes, ratio, seed);
    let (fail_train, fail_val) = split_dataset(&failures, ratio, seed.map(|s| s.wrapping_add(1)));
    train.extend(fail_train);
    val.extend(fail_val);

    let mut rng = rng_for(seed.map(|s| s.wrapping_add(2)));
    train.shuffle(&mut rng);
    val.shuffle(&mut rng);

    (train, val)
}

impl GraspDataset {
    /// Stratified train/validation split of this dataset.
    ///
    /// # Errors
    ///
    /// [`DatasetError::EmptyDataset`] if there are no rows.
    pub fn split(&self, ratio: SplitRatio, seed: u64) -> Result<(Self, Self)> {
        if self.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }

        let indices: Vec<usize> = (0..self.len()).collect();
        let labels = self.labels();
        let (train, val) = split_stratified(&indices, |&i| labels[i], ratio, Some(seed));

        info!(train = train.len(), val = val.len(), seed, "Split dataset");
        Ok((self.select(&train), self.select(&val)))
    }
}
