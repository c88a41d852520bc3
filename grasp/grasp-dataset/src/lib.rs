//! Grasp dataset handling.
//!
//! # Records and CSV
//!
//! - [`GraspRecord`] - One labeled attempt (`x,y,z,roll,pitch,yaw,label`)
//! - [`PoseRecord`] - One unlabeled candidate (`x,y,z,roll,pitch,yaw`)
//! - [`write_records`], [`read_records`] - Typed CSV IO for any serde row
//!
//! # Tables
//!
//! - [`GraspDataset`] - Label and feature columns chosen by name
//! - [`split_stratified`], [`GraspDataset::split`] - Train/validation splits
//!   that keep the success ratio
//! - [`DatasetSummary`] - Counts and per-feature ranges
//!
//! # Example
//!
//! ```
//! use grasp_dataset::{GraspDataset, GraspRecord, SplitRatio};
//! use grasp_types::{GraspLabel, Pose};
//!
//! let records: Vec<GraspRecord> = (0..10)
//!     .map(|i| GraspRecord::from_pose(&Pose::identity(), GraspLabel::from(i % 2 == 0)))
//!     .collect();
//!
//! let dataset = GraspDataset::from_records(&records);
//! let (train, val) = dataset.split(SplitRatio::EIGHTY_TWENTY, 42).unwrap();
//!
//! assert_eq!(train.len(), 8);
//! assert_eq!(val.len(), 2);
//! ```

#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod dataset;
mod error;
mod io;
mod record;
mod splits;
mod summary;

pub use dataset::GraspDataset;
pub use error::{DatasetError, Result};
pub use io::{read_records, read_records_from, write_records, write_records_to};
pub use record::{GraspRecord, LABEL_COLUMN, POSE_FEATURES, PoseRecord};
pub use splits::{DEFAULT_SPLIT_SEED, SplitRatio, split_dataset, split_stratified};
pub use summary::{BALANCE_TOLERANCE, DatasetSummary, FeatureStats};
