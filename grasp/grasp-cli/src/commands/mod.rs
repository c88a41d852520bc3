//! CLI command implementations.

pub mod report;
pub mod sample;
pub mod split;
pub mod summary;
