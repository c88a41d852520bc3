//! Typed CSV reading and writing.
//!
//! Any serde row type works; [`GraspRecord`](crate::GraspRecord) and
//! [`PoseRecord`](crate::PoseRecord) are the two used by the toolkit. The
//! header row is derived from the struct's field names.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{DatasetError, Result};

/// Write rows to any writer, header first.
///
/// An empty slice produces no output at all, since the header comes from
/// the first serialized row.
pub fn write_records_to<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read rows from any reader. The first line must be the header.
pub fn read_records_from<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize()
        .map(|row| row.map_err(DatasetError::from))
        .collect()
}

/// Write rows to a CSV file, replacing it if present.
///
/// # Example
///
/// ```
/// use grasp_dataset::{GraspRecord, read_records, write_records};
/// use grasp_types::{GraspLabel, Pose};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("grasps.csv");
///
/// let rows = vec![GraspRecord::from_pose(&Pose::identity(), GraspLabel::Success)];
/// write_records(&path, &rows).unwrap();
///
/// let loaded: Vec<GraspRecord> = read_records(&path).unwrap();
/// assert_eq!(loaded, rows);
/// ```
pub fn write_records<T: Serialize>(path: impl AsRef<Path>, records: &[T]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| DatasetError::io(format!("cannot create {}: {e}", path.display())))?;
    write_records_to(BufWriter::new(file), records)?;

    info!(path = %path.display(), rows = records.len(), "Wrote CSV");
    Ok(())
}

/// Read rows from a CSV file.
pub fn read_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| DatasetError::io(format!("cannot open {}: {e}", path.display())))?;
    let records = read_records_from(BufReader::new(file))?;

    debug!(path = %path.display(), rows = records.len(), "Read CSV");
    Ok(records)
}
