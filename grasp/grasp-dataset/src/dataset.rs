//! Column-selected, labeled feature table.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use grasp_types::GraspLabel;
use tracing::{debug, info};

use crate::error::{DatasetError, Result};
use crate::record::{GraspRecord, LABEL_COLUMN, POSE_FEATURES};

/// A labeled feature table loaded from CSV.
///
/// Unlike [`read_records`](crate::read_records), the loader is not tied to
/// the pose schema: the label column and the feature columns are chosen by
/// name, and any other columns are ignored.
///
/// # Example
///
/// ```
/// use grasp_dataset::GraspDataset;
///
/// let csv = "id,x,y,z,roll,pitch,yaw,label\n\
///            7,0.1,0.0,0.2,0.0,0.0,0.0,1\n\
///            8,0.0,0.1,0.2,0.0,0.0,0.0,0\n";
///
/// let dataset = GraspDataset::from_reader(
///     csv.as_bytes(),
///     "label",
///     Some(&["x", "y", "z", "roll", "pitch", "yaw"]),
/// )
/// .unwrap();
///
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.records().unwrap()[0].x, 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraspDataset {
    label_column: String,
    feature_names: Vec<String>,
    features: Vec<Vec<f64>>,
    labels: Vec<GraspLabel>,
}

impl GraspDataset {
    /// Load a CSV file.
    ///
    /// With `feature_columns = None` every column except `label_column` is a
    /// feature, in header order.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::Io`] if the file cannot be opened.
    /// - [`DatasetError::MissingColumn`] if the label or a feature column is
    ///   absent from the header.
    /// - [`DatasetError::Parse`] / [`DatasetError::InvalidLabel`] for a bad
    ///   cell, with its row number.
    pub fn from_csv(
        path: impl AsRef<Path>,
        label_column: &str,
        feature_columns: Option<&[&str]>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DatasetError::io(format!("cannot open {}: {e}", path.display())))?;
        let dataset = Self::from_reader(BufReader::new(file), label_column, feature_columns)?;

        info!(
            path = %path.display(),
            rows = dataset.len(),
            features = dataset.feature_names.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Load CSV text from any reader. See [`GraspDataset::from_csv`].
    pub fn from_reader<R: Read>(
        reader: R,
        label_column: &str,
        feature_columns: Option<&[&str]>,
    ) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header: Vec<String> = csv_reader.headers()?.iter().map(str::to_owned).collect();
        let column_index = |name: &str| {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::missing_column(name))
        };

        let label_idx = column_index(label_column)?;
        let feature_names: Vec<String> = match feature_columns {
            Some(names) => names.iter().map(|&n| n.to_owned()).collect(),
            None => header
                .iter()
                .filter(|h| h.as_str() != label_column)
                .cloned()
                .collect(),
        };
        let feature_idx = feature_names
            .iter()
            .map(|name| column_index(name))
            .collect::<Result<Vec<_>>>()?;

        let mut features = Vec::new();
        let mut labels = Vec::new();

        for (i, row) in csv_reader.records().enumerate() {
            let row = row?;
            let row_no = i + 1;
            let cell = |idx: usize| row.get(idx).unwrap_or("");

            let values = feature_idx
                .iter()
                .zip(&feature_names)
                .map(|(&idx, name)| {
                    let text = cell(idx);
                    text.parse::<f64>()
                        .map_err(|_| DatasetError::parse(row_no, name.as_str(), text))
                })
                .collect::<Result<Vec<_>>>()?;

            features.push(values);
            labels.push(parse_label(row_no, cell(label_idx))?);
        }

        debug!(rows = labels.len(), label = label_column, "Parsed CSV table");
        Ok(Self {
            label_column: label_column.to_owned(),
            feature_names,
            features,
            labels,
        })
    }

    /// Build a pose-schema dataset from records.
    #[must_use]
    pub fn from_records(records: &[GraspRecord]) -> Self {
        Self {
            label_column: LABEL_COLUMN.to_owned(),
            feature_names: POSE_FEATURES.iter().map(|&n| n.to_owned()).collect(),
            features: records.iter().map(|r| r.features().to_vec()).collect(),
            labels: records.iter().map(|r| r.label).collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Name of the label column, as loaded and as written back.
    #[must_use]
    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    /// Feature column names, in feature order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Feature rows.
    #[must_use]
    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    /// Labels, one per row.
    #[must_use]
    pub fn labels(&self) -> &[GraspLabel] {
        &self.labels
    }

    /// Returns true if the features are exactly `x,y,z,roll,pitch,yaw`.
    #[must_use]
    pub fn has_pose_schema(&self) -> bool {
        self.feature_names.iter().map(String::as_str).eq(POSE_FEATURES)
    }

    /// Rows as [`GraspRecord`]s, or `None` if the features are not the pose
    /// schema.
    #[must_use]
    pub fn records(&self) -> Option<Vec<GraspRecord>> {
        if !self.has_pose_schema() {
            return None;
        }

        Some(
            self.features
                .iter()
                .zip(&self.labels)
                .map(|(f, &label)| GraspRecord {
                    x: f[0],
                    y: f[1],
                    z: f[2],
                    roll: f[3],
                    pitch: f[4],
                    yaw: f[5],
                    label,
                })
                .collect(),
        )
    }

    /// New dataset with the given rows, in the given order.
    ///
    /// Out-of-range indices are skipped.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        let (features, labels) = indices
            .iter()
            .filter(|&&i| i < self.len())
            .map(|&i| (self.features[i].clone(), self.labels[i]))
            .unzip();

        Self {
            label_column: self.label_column.clone(),
            feature_names: self.feature_names.clone(),
            features,
            labels,
        }
    }

    /// Write the table to CSV, features first and the label column last.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)?;

        let mut header: Vec<&str> = self.feature_names.iter().map(String::as_str).collect();
        header.push(&self.label_column);
        writer.write_record(&header)?;

        for (row, label) in self.features.iter().zip(&self.labels) {
            let mut cells: Vec<String> = row.iter().map(f64::to_string).collect();
            cells.push(label.to_string());
            writer.write_record(&cells)?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = self.len(), "Wrote dataset");
        Ok(())
    }
}

/// Parse a 0/1 label cell. Integral floats such as `1.0` are accepted.
fn parse_label(row: usize, text: &str) -> Result<GraspLabel> {
    let value = text
        .parse::<i64>()
        .ok()
        .or_else(|| {
            text.parse::<f64>()
                .ok()
                .filter(|v| v.fract() == 0.0 && v.abs() < 2.0)
                .map(|v| v as i64)
        })
        .ok_or_else(|| DatasetError::invalid_label(row, text))?;

    GraspLabel::try_from(value).map_err(|_| DatasetError::invalid_label(row, text))
}
