use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::types::OrganizationRecord;
use crate::scoring::ScoringProfile;

/// Identifier column every dataset must carry.
pub const NAME_COLUMN: &str = "name";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' is not a number: '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: column '{column}' value {value} is outside 0..=1")]
    OutOfRange {
        row: usize,
        column: String,
        value: f64,
    },
}

/// Load the organization catalog from a CSV file.
///
/// The header row must contain the `name` column and one column per
/// profile attribute; extra columns are ignored. Attribute values must be
/// numbers in 0..=1. Any violation fails the whole load, there is no
/// partial result.
pub fn load_organizations(
    path: &Path,
    profile: &ScoringProfile,
) -> Result<Vec<OrganizationRecord>, DatasetError> {
    let file = File::open(path)?;
    read_organizations(file, profile)
}

/// Same as [`load_organizations`] but from any reader, for callers that
/// already hold the bytes.
pub fn read_organizations<R: Read>(
    reader: R,
    profile: &ScoringProfile,
) -> Result<Vec<OrganizationRecord>, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column_index = |column: &str| headers.iter().position(|h| h.trim() == column);

    let name_idx = column_index(NAME_COLUMN)
        .ok_or_else(|| DatasetError::MissingColumn(NAME_COLUMN.to_string()))?;

    // Fail fast on schema before touching any row.
    let mut attribute_indices = Vec::with_capacity(profile.attributes.len());
    for attribute in &profile.attributes {
        let idx = column_index(attribute)
            .ok_or_else(|| DatasetError::MissingColumn(attribute.clone()))?;
        attribute_indices.push((attribute.clone(), idx));
    }

    let mut organizations = Vec::new();
    for (row_number, record) in csv_reader.records().enumerate() {
        let record = record?;
        // 1-based, counting data rows only
        let row = row_number + 1;

        let name = record.get(name_idx).unwrap_or("").trim().to_string();
        let mut org = OrganizationRecord::new(name);

        for (attribute, idx) in &attribute_indices {
            let raw = record.get(*idx).unwrap_or("").trim();
            let value: f64 = raw.parse().map_err(|_| DatasetError::InvalidValue {
                row,
                column: attribute.clone(),
                value: raw.to_string(),
            })?;
            if !(0.0..=1.0).contains(&value) {
                return Err(DatasetError::OutOfRange {
                    row,
                    column: attribute.clone(),
                    value,
                });
            }
            org.attributes.insert(attribute.clone(), value);
        }

        organizations.push(org);
    }

    Ok(organizations)
}
