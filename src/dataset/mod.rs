//! CSV dataset loading. The ranking core trusts whatever snapshot this
//! module produces; a column that cannot be materialized is a fatal dataset
//! defect, never silently defaulted, because a defaulted rank would corrupt
//! the comparison semantics downstream.

mod parser;

use crate::ranking::DistrictRow;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read district dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid district CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("column '{column}' is missing a value on line {line}")]
    MissingValue { column: &'static str, line: u64 },
}

/// Load a full dataset snapshot from a CSV file on disk.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DistrictRow>, DatasetError> {
    let file = std::fs::File::open(path)?;
    load_from_reader(file)
}

/// Load a full dataset snapshot from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<DistrictRow>, DatasetError> {
    parser::parse_rows(reader)
}
