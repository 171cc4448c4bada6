use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("cannot read {}: {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("required column `{column}` missing from {}", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("duplicate id `{id}` at row {row}")]
    DuplicateId { id: String, row: usize },

    #[error("row {row}: total_scans `{value}` is not a non-negative integer")]
    InvalidScanCount { row: usize, value: String },

    #[error("the number of files in {} does not match: expected {expected}, found {actual}", .folder.display())]
    CountMismatch {
        folder: PathBuf,
        expected: u32,
        actual: usize,
    },

    #[error(
        "the file names in {} do not match the expected values (missing: [{}], unexpected: [{}])",
        .folder.display(),
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    NameMismatch {
        folder: PathBuf,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("generated page id {id} for row {row} collides with an input id")]
    IdCollision { id: u64, row: usize },

    #[error("cannot write {}: {message}", .path.display())]
    OutputWrite { path: PathBuf, message: String },
}
