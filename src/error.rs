// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::config::FileType;
use crate::diff::DiffError;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run. Scrape-side failures never show up here:
/// the register degrades to empty results instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File '{}' is not {} file.", .path.display(), .expected)]
    WrongFileType { path: PathBuf, expected: FileType },

    #[error("File '{}' does not exist.", .0.display())]
    FileNotFound(PathBuf),

    #[error("File has too few rows to determine header.")]
    TooFewRows,

    #[error("First row already holds data; no header row to use.")]
    HeaderNotFound,

    #[error("Workbook '{}' has no worksheets.", .0.display())]
    NoWorksheet(PathBuf),

    #[error("Missing required column '{0}'.")]
    MissingColumn(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] calamine::Error),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error("Register unavailable: {0}")]
    Source(#[from] crate::scrape::SourceError),
}
