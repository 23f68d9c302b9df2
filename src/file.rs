// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::config::FileType;
use crate::config::consts::REQUIRED_COLUMNS;
use crate::store::DataSet;
use crate::{Error, Result};

/// Extension must match (case-insensitive); with `check_exists`, the path must
/// also be an existing file.
pub fn check_filetype(path: &Path, expected: FileType, check_exists: bool) -> Result<()> {
    let name = path.to_string_lossy().to_lowercase();
    if !name.ends_with(&format!(".{}", expected.ext())) {
        return Err(Error::WrongFileType { path: path.to_path_buf(), expected });
    }
    if check_exists && !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

pub fn load_dataset(path: &Path, kind: FileType) -> Result<DataSet> {
    match kind {
        FileType::Csv => crate::csv::read_dataset(BufReader::new(File::open(path)?)),
        FileType::Xlsx => crate::xlsx::read_dataset(path),
    }
}

/// Fail unless every column the enricher keys on is present.
pub fn require_columns(ds: &DataSet) -> Result<()> {
    match REQUIRED_COLUMNS.iter().find(|c| !ds.has_column(c)) {
        Some(missing) => Err(Error::MissingColumn(missing.to_string())),
        None => Ok(()),
    }
}

/// Write `ds` as CSV, creating parent directories as needed.
pub fn save_dataset(ds: &DataSet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let out = BufWriter::new(File::create(path)?); // truncate/overwrite
    crate::csv::write_dataset(out, ds)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
