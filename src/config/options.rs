// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Csv,
    Xlsx,
}

impl FileType {
    pub fn ext(&self) -> &'static str {
        match self { FileType::Csv => "csv", FileType::Xlsx => "xlsx" }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}

/// One run: where the input comes from and where results go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub input_type: FileType,
    pub output: PathBuf,
    /// Previous snapshot (CSV). When set, a change log is written too.
    pub current_data: Option<PathBuf>,
    pub change_log: PathBuf,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, input_type: FileType) -> Self {
        Self {
            input: input.into(),
            input_type,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            current_data: None,
            change_log: PathBuf::from(CHANGE_LOG_FILE),
        }
    }
}

/// Knobs for the browser-backed register source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub headless: bool,
    pub search_wait: Duration,
    pub results_wait: Duration,
    pub settle: Duration,
    pub page_settle: Duration,
    pub max_pages: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(REGISTER_URL),
            headless: true,
            search_wait: Duration::from_millis(SEARCH_WAIT_MS),
            results_wait: Duration::from_millis(RESULTS_WAIT_MS),
            settle: Duration::from_millis(SETTLE_MS),
            page_settle: Duration::from_millis(PAGE_SETTLE_MS),
            max_pages: MAX_PAGES,
        }
    }
}
