// src/scrape/mod.rs
use std::collections::HashMap;

use thiserror::Error;

use crate::log::Log;

mod register;
#[cfg(feature = "cli")]
pub mod browser;

pub use register::Register;

/// One pharmacy as listed on the register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub registration_id: String,
    pub trading_name: String,
    pub phone: String,
    pub website: String,
    pub superintendent_pharmacist: String,
    pub supervising_pharmacist: String,
}

/// Query results keyed by registration number.
pub type Results = HashMap<String, Record>;

/// Name in, matching records out. Never fails: an unreachable or empty
/// register yields an empty map.
pub trait RegisterQuery {
    fn query(&mut self, name: &str, log: &dyn Log) -> Results;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("timed out waiting for {0}")]
    Timeout(&'static str),
    #[error("browser failed to start: {0}")]
    Launch(String),
    #[error("browser error: {0}")]
    Browser(String),
    #[error("no further page")]
    NoNextPage,
}

/// Where result pages come from. Implemented by the headless browser and by
/// fixtures in tests.
pub trait ResultSource {
    /// Open the register and submit `term`.
    fn search(&mut self, term: &str) -> Result<(), SourceError>;
    /// HTML of the result page currently shown.
    fn page_html(&mut self) -> Result<String, SourceError>;
    /// Move to the next result page.
    fn advance(&mut self) -> Result<(), SourceError>;
}
