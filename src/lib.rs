// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod diff;
pub mod enrich;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod store;
pub mod xlsx;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
