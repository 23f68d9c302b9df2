//! # Scraping “specs” module
//!
//! Page-specific readers for the register site. A spec knows *where the
//! ground truth lives in the HTML* and how to pull it out tolerantly; it
//! never navigates, waits, or logs.
//!
//! ## What lives here
//! - **Pure HTML parsing** of pages the browser has already rendered.
//! - **Label matching** for the `<span>Label:</span> value` paragraphs the
//!   register uses for every field.
//! - **Light shaping** into `scrape::Record` values, including phone
//!   normalisation.
//!
//! ## What does **not** live here
//! - Browser control, pagination, timeouts (`scrape`).
//! - Merging into the input table (`enrich`).
//!
//! ## Conventions
//! - Case-insensitive tag detection via `core::html`; no full-document regexes.
//! - A malformed item is reported per item, never for the whole page.
//! - Testable offline against saved HTML.
pub mod results;
