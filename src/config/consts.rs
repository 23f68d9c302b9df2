// src/config/consts.rs

// Register
pub const REGISTER_URL: &str = "https://www.psi.ie/search-registers";

// Files
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";
pub const CHANGE_LOG_FILE: &str = "change_log.csv";
pub const LOG_FILE: &str = "scraper.log";

// Input columns
pub const COL_TRADING_NAME: &str = "Trading Name";
pub const COL_REGISTRATION_NUMBER: &str = "Registration Number";
pub const REQUIRED_COLUMNS: [&str; 2] = [COL_TRADING_NAME, COL_REGISTRATION_NUMBER];

// Enrichment columns, in the order they are appended
pub const COL_PHONE: &str = "Phone Number";
pub const COL_WEBSITE: &str = "Website";
pub const COL_SUPERINTENDENT: &str = "Superintendent Pharmacist";
pub const COL_SUPERVISING: &str = "Supervising Pharmacist";
pub const ENRICHED_COLUMNS: [&str; 4] = [COL_PHONE, COL_WEBSITE, COL_SUPERINTENDENT, COL_SUPERVISING];

// Change log columns
pub const COL_CHANGE_TYPE: &str = "change_type";
pub const COL_FIELD_CHANGED: &str = "field_changed";

// Sentinels
pub const NOT_AVAILABLE: &str = "not available";
pub const INVALID_NUMBER: &str = "non-valid number";

// Result page labels
pub const LABEL_REGISTRATION: &str = "PSI Registration Number:";
pub const LABEL_TEL: &str = "Tel:";
pub const LABEL_WEB: &str = "Web:";
pub const LABEL_SUPERINTENDENT: &str = "Superintendent Pharmacist:";
pub const LABEL_SUPERVISING: &str = "Supervising Pharmacist:";

// Spreadsheet header sniffing
pub const MAX_HEADER_SCAN_ROWS: usize = 3;

// Browser waits (ms)
pub const SEARCH_WAIT_MS: u64 = 10_000;
pub const RESULTS_WAIT_MS: u64 = 10_000;
pub const SETTLE_MS: u64 = 3_000;
pub const PAGE_SETTLE_MS: u64 = 3_000;
pub const SCROLL_PAUSE_MS: u64 = 1_000;
pub const POLL_MS: u64 = 250;

// Pagination guard
pub const MAX_PAGES: usize = 200;
