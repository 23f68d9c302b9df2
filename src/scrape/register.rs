// src/scrape/register.rs
use crate::config::consts::MAX_PAGES;
use crate::core::sanitize::clean_input;
use crate::log::Log;
use crate::specs::results::{self, NextControl};

use super::{RegisterQuery, ResultSource, Results};

/// Register search over any `ResultSource`: one search, then every result
/// page until the pager says stop.
pub struct Register<S> {
    source: S,
    max_pages: usize,
}

impl<S: ResultSource> Register<S> {
    pub fn new(source: S) -> Self {
        Self { source, max_pages: MAX_PAGES }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn source(&self) -> &S { &self.source }

    pub fn into_source(self) -> S { self.source }
}

impl<S: ResultSource> RegisterQuery for Register<S> {
    fn query(&mut self, name: &str, log: &dyn Log) -> Results {
        let term = clean_input(name);

        if let Err(e) = self.source.search(&term) {
            logw!(log, "Search for {term} failed: {e}");
            return Results::new();
        }

        let mut all = Results::new();
        let mut pages = 0usize;

        loop {
            let doc = match self.source.page_html() {
                Ok(doc) => doc,
                Err(e) => {
                    loge!(log, "Error in search for {name}: {e}");
                    return Results::new();
                }
            };
            pages += 1;

            let page = results::parse_page(&doc);
            for item in page.items {
                match item {
                    Ok(record) => {
                        all.insert(record.registration_id.clone(), record);
                    }
                    Err(e) => logw!(log, "Error processing item: {e}"),
                }
            }

            if page.next != NextControl::Enabled {
                break;
            }
            if pages >= self.max_pages {
                logw!(log, "Stopped paging {term} after {pages} pages");
                break;
            }
            if let Err(e) = self.source.advance() {
                logd!(log, "No more pages for {term}: {e}");
                break;
            }
        }

        logd!(log, "{term}: {} records over {pages} pages", all.len());
        all
    }
}
