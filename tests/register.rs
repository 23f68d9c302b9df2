// tests/register.rs
//
// Register paging over a scripted result source.
//
use std::collections::VecDeque;

use psi_scrape::log::{Level, MemoryLog};
use psi_scrape::scrape::{Register, RegisterQuery, ResultSource, SourceError};

/// Serves canned pages; `advance` pops to the next one.
#[derive(Default)]
struct ScriptedSource {
    pages: VecDeque<String>,
    searches: Vec<String>,
    advances: usize,
    fail_search: bool,
    fail_page_after: Option<usize>,
    fail_advance: bool,
    served: usize,
}

impl ScriptedSource {
    fn with_pages(pages: Vec<String>) -> Self {
        Self { pages: pages.into(), ..Default::default() }
    }
}

impl ResultSource for ScriptedSource {
    fn search(&mut self, term: &str) -> Result<(), SourceError> {
        self.searches.push(term.to_string());
        if self.fail_search {
            return Err(SourceError::Timeout("search field"));
        }
        Ok(())
    }

    fn page_html(&mut self) -> Result<String, SourceError> {
        if self.fail_page_after.is_some_and(|n| self.served >= n) {
            return Err(SourceError::Timeout("result list"));
        }
        self.served += 1;
        self.pages.front().cloned().ok_or(SourceError::Browser("blank page".into()))
    }

    fn advance(&mut self) -> Result<(), SourceError> {
        self.advances += 1;
        if self.fail_advance {
            return Err(SourceError::NoNextPage);
        }
        self.pages.pop_front();
        Ok(())
    }
}

fn result_page(records: &[(&str, &str)], has_next: bool) -> String {
    let items: String = records
        .iter()
        .map(|(id, tel)| {
            format!(
                "<li><div class=\"results-item\"><h2>Pharma {id}</h2>\
                 <p><span>PSI Registration Number:</span> {id}</p>\
                 <p><span>Tel:</span> {tel}</p></div></li>"
            )
        })
        .collect();
    let next = if has_next {
        "<button class=\"btn btn-link\">›</button>"
    } else {
        "<button class=\"btn btn-link\" disabled>›</button>"
    };
    format!("<ul class=\"results-list\">{items}</ul>{next}")
}

#[test]
fn collects_every_page() {
    let source = ScriptedSource::with_pages(vec![
        result_page(&[("1", "01 234 5678"), ("2", "01 234 5679")], true),
        result_page(&[("3", "01 234 5670")], true),
        result_page(&[("4", "01 234 5671")], false),
    ]);
    let mut register = Register::new(source);
    let log = MemoryLog::new();

    let results = register.query("Pharma", &log);
    assert_eq!(results.len(), 4);
    assert_eq!(results["3"].phone, "+353 1 234 5670");
    assert_eq!(register.source().advances, 2);
}

#[test]
fn later_pages_overwrite_earlier_ids() {
    let source = ScriptedSource::with_pages(vec![
        result_page(&[("7", "01 111 1111")], true),
        result_page(&[("7", "01 222 2222")], false),
    ]);
    let mut register = Register::new(source);

    let results = register.query("Pharma", &MemoryLog::new());
    assert_eq!(results.len(), 1);
    assert_eq!(results["7"].phone, "+353 1 222 2222");
}

#[test]
fn search_term_is_cleaned() {
    let source = ScriptedSource::with_pages(vec![result_page(&[], false)]);
    let mut register = Register::new(source);
    register.query("  \"Boots\" ", &MemoryLog::new());
    assert_eq!(register.source().searches, ["Boots"]);
}

#[test]
fn failed_search_yields_nothing() {
    let mut source = ScriptedSource::with_pages(vec![result_page(&[("1", "x")], false)]);
    source.fail_search = true;
    let mut register = Register::new(source);
    let log = MemoryLog::new();

    assert!(register.query("Pharma", &log).is_empty());
    assert_eq!(log.count(Level::Warn), 1);
}

#[test]
fn failed_page_load_discards_partial_results() {
    let mut source = ScriptedSource::with_pages(vec![
        result_page(&[("1", "x")], true),
        result_page(&[("2", "x")], false),
    ]);
    source.fail_page_after = Some(1);
    let mut register = Register::new(source);
    let log = MemoryLog::new();

    assert!(register.query("Pharma", &log).is_empty());
    assert!(log.contains(Level::Error, "Error in search for Pharma"));
}

#[test]
fn failed_advance_keeps_what_was_read() {
    let mut source = ScriptedSource::with_pages(vec![
        result_page(&[("1", "x"), ("2", "y")], true),
        result_page(&[("3", "z")], false),
    ]);
    source.fail_advance = true;
    let mut register = Register::new(source);
    let log = MemoryLog::new();

    let results = register.query("Pharma", &log);
    assert_eq!(results.len(), 2);
    assert_eq!(log.count(Level::Error), 0);
}

#[test]
fn bad_items_are_logged_and_skipped() {
    let page = "<ul class=\"results-list\">\
        <li><div class=\"results-item\"><h2>Nameless Id</h2></div></li>\
        <li><div class=\"results-item\"><h2>Pharma 9</h2>\
        <p><span>PSI Registration Number:</span> 9</p></div></li></ul>";
    let mut register = Register::new(ScriptedSource::with_pages(vec![page.to_string()]));
    let log = MemoryLog::new();

    let results = register.query("Pharma", &log);
    assert_eq!(results.len(), 1);
    assert_eq!(results["9"].website, "not available");
    assert!(log.contains(Level::Warn, "Error processing item"));
}

#[test]
fn page_cap_stops_endless_pagers() {
    // the single page always offers a next page and never runs out
    let page = result_page(&[("1", "x")], true);
    let source = ScriptedSource::with_pages(vec![page]);

    struct Looping(ScriptedSource);
    impl ResultSource for Looping {
        fn search(&mut self, term: &str) -> Result<(), SourceError> { self.0.search(term) }
        fn page_html(&mut self) -> Result<String, SourceError> { self.0.page_html() }
        fn advance(&mut self) -> Result<(), SourceError> {
            self.0.advances += 1;
            Ok(())
        }
    }

    let mut register = Register::new(Looping(source)).with_max_pages(5);
    let log = MemoryLog::new();

    let results = register.query("Pharma", &log);
    assert_eq!(results.len(), 1);
    assert_eq!(register.source().0.served, 5);
    assert_eq!(register.source().0.advances, 4);
    assert!(log.contains(Level::Warn, "after 5 pages"));
}
