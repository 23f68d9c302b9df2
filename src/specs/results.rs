// src/specs/results.rs
//! Scraping *spec* for one page of register search results.
//!
//! Shape of the page (only what we rely on):
//! ```text
//! <ul class="results-list">
//!   <li><div class="results-item">
//!     <div class="results-item__header__text"><h2>NAME</h2></div>
//!     <p><span>PSI Registration Number:</span> 1234</p>
//!     <p><span>Tel:</span> 01 234 5678</p>
//!     <p><span>Web:</span> https://…</p>
//!     <p><span>Superintendent Pharmacist:</span> …</p>
//!     <p><span>Supervising Pharmacist:</span> …</p>
//!   </div></li>
//! </ul>
//! … <button class="btn btn-link">›</button>
//! ```
//!
//! No navigation here. The caller hands in page HTML and gets records plus
//! the state of the "next page" control.

use thiserror::Error;

use crate::config::consts::*;
use crate::core::html::{self, has_bare_attr, has_class, open_tag, tag_blocks, text_content};
use crate::core::{phone, sanitize};
use crate::scrape::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextControl {
    Enabled,
    Disabled,
    Missing,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("result item has no name")]
    MissingName,
    #[error("result item '{0}' has no registration number")]
    MissingId(String),
}

pub struct ResultsPage {
    pub items: Vec<Result<Record, ItemError>>,
    pub next: NextControl,
}

pub fn parse_page(doc: &str) -> ResultsPage {
    ResultsPage { items: parse_items(doc), next: next_control(doc) }
}

/// One entry per `li > div.results-item`; other list items are ignored.
pub fn parse_items(doc: &str) -> Vec<Result<Record, ItemError>> {
    let Some(list) = results_list(doc) else {
        return Vec::new();
    };
    tag_blocks(list, "li")
        .into_iter()
        .filter(|li| is_result_item(li))
        .map(parse_item)
        .collect()
}

fn results_list(doc: &str) -> Option<&str> {
    let mut pos = 0usize;
    while let Some((s, e)) = html::next_tag_block_ci(doc, "<ul", "</ul>", pos) {
        let block = &doc[s..e];
        if has_class(open_tag(block), "results-list") {
            return Some(block);
        }
        pos = e;
    }
    None
}

fn is_result_item(li: &str) -> bool {
    let lc = html::to_lower(li);
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find("<div") {
        let at = from + rel;
        if has_class(open_tag(&li[at..]), "results-item") {
            return true;
        }
        from = at + 4;
    }
    false
}

fn parse_item(item: &str) -> Result<Record, ItemError> {
    let name = tag_blocks(item, "h2")
        .first()
        .map(text_content)
        .filter(|n| !n.is_empty())
        .ok_or(ItemError::MissingName)?;

    let mut id = None;
    let mut tel = None;
    let mut web = None;
    let mut superintendent = None;
    let mut supervising = None;

    for p in tag_blocks(item, "p") {
        let Some(label) = tag_blocks(p, "span").first().map(text_content) else {
            continue;
        };
        let text = text_content(p);
        let slot = match label.as_str() {
            LABEL_REGISTRATION => &mut id,
            LABEL_TEL => &mut tel,
            LABEL_WEB => &mut web,
            LABEL_SUPERINTENDENT => &mut superintendent,
            LABEL_SUPERVISING => &mut supervising,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(text);
        }
    }

    let registration_id = id
        .map(|t| sanitize::after_last_colon(&t))
        .filter(|i| !i.is_empty())
        .ok_or_else(|| ItemError::MissingId(name.clone()))?;

    let na = || s!(NOT_AVAILABLE);
    Ok(Record {
        registration_id,
        trading_name: name,
        phone: tel
            .map(|t| phone::normalize(t.replace(LABEL_TEL, "").trim()))
            .unwrap_or_else(na),
        website: web.map(|t| t.replace(LABEL_WEB, "").trim().to_string()).unwrap_or_else(na),
        superintendent_pharmacist: superintendent
            .map(|t| sanitize::after_last_colon(&t))
            .unwrap_or_else(na),
        supervising_pharmacist: supervising
            .map(|t| sanitize::after_last_colon(&t))
            .unwrap_or_else(na),
    })
}

/// State of the `›` pager button (`button.btn.btn-link`).
pub fn next_control(doc: &str) -> NextControl {
    for button in tag_blocks(doc, "button") {
        let open = open_tag(button);
        if !has_class(open, "btn-link") || !text_content(button).contains('›') {
            continue;
        }
        if has_class(open, "disabled") || has_bare_attr(open, "disabled") {
            return NextControl::Disabled;
        }
        return NextControl::Enabled;
    }
    NextControl::Missing
}
