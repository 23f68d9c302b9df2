// src/core/phone.rs
//! Irish phone numbers to `+353 …` form.
//!
//! The register stores numbers as free text: national (`01 234 5678`),
//! international (`+353 86 1234567`), with the area code in parentheses,
//! or with copy-paste debris in front. Everything that doesn't fold into a
//! known length comes back as `INVALID_NUMBER`.
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::INVALID_NUMBER;

const MOBILE_PREFIXES: [&str; 5] = ["83", "85", "86", "87", "89"];
const COUNTRY_PREFIXES: [&str; 3] = ["353", "00353", "+353"];

// `22605 (042) 9322605`: a five digit block glued in front of the area code
static LEADING_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d{5}\s*(\(0?\d{1,3}\))").expect("static regex")
});

static COUNTRY_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(00|\+)?353").expect("static regex")
});

/// Non-string cells (missing, numeric) are never valid numbers.
pub fn normalize_value(raw: Option<&str>) -> String {
    match raw {
        Some(s) => normalize(s),
        None => s!(INVALID_NUMBER),
    }
}

pub fn normalize(raw: &str) -> String {
    let num = LEADING_BLOCK.replace(raw, "$1");
    let num = collapse_dup_area(&num);
    let digits: String = num.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    let digits = COUNTRY_CODE.replace(&digits, "");
    let n = digits.trim_start_matches('0');

    classify(n).unwrap_or_else(|| s!(INVALID_NUMBER))
}

/// `353 71 (071) 9142696` -> `353 71 9142696`: an area code written bare and
/// again in parentheses keeps one copy. Every start position and every split
/// of `(cc)? (d{1,2}) ( 0? same-digits )` is tried, so `12 (02)` still
/// collapses on its `2 (02)` tail.
fn collapse_dup_area(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pos = 0usize;
    while let Some(ch) = s[pos..].chars().next() {
        match dup_area_at(&s[pos..]) {
            Some((len, cc, area)) => {
                out.push_str(cc);
                out.push(' ');
                out.push_str(area);
                pos += len;
            }
            None => {
                out.push(ch);
                pos += ch.len_utf8();
            }
        }
    }
    out
}

/// Match anchored at the start of `s`: `(byte length, country code, area)`.
fn dup_area_at(s: &str) -> Option<(usize, &str, &str)> {
    COUNTRY_PREFIXES
        .iter()
        .filter(|p| s.starts_with(**p))
        .map(|p| p.len())
        .chain(std::iter::once(0))
        .find_map(|cc| area_after(s, cc).map(|(end, area)| (end, &s[..cc], area)))
}

fn area_after(s: &str, from: usize) -> Option<(usize, &str)> {
    let at = skip_ws(s, from);
    let digits = s[at..].bytes().take(2).take_while(u8::is_ascii_digit).count();

    (1..=digits).rev().find_map(|n| {
        let area = &s[at..at + n];
        let inner = s[skip_ws(s, at + n)..].strip_prefix('(')?;
        let close = |body: &str| {
            let tail = body.strip_prefix(area)?.strip_prefix(')')?;
            Some(s.len() - tail.len())
        };
        inner.strip_prefix('0').and_then(&close).or_else(|| close(inner)).map(|end| (end, area))
    })
}

fn skip_ws(s: &str, from: usize) -> usize {
    s.len() - s[from..].trim_start().len()
}

fn classify(n: &str) -> Option<String> {
    // a `+` left mid-string (`1+2345678`) is rejected, not formatted
    if !n.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let len = n.len();
    let mobile = MOBILE_PREFIXES.iter().any(|p| n.starts_with(p));

    let out = match len {
        9 if mobile => format!("+353 {} {} {}", &n[..2], &n[2..5], &n[5..]),
        8 if n.starts_with('1') => format!("+353 {} {} {}", &n[..1], &n[1..4], &n[4..]),
        7 => format!("+353 {} {}", &n[..2], &n[2..]),
        8 | 9 => format!("+353 {} {} {}", &n[..2], &n[2..5], &n[5..]),
        _ => return None,
    };
    Some(out)
}
