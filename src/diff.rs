// src/diff.rs
//! Field-level change log between two snapshots of the same table.
//!
//! Rows are matched on `(Registration Number, Trading Name)`, both stringified
//! and trimmed. Only columns present on both sides are compared. Output order
//! is fixed: removed (old order), added (new order), then updated (old order,
//! and within a row, old column order).
use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

use crate::config::consts::*;
use crate::store::{DataSet, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Side::Old => "previous", Side::New => "current" })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("{side} snapshot has no '{column}' column")]
    MissingKeyColumn { column: &'static str, side: Side },

    #[error("{side} snapshot lists ({registration_number}, {trading_name}) more than once")]
    DuplicateKey { side: Side, registration_number: String, trading_name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeType {
    Added,
    Removed,
    Updated,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Removed => "removed",
            ChangeType::Updated => "updated",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEntry {
    pub trading_name: String,
    pub registration_number: String,
    pub change_type: ChangeType,
    /// Column name for updates, empty otherwise.
    pub field_changed: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeLog {
    pub entries: Vec<ChangeEntry>,
}

impl ChangeLog {
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn iter(&self) -> std::slice::Iter<'_, ChangeEntry> { self.entries.iter() }

    pub fn count(&self, kind: ChangeType) -> usize {
        self.entries.iter().filter(|e| e.change_type == kind).count()
    }

    fn push(&mut self, key: &Key, change_type: ChangeType, field: &str) {
        self.entries.push(ChangeEntry {
            trading_name: key.1.clone(),
            registration_number: key.0.clone(),
            change_type,
            field_changed: field.to_string(),
        });
    }

    /// Table form for persisting: Trading Name, Registration Number,
    /// change_type, field_changed.
    pub fn to_dataset(&self) -> DataSet {
        let mut ds = DataSet::new(
            [COL_TRADING_NAME, COL_REGISTRATION_NUMBER, COL_CHANGE_TYPE, COL_FIELD_CHANGED]
                .map(String::from)
                .to_vec(),
        );
        for e in &self.entries {
            ds.push_row(vec![
                text!(e.trading_name.as_str()),
                text!(e.registration_number.as_str()),
                text!(e.change_type.as_str()),
                text!(e.field_changed.as_str()),
            ]);
        }
        ds
    }
}

impl<'a> IntoIterator for &'a ChangeLog {
    type Item = &'a ChangeEntry;
    type IntoIter = std::slice::Iter<'a, ChangeEntry>;
    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

/// `(registration number, trading name)`
type Key = (String, String);

fn key_text(v: &Value) -> String {
    v.to_cell().trim().to_string()
}

/// One side restricted to the shared columns and indexed by key.
struct Indexed<'a> {
    keys: Vec<Key>,
    rows: Vec<&'a [Value]>,
    /// Key -> position in `keys`/`rows`
    index: HashMap<Key, usize>,
    /// Column positions in the source table, in diff-column order
    cols: Vec<usize>,
}

fn index<'a>(ds: &'a DataSet, side: Side, common: &[&str]) -> Result<Indexed<'a>, DiffError> {
    let col = |name: &'static str| {
        ds.column(name).ok_or(DiffError::MissingKeyColumn { column: name, side })
    };
    let id_col = col(COL_REGISTRATION_NUMBER)?;
    let name_col = col(COL_TRADING_NAME)?;

    let cols = common
        .iter()
        .filter_map(|c| ds.column(c))
        .collect::<Vec<_>>();

    let mut out = Indexed {
        keys: Vec::with_capacity(ds.len()),
        rows: Vec::with_capacity(ds.len()),
        index: HashMap::with_capacity(ds.len()),
        cols,
    };

    for row in &ds.rows {
        let cell = |c: usize| row.get(c).map(key_text).unwrap_or_default();
        let key = (cell(id_col), cell(name_col));
        if out.index.contains_key(&key) {
            return Err(DiffError::DuplicateKey {
                side,
                registration_number: key.0,
                trading_name: key.1,
            });
        }
        out.index.insert(key.clone(), out.keys.len());
        out.keys.push(key);
        out.rows.push(row.as_slice());
    }
    Ok(out)
}

/// Non-key columns present in both tables, in `old`'s column order.
pub fn diff_columns<'a>(old: &'a DataSet, new: &DataSet) -> Vec<&'a str> {
    let theirs: HashSet<&str> = new.headers.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    old.headers
        .iter()
        .map(String::as_str)
        .filter(|h| theirs.contains(h) && seen.insert(*h))
        .filter(|h| *h != COL_REGISTRATION_NUMBER && *h != COL_TRADING_NAME)
        .collect()
}

pub fn diff(old: &DataSet, new: &DataSet) -> Result<ChangeLog, DiffError> {
    let common = diff_columns(old, new);
    let old_ix = index(old, Side::Old, &common)?;
    let new_ix = index(new, Side::New, &common)?;

    let mut log = ChangeLog::default();

    for key in old_ix.keys.iter().filter(|k| !new_ix.index.contains_key(*k)) {
        log.push(key, ChangeType::Removed, "");
    }
    for key in new_ix.keys.iter().filter(|k| !old_ix.index.contains_key(*k)) {
        log.push(key, ChangeType::Added, "");
    }

    for (pos, key) in old_ix.keys.iter().enumerate() {
        let Some(&other) = new_ix.index.get(key) else { continue };
        let (a, b) = (old_ix.rows[pos], new_ix.rows[other]);

        for (field, (&ca, &cb)) in common.iter().zip(old_ix.cols.iter().zip(&new_ix.cols)) {
            let va = a.get(ca).unwrap_or(&Value::Null);
            let vb = b.get(cb).unwrap_or(&Value::Null);
            if va != vb {
                log.push(key, ChangeType::Updated, field);
            }
        }
    }

    Ok(log)
}
