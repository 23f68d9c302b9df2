// src/xlsx.rs
//! Spreadsheet input.
//!
//! Exported pharmacy lists often carry a title block above the real header.
//! The header is found by looking for the first row whose first cell is
//! numeric (a registration number) and taking the row above it.
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::config::consts::MAX_HEADER_SCAN_ROWS;
use crate::store::{DataSet, Value};

pub fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::Int(i) => Value::Int(*i),
        Data::Float(f) => Value::from_f64(*f),
        Data::String(s) if s.is_empty() => Value::Null,
        Data::String(s) => Value::Text(s.clone()),
        other => Value::Text(other.to_string()),
    }
}

fn is_numeric(v: &Value) -> bool {
    match v {
        Value::Int(_) | Value::Float(_) => true,
        Value::Text(s) => s.trim().parse::<f64>().is_ok(),
        Value::Null => false,
    }
}

/// Index of the header row within the first `max_scan` rows.
pub fn detect_header(rows: &[Vec<Value>], max_scan: usize) -> crate::Result<usize> {
    if rows.len() < 2 {
        return Err(crate::Error::TooFewRows);
    }
    let scan = max_scan.min(rows.len());

    for (i, row) in rows.iter().take(scan).enumerate() {
        if row.first().is_some_and(is_numeric) {
            return i.checked_sub(1).ok_or(crate::Error::HeaderNotFound);
        }
    }
    // nothing numeric up front: last scanned row is the header
    Ok(scan.saturating_sub(1))
}

/// Build a table from raw sheet rows using the detected header row.
pub fn from_rows(rows: Vec<Vec<Value>>, max_scan: usize) -> crate::Result<DataSet> {
    let header_ix = detect_header(&rows, max_scan)?;
    let mut rows = rows.into_iter().skip(header_ix);

    let headers = rows
        .next()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::Null => format!("Unnamed: {i}"),
            v => v.to_cell(),
        })
        .collect();

    let mut ds = DataSet::new(headers);
    for row in rows {
        ds.push_row(row);
    }
    Ok(ds)
}

/// First worksheet of `path`.
pub fn read_dataset(path: &Path) -> crate::Result<DataSet> {
    let mut wb = open_workbook_auto(path)?;
    let range = wb
        .worksheet_range_at(0)
        .ok_or_else(|| crate::Error::NoWorksheet(path.to_path_buf()))??;

    let rows = range
        .rows()
        .map(|r| r.iter().map(cell_value).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    from_rows(rows, MAX_HEADER_SCAN_ROWS)
}
