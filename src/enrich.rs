// src/enrich.rs
//! Fill register details into the input table.
//!
//! Rows are grouped by trading name so each distinct name costs one register
//! query. A hit is written to the *first* row in the whole table carrying the
//! same registration number, so duplicate numbers elsewhere share one write
//! and the last group processed wins. Groups run in ascending name order to
//! keep that deterministic.
use std::collections::BTreeMap;

use crate::config::consts::*;
use crate::log::Log;
use crate::progress::Progress;
use crate::scrape::{Record, RegisterQuery};
use crate::store::{DataSet, Value};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub groups: usize,
    pub matched: usize,
    pub missed: usize,
}

/// Rows sharing a trading name, keyed by the name as text. Null names are
/// left out.
pub fn name_groups(ds: &DataSet, name_col: usize) -> BTreeMap<String, Vec<usize>> {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, row) in ds.rows.iter().enumerate() {
        match row.get(name_col) {
            None | Some(Value::Null) => {}
            Some(name) => groups.entry(name.to_cell()).or_default().push(i),
        }
    }
    groups
}

/// Enrich `ds` in place. Only the four register columns are ever written;
/// row count and order never change.
pub fn enrich(
    ds: &mut DataSet,
    register: &mut dyn RegisterQuery,
    log: &dyn Log,
    mut progress: Option<&mut dyn Progress>,
) -> crate::Result<EnrichSummary> {
    let name_col = ds
        .column(COL_TRADING_NAME)
        .ok_or_else(|| crate::Error::MissingColumn(s!(COL_TRADING_NAME)))?;
    let id_col = ds
        .column(COL_REGISTRATION_NUMBER)
        .ok_or_else(|| crate::Error::MissingColumn(s!(COL_REGISTRATION_NUMBER)))?;

    let targets = ENRICHED_COLUMNS.map(|c| ds.ensure_column(c));
    let groups = name_groups(ds, name_col);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(groups.len());
    }

    let mut summary = EnrichSummary { groups: groups.len(), ..Default::default() };

    for (name, rows) in &groups {
        logi!(log, "Searching for {name}");
        let results = register.query(name, log);

        for &i in rows {
            let id = ds.get(i, id_col).cloned().unwrap_or_default();
            let Some(record) = results.get(&id.to_cell()) else {
                logw!(log, "No match found for {name} with ID {id}");
                summary.missed += 1;
                continue;
            };
            // first row in the table with this registration number
            let target = ds.rows.iter().position(|r| r.get(id_col) == Some(&id)).unwrap_or(i);
            write_record(ds, target, targets, record);
            summary.matched += 1;
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(name);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

fn write_record(ds: &mut DataSet, row: usize, cols: [usize; 4], record: &Record) {
    let [phone, web, superintendent, supervising] = cols;
    ds.set(row, phone, text!(record.phone.as_str()));
    ds.set(row, web, text!(record.website.as_str()));
    ds.set(row, superintendent, text!(record.superintendent_pharmacist.as_str()));
    ds.set(row, supervising, text!(record.supervising_pharmacist.as_str()));
}
