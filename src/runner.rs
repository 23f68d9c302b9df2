// src/runner.rs
//! One run end to end.
//!
//! `prepare` does every check that can fail without touching the register:
//! file types, existence, loading, required columns. The caller only starts
//! the browser once that has succeeded, then hands a register to `execute`.
use std::path::PathBuf;

use crate::config::{FileType, RunOptions};
use crate::diff::{self, ChangeLog};
use crate::enrich::{self, EnrichSummary};
use crate::file::{check_filetype, load_dataset, require_columns, save_dataset};
use crate::log::Log;
use crate::progress::Progress;
use crate::scrape::RegisterQuery;
use crate::store::DataSet;
use crate::Result;

/// Inputs loaded and validated, ready to scrape.
pub struct PreparedRun {
    pub opts: RunOptions,
    pub input: DataSet,
    pub previous: Option<DataSet>,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub enrich: EnrichSummary,
    pub output: PathBuf,
    pub change_log: Option<(PathBuf, ChangeLog)>,
}

pub fn prepare(opts: RunOptions, log: &dyn Log) -> Result<PreparedRun> {
    check_filetype(&opts.input, opts.input_type, true)?;
    check_filetype(&opts.output, FileType::Csv, false)?;
    if let Some(prev) = &opts.current_data {
        check_filetype(prev, FileType::Csv, true)?;
        check_filetype(&opts.change_log, FileType::Csv, false)?;
    }

    let input = load_dataset(&opts.input, opts.input_type)?;
    require_columns(&input)?;
    logi!(log, "Loaded {} rows from {}", input.len(), opts.input.display());

    let previous = match &opts.current_data {
        Some(prev) => {
            let ds = load_dataset(prev, FileType::Csv)?;
            logi!(log, "Loaded {} rows from {}", ds.len(), prev.display());
            Some(ds)
        }
        None => None,
    };

    Ok(PreparedRun { opts, input, previous })
}

impl PreparedRun {
    /// Enrich, write the output, then diff against the previous snapshot
    /// and write the change log if one was given.
    pub fn execute(
        self,
        register: &mut dyn RegisterQuery,
        log: &dyn Log,
        progress: Option<&mut dyn Progress>,
    ) -> Result<RunSummary> {
        let PreparedRun { opts, mut input, previous } = self;

        let summary = enrich::enrich(&mut input, register, log, progress)?;
        logi!(
            log,
            "Enriched {} groups: {} matched, {} unmatched",
            summary.groups, summary.matched, summary.missed
        );

        save_dataset(&input, &opts.output)?;

        let change_log = match previous {
            Some(old) => {
                let changes = diff::diff(&old, &input)?;
                save_dataset(&changes.to_dataset(), &opts.change_log)?;
                logi!(log, "{} changes written to {}", changes.len(), opts.change_log.display());
                Some((opts.change_log.clone(), changes))
            }
            None => None,
        };

        Ok(RunSummary { enrich: summary, output: opts.output, change_log })
    }
}
