// src/cli.rs
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::eyre;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::consts::*;
use crate::config::{FileType, RunOptions, ScrapeOptions};
use crate::log::TracingLog;
use crate::progress::Progress;
use crate::runner;
use crate::scrape::Register;
use crate::scrape::browser::BrowserSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    Csv,
    Xlsx,
}

impl From<InputKind> for FileType {
    fn from(k: InputKind) -> Self {
        match k { InputKind::Csv => FileType::Csv, InputKind::Xlsx => FileType::Xlsx }
    }
}

/// Enrich a pharmacy list from the PSI register and log changes against a
/// previous snapshot.
#[derive(Debug, Parser)]
#[command(name = "psi_scrape", version)]
pub struct Args {
    /// Path to file with data to search
    #[arg(long)]
    pub input_file: PathBuf,

    /// Input filetype
    #[arg(long, value_enum)]
    pub filetype: InputKind,

    /// Path to output file
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Path to current dataset in csv format
    #[arg(long)]
    pub current_data: Option<PathBuf>,

    /// Where the change log goes when --current-data is given
    #[arg(long, default_value = CHANGE_LOG_FILE)]
    pub change_log: PathBuf,

    #[arg(long, default_value = LOG_FILE)]
    pub log_file: PathBuf,

    /// Register search page
    #[arg(long, default_value = REGISTER_URL)]
    pub url: String,

    /// Show the browser window
    #[arg(long)]
    pub headful: bool,

    /// Debug-level log lines
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            input: self.input_file.clone(),
            input_type: self.filetype.into(),
            output: self.output_file.clone(),
            current_data: self.current_data.clone(),
            change_log: self.change_log.clone(),
        }
    }

    pub fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions { url: self.url.clone(), headless: !self.headful, ..ScrapeOptions::default() }
    }
}

struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{wide_bar:.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }
}

impl Progress for BarProgress {
    fn begin(&mut self, total: usize) {
        self.bar.set_length(total as u64);
    }
    fn item_done(&mut self, name: &str) {
        self.bar.set_message(name.to_string());
        self.bar.inc(1);
    }
    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

fn init_tracing(path: &Path, verbose: bool) -> color_eyre::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| eyre!("failed to initialize logging: {e}"))?;
    Ok(())
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(&args.log_file, args.verbose)?;
    let log = TracingLog;

    // all input checks happen before the browser starts
    let prepared = runner::prepare(args.run_options(), &log)?;
    println!("Processing {} rows...\n", prepared.input.len());

    let scrape = args.scrape_options();
    let max_pages = scrape.max_pages;
    let source = BrowserSource::launch(scrape).map_err(|e| {
        loge!(&log, "Failed to initialise browser: {e}");
        crate::Error::from(e)
    })?;
    let mut register = Register::new(source).with_max_pages(max_pages);
    let mut progress = BarProgress::new();

    let result = prepared.execute(&mut register, &log, Some(&mut progress));
    register.into_source().close();
    let summary = result?;

    match summary.change_log {
        Some((path, _)) => println!(
            "Updated file at {}. Changes detailed at {}",
            summary.output.display(),
            path.display()
        ),
        None => println!("Updated file at {}", summary.output.display()),
    }
    Ok(())
}
