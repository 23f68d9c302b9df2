// src/bin/cli.rs
use psi_scrape::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
