//! KPI Fragment — renders the live-trading introduction paragraph of the landing page
//! from a JSON file of pre-formatted KPI values. The result is either the bare `<p>`
//! fragment or a landing-page JSON document wrapping it.
//!
//! Usage example (CLI):
//! ```bash
//! kpi_fragment --path ./kpi.json --missing-key error --format landing --output 00.json
//! ```
//!
//! Logs go to stderr (level via `RUST_LOG`), so stdout only carries the rendered output.
#![warn(missing_docs)]
mod args;
mod writer;

use crate::args::{Args, OutputFormat};
use crate::writer::OutputWriter;
use clap::Parser;
use kpi_common::FragmentError;
use kpi_common::FragmentRenderer;
use kpi_common::KpiSnapshot;
use kpi_common::Result;
use kpi_common::kpi::SnapshotParser;
use kpi_common::landing::LandingPage;
use log::{debug, error, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

fn main() -> Result<(), FragmentError> {
    init_logger();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("Rendering failed: {}", e);
        return Err(e);
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), FragmentError> {
    let file_path = normalize_path(&args.path);
    if !is_file_exist(&file_path) {
        return Err(FragmentError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("KPI file not found: {}", file_path.display()),
        )));
    }

    let snapshot = load_snapshot(&file_path)?;
    let renderer = FragmentRenderer::new(args.missing_key);
    info!(
        "Rendering live-trading fragment (missing-key={}, format={})",
        renderer.policy(),
        args.format
    );
    debug!("Required KPIs: {:?}", renderer.required_keys());

    let html = renderer.render(&snapshot)?;
    let output = match args.format {
        OutputFormat::Html => html,
        OutputFormat::Landing => LandingPage::new(&args.heading, html).to_json_pretty()?,
    };

    let output_path = args.output.as_deref().map(normalize_path);
    OutputWriter::write(output_path.as_deref(), &output)
}

fn load_snapshot(path: &PathBuf) -> Result<KpiSnapshot, FragmentError> {
    let file = File::open(path)?;
    let snapshot = KpiSnapshot::parse_from_reader(BufReader::new(file))?;
    info!("Loaded {} KPI entries from {}", snapshot.len(), path.display());
    Ok(snapshot)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
