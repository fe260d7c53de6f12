//! Command-line arguments for the fragment renderer.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};
use kpi_common::MissingKeyPolicy;
use kpi_common::landing::DEFAULT_HEADING;
use strum_macros::Display;

/// Shape of the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// The bare `<p>` fragment.
    Html,
    /// A landing-page JSON document with the fragment as its content.
    Landing,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON file with the KPI values, e.g.
    /// {"live-algorithms-count": "50,000", "volume-traded": "$100 billion"}.
    #[clap(long)]
    pub path: String,

    /// What to do when a KPI is missing or empty.
    #[clap(long, value_enum, default_value_t = MissingKeyPolicy::Empty)]
    pub missing_key: MissingKeyPolicy,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Heading of the landing document (only used with `--format landing`).
    #[clap(long, default_value = DEFAULT_HEADING)]
    pub heading: String,

    /// Write the result to this file instead of stdout.
    #[clap(long)]
    pub output: Option<String>,
}
