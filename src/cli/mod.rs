//! Command-line interface for roster-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Link a membership roster to race results
//! - **sample**: Print one of the built-in sample rosters
//!
//! ## Usage
//!
//! ```text
//! # Match two files
//! roster-match match members.tsv results.tsv
//!
//! # Use home cities as evidence and emit JSON
//! roster-match -f json match members.tsv results.tsv --include-city
//!
//! # Results from stdin
//! curl -s https://example.org/results.txt | roster-match match members.csv -
//!
//! # Try it on the bundled data
//! roster-match sample members > members.tsv
//! roster-match sample results > results.tsv
//! ```

use clap::{Parser, Subcommand};

pub mod match_cmd;
pub mod sample;

#[derive(Parser)]
#[command(name = "roster-match")]
#[command(version)]
#[command(about = "Find club members in race results")]
#[command(
    long_about = "roster-match links a membership roster to published race results.\n\nNames are folded to a canonical form, candidates are blocked on surname, and each candidate is scored from name agreement (exact or nickname) and optionally home city. A greedy one-to-one assignment keeps the best-scoring pairs above a confidence threshold."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a membership roster against race results
    Match(match_cmd::MatchArgs),

    /// Print a built-in sample roster
    Sample(sample::SampleArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
