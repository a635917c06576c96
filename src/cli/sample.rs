use std::io::{self, Write};

use anyhow::Context;
use clap::{Args, ValueEnum};

use crate::samples::{sample_members, sample_results};

#[derive(Args)]
pub struct SampleArgs {
    /// Which roster to print
    #[arg(value_enum)]
    pub roster: SampleRoster,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SampleRoster {
    Members,
    Results,
}

/// Execute sample subcommand
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SampleArgs) -> anyhow::Result<()> {
    let text = match args.roster {
        SampleRoster::Members => sample_members(),
        SampleRoster::Results => sample_results(),
    };
    io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .context("Failed to write sample roster")?;
    Ok(())
}
