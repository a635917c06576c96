use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::AssignmentPolicy;
use crate::matching::engine::{MatchingConfig, MatchingEngine};

#[derive(Args)]
pub struct MatchArgs {
    /// Membership roster (`Name[, City]` or `First, Last, City` per line)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub members: PathBuf,

    /// Race results (bib, name, city, and any further columns per line)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub results: PathBuf,

    /// Use home city agreement as evidence
    #[arg(long)]
    pub include_city: bool,

    /// JSON file with matching configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    // === Scoring weight options ===
    /// Prior probability that a member ran the race (default 0.5)
    #[arg(long)]
    pub prob_member_in_race: Option<f64>,

    /// Confidence in an exact-name candidate (default 0.9)
    #[arg(long)]
    pub total_right: Option<f64>,

    /// Confidence in a nickname candidate (default 0.6)
    #[arg(long)]
    pub total_nickname: Option<f64>,

    /// Pairs must score strictly above this to be reported (default 0.2)
    #[arg(long)]
    pub min_confidence: Option<f64>,

    /// Report every pair above the threshold instead of a one-to-one assignment
    #[arg(long)]
    pub allow_many: bool,
}

impl MatchArgs {
    /// Config file (or defaults) with command-line values layered on top
    fn build_config(&self) -> anyhow::Result<MatchingConfig> {
        let mut config = match &self.config {
            Some(path) => MatchingConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => MatchingConfig::default(),
        };

        let weights = &mut config.scoring_weights;
        if let Some(value) = self.prob_member_in_race {
            weights.prob_member_in_race = value;
        }
        if let Some(value) = self.total_right {
            weights.total_right = value;
        }
        if let Some(value) = self.total_nickname {
            weights.total_nickname = value;
        }
        if let Some(value) = self.min_confidence {
            config.min_confidence = value;
        }
        if self.include_city {
            config.include_city = true;
        }
        if self.allow_many {
            config.policy = AssignmentPolicy::AllAboveThreshold;
        }
        Ok(config)
    }
}

/// Execute match subcommand
///
/// # Errors
///
/// Returns an error if an input or the config file cannot be read, or if
/// the report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if is_stdin(&args.members) && is_stdin(&args.results) {
        bail!("Only one of MEMBERS and RESULTS can be read from stdin");
    }

    let config = args.build_config()?;
    let members_text = read_input(&args.members)?;
    let results_text = read_input(&args.results)?;

    let engine = MatchingEngine::new(config);
    let report = engine.run(&members_text, &results_text);

    if verbose {
        eprintln!(
            "Parsed {} members ({} malformed) and {} results ({} malformed); {} candidate pairs",
            report.member_stats.records,
            report.member_stats.malformed,
            report.result_stats.records,
            report.result_stats.malformed,
            report.candidate_count,
        );
    }

    let rendered = match format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Tsv => report.to_tsv(),
        OutputFormat::Json => {
            let mut json = report.to_json()?;
            json.push('\n');
            json
        }
    };

    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("Failed to write report")?;
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.to_string_lossy() == "-"
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
