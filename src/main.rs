use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster_match::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("roster_match=debug,info")
    } else {
        EnvFilter::new("roster_match=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Match(args) => {
            cli::match_cmd::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Sample(args) => {
            cli::sample::run(args)?;
        }
    }

    Ok(())
}
