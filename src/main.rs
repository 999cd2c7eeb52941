//! CLI entry point for optica.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use optica::config::Config;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "OPTICA_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ok = match cli.command {
        Commands::Region { postal_code } => {
            cmd::form::cmd_region(&postal_code)?;
            true
        }
        Commands::Regions => {
            cmd::form::cmd_regions()?;
            true
        }
        Commands::Check { field, value, json } => {
            let config = Config::load(cli.config.as_deref())?;
            cmd::form::cmd_check(&config, &field, &value, json)?
        }
        Commands::Submit(args) => {
            let config = Config::load(cli.config.as_deref())?;
            cmd::form::cmd_submit(&config, &args)?
        }
        Commands::Fill => {
            let config = Config::load(cli.config.as_deref())?;
            cmd::fill::cmd_fill(&config)?
        }
        Commands::Version => {
            cmd::util::cmd_version()?;
            true
        }
        Commands::Completions { shell } => {
            cmd::util::cmd_completion(shell)?;
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
