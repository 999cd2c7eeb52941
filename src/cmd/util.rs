//! Utility commands (version, completion).

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Show version information
pub fn cmd_version() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_SHA: &str = env!("GIT_SHA");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    println!("optica {}", VERSION);
    println!("commit: {}", GIT_SHA);
    println!("built: {}", BUILD_DATE);

    Ok(())
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "optica", &mut io::stdout());
    Ok(())
}
