//! CLI argument definitions for optica.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "optica")]
#[command(version)]
#[command(about = "Appointment request form with validation", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    optica fill                Fill the form interactively\n    optica submit --help       Submit all fields from the command line"
)]
pub struct Cli {
    /// Config file (default: $OPTICA_CONFIG or .optica/config.md)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the province for a postal code
    Region {
        /// Five-digit postal code
        postal_code: String,
    },
    /// List the postal-code prefix table
    Regions,
    /// Validate a single field value
    Check {
        /// Field identifier (name, email, phone, postalCode, type, desiredDate, acceptedTerms, comment, conditions)
        field: String,
        /// Value to check; lists are comma-separated
        #[arg(default_value = "", allow_hyphen_values = true)]
        value: String,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate and submit a complete form
    Submit(SubmitArgs),
    /// Fill the form interactively, validating each answer
    Fill,
    /// Show version, commit, and build date
    Version,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Field values for a non-interactive submission
#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub postal_code: String,
    /// Appointment type
    #[arg(long = "type", default_value = "")]
    pub appointment_type: String,
    /// Desired date (dd/mm/yyyy)
    #[arg(long, default_value = "")]
    pub date: String,
    #[arg(long, default_value = "")]
    pub comment: String,
    /// Condition to report (can be specified multiple times)
    #[arg(long = "condition", value_name = "CONDITION")]
    pub conditions: Vec<String>,
    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
