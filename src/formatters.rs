//! Output formatters for submission results
//!
//! Turns the plain data produced by the submission flow into terminal text.

use colored::Colorize;

use crate::form::Field;
use crate::messages::outcome_message;
use crate::region::REGIONS;
use crate::submission::{SubmissionResult, Summary};
use crate::validation::ValidationOutcome;

/// Format the list of validation errors
pub fn format_errors(errors: &[String]) -> String {
    let mut output = vec![
        "Revisa los siguientes campos".bold().red().to_string(),
        "────────────────────────────".to_string(),
    ];

    for error in errors {
        output.push(format!("  • {}", error));
    }

    output.join("\n")
}

/// Format an accepted submission as aligned label/value rows
pub fn format_summary(summary: &Summary) -> String {
    let rows = summary.rows();
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count() + 1)
        .max()
        .unwrap_or(0);

    let mut output = vec![
        "Datos de la cita".bold().green().to_string(),
        "────────────────".to_string(),
    ];

    for (label, value) in rows {
        let label = format!("{}:", label);
        let padding = width.saturating_sub(label.chars().count());
        output.push(format!(
            "  {}{} {}",
            label.bold(),
            " ".repeat(padding),
            value
        ));
    }

    output.join("\n")
}

/// Format whichever payload a submission produced
pub fn format_result(result: &SubmissionResult) -> String {
    match result {
        SubmissionResult::Rejected { errors } => format_errors(errors),
        SubmissionResult::Accepted { summary } => format_summary(summary),
    }
}

/// Format a single field check
pub fn format_outcome(field: Field, outcome: &ValidationOutcome) -> String {
    match outcome_message(field, outcome) {
        Some(message) => format!("{} {}", "✗".red(), message),
        None => format!("{} {} válido", "✓".green(), field.display_label()),
    }
}

/// Format the full region table, one `code  name` line per entry
pub fn format_regions() -> String {
    REGIONS
        .iter()
        .map(|(code, name)| format!("  {}  {}", code.dimmed(), name))
        .collect::<Vec<_>>()
        .join("\n")
}
