//! Non-interactive form commands: region, regions, check, submit.

use anyhow::{Context, Result};
use colored::Colorize;

use optica::config::Config;
use optica::form::{Field, FieldValue, FormModel};
use optica::formatters::{format_outcome, format_regions, format_result};
use optica::region::{region_for, UNKNOWN_REGION};
use optica::submission::{SubmissionFlow, SubmissionResult};

use crate::cli::SubmitArgs;

/// Print the region for a postal code
pub fn cmd_region(postal_code: &str) -> Result<()> {
    let region = region_for(postal_code);
    if region.is_empty() {
        anyhow::bail!(
            "'{}' is not a 5-character postal code, no region can be derived",
            postal_code
        );
    }

    if region == UNKNOWN_REGION {
        println!("{}", region.yellow());
    } else {
        println!("{}", region);
    }
    Ok(())
}

/// Print the prefix table
pub fn cmd_regions() -> Result<()> {
    println!("{}", format_regions());
    Ok(())
}

/// Validate one field value. Returns whether it was valid.
pub fn cmd_check(config: &Config, field: &str, value: &str, json: bool) -> Result<bool> {
    let mut form = FormModel::new().with_rules(config.form.rules());
    let outcome = form
        .on_field_change(field, value)
        .with_context(|| format!("Cannot check field '{}'", field))?;
    let field: Field = field.parse()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", format_outcome(field, &outcome));
        if field == Field::PostalCode && !form.region().is_empty() {
            println!("  Provincia: {}", form.region());
        }
    }

    Ok(outcome.is_valid())
}

/// Build a form from command-line values
fn form_from_args(config: &Config, args: &SubmitArgs) -> Result<FormModel> {
    let mut form = FormModel::new().with_rules(config.form.rules());

    let text_fields = [
        (Field::Name, &args.name),
        (Field::Email, &args.email),
        (Field::Phone, &args.phone),
        (Field::PostalCode, &args.postal_code),
        (Field::Type, &args.appointment_type),
        (Field::DesiredDate, &args.date),
        (Field::Comment, &args.comment),
    ];
    for (field, value) in text_fields {
        form.set_field(field, value.as_str())?;
    }
    form.set_field(Field::Conditions, FieldValue::List(args.conditions.clone()))?;
    form.set_field(Field::AcceptedTerms, args.accept_terms)?;

    Ok(form)
}

/// Print a submission result in the requested format
pub fn print_result(result: &SubmissionResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", format_result(result));
    }
    Ok(())
}

/// Validate and submit the whole form. Returns whether it was accepted.
pub fn cmd_submit(config: &Config, args: &SubmitArgs) -> Result<bool> {
    let form = form_from_args(config, args)?;
    let mut flow = SubmissionFlow::with_fallbacks(config.display.fallbacks());
    let result = flow.submit(&form);

    print_result(&result, args.json)?;
    Ok(result.is_accepted())
}
