//! Interactive form wizard.
//!
//! Each answer goes through `FormModel::on_field_change` as soon as it is
//! entered; invalid answers are reported and asked again.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use optica::config::Config;
use optica::form::{Clock, Field, FieldValue, FormModel};
use optica::messages::outcome_message;
use optica::submission::SubmissionFlow;
use optica::validation::format_desired_date;

use super::form::print_result;

/// Ask for a text field until the validator accepts it.
fn prompt_text<C: Clock>(
    form: &mut FormModel<C>,
    field: Field,
    hint: Option<&str>,
) -> Result<()> {
    let prompt = match hint {
        Some(hint) => format!("{} ({})", field.display_label(), hint),
        None => field.display_label().to_string(),
    };

    loop {
        let raw: String = Input::new()
            .with_prompt(&prompt)
            .allow_empty(true)
            .interact_text()?;

        let outcome = form.on_field_change(field.as_str(), raw.trim())?;
        match outcome_message(field, &outcome) {
            Some(message) => eprintln!("  {} {}", "✗".red(), message),
            None => return Ok(()),
        }
    }
}

/// Run the wizard and submit. Returns whether the submission was accepted.
pub fn cmd_fill(config: &Config) -> Result<bool> {
    let mut form = FormModel::new().with_rules(config.form.rules());

    println!("{}", "Solicitud de cita".bold());
    println!();

    prompt_text(&mut form, Field::Name, None)?;
    prompt_text(&mut form, Field::Email, None)?;
    prompt_text(&mut form, Field::Phone, Some("opcional"))?;
    prompt_text(&mut form, Field::PostalCode, None)?;
    println!("  Provincia: {}", form.region().cyan());

    let type_idx = Select::new()
        .with_prompt(Field::Type.display_label())
        .items(&config.appointment_types)
        .default(0)
        .interact()?;
    form.set_field(Field::Type, config.appointment_types[type_idx].as_str())?;

    let selected = MultiSelect::new()
        .with_prompt("Dolencias (espacio para marcar)")
        .items(&config.conditions)
        .interact()?;
    let conditions: Vec<String> = selected
        .into_iter()
        .map(|idx| config.conditions[idx].clone())
        .collect();
    form.set_field(Field::Conditions, FieldValue::List(conditions))?;

    let today_hint = format!("dd/mm/aaaa, desde {}", format_desired_date(form.today()));
    prompt_text(&mut form, Field::DesiredDate, Some(&today_hint))?;

    let comment: String = Input::new()
        .with_prompt("Comentarios")
        .allow_empty(true)
        .interact_text()?;
    form.set_field(Field::Comment, comment.trim())?;

    let accepted = Confirm::new()
        .with_prompt(Field::AcceptedTerms.display_label())
        .default(false)
        .interact()?;
    form.set_field(Field::AcceptedTerms, accepted)?;

    println!();
    let mut flow = SubmissionFlow::with_fallbacks(config.display.fallbacks());
    let result = flow.submit(&form);
    print_result(&result, false)?;

    Ok(result.is_accepted())
}
