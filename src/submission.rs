//! Submission flow: validate everything, then report errors or a summary.
//!
//! The flow has two states. It starts `Idle` and moves to `Submitted` on
//! the first [`SubmissionFlow::submit`] call, whatever the result, so a
//! presentation layer can tell "never attempted" apart from "attempted and
//! still invalid".

use serde::Serialize;
use tracing::info;

use crate::form::{Clock, FormModel, FormValues};
use crate::messages::message_for;

/// Where the flow is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitted,
}

/// Display text substituted for empty optional values in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFallbacks {
    pub phone: String,
    pub conditions: String,
    pub comment: String,
    pub conditions_separator: String,
}

impl Default for SummaryFallbacks {
    fn default() -> Self {
        Self {
            phone: "No especificado".to_string(),
            conditions: "Ninguna".to_string(),
            comment: "Sin comentarios".to_string(),
            conditions_separator: ", ".to_string(),
        }
    }
}

/// Display-ready view of a successfully submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub postal_code: String,
    pub region: String,
    pub r#type: String,
    pub conditions: String,
    pub desired_date: String,
    pub comment: String,
}

impl Summary {
    /// Build a summary from raw values, applying the display fallbacks.
    pub fn from_values(values: &FormValues, fallbacks: &SummaryFallbacks) -> Self {
        let or_fallback = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        let conditions = if values.conditions.is_empty() {
            fallbacks.conditions.clone()
        } else {
            values.conditions.join(&fallbacks.conditions_separator)
        };

        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            phone: or_fallback(&values.phone, &fallbacks.phone),
            postal_code: values.postal_code.clone(),
            region: values.region.clone(),
            r#type: values.r#type.clone(),
            conditions,
            desired_date: values.desired_date.clone(),
            comment: or_fallback(&values.comment, &fallbacks.comment),
        }
    }

    /// Labeled rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 9] {
        [
            ("Nombre", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Teléfono", self.phone.as_str()),
            ("Código Postal", self.postal_code.as_str()),
            ("Provincia", self.region.as_str()),
            ("Tipo", self.r#type.as_str()),
            ("Dolencias", self.conditions.as_str()),
            ("Fecha deseada", self.desired_date.as_str()),
            ("Comentarios", self.comment.as_str()),
        ]
    }
}

/// What a submission attempt produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SubmissionResult {
    /// Form was invalid; one message per invalid field, in report order
    Rejected { errors: Vec<String> },
    Accepted { summary: Summary },
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted { .. })
    }

    pub fn errors(&self) -> &[String] {
        match self {
            SubmissionResult::Rejected { errors } => errors,
            SubmissionResult::Accepted { .. } => &[],
        }
    }

    pub fn summary(&self) -> Option<&Summary> {
        match self {
            SubmissionResult::Accepted { summary } => Some(summary),
            SubmissionResult::Rejected { .. } => None,
        }
    }
}

/// Drives submission of a [`FormModel`].
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlow {
    state: SubmissionState,
    fallbacks: SummaryFallbacks,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallbacks(fallbacks: SummaryFallbacks) -> Self {
        Self {
            state: SubmissionState::Idle,
            fallbacks,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// True once `submit` has been called at least once.
    pub fn was_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Validate the whole form and produce errors or a summary.
    pub fn submit<C: Clock>(&mut self, form: &FormModel<C>) -> SubmissionResult {
        self.state = SubmissionState::Submitted;

        if !form.is_valid() {
            let errors: Vec<String> = form
                .violations()
                .iter()
                .map(|(field, kind)| message_for(*field, kind))
                .collect();
            info!(error_count = errors.len(), "submission rejected");
            return SubmissionResult::Rejected { errors };
        }

        let summary = Summary::from_values(&form.snapshot(), &self.fallbacks);
        info!(region = %summary.region, "submission accepted");
        SubmissionResult::Accepted { summary }
    }
}
