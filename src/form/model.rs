//! The form model: current values, per-field outcomes, overall validity.

use std::collections::BTreeSet;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::values::{FieldValue, FormValues};
use super::{Field, FormError};
use crate::region::region_for;
use crate::validation::{
    validate_accepted_terms, validate_comment, validate_conditions, validate_desired_date,
    validate_email, validate_name_with_min, validate_phone, validate_postal_code, validate_type,
    ValidationOutcome, ViolationKind, NAME_MIN_LENGTH,
};

/// Tunable parameters of the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub name_min_length: usize,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            name_min_length: NAME_MIN_LENGTH,
        }
    }
}

/// Holds the form's values and answers validity questions about them.
///
/// Outcomes are always computed from the current values, so fields the
/// user never touched still report `Required` where applicable.
#[derive(Debug, Clone)]
pub struct FormModel<C: Clock = SystemClock> {
    values: FormValues,
    touched: BTreeSet<Field>,
    rules: FormRules,
    clock: C,
}

impl FormModel<SystemClock> {
    /// Empty form validated against the system date.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FormModel<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FormModel<C> {
    /// Empty form using `clock` as the source of today's date.
    pub fn with_clock(clock: C) -> Self {
        Self {
            values: FormValues::default(),
            touched: BTreeSet::new(),
            rules: FormRules::default(),
            clock,
        }
    }

    pub fn with_rules(mut self, rules: FormRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> FormRules {
        self.rules
    }

    /// Store `value` in `field` and return the field's new outcome.
    ///
    /// Writing the postal code recomputes the region. Writing the region
    /// itself is rejected.
    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Result<ValidationOutcome, FormError> {
        self.values.write(field, value.into())?;
        self.touched.insert(field);

        if field == Field::PostalCode {
            self.values.region = region_for(&self.values.postal_code);
            debug!(
                postal_code = %self.values.postal_code,
                region = %self.values.region,
                "region recomputed"
            );
        }

        let outcome = self.outcome(field);
        debug!(field = %field, ?outcome, "field updated");
        Ok(outcome)
    }

    /// Entry point for a UI layer reporting a raw edit by field identifier.
    pub fn on_field_change(
        &mut self,
        name: &str,
        raw: &str,
    ) -> Result<ValidationOutcome, FormError> {
        let field: Field = name.parse()?;
        if !field.is_writable() {
            return Err(FormError::ReadOnlyField(field));
        }
        let value = FieldValue::parse_for(field, raw)?;
        self.set_field(field, value)
    }

    /// Current outcome of one field's validator.
    pub fn outcome(&self, field: Field) -> ValidationOutcome {
        let v = &self.values;
        match field {
            Field::Name => validate_name_with_min(&v.name, self.rules.name_min_length),
            Field::Email => validate_email(&v.email),
            Field::Phone => validate_phone(&v.phone),
            Field::PostalCode => validate_postal_code(&v.postal_code),
            Field::Type => validate_type(&v.r#type),
            Field::DesiredDate => validate_desired_date(&v.desired_date, self.clock.today()),
            Field::AcceptedTerms => validate_accepted_terms(v.accepted_terms),
            Field::Comment => validate_comment(&v.comment),
            Field::Conditions => validate_conditions(&v.conditions),
            Field::Region => ValidationOutcome::Valid,
        }
    }

    /// Outcomes for every field, in report order.
    pub fn outcomes(&self) -> Vec<(Field, ValidationOutcome)> {
        Field::ALL
            .iter()
            .map(|field| (*field, self.outcome(*field)))
            .collect()
    }

    /// Invalid fields and their violations, in report order.
    pub fn violations(&self) -> Vec<(Field, ViolationKind)> {
        self.outcomes()
            .into_iter()
            .filter_map(|(field, outcome)| outcome.violation().map(|kind| (field, kind)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.outcome(*field).is_valid())
    }

    /// Whether the user has written this field since the form was created.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Owned copy of all values, including the derived region.
    pub fn snapshot(&self) -> FormValues {
        self.values.clone()
    }

    pub fn region(&self) -> &str {
        &self.values.region
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn valid_form() -> FormModel<FixedClock> {
        let mut form = FormModel::with_clock(clock());
        form.set_field(Field::Name, "Ana García").unwrap();
        form.set_field(Field::Email, "ana@example.com").unwrap();
        form.set_field(Field::PostalCode, "28001").unwrap();
        form.set_field(Field::Type, "Revisión visual").unwrap();
        form.set_field(Field::DesiredDate, "20/11/2026").unwrap();
        form.set_field(Field::AcceptedTerms, true).unwrap();
        form
    }

    // =========================================================================
    // REGION DERIVATION
    // =========================================================================

    #[test]
    fn test_postal_code_sets_region() {
        let mut form = FormModel::with_clock(clock());
        form.set_field(Field::PostalCode, "08080").unwrap();
        assert_eq!(form.region(), "Barcelona");

        form.set_field(Field::PostalCode, "080").unwrap();
        assert_eq!(form.region(), "");

        form.set_field(Field::PostalCode, "99999").unwrap();
        assert_eq!(form.region(), "Desconocida");
    }

    #[test]
    fn test_region_cannot_be_written() {
        let mut form = FormModel::with_clock(clock());
        form.set_field(Field::PostalCode, "28001").unwrap();

        let err = form.on_field_change("region", "Sevilla").unwrap_err();
        assert!(matches!(err, FormError::ReadOnlyField(Field::Region)));
        let err = form.set_field(Field::Region, "Sevilla").unwrap_err();
        assert!(matches!(err, FormError::ReadOnlyField(Field::Region)));
        assert_eq!(form.region(), "Madrid");
    }

    #[test]
    fn test_set_field_is_idempotent() {
        let mut once = FormModel::with_clock(clock());
        let first = once.set_field(Field::PostalCode, "2800").unwrap();

        let mut twice = FormModel::with_clock(clock());
        twice.set_field(Field::PostalCode, "2800").unwrap();
        let second = twice.set_field(Field::PostalCode, "2800").unwrap();

        assert_eq!(first, second);
        assert_eq!(once.region(), twice.region());
        assert_eq!(once.snapshot(), twice.snapshot());
    }

    // =========================================================================
    // OUTCOMES AND VALIDITY
    // =========================================================================

    #[test]
    fn test_empty_form_is_invalid_with_required_fields() {
        let form = FormModel::with_clock(clock());
        assert!(!form.is_valid());

        let violations = form.violations();
        let fields: Vec<Field> = violations.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::PostalCode,
                Field::Type,
                Field::DesiredDate,
                Field::AcceptedTerms,
            ]
        );
        assert!(violations
            .iter()
            .all(|(_, kind)| *kind == ViolationKind::Required));
    }

    #[test]
    fn test_valid_form() {
        let form = valid_form();
        assert!(form.is_valid(), "{:?}", form.violations());
        assert!(form.violations().is_empty());
    }

    #[test]
    fn test_set_field_returns_field_outcome() {
        let mut form = FormModel::with_clock(clock());
        assert_eq!(
            form.set_field(Field::Name, "Al").unwrap(),
            ValidationOutcome::Invalid(ViolationKind::TooShort { min: 3 })
        );
        assert_eq!(
            form.on_field_change("desiredDate", "18/10/2026").unwrap(),
            ValidationOutcome::Invalid(ViolationKind::DateInPast)
        );
    }

    #[test]
    fn test_flipping_any_single_field_invalidates_form() {
        let breakers: Vec<(Field, FieldValue)> = vec![
            (Field::Name, "Al".into()),
            (Field::Name, "".into()),
            (Field::Email, "ana".into()),
            (Field::Phone, "512345678".into()),
            (Field::PostalCode, "2800".into()),
            (Field::Type, "".into()),
            (Field::DesiredDate, "31/02/2030".into()),
            (Field::DesiredDate, "01/01/2020".into()),
            (Field::AcceptedTerms, false.into()),
        ];

        for (field, value) in breakers {
            let mut form = valid_form();
            assert!(form.is_valid());
            let outcome = form.set_field(field, value.clone()).unwrap();
            assert!(!outcome.is_valid(), "{} = {:?}", field, value);
            assert!(!form.is_valid(), "{} = {:?}", field, value);
            assert_eq!(form.violations().len(), 1);
        }
    }

    #[test]
    fn test_is_valid_matches_conjunction_of_outcomes() {
        let form = valid_form();
        let all_valid = form.outcomes().iter().all(|(_, o)| o.is_valid());
        assert_eq!(form.is_valid(), all_valid);

        let empty = FormModel::with_clock(clock());
        let all_valid = empty.outcomes().iter().all(|(_, o)| o.is_valid());
        assert_eq!(empty.is_valid(), all_valid);
    }

    #[test]
    fn test_custom_rules() {
        let mut form =
            FormModel::with_clock(clock()).with_rules(FormRules { name_min_length: 5 });
        assert_eq!(
            form.set_field(Field::Name, "Ana").unwrap(),
            ValidationOutcome::Invalid(ViolationKind::TooShort { min: 5 })
        );
    }

    // =========================================================================
    // RAW INPUT
    // =========================================================================

    #[test]
    fn test_on_field_change_parses_raw_values() {
        let mut form = FormModel::with_clock(clock());
        form.on_field_change("acceptedTerms", "true").unwrap();
        form.on_field_change("conditions", "Miopía, Presbicia").unwrap();
        form.on_field_change("postal_code", "41001").unwrap();

        let snapshot = form.snapshot();
        assert!(snapshot.accepted_terms);
        assert_eq!(snapshot.conditions, vec!["Miopía", "Presbicia"]);
        assert_eq!(snapshot.region, "Sevilla");
    }

    #[test]
    fn test_on_field_change_unknown_field() {
        let mut form = FormModel::with_clock(clock());
        let err = form.on_field_change("provincia", "x").unwrap_err();
        assert!(matches!(err, FormError::UnknownField(_)));
    }

    #[test]
    fn test_touched_tracking() {
        let mut form = FormModel::with_clock(clock());
        assert!(!form.is_touched(Field::Email));
        form.set_field(Field::Email, "").unwrap();
        assert!(form.is_touched(Field::Email));
        assert!(!form.is_touched(Field::Name));
    }
}
