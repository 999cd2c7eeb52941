use chrono::NaiveDate;
use optica::form::{Field, FieldValue, FixedClock, FormModel};

/// Day the fixed clock reports in tests.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Builds a form that passes every validator, with per-field overrides.
pub struct FormBuilder {
    entries: Vec<(Field, FieldValue)>,
}

impl FormBuilder {
    /// All required fields filled with valid values; phone, comment and
    /// conditions left empty.
    pub fn valid() -> Self {
        Self {
            entries: vec![
                (Field::Name, "Lucía Fernández".into()),
                (Field::Email, "lucia.fernandez@example.es".into()),
                (Field::PostalCode, "08080".into()),
                (Field::Type, "Revisión visual".into()),
                (Field::DesiredDate, "03/12/2026".into()),
                (Field::AcceptedTerms, true.into()),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { entries: vec![] }
    }

    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.entries.push((field, value.into()));
        self
    }

    pub fn build(self) -> FormModel<FixedClock> {
        let mut form = FormModel::with_clock(FixedClock(test_today()));
        for (field, value) in self.entries {
            form.set_field(field, value).unwrap();
        }
        form
    }
}
