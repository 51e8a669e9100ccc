//! Declarative validation rules for the contact form
//!
//! All rules live in [`RULES`]; [`validate`] is a pure function of the form
//! values. For each field the first failing constraint provides the message.

use crate::state::forms::{Field, FormValues};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// HTML living-standard "valid e-mail address" shape
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// A single check applied to a field value
///
/// Length limits count Unicode scalar values, so an astral-plane character
/// such as an emoji counts once. Browser-side schema libraries count UTF-16
/// code units and would count it twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MaxChars(usize),
    MinChars(usize),
    Email,
}

impl Constraint {
    /// Returns the error message if `value` violates this constraint
    pub fn check(&self, value: &str) -> Option<String> {
        match *self {
            Self::Required => value.is_empty().then(|| "Required".to_string()),
            Self::MaxChars(max) => (value.chars().count() > max)
                .then(|| format!("Must be {max} characters or less")),
            Self::MinChars(min) => (value.chars().count() < min)
                .then(|| format!("Must be at least {min} characters")),
            Self::Email => {
                (!EMAIL_RE.is_match(value)).then(|| "Invalid email address".to_string())
            }
        }
    }
}

/// Constraint list per field, checked in order
pub const RULES: [(Field, &[Constraint]); 4] = [
    (Field::Name, &[Constraint::Required, Constraint::MaxChars(20)]),
    (Field::Email, &[Constraint::Required, Constraint::Email]),
    (Field::Subject, &[Constraint::Required, Constraint::MaxChars(10)]),
    (Field::Message, &[Constraint::Required, Constraint::MinChars(20)]),
];

/// Per-field validation messages. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Validate a single field against its rules
pub fn validate_field(field: Field, values: &FormValues) -> Option<String> {
    let value = values.get(field);
    RULES
        .iter()
        .find(|(f, _)| *f == field)
        .and_then(|(_, constraints)| constraints.iter().find_map(|c| c.check(value)))
}

/// Validate every field
pub fn validate(values: &FormValues) -> FieldErrors {
    FieldErrors(
        Field::ALL
            .iter()
            .filter_map(|field| validate_field(*field, values).map(|msg| (*field, msg)))
            .collect(),
    )
}
