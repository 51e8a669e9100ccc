//! Contact form state: values, touched fields, focus and submission flag

use super::field::{Field, FormField};
use super::values::{ContactMessage, FormValues};
use crate::state::validation::{self, FieldErrors};
use std::collections::BTreeSet;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Whether a submission is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
}

/// Why [`ContactForm::begin_submit`] declined to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not settled yet
    AlreadyPending,
    /// At least one field failed validation
    Invalid(FieldErrors),
}

/// The contact form.
///
/// Focus index 0..=3 maps to the four fields, index 4 is the submit button.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub values: FormValues,
    touched: BTreeSet<Field>,
    submit_attempted: bool,
    submission: SubmissionState,
    pub active_field_index: usize,
}

/// Focus index of the submit button
pub const BUTTON_INDEX: usize = 4;

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form pre-populated with values
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// The focused input, or `None` when the submit button has focus
    pub fn focused_field(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    /// Returns true if the submit button is focused
    pub fn is_button_active(&self) -> bool {
        self.active_field_index == BUTTON_INDEX
    }

    /// Snapshot of a field for rendering
    pub fn field(&self, field: Field) -> FormField {
        FormField::with_value(field, self.values.get(field))
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            let mut input = self.field(field);
            input.push_char(c);
            *self.values.get_mut(field) = input.value;
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            self.values.get_mut(field).pop();
        }
    }

    /// Mark a field as interacted with so its error becomes visible
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Current validation result for all fields
    pub fn errors(&self) -> FieldErrors {
        validation::validate(&self.values)
    }

    /// Error for `field`, only once it was touched or a submit was attempted
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if self.submit_attempted || self.is_touched(field) {
            validation::validate_field(field, &self.values)
        } else {
            None
        }
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_pending(&self) -> bool {
        self.submission == SubmissionState::Pending
    }

    /// Start a submission.
    ///
    /// Marks every field touched and re-validates. On success the form moves
    /// to [`SubmissionState::Pending`] and the request body is returned.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitBlocked> {
        if self.is_pending() {
            return Err(SubmitBlocked::AlreadyPending);
        }

        self.submit_attempted = true;
        self.touched.extend(Field::ALL);

        let errors = self.errors();
        if !errors.is_empty() {
            return Err(SubmitBlocked::Invalid(errors));
        }

        self.submission = SubmissionState::Pending;
        Ok(self.values.to_message())
    }

    /// Return to [`SubmissionState::Idle`]
    pub fn finish_submit(&mut self) {
        self.submission = SubmissionState::Idle;
    }

    /// Clear values, touched fields and the submit-attempted flag
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched.clear();
        self.submit_attempted = false;
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, subject, message, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Moving focus away from a field counts as a blur and touches it
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(BUTTON_INDEX);
        if index != self.active_field_index {
            if let Some(field) = self.focused_field() {
                self.touch(field);
            }
        }
        self.active_field_index = index;
    }
}
