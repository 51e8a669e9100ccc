//! Form field value objects

use serde::{Deserialize, Serialize};

/// The four inputs of the contact form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Key used for this field in the request body
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::Name => "username",
            Self::Email => "emailmsg",
            Self::Subject => "msgSubject",
            Self::Message => "message",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Position of the field in focus order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Text input bound to one [`Field`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field: Field,
    pub value: String,
}

impl FormField {
    /// Create a field with an initial value
    pub fn with_value(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn is_multiline(&self) -> bool {
        self.field.is_multiline()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value.
    /// Newlines are only accepted by multiline fields.
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline() {
            return;
        }
        self.value.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_keys_match_request_body() {
        assert_eq!(Field::Name.wire_key(), "username");
        assert_eq!(Field::Email.wire_key(), "emailmsg");
        assert_eq!(Field::Subject.wire_key(), "msgSubject");
        assert_eq!(Field::Message.wire_key(), "message");
    }

    #[test]
    fn test_index_round_trips_through_from_index() {
        for field in Field::ALL {
            assert_eq!(Field::from_index(field.index()), Some(field));
        }
        assert_eq!(Field::from_index(4), None);
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(Field::Message.is_multiline());
        assert!(!Field::Name.is_multiline());
        assert!(!Field::Email.is_multiline());
        assert!(!Field::Subject.is_multiline());
    }

    #[test]
    fn test_push_char_appends() {
        let mut field = FormField::with_value(Field::Name, "A");
        field.push_char('l');
        assert_eq!(field.as_text(), "Al");
        assert_eq!(field.label(), "Name");
    }

    #[test]
    fn test_single_line_field_ignores_newline() {
        let mut field = FormField::with_value(Field::Subject, "Hi");
        field.push_char('\n');
        assert_eq!(field.as_text(), "Hi");
    }

    #[test]
    fn test_multiline_field_accepts_newline() {
        let mut field = FormField::with_value(Field::Message, "line one");
        field.push_char('\n');
        assert_eq!(field.as_text(), "line one\n");
    }
}
