//! Raw form values and the request payload built from them

use super::field::Field;
use serde::{Deserialize, Serialize};

/// The four user-entered values of the contact form.
///
/// Missing keys deserialize as empty strings so partially populated input is
/// validated rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Build the body posted to the contact endpoint
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            username: self.name.clone(),
            emailmsg: self.email.clone(),
            msg_subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// JSON body of `POST /user/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub username: String,
    pub emailmsg: String,
    #[serde(rename = "msgSubject")]
    pub msg_subject: String,
    pub message: String,
}
