//! Contact form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Template parameter name used by the delivery service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "user_name",
            Self::Email => "user_email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name *",
            Self::Email => "Email *",
            Self::Subject => "Subject *",
            Self::Message => "Message *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What is this regarding?",
            Self::Message => "Tell me about your project, ideas, or just say hello...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Position of the field in the form, matching `ALL`
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

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-entered values of the contact form.
///
/// Serializes with the template parameter names the EmailJS template expects,
/// so the struct can be sent as `template_params` directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(rename = "user_name")]
    pub name: String,
    #[serde(rename = "user_email")]
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Subject => self.subject = value,
            FieldName::Message => self.message = value,
        }
    }

    /// True when every field is an empty string
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Get the display value for rendering, falling back to the placeholder
    pub fn display_value(&self, field: FieldName) -> &str {
        let value = self.get(field);
        if value.is_empty() {
            field.placeholder()
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let fields = ContactFields::default();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_set_and_get_each_field() {
        let mut fields = ContactFields::default();
        for field in FieldName::ALL {
            fields.set(field, field.as_str().to_uppercase());
        }
        assert_eq!(fields.get(FieldName::Name), "USER_NAME");
        assert_eq!(fields.get(FieldName::Email), "USER_EMAIL");
        assert_eq!(fields.get(FieldName::Subject), "SUBJECT");
        assert_eq!(fields.get(FieldName::Message), "MESSAGE");
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_index_round_trips_through_from_index() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_index(field.index()), Some(field));
        }
        assert_eq!(FieldName::from_index(4), None);
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(FieldName::Message.is_multiline());
        assert!(!FieldName::Name.is_multiline());
        assert!(!FieldName::Email.is_multiline());
        assert!(!FieldName::Subject.is_multiline());
    }

    #[test]
    fn test_serializes_with_template_param_names() {
        let fields = ContactFields {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a message.".to_string(),
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["user_name"], "Al");
        assert_eq!(json["user_email"], "a@b.com");
        assert_eq!(json["subject"], "Hello there");
        assert_eq!(json["message"], "This is a message.");
    }

    #[test]
    fn test_display_value_uses_placeholder_when_empty() {
        let mut fields = ContactFields::default();
        assert_eq!(fields.display_value(FieldName::Name), "Your full name");
        fields.set(FieldName::Name, "Ada".to_string());
        assert_eq!(fields.display_value(FieldName::Name), "Ada");
    }
}
