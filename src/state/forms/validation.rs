//! Contact form validation rules

use super::field::{ContactFields, FieldName};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const NAME_MIN_CHARS: usize = 2;
const SUBJECT_MIN_CHARS: usize = 5;
const MESSAGE_MIN_CHARS: usize = 10;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const SUBJECT_TOO_SHORT: &str = "Subject must be at least 5 characters.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters.";

/// Loose `text@text.text` shape check. Unanchored, so a match anywhere in the
/// value is accepted.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex")
});

/// Per-field validation messages. Only failing fields have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Remove the error for a field. Returns true if one was present.
    pub fn clear(&mut self, field: FieldName) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate failing fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Check every rule against the given fields.
///
/// Pure: returns an empty mapping when all rules pass.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if trimmed_len(&fields.name) < NAME_MIN_CHARS {
        errors.insert(FieldName::Name, NAME_TOO_SHORT);
    }

    if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(FieldName::Email, EMAIL_INVALID);
    }

    if trimmed_len(&fields.subject) < SUBJECT_MIN_CHARS {
        errors.insert(FieldName::Subject, SUBJECT_TOO_SHORT);
    }

    if trimmed_len(&fields.message) < MESSAGE_MIN_CHARS {
        errors.insert(FieldName::Message, MESSAGE_TOO_SHORT);
    }

    errors
}
