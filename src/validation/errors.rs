//! Field identifiers and per-field validation errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Banner shown alongside field messages whenever a save is blocked.
pub const VERIFY_FIELDS_MESSAGE: &str = "Please verify if all fields are filled correctly.";

/// Contact fields that carry validation rules.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    /// Input name of the field (`"name"`, `"email"`, `"phone"`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Resolve an input name back to its field.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single failed rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Field to message mapping produced by validation.
///
/// Holds at most one message per field: the message of the first rule the
/// field failed. An empty mapping means the record is valid.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Record a message for `field`, keeping an existing one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl<'a> FromIterator<&'a FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = &'a FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error.field, error.message.clone());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("status"), None);
    }

    #[test]
    fn insert_keeps_first_message() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "first");
        errors.insert(Field::Email, "second");

        assert_eq!(errors.get(Field::Email), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn remove_clears_single_field() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, "missing");
        errors.insert(Field::Phone, "bad");

        assert_eq!(errors.remove(Field::Name).as_deref(), Some("missing"));
        assert!(!errors.contains(Field::Name));
        assert!(errors.contains(Field::Phone));
    }

    #[test]
    fn serializes_as_field_keyed_map() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Phone, "bad phone");
        errors.insert(Field::Name, "empty");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"name":"empty","phone":"bad phone"}"#);
    }

    #[test]
    fn field_error_displays_field_and_message() {
        let error = FieldError {
            field: Field::Email,
            message: "This must be a correct email address.".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "email: This must be a correct email address."
        );
    }
}
