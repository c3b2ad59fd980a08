//! Contact records and their status tag.

use crate::validation::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag used to split the address book into separate lists.
///
/// Serialized as `"Work"` / `"Private"`, which is also the form stored
/// in persisted contact lists.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum ContactStatus {
    #[default]
    Work,
    Private,
}

impl ContactStatus {
    /// Every status, in display order.
    pub const ALL: [ContactStatus; 2] = [ContactStatus::Work, ContactStatus::Private];

    /// Get the status name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Private => "Private",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single address book entry.
///
/// Ids are assigned by the caller and are expected to be unique within
/// a contact list; nothing in the reducer checks this.
///
/// # Example
///
/// ```rust
/// use address_book::core::{Contact, ContactStatus};
///
/// let contact = Contact {
///     id: 1,
///     status: ContactStatus::Work,
///     name: "Amy Pond".to_string(),
///     email: "amy@example.com".to_string(),
///     phone: "+31 6 1234 5678".to_string(),
/// };
///
/// assert_eq!(contact.initial(), "A");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub status: ContactStatus,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Create an empty contact, used as the starting point of a new draft.
    pub fn blank(id: u64, status: ContactStatus) -> Self {
        Self {
            id,
            status,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }

    /// Current value of a validated field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    /// Replace the value of a validated field.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
        }
    }

    /// First character of the name, or an empty string for an unnamed contact.
    ///
    /// The directory listing groups contacts under this key.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amy() -> Contact {
        Contact {
            id: 7,
            status: ContactStatus::Private,
            name: "Amy".to_string(),
            email: "amy@example.com".to_string(),
            phone: "123".to_string(),
        }
    }

    #[test]
    fn status_serializes_as_plain_name() {
        assert_eq!(
            serde_json::to_string(&ContactStatus::Work).unwrap(),
            "\"Work\""
        );
        assert_eq!(
            serde_json::to_string(&ContactStatus::Private).unwrap(),
            "\"Private\""
        );
    }

    #[test]
    fn default_status_is_work() {
        assert_eq!(ContactStatus::default(), ContactStatus::Work);
        assert_eq!(ContactStatus::Private.to_string(), "Private");
    }

    #[test]
    fn contact_json_keeps_field_order() {
        let json = serde_json::to_string(&amy()).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"status":"Private","name":"Amy","email":"amy@example.com","phone":"123"}"#
        );
    }

    #[test]
    fn field_accessors_cover_every_field() {
        let mut contact = amy();
        contact.set_field(Field::Phone, "+1 555".to_string());

        assert_eq!(contact.field(Field::Name), "Amy");
        assert_eq!(contact.field(Field::Email), "amy@example.com");
        assert_eq!(contact.field(Field::Phone), "+1 555");
    }

    #[test]
    fn initial_handles_empty_and_multibyte_names() {
        assert_eq!(Contact::blank(1, ContactStatus::Work).initial(), "");

        let mut contact = amy();
        contact.name = "Émile".to_string();
        assert_eq!(contact.initial(), "É");
    }
}
