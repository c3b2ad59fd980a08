//! Actions accepted by the address book reducer.

use super::contact::{Contact, ContactStatus};
use serde::{Deserialize, Serialize};

/// Every state change the address book supports.
///
/// Serialized as `{"type": "ADD_CONTACT", "payload": {...}}`. Any `type`
/// that is not one of the known tags deserializes to
/// [`Action::Unrecognized`], which the reducer ignores.
///
/// # Example
///
/// ```rust
/// use address_book::core::Action;
///
/// let action: Action = serde_json::from_str(r#"{"type":"DELETE_CONTACT","payload":3}"#).unwrap();
/// assert_eq!(action, Action::DeleteContact(3));
///
/// let unknown: Action = serde_json::from_str(r#"{"type":"RESET"}"#).unwrap();
/// assert_eq!(unknown, Action::Unrecognized);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Append a contact and switch the filter to its status.
    AddContact(Contact),
    /// Remove the contact with this id, if present.
    DeleteContact(u64),
    /// Replace the contact with the same id and switch the filter to its status.
    ChangeContact(Contact),
    /// Open a contact (or a new draft id), or close with `None`.
    SetSelectedContact(Option<u64>),
    /// Switch the visible status.
    SetStatusFilter(ContactStatus),
    #[serde(other)]
    Unrecognized,
}

impl Action {
    /// Get the action's tag for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddContact(_) => "ADD_CONTACT",
            Self::DeleteContact(_) => "DELETE_CONTACT",
            Self::ChangeContact(_) => "CHANGE_CONTACT",
            Self::SetSelectedContact(_) => "SET_SELECTED_CONTACT",
            Self::SetStatusFilter(_) => "SET_STATUS_FILTER",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Whether the action can change the contact list.
    pub fn touches_contacts(&self) -> bool {
        matches!(
            self,
            Self::AddContact(_) | Self::DeleteContact(_) | Self::ChangeContact(_)
        )
    }
}
