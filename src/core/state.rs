//! Address book state.
//!
//! The state is a plain value: the reducer produces a new one for every
//! action and the container swaps it in.

use super::contact::{Contact, ContactStatus};
use crate::grouping::{group_by, Groups};
use serde::{Deserialize, Serialize};

/// Active list filters.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Filters {
    pub status: ContactStatus,
}

/// Everything the address book keeps in memory.
///
/// `selected`, when set, is either the id of an existing contact (the
/// contact is open for viewing or editing) or an id that is not in
/// `contacts` yet (a new contact is being drafted under that id).
///
/// # Example
///
/// ```rust
/// use address_book::core::{AddressBookState, Contact, ContactStatus};
///
/// let state = AddressBookState::new(vec![
///     Contact::blank(1, ContactStatus::Work),
///     Contact::blank(3, ContactStatus::Work),
/// ]);
///
/// assert_eq!(state.next_contact_id(), Some(4));
/// assert!(state.selected.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct AddressBookState {
    pub contacts: Vec<Contact>,
    pub filters: Filters,
    pub selected: Option<u64>,
}

impl AddressBookState {
    /// Create a state holding `contacts`, filtered on `Work`, nothing selected.
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            filters: Filters::default(),
            selected: None,
        }
    }

    /// Set the initial status filter.
    pub fn with_status(mut self, status: ContactStatus) -> Self {
        self.filters.status = status;
        self
    }

    /// Look up a contact by id.
    pub fn contact(&self, id: u64) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    /// The selected contact, if the selection refers to an existing one.
    ///
    /// Returns `None` both when nothing is selected and when the selection
    /// is a draft id that has not been committed yet.
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected.and_then(|id| self.contact(id))
    }

    /// Id for the next new contact: `max(existing ids, 1) + 1`.
    ///
    /// Returns `None` once a contact holds `u64::MAX`.
    pub fn next_contact_id(&self) -> Option<u64> {
        self.contacts
            .iter()
            .map(|contact| contact.id)
            .fold(1, u64::max)
            .checked_add(1)
    }

    /// Contacts matching the active status filter, in insertion order.
    pub fn visible_contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        let status = self.filters.status;
        self.contacts
            .iter()
            .filter(move |contact| contact.status == status)
    }

    /// Visible contacts grouped by the first letter of their name.
    ///
    /// Contacts are stably sorted by initial before grouping, so groups come
    /// out in alphabetical order while contacts sharing an initial keep
    /// their insertion order.
    pub fn directory(&self) -> Groups<String, &Contact> {
        let mut visible: Vec<&Contact> = self.visible_contacts().collect();
        visible.sort_by_key(|contact| contact.initial());
        group_by(visible, |contact| contact.initial())
    }
}
