//! The address book transition function.

use super::action::Action;
use super::state::AddressBookState;

/// Compute the state that follows `action`.
///
/// This is a pure function: `state` is never mutated and the same inputs
/// always give the same output. Unrecognized actions return a copy of the
/// input.
///
/// Adding or changing a contact also moves the status filter to that
/// contact's status, so the contact stays visible after the edit.
///
/// # Example
///
/// ```rust
/// use address_book::core::{reduce, Action, AddressBookState, Contact, ContactStatus};
///
/// let state = AddressBookState::default();
/// let amy = Contact {
///     id: 2,
///     status: ContactStatus::Private,
///     name: "Amy".to_string(),
///     email: "amy@example.com".to_string(),
///     phone: "123".to_string(),
/// };
///
/// let next = reduce(&state, &Action::AddContact(amy.clone()));
///
/// assert_eq!(next.contacts, vec![amy]);
/// assert_eq!(next.filters.status, ContactStatus::Private);
/// assert!(state.contacts.is_empty()); // Original unchanged
/// ```
pub fn reduce(state: &AddressBookState, action: &Action) -> AddressBookState {
    let mut next = state.clone();

    match action {
        Action::AddContact(contact) => {
            next.filters.status = contact.status;
            next.contacts.push(contact.clone());
        }
        Action::DeleteContact(id) => {
            next.contacts.retain(|contact| contact.id != *id);
        }
        Action::ChangeContact(changed) => {
            next.filters.status = changed.status;
            if let Some(slot) = next.contacts.iter_mut().find(|c| c.id == changed.id) {
                *slot = changed.clone();
            }
        }
        Action::SetSelectedContact(selected) => {
            next.selected = *selected;
        }
        Action::SetStatusFilter(status) => {
            next.filters.status = *status;
        }
        Action::Unrecognized => {}
    }

    next
}
