//! Guard predicates over address book state.
//!
//! Guards are pure boolean functions checked right before an action is
//! dispatched. They replace locks: with a single writer, re-checking the
//! condition at dispatch time is enough to avoid stale updates.

use super::state::AddressBookState;

/// Pure predicate that determines if a deferred action may still run.
///
/// # Example
///
/// ```rust
/// use address_book::core::{AddressBookState, Contact, ContactStatus, Guard};
///
/// let empty = Guard::contacts_empty();
///
/// assert!(empty.check(&AddressBookState::default()));
/// assert!(!empty.check(&AddressBookState::new(vec![Contact::blank(1, ContactStatus::Work)])));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows the action for this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl Guard<AddressBookState> {
    /// Passes only while the contact list is empty.
    ///
    /// Used to keep a late bootstrap result from landing in a list the user
    /// has already started filling.
    pub fn contacts_empty() -> Self {
        Guard::new(|state: &AddressBookState| state.contacts.is_empty())
    }
}
