//! The address book state container.
//!
//! [`AddressBook`] is the imperative shell around the pure core: it owns
//! the current state, the dispatch log and the store, runs every action
//! through [`reduce`], and mirrors the contact list to storage whenever it
//! changes. Views hold a reference to it instead of reaching for shared
//! global state.

use crate::bootstrap::{BootstrapError, BootstrapTask, RandomUserClient};
use crate::core::{
    reduce, Action, AddressBookState, Contact, ContactStatus, DispatchLog, DispatchRecord, Guard,
};
use crate::draft::Draft;
use crate::grouping::Groups;
use crate::storage::{load_contacts, save_contacts, KeyValueStore, LoadError, StoreError};
use chrono::Utc;

mod error;

pub use error::BookError;

/// Owner of the address book state and its persisted mirror.
///
/// # Example
///
/// ```rust
/// use address_book::book::AddressBook;
/// use address_book::core::ContactStatus;
/// use address_book::storage::{MemoryStore, STORAGE_KEY};
///
/// let mut book = AddressBook::open(MemoryStore::new(), STORAGE_KEY).unwrap();
///
/// book.set_status_filter(ContactStatus::Private).unwrap();
/// book.begin_create().unwrap();
///
/// assert_eq!(book.state().selected, Some(2));
/// assert!(book.open_draft().is_some());
/// ```
pub struct AddressBook<S: KeyValueStore> {
    state: AddressBookState,
    log: DispatchLog,
    store: S,
    key: String,
    bootstrap_guard: Guard<AddressBookState>,
}

impl<S: KeyValueStore> AddressBook<S> {
    /// Open the address book stored under `key`.
    ///
    /// A missing or empty value starts an empty book; a malformed value is
    /// returned as [`LoadError::Malformed`] and the store is left untouched.
    pub fn open(store: S, key: impl Into<String>) -> Result<Self, LoadError> {
        let key = key.into();
        let contacts = load_contacts(&store, &key)?;
        tracing::debug!(key = %key, count = contacts.len(), "loaded contacts");
        Ok(Self::with_contacts(store, key, contacts))
    }

    /// Open the address book stored under `key`, starting empty when the
    /// stored value cannot be read.
    ///
    /// The unreadable value stays in the store until the first change
    /// overwrites it.
    pub fn open_or_default(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        match load_contacts(&store, &key) {
            Ok(contacts) => Self::with_contacts(store, key, contacts),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "discarding stored contacts");
                Self::with_contacts(store, key, Vec::new())
            }
        }
    }

    fn with_contacts(store: S, key: String, contacts: Vec<Contact>) -> Self {
        Self {
            state: AddressBookState::new(contacts),
            log: DispatchLog::bounded(),
            store,
            key,
            bootstrap_guard: Guard::contacts_empty(),
        }
    }

    /// Set the status filter active before any action is dispatched.
    pub fn with_status(mut self, status: ContactStatus) -> Self {
        self.state = self.state.with_status(status);
        self
    }

    /// Get current state (pure)
    pub fn state(&self) -> &AddressBookState {
        &self.state
    }

    /// Get the dispatch log (pure)
    pub fn log(&self) -> &DispatchLog {
        &self.log
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Reduce `action` into the current state.
    ///
    /// When the contact list changed it is written to the store. A failed
    /// write is returned, but the new state is kept: memory stays the
    /// source of truth and the next change retries the write.
    pub fn dispatch(&mut self, action: Action) -> Result<&AddressBookState, StoreError> {
        let next = reduce(&self.state, &action);
        let contacts_changed = next.contacts != self.state.contacts;

        tracing::debug!(action = action.name(), contacts_changed, "dispatch");

        self.log.push(DispatchRecord {
            action,
            timestamp: Utc::now(),
            contacts_changed,
        });
        self.state = next;

        if contacts_changed {
            if let Err(err) = save_contacts(&mut self.store, &self.key, &self.state.contacts) {
                tracing::error!(key = %self.key, error = %err, "failed to persist contacts");
                return Err(err);
            }
        }

        Ok(&self.state)
    }

    /// Dispatch several actions in order, stopping at the first store failure.
    pub fn apply(
        &mut self,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<&AddressBookState, StoreError> {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(&self.state)
    }

    /// Select a fresh id so a new contact can be drafted.
    ///
    /// Fails with [`BookError::IdsExhausted`] when a stored contact already
    /// holds `u64::MAX`; the state is left untouched.
    pub fn begin_create(&mut self) -> Result<&AddressBookState, BookError> {
        let Some(id) = self.state.next_contact_id() else {
            return Err(BookError::IdsExhausted);
        };
        Ok(self.dispatch(Action::SetSelectedContact(Some(id)))?)
    }

    pub fn select(&mut self, id: u64) -> Result<&AddressBookState, StoreError> {
        self.dispatch(Action::SetSelectedContact(Some(id)))
    }

    /// Clear the selection.
    pub fn close(&mut self) -> Result<&AddressBookState, StoreError> {
        self.dispatch(Action::SetSelectedContact(None))
    }

    pub fn set_status_filter(
        &mut self,
        status: ContactStatus,
    ) -> Result<&AddressBookState, StoreError> {
        self.dispatch(Action::SetStatusFilter(status))
    }

    /// Draft for the current selection, if any.
    pub fn open_draft(&self) -> Option<Draft> {
        Draft::open(&self.state)
    }

    /// Visible contacts grouped by initial.
    pub fn directory(&self) -> Groups<String, &Contact> {
        self.state.directory()
    }

    /// Whether the list is empty and should be seeded.
    ///
    /// Seeding never happens on its own. The list can become empty again
    /// after deletes, so callers re-check this after each dispatch that
    /// removes contacts and call [`AddressBook::start_bootstrap`] again.
    pub fn needs_bootstrap(&self) -> bool {
        self.bootstrap_guard.check(&self.state)
    }

    /// Start fetching a seed contact when the list is empty.
    ///
    /// The contact takes the status filter active right now. Must be called
    /// from within a tokio runtime.
    pub fn start_bootstrap(&self, client: RandomUserClient) -> Option<BootstrapTask> {
        if !self.needs_bootstrap() {
            return None;
        }
        tracing::debug!(endpoint = client.endpoint(), "starting bootstrap");
        Some(BootstrapTask::spawn(client, self.state.filters.status))
    }

    /// Apply the outcome of a bootstrap fetch.
    ///
    /// Fetch failures are logged and swallowed. A fetched contact is added
    /// only if the list is still empty; returns whether it was added.
    pub fn complete_bootstrap(
        &mut self,
        outcome: Result<Contact, BootstrapError>,
    ) -> Result<bool, StoreError> {
        let contact = match outcome {
            Ok(contact) => contact,
            Err(err) => {
                tracing::warn!(error = %err, "bootstrap failed");
                return Ok(false);
            }
        };

        if !self.needs_bootstrap() {
            tracing::debug!("contacts added meanwhile, dropping bootstrap result");
            return Ok(false);
        }

        self.dispatch(Action::AddContact(contact))?;
        Ok(true)
    }
}
