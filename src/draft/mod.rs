//! In-progress edits of a single contact.
//!
//! A draft is opened for whatever the state currently selects. It holds a
//! private copy of the contact plus edit flags and validation errors, and
//! turns user intent (save, cancel, delete) into actions for the reducer.
//! Drafts are never persisted; only committed contacts reach the state.

use crate::core::{Action, AddressBookState, Contact, ContactStatus};
use crate::validation::{Field, FieldErrors, ValidationSchema, VERIFY_FIELDS_MESSAGE};

/// Whether a draft edits an existing contact or creates a new one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DraftMode {
    /// The selected id exists; saving replaces it.
    Edit,
    /// The selected id is new; saving appends it.
    Create,
}

/// Transient edit state for the selected contact.
///
/// # Example
///
/// ```rust
/// use address_book::core::{reduce, AddressBookState};
/// use address_book::draft::{Draft, DraftMode};
/// use address_book::validation::{Field, ValidationSchema};
/// use address_book::core::Action;
///
/// let state = AddressBookState::default();
/// let state = reduce(&state, &Action::SetSelectedContact(state.next_contact_id()));
///
/// let mut draft = Draft::open(&state).unwrap();
/// assert_eq!(draft.mode(), DraftMode::Create);
///
/// draft.set_field(Field::Name, "Amy Pond");
/// draft.set_field(Field::Email, "amy@example.com");
/// draft.set_field(Field::Phone, "+44 20 7946 0000");
///
/// let actions = draft.save(ValidationSchema::contact()).unwrap();
/// let state = actions.iter().fold(state, |state, action| reduce(&state, action));
///
/// assert_eq!(state.contacts.len(), 1);
/// assert_eq!(state.selected, None);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Draft {
    contact: Contact,
    original: Option<Contact>,
    is_editing: bool,
    errors: FieldErrors,
}

impl Draft {
    /// Open a draft for the current selection.
    ///
    /// Returns `None` when nothing is selected. An existing contact opens
    /// read-only; an unknown id opens a blank contact in edit mode, tagged
    /// with the active status filter.
    pub fn open(state: &AddressBookState) -> Option<Self> {
        let selected = state.selected?;

        Some(match state.contact(selected) {
            Some(existing) => Self {
                contact: existing.clone(),
                original: Some(existing.clone()),
                is_editing: false,
                errors: FieldErrors::new(),
            },
            None => Self {
                contact: Contact::blank(selected, state.filters.status),
                original: None,
                is_editing: true,
                errors: FieldErrors::new(),
            },
        })
    }

    pub fn mode(&self) -> DraftMode {
        if self.original.is_some() {
            DraftMode::Edit
        } else {
            DraftMode::Create
        }
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Heading text: the draft name, or `"Name"` while it is empty.
    pub fn title(&self) -> &str {
        if self.contact.name.is_empty() {
            "Name"
        } else {
            &self.contact.name
        }
    }

    /// The generic banner shown while any field has an error.
    pub fn banner(&self) -> Option<&'static str> {
        (!self.errors.is_empty()).then_some(VERIFY_FIELDS_MESSAGE)
    }

    /// Update a field. Editing a field clears its error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.contact.set_field(field, value.into());
        self.errors.remove(field);
    }

    pub fn set_status(&mut self, status: ContactStatus) {
        self.contact.status = status;
    }

    pub fn start_editing(&mut self) {
        self.is_editing = true;
    }

    /// Abandon the current edit.
    ///
    /// Editing an existing contact reverts to the stored copy and returns
    /// to read-only; nothing is dispatched. Cancelling a new contact
    /// closes the draft.
    pub fn cancel(&mut self) -> Vec<Action> {
        match &self.original {
            Some(original) => {
                self.contact = original.clone();
                self.is_editing = false;
                self.errors.clear();
                Vec::new()
            }
            None => vec![Action::SetSelectedContact(None)],
        }
    }

    /// Validate and commit the draft.
    ///
    /// On failure the errors are kept on the draft (for per-field display
    /// and the banner) and returned; no action is produced. On success the
    /// draft leaves edit mode and the commit actions are returned: a
    /// change for existing contacts, an add followed by closing the draft
    /// for new ones.
    pub fn save(&mut self, schema: &ValidationSchema) -> Result<Vec<Action>, FieldErrors> {
        let errors = schema.validate(&self.contact);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        self.is_editing = false;
        self.errors.clear();

        Ok(match self.mode() {
            DraftMode::Edit => {
                self.original = Some(self.contact.clone());
                vec![Action::ChangeContact(self.contact.clone())]
            }
            DraftMode::Create => vec![
                Action::AddContact(self.contact.clone()),
                Action::SetSelectedContact(None),
            ],
        })
    }

    /// Delete the contact being viewed.
    ///
    /// Only existing contacts can be deleted; a new draft yields nothing.
    pub fn delete(&self) -> Vec<Action> {
        match self.mode() {
            DraftMode::Edit => vec![
                Action::SetSelectedContact(None),
                Action::DeleteContact(self.contact.id),
            ],
            DraftMode::Create => Vec::new(),
        }
    }
}
