//! Address Book: a pure functional contact manager core
//!
//! The address book follows the "pure core, imperative shell" philosophy.
//! State changes are a pure reducer over a small set of actions; storage,
//! logging and the remote bootstrap fetch live in the shell around it.
//!
//! # Core Concepts
//!
//! - **State**: contacts, the active status filter and the selected id
//! - **Actions**: the only way to change state, applied by [`core::reduce`]
//! - **Drafts**: uncommitted edits that validate before producing actions
//! - **Storage**: the contact list is mirrored to a key-value store
//!
//! # Example
//!
//! ```rust
//! use address_book::book::AddressBook;
//! use address_book::storage::{MemoryStore, STORAGE_KEY};
//! use address_book::validation::{Field, ValidationSchema};
//!
//! let mut book = AddressBook::open(MemoryStore::new(), STORAGE_KEY).unwrap();
//! book.begin_create().unwrap();
//!
//! let mut draft = book.open_draft().unwrap();
//! draft.set_field(Field::Name, "Rory Williams");
//! draft.set_field(Field::Email, "rory@example.com");
//! draft.set_field(Field::Phone, "+44 20 7946 0001");
//!
//! let actions = draft.save(ValidationSchema::contact()).unwrap();
//! book.apply(actions).unwrap();
//!
//! assert_eq!(book.directory().get("R").map(Vec::len), Some(1));
//! ```

pub mod book;
pub mod bootstrap;
pub mod config;
pub mod core;
pub mod draft;
pub mod grouping;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use book::{AddressBook, BookError};
pub use self::core::{reduce, Action, AddressBookState, Contact, ContactStatus};
pub use draft::Draft;
pub use grouping::group_by;
pub use validation::{Field, FieldErrors, ValidationSchema};
