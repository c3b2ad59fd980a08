//! Field validation for contacts.
//!
//! A schema maps each field to an ordered list of regex rules. Validation
//! reports, for every field, the message of the first rule the value does
//! not match, using Stillwater's `Validation` type to accumulate ALL
//! failing fields instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use address_book::core::{Contact, ContactStatus};
//! use address_book::validation::{Field, ValidationSchema};
//!
//! let contact = Contact {
//!     id: 2,
//!     status: ContactStatus::Work,
//!     name: "Jo".to_string(),
//!     email: "not-an-email".to_string(),
//!     phone: "abc".to_string(),
//! };
//!
//! let errors = ValidationSchema::contact().validate(&contact);
//! assert!(errors.contains(Field::Email));
//! assert!(errors.contains(Field::Phone));
//! assert!(!errors.contains(Field::Name));
//! ```

pub mod builder;
pub mod errors;
pub mod patterns;
pub mod rules;

pub use builder::SchemaBuilder;
pub use errors::{Field, FieldError, FieldErrors, VERIFY_FIELDS_MESSAGE};
pub use rules::{Rule, ValidationSchema};
