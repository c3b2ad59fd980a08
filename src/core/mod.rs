//! Core address book types and logic.
//!
//! This module contains the pure functional core of the address book:
//! - Contacts and their status tag
//! - The state value and its queries
//! - Actions and the reducer that applies them
//! - Guard predicates for deferred dispatches
//! - An immutable dispatch log
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod action;
mod contact;
mod guard;
mod history;
mod reducer;
mod state;

pub use action::Action;
pub use contact::{Contact, ContactStatus};
pub use guard::Guard;
pub use history::{DispatchLog, DispatchRecord, DEFAULT_LOG_LIMIT};
pub use reducer::reduce;
pub use state::{AddressBookState, Filters};
