//! Seeding an empty address book from a remote profile.
//!
//! When the persisted list is empty, one generated profile is fetched and
//! added as contact `1`. The fetch runs as a tokio task owned by the
//! caller; its result is applied through
//! [`AddressBook::complete_bootstrap`](crate::book::AddressBook::complete_bootstrap),
//! which re-checks that the list is still empty before adding anything.

mod client;
pub mod error;
mod profile;
mod task;

pub use client::RandomUserClient;
pub use error::BootstrapError;
pub use profile::{ProfileName, RandomUserProfile, RandomUserResponse, BOOTSTRAP_CONTACT_ID};
pub use task::BootstrapTask;
