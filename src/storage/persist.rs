//! Contact list persistence on top of a key-value store.

use super::error::{LoadError, StoreError};
use super::KeyValueStore;
use crate::core::Contact;

/// Key the contact list is stored under.
pub const STORAGE_KEY: &str = "AddressBook";

/// Load the contact list stored under `key`.
///
/// A missing key or an empty value means "nothing stored yet" and yields
/// an empty list. A value that is not a JSON array of contacts is an
/// error, kept distinct from store failures.
pub fn load_contacts<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Vec<Contact>, LoadError> {
    let Some(raw) = store.read(key)? else {
        return Ok(Vec::new());
    };
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&raw).map_err(|source| LoadError::Malformed {
        key: key.to_string(),
        source,
    })
}

/// Store `contacts` under `key` as a JSON array.
pub fn save_contacts<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    contacts: &[Contact],
) -> Result<(), StoreError> {
    let json = serde_json::to_string(contacts)?;
    store.write(key, &json)?;
    tracing::debug!(key, count = contacts.len(), "persisted contacts");
    Ok(())
}
