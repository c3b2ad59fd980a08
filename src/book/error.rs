//! Address book container errors.

use crate::storage::StoreError;
use thiserror::Error;

/// Errors raised when starting a new contact.
#[derive(Debug, Error)]
pub enum BookError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The largest stored id leaves no room for another contact
    #[error("No contact id left after u64::MAX")]
    IdsExhausted,
}
