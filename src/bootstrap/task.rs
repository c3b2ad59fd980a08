//! Background bootstrap task.

use super::client::RandomUserClient;
use super::error::BootstrapError;
use crate::core::{Contact, ContactStatus};
use tokio::task::JoinHandle;

/// A spawned profile fetch, tied to the lifetime of its owner.
///
/// Dropping the task aborts the fetch, so a torn-down address book never
/// receives a late result.
pub struct BootstrapTask {
    handle: Option<JoinHandle<Result<Contact, BootstrapError>>>,
}

impl BootstrapTask {
    /// Start fetching the first contact on the current tokio runtime.
    ///
    /// `status` is captured now, matching the filter active when the
    /// fetch began.
    pub fn spawn(client: RandomUserClient, status: ContactStatus) -> Self {
        let handle = tokio::spawn(async move { client.fetch_contact(status).await });
        Self {
            handle: Some(handle),
        }
    }

    /// Abort the fetch. Joining afterwards yields [`BootstrapError::Cancelled`].
    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the fetch to finish.
    pub async fn join(mut self) -> Result<Contact, BootstrapError> {
        let Some(handle) = self.handle.take() else {
            return Err(BootstrapError::Cancelled);
        };

        match handle.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(BootstrapError::Cancelled),
            Err(err) => Err(BootstrapError::Panicked(err.to_string())),
        }
    }
}

impl Drop for BootstrapTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
