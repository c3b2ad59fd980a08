//! HTTP client for the random-profile API.

use super::error::BootstrapError;
use super::profile::{RandomUserProfile, RandomUserResponse};
use crate::config::BootstrapConfig;
use crate::core::{Contact, ContactStatus};
use std::time::Duration;

/// Fetches generated profiles used to seed an empty address book.
#[derive(Clone, Debug)]
pub struct RandomUserClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RandomUserClient {
    /// Build a client for the configured endpoint.
    ///
    /// Fails with [`BootstrapError::Disabled`] when bootstrap is switched off.
    pub fn new(config: &BootstrapConfig) -> Result<Self, BootstrapError> {
        if !config.enabled {
            return Err(BootstrapError::Disabled);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one profile.
    pub async fn fetch_profile(&self) -> Result<RandomUserProfile, BootstrapError> {
        let response: RandomUserResponse = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .results
            .into_iter()
            .next()
            .ok_or(BootstrapError::EmptyResults)
    }

    /// Fetch one profile and map it to the first contact.
    pub async fn fetch_contact(&self, status: ContactStatus) -> Result<Contact, BootstrapError> {
        let profile = self.fetch_profile().await?;
        Ok(profile.into_contact(status))
    }
}
