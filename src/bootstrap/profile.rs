//! Wire types of the random-profile API.

use crate::core::{Contact, ContactStatus};
use serde::Deserialize;

/// Id given to the bootstrapped contact. Bootstrap only runs on an empty
/// list, so it cannot collide.
pub const BOOTSTRAP_CONTACT_ID: u64 = 1;

/// Body of `GET /api/`.
#[derive(Clone, Debug, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<RandomUserProfile>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProfileName {
    pub first: String,
    pub last: String,
}

/// The fields of a generated profile the address book uses. Everything
/// else in the payload is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RandomUserProfile {
    pub name: ProfileName,
    pub email: String,
    pub phone: String,
}

impl RandomUserProfile {
    /// Turn the profile into the first contact of an empty address book.
    pub fn into_contact(self, status: ContactStatus) -> Contact {
        Contact {
            id: BOOTSTRAP_CONTACT_ID,
            status,
            name: format!("{} {}", self.name.first, self.name.last),
            email: self.email,
            phone: self.phone,
        }
    }
}
