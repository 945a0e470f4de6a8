use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{SignupError, SignupResult};

/// Discriminator tag stored alongside every user record.
pub const USER_TYPENAME: &str = "User";

/// A confirmed user, as persisted in the users table.
///
/// Serialized field names match the stored item shape:
/// `{UserID, Email, Name, CreatedAt, __typename}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "UserID")]
    pub user_id: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "__typename")]
    pub typename: String,
}

impl UserRecord {
    /// Build a record from the trigger event's user attributes.
    ///
    /// `sub`, `email`, and `name` are all required; `created_at` is the
    /// handling-time timestamp stamped by the caller.
    pub fn from_user_attributes(
        attributes: &HashMap<String, String>,
        created_at: DateTime<Utc>,
    ) -> SignupResult<Self> {
        let user_id = attributes
            .get("sub")
            .ok_or_else(|| SignupError::ValidationError("sub not found in user attributes".to_string()))?;
        let email = attributes
            .get("email")
            .ok_or_else(|| SignupError::ValidationError("email not found in user attributes".to_string()))?;
        let name = attributes
            .get("name")
            .ok_or_else(|| SignupError::ValidationError("name not found in user attributes".to_string()))?;

        Ok(Self {
            user_id: user_id.clone(),
            email: email.clone(),
            name: name.clone(),
            created_at,
            typename: USER_TYPENAME.to_string(),
        })
    }
}
