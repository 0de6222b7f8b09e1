//! DTOs for the reqres user-management API.

use serde::{Deserialize, Serialize};

/// Payload sent to create a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// The user's display name.
    pub name: String,
    /// The user's job title.
    pub job: String,
}

impl CreateUserRequest {
    /// Creates a new user payload.
    #[must_use]
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// Payload the service returns after creating a user.
///
/// Echoes the submitted fields and adds the server-assigned id and
/// creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserResponse {
    /// The submitted display name, echoed back.
    pub name: String,
    /// The submitted job title, echoed back.
    pub job: String,
    /// Server-assigned identifier.
    pub id: String,
    /// Server-side creation timestamp (ISO 8601).
    #[serde(rename = "createdAt")]
    pub created_at: String,
}
