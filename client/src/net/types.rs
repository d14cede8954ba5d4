//! Wire DTOs for the session endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so `/auth/me` bodies
//! deserialize without an intermediate shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role of the signed-in user within their organization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Owner,
    Admin,
    User,
    Auditor,
}

impl UserRole {
    /// Human-readable role name for dashboard chrome.
    pub fn label(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Auditor => "Auditor",
        }
    }
}

/// The authenticated identity returned by `GET /auth/me`.
///
/// Replaced wholesale on every resolution; never patched in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque user identifier.
    pub id: String,
    /// Organization the user belongs to.
    pub org_id: String,
    pub email: String,
    pub role: UserRole,
    /// Optional display name; may be absent or `null`.
    #[serde(default)]
    pub name: Option<String>,
    /// Account creation timestamp as sent by the backend (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Display name, falling back to email when the name is missing or blank.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Envelope of the `GET /auth/me` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: User,
}
