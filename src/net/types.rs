//! DTOs for the auth provider boundary.
//!
//! DESIGN
//! ======
//! These types mirror the GoTrue-style REST payloads so serde deserialization
//! stays lossless. Only the fields the console actually renders are kept.

use serde::{Deserialize, Serialize};

/// An authenticated user as issued by the auth provider.
///
/// Treated as opaque by routing code: the shell only cares whether an
/// identity is present, not what is inside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Profile metadata captured at signup (`full_name` et al.).
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl Identity {
    /// Display name for the navbar profile menu; falls back to the email.
    pub fn display_name(&self) -> String {
        self.user_metadata
            .get("full_name")
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| self.email.clone(), ToOwned::to_owned)
    }
}

/// Response body of the password-grant and signup endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent session lookups.
    pub access_token: String,
    /// The signed-in user.
    pub user: Identity,
}

/// Error body the provider returns on a failed auth request.
///
/// Field names vary by endpoint, so all candidates are optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProviderError {
    pub error_description: Option<String>,
    pub msg: Option<String>,
    pub message: Option<String>,
}
