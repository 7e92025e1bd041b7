//! Authorization Types
//!
//! Request and result shapes exchanged with the authorization flow
//! collaborator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::user::GoogleUser;

/// Normalized authorization request handed to the external flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Identity provider's base authorization URL.
    pub issuer: String,
    /// Ordered, duplicate-free scope list.
    pub scopes: Vec<String>,
    /// Resolved client identifier. Forwarded as-is when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Tokens returned by the external authorization flow.
///
/// All fields are optional: a web-style flow typically returns only an
/// access token, while a native flow may already attach profile data.
#[derive(Clone, Default, Deserialize)]
pub struct AuthTokens {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Profile data, when the flow already resolved it.
    #[serde(default)]
    pub user: Option<GoogleUser>,
    /// Additional fields the flow may return.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl std::fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokens")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("id_token", &self.id_token.as_ref().map(|_| "[REDACTED]"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("user", &self.user)
            .finish()
    }
}

/// Revocation configuration passed to the external flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevocationConfig {
    /// Identity provider's base authorization URL.
    pub issuer: String,
    /// Client identifier, when the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Per-token revocation parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevocationParams {
    /// Access token to revoke.
    pub token: String,
    /// Whether a client identifier accompanied the request.
    pub client_id_provided: bool,
}

/// Sign-out request.
#[derive(Clone, Debug)]
pub struct SignOutParams {
    /// Access token to revoke.
    pub access_token: String,
    /// Client identifier, if available.
    pub client_id: Option<String>,
}
