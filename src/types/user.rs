//! User Types
//!
//! Google user profile and the raw userinfo endpoint wire shape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Profile data for a signed-in Google user.
///
/// Every field is optional because the upstream response may omit any of
/// them. Serializes with the camelCase names callers expect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Raw response body of the Google userinfo endpoint.
///
/// Field names follow the wire format; unknown fields are tolerated.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserInfoResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl From<UserInfoResponse> for GoogleUser {
    fn from(info: UserInfoResponse) -> Self {
        Self {
            id: info.id,
            name: info.name,
            given_name: info.given_name,
            family_name: info.family_name,
            photo_url: info.picture,
            email: info.email,
        }
    }
}
