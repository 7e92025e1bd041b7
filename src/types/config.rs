//! Configuration Types
//!
//! Sign-in configuration supplied by the host application.

use serde::{Deserialize, Serialize};

/// Google's OAuth2 issuer, used for every authorization and revocation call.
pub const GOOGLE_ISSUER: &str = "https://accounts.google.com";

/// Scopes always requested so the profile endpoint can return user data.
pub const REQUIRED_SCOPES: [&str; 3] = ["profile", "email", "openid"];

/// Caller-supplied sign-in configuration.
///
/// Immutable for the duration of one sign-in attempt. The per-platform and
/// standalone identifier fields are legacy options kept for compatibility;
/// prefer `client_id`, which wins over all of them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SignInConfig {
    /// Client identifier. Preferred over every per-platform field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// iOS client identifier (deprecated in favor of `client_id`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_client_id: Option<String>,
    /// Android client identifier (deprecated in favor of `client_id`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_client_id: Option<String>,
    /// Standalone-app iOS client identifier (deprecated).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_standalone_app_client_id: Option<String>,
    /// Standalone-app Android client identifier (deprecated).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_standalone_app_client_id: Option<String>,
    /// Behavior hint (deprecated, has no effect; the web-style flow is
    /// always used).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<SignInBehavior>,
    /// Additional scopes to request alongside the required ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

impl SignInConfig {
    /// Check whether any legacy identifier field is set.
    pub fn has_legacy_client_id_fields(&self) -> bool {
        self.ios_client_id.is_some()
            || self.android_client_id.is_some()
            || self.ios_standalone_app_client_id.is_some()
            || self.android_standalone_app_client_id.is_some()
    }
}

/// Sign-in behavior hint.
///
/// Only the web-style flow is implemented; `System` is accepted for
/// compatibility and falls back to `Web` with a deprecation warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInBehavior {
    System,
    Web,
}

impl SignInBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Web => "web",
        }
    }
}

/// Platform the host application is running on.
///
/// Passed explicitly into client-identifier resolution so the logic stays
/// pure and testable on any build target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Platform {
    /// Detect the platform of the current build target.
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Web
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
        }
    }
}
