//! Configuration Builder
//!
//! Fluent builder for sign-in configuration.

use crate::types::{SignInBehavior, SignInConfig};

/// Sign-in configuration builder.
#[derive(Default)]
pub struct SignInConfigBuilder {
    client_id: Option<String>,
    ios_client_id: Option<String>,
    android_client_id: Option<String>,
    ios_standalone_app_client_id: Option<String>,
    android_standalone_app_client_id: Option<String>,
    behavior: Option<SignInBehavior>,
    scopes: Option<Vec<String>>,
}

impl SignInConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set client ID.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set iOS client ID (deprecated in favor of `client_id`).
    pub fn ios_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.ios_client_id = Some(client_id.into());
        self
    }

    /// Set Android client ID (deprecated in favor of `client_id`).
    pub fn android_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.android_client_id = Some(client_id.into());
        self
    }

    /// Set standalone-app iOS client ID (deprecated).
    pub fn ios_standalone_app_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.ios_standalone_app_client_id = Some(client_id.into());
        self
    }

    /// Set standalone-app Android client ID (deprecated).
    pub fn android_standalone_app_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.android_standalone_app_client_id = Some(client_id.into());
        self
    }

    /// Set behavior hint (deprecated, has no effect).
    pub fn behavior(mut self, behavior: SignInBehavior) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Set requested scopes.
    pub fn scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Add a requested scope.
    pub fn add_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.get_or_insert_with(Vec::new).push(scope.into());
        self
    }

    /// Build the sign-in configuration.
    pub fn build(self) -> SignInConfig {
        SignInConfig {
            client_id: self.client_id,
            ios_client_id: self.ios_client_id,
            android_client_id: self.android_client_id,
            ios_standalone_app_client_id: self.ios_standalone_app_client_id,
            android_standalone_app_client_id: self.android_standalone_app_client_id,
            behavior: self.behavior,
            scopes: self.scopes,
        }
    }
}

/// Create a new sign-in configuration builder.
pub fn sign_in_config() -> SignInConfigBuilder {
    SignInConfigBuilder::new()
}
