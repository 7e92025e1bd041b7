//! Authorization Flow Collaborator
//!
//! Seam for the external authorization-code flow. The protocol work (code
//! exchange, PKCE/redirect handling, secure token storage) lives behind this
//! trait; this crate only builds requests for it and normalizes its results.

use async_trait::async_trait;

use crate::error::SignInError;
use crate::types::{AuthRequest, AuthTokens, RevocationConfig, RevocationParams};

/// External authorization flow interface.
///
/// Implementations must signal user cancellation with
/// `FlowError::Cancelled`, or at minimum with an error whose message
/// contains "user cancelled".
#[async_trait]
pub trait AppAuthFlow: Send + Sync {
    /// Run the authorization flow and return the issued tokens.
    async fn authenticate(&self, request: AuthRequest) -> Result<AuthTokens, SignInError>;

    /// Revoke a previously issued token. Returns the provider's raw result.
    async fn revoke(
        &self,
        config: RevocationConfig,
        params: RevocationParams,
    ) -> Result<serde_json::Value, SignInError>;
}

/// Mock authorization flow for testing.
#[derive(Default)]
pub struct MockAppAuthFlow {
    authenticate_history: std::sync::Mutex<Vec<AuthRequest>>,
    revoke_history: std::sync::Mutex<Vec<(RevocationConfig, RevocationParams)>>,
    next_tokens: std::sync::Mutex<Option<AuthTokens>>,
    next_error: std::sync::Mutex<Option<SignInError>>,
    next_revoke_result: std::sync::Mutex<Option<serde_json::Value>>,
}

impl MockAppAuthFlow {
    /// Create new mock flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokens returned by the next `authenticate` call.
    pub fn set_next_tokens(&self, tokens: AuthTokens) -> &Self {
        *self.next_tokens.lock().unwrap() = Some(tokens);
        self
    }

    /// Set the error returned by the next `authenticate` call.
    pub fn set_next_error(&self, error: SignInError) -> &Self {
        *self.next_error.lock().unwrap() = Some(error);
        self
    }

    /// Set the value returned by the next `revoke` call.
    pub fn set_next_revoke_result(&self, result: serde_json::Value) -> &Self {
        *self.next_revoke_result.lock().unwrap() = Some(result);
        self
    }

    /// Get authenticate call history.
    pub fn get_authenticate_history(&self) -> Vec<AuthRequest> {
        self.authenticate_history.lock().unwrap().clone()
    }

    /// Get revoke call history.
    pub fn get_revoke_history(&self) -> Vec<(RevocationConfig, RevocationParams)> {
        self.revoke_history.lock().unwrap().clone()
    }
}

#[async_trait]
impl AppAuthFlow for MockAppAuthFlow {
    async fn authenticate(&self, request: AuthRequest) -> Result<AuthTokens, SignInError> {
        self.authenticate_history.lock().unwrap().push(request);

        if let Some(error) = self.next_error.lock().unwrap().take() {
            return Err(error);
        }

        if let Some(tokens) = self.next_tokens.lock().unwrap().take() {
            return Ok(tokens);
        }

        Ok(AuthTokens {
            access_token: Some("mock-access-token".to_string()),
            id_token: Some("mock-id-token".to_string()),
            refresh_token: Some("mock-refresh-token".to_string()),
            user: None,
            extra: Default::default(),
        })
    }

    async fn revoke(
        &self,
        config: RevocationConfig,
        params: RevocationParams,
    ) -> Result<serde_json::Value, SignInError> {
        self.revoke_history
            .lock()
            .unwrap()
            .push((config, params.clone()));

        if let Some(error) = self.next_error.lock().unwrap().take() {
            return Err(error);
        }

        if let Some(result) = self.next_revoke_result.lock().unwrap().take() {
            return Ok(result);
        }

        Ok(serde_json::json!({ "revoked": params.token }))
    }
}

/// Create mock authorization flow for testing.
pub fn create_mock_app_auth_flow() -> MockAppAuthFlow {
    MockAppAuthFlow::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowError;
    use crate::types::GOOGLE_ISSUER;

    fn request() -> AuthRequest {
        AuthRequest {
            issuer: GOOGLE_ISSUER.to_string(),
            scopes: vec!["profile".to_string(), "email".to_string(), "openid".to_string()],
            client_id: Some("cid".to_string()),
        }
    }

    #[tokio::test]
    async fn test_mock_authenticate_records_request() {
        let flow = MockAppAuthFlow::new();

        let tokens = flow.authenticate(request()).await.unwrap();
        assert_eq!(tokens.access_token, Some("mock-access-token".to_string()));

        let history = flow.get_authenticate_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].issuer, GOOGLE_ISSUER);
        assert_eq!(history[0].client_id, Some("cid".to_string()));
    }

    #[tokio::test]
    async fn test_mock_authenticate_returns_configured_error() {
        let flow = MockAppAuthFlow::new();
        flow.set_next_error(SignInError::Flow(FlowError::Cancelled));

        let result = flow.authenticate(request()).await;
        assert!(matches!(result, Err(SignInError::Flow(FlowError::Cancelled))));
    }

    #[tokio::test]
    async fn test_mock_revoke_records_params() {
        let flow = MockAppAuthFlow::new();

        let config = RevocationConfig {
            issuer: GOOGLE_ISSUER.to_string(),
            client_id: Some("cid".to_string()),
        };
        let params = RevocationParams {
            token: "tok".to_string(),
            client_id_provided: true,
        };

        let result = flow.revoke(config, params).await.unwrap();
        assert_eq!(result, serde_json::json!({ "revoked": "tok" }));

        let history = flow.get_revoke_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].1.token, "tok");
        assert!(history[0].1.client_id_provided);
    }
}
