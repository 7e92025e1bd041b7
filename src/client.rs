//! Google Sign-In Client
//!
//! High-level client combining request normalization, the external
//! authorization flow, and the profile fetch.

use std::sync::Arc;

use crate::core::{normalize_request, HttpTransport, ReqwestHttpTransport};
use crate::error::{SignInError, SignInResult};
use crate::flows::AppAuthFlow;
use crate::telemetry::{ConsoleLogger, Logger};
use crate::types::{
    GoogleUser, Platform, RevocationConfig, RevocationParams, SignInConfig, SignInOutcome,
    SignOutParams, GOOGLE_ISSUER,
};
use crate::userinfo::{DefaultUserInfoFetcher, UserInfoFetcher};

/// Name of the delegated authorization capability, used in
/// unavailable-capability errors.
const AUTH_CAPABILITY: &str = "AppAuth";

/// Google sign-in client.
///
/// Stateless across calls: each `sign_in`/`sign_out` invocation is
/// independent, and concurrent calls share nothing but the injected
/// collaborators.
pub struct GoogleSignIn<T: HttpTransport = ReqwestHttpTransport> {
    flow: Option<Arc<dyn AppAuthFlow>>,
    transport: Arc<T>,
    logger: Arc<dyn Logger>,
    platform: Platform,
}

impl GoogleSignIn<ReqwestHttpTransport> {
    /// Create a client around an authorization flow collaborator, with
    /// default transport, console logging, and the current platform.
    pub fn new(flow: Arc<dyn AppAuthFlow>) -> Self {
        Self {
            flow: Some(flow),
            transport: Arc::new(ReqwestHttpTransport::new()),
            logger: Arc::new(ConsoleLogger::new()),
            platform: Platform::current(),
        }
    }

    /// Create a client with no authorization flow attached.
    ///
    /// Every `sign_in`/`sign_out` call fails immediately with an
    /// unavailable-capability error. Mirrors a build where the platform's
    /// authorization library is not linked in.
    pub fn without_flow() -> Self {
        Self {
            flow: None,
            transport: Arc::new(ReqwestHttpTransport::new()),
            logger: Arc::new(ConsoleLogger::new()),
            platform: Platform::current(),
        }
    }
}

impl<T: HttpTransport> GoogleSignIn<T> {
    /// Create a client with custom collaborators.
    pub fn with_components(
        flow: Option<Arc<dyn AppAuthFlow>>,
        transport: Arc<T>,
        logger: Arc<dyn Logger>,
        platform: Platform,
    ) -> Self {
        Self {
            flow,
            transport,
            logger,
            platform,
        }
    }

    /// Get the platform used for client-identifier resolution.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Perform the Google sign-in flow.
    ///
    /// Normalizes the configuration, delegates authorization to the
    /// attached flow, and fetches profile data from the userinfo endpoint
    /// when the flow returned only an access token. User cancellation maps
    /// to [`SignInOutcome::Cancelled`]; every other flow error propagates
    /// unchanged.
    pub async fn sign_in(&self, config: SignInConfig) -> SignInResult<SignInOutcome> {
        let flow = self
            .flow
            .as_ref()
            .ok_or_else(|| SignInError::unavailable(AUTH_CAPABILITY, "sign_in"))?;

        let request = normalize_request(&config, self.platform, self.logger.as_ref());

        let tokens = match flow.authenticate(request).await {
            Ok(tokens) => tokens,
            Err(error) if error.is_user_cancellation() => return Ok(SignInOutcome::Cancelled),
            Err(error) => return Err(error),
        };

        // A web-style flow only returns an access token; use it to fetch the
        // same profile data a native flow would have attached.
        let user = match (tokens.user, tokens.access_token.as_deref()) {
            (Some(user), _) => user,
            (None, Some(access_token)) => {
                let fetcher = DefaultUserInfoFetcher::new(self.transport.clone());
                fetcher.fetch(access_token).await?
            }
            (None, None) => GoogleUser::default(),
        };

        Ok(SignInOutcome::Success {
            access_token: tokens.access_token,
            id_token: tokens.id_token,
            refresh_token: tokens.refresh_token,
            user,
        })
    }

    /// Revoke an access token through the attached authorization flow.
    ///
    /// Forwards the call and returns the collaborator's raw result with no
    /// local interpretation.
    pub async fn sign_out(&self, params: SignOutParams) -> SignInResult<serde_json::Value> {
        let flow = self
            .flow
            .as_ref()
            .ok_or_else(|| SignInError::unavailable(AUTH_CAPABILITY, "sign_out"))?;

        let client_id_provided = params.client_id.is_some();
        let config = RevocationConfig {
            issuer: GOOGLE_ISSUER.to_string(),
            client_id: params.client_id,
        };

        flow.revoke(
            config,
            RevocationParams {
                token: params.access_token,
                client_id_provided,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockHttpTransport;
    use crate::error::{FlowError, ProtocolError};
    use crate::flows::MockAppAuthFlow;
    use crate::telemetry::{InMemoryLogger, LogLevel, NoOpLogger};
    use crate::types::{AuthTokens, SignInBehavior};
    use serde_json::json;

    fn client_with(
        flow: Option<Arc<MockAppAuthFlow>>,
        transport: Arc<MockHttpTransport>,
        logger: Arc<dyn Logger>,
        platform: Platform,
    ) -> (GoogleSignIn<MockHttpTransport>, Arc<MockHttpTransport>) {
        let client = GoogleSignIn::with_components(
            flow.map(|f| f as Arc<dyn AppAuthFlow>),
            transport.clone(),
            logger,
            platform,
        );
        (client, transport)
    }

    fn config_with_client_id(client_id: &str) -> SignInConfig {
        SignInConfig {
            client_id: Some(client_id.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_sign_in_unavailable_without_flow_and_no_network() {
        let (client, transport) = client_with(
            None,
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Web,
        );

        let result = client.sign_in(config_with_client_id("abc")).await;

        match result {
            Err(SignInError::Unavailable {
                capability,
                operation,
            }) => {
                assert_eq!(capability, "AppAuth");
                assert_eq!(operation, "sign_in");
            }
            other => panic!("expected Unavailable, got {:?}", other),
        }
        assert!(transport.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_sign_out_unavailable_without_flow() {
        let (client, _) = client_with(
            None,
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Web,
        );

        let result = client
            .sign_out(SignOutParams {
                access_token: "tok".to_string(),
                client_id: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(SignInError::Unavailable { ref operation, .. }) if operation == "sign_out"
        ));
    }

    #[tokio::test]
    async fn test_sign_in_cancellation_by_message() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_error(SignInError::Flow(FlowError::Authorization {
            message: "User Cancelled Flow".to_string(),
        }));

        let (client, _) = client_with(
            Some(flow),
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Web,
        );

        let outcome = client.sign_in(config_with_client_id("abc")).await.unwrap();
        assert!(outcome.is_cancelled());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"type": "cancel"})
        );
    }

    #[tokio::test]
    async fn test_sign_in_cancellation_by_distinct_kind() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_error(SignInError::Flow(FlowError::Cancelled));

        let (client, _) = client_with(
            Some(flow),
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Web,
        );

        let outcome = client.sign_in(config_with_client_id("abc")).await.unwrap();
        assert!(outcome.is_cancelled());
    }

    #[tokio::test]
    async fn test_sign_in_propagates_other_flow_errors_unchanged() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_error(SignInError::Flow(FlowError::Exchange {
            message: "invalid_grant".to_string(),
        }));

        let (client, _) = client_with(
            Some(flow),
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Web,
        );

        let result = client.sign_in(config_with_client_id("abc")).await;
        assert!(matches!(
            result,
            Err(SignInError::Flow(FlowError::Exchange { ref message })) if message == "invalid_grant"
        ));
    }

    #[tokio::test]
    async fn test_sign_in_fetches_profile_when_only_access_token() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_tokens(AuthTokens {
            access_token: Some("tok".to_string()),
            ..Default::default()
        });

        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_json_response(
            200,
            &json!({
                "id": "1",
                "name": "A B",
                "given_name": "A",
                "family_name": "B",
                "picture": "u",
                "email": "a@b.com"
            }),
        );

        let (client, transport) =
            client_with(Some(flow.clone()), transport, Arc::new(NoOpLogger), Platform::Web);

        let outcome = client.sign_in(config_with_client_id("abc")).await.unwrap();

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "type": "success",
                "accessToken": "tok",
                "idToken": null,
                "refreshToken": null,
                "user": {
                    "id": "1",
                    "name": "A B",
                    "givenName": "A",
                    "familyName": "B",
                    "photoUrl": "u",
                    "email": "a@b.com"
                }
            })
        );

        let request = transport.get_last_request().unwrap();
        assert_eq!(request.url, "https://www.googleapis.com/userinfo/v2/me");
        assert_eq!(
            request.headers.get("authorization"),
            Some(&"Bearer tok".to_string())
        );
    }

    #[tokio::test]
    async fn test_sign_in_skips_fetch_when_flow_attached_user() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_tokens(AuthTokens {
            access_token: Some("tok".to_string()),
            user: Some(GoogleUser {
                id: Some("native".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        let (client, transport) = client_with(
            Some(flow),
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Web,
        );

        let outcome = client.sign_in(config_with_client_id("abc")).await.unwrap();
        assert_eq!(outcome.user().unwrap().id, Some("native".to_string()));
        assert!(transport.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_without_access_token_yields_empty_user() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_tokens(AuthTokens {
            id_token: Some("idt".to_string()),
            ..Default::default()
        });

        let (client, transport) = client_with(
            Some(flow),
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Web,
        );

        let outcome = client.sign_in(config_with_client_id("abc")).await.unwrap();
        assert_eq!(outcome.user(), Some(&GoogleUser::default()));
        assert!(transport.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_propagates_profile_fetch_failure() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_tokens(AuthTokens {
            access_token: Some("tok".to_string()),
            ..Default::default()
        });

        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_json_response(500, &json!({"error": "boom"}));

        let (client, _) = client_with(Some(flow), transport, Arc::new(NoOpLogger), Platform::Web);

        let result = client.sign_in(config_with_client_id("abc")).await;
        assert!(matches!(
            result,
            Err(SignInError::Protocol(ProtocolError::UnexpectedStatus { status: 500 }))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_sends_normalized_request() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_tokens(AuthTokens {
            user: Some(GoogleUser::default()),
            ..Default::default()
        });

        let config = SignInConfig {
            ios_client_id: Some("ios-1".to_string()),
            scopes: Some(vec!["drive".to_string(), "email".to_string()]),
            ..Default::default()
        };

        let (client, _) = client_with(
            Some(flow.clone()),
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Ios,
        );

        client.sign_in(config).await.unwrap();

        let history = flow.get_authenticate_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].issuer, "https://accounts.google.com");
        assert_eq!(history[0].client_id, Some("ios-1".to_string()));
        assert_eq!(
            history[0].scopes,
            vec!["drive", "email", "profile", "openid"]
        );
    }

    #[tokio::test]
    async fn test_sign_in_emits_deprecation_warnings() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_tokens(AuthTokens {
            user: Some(GoogleUser::default()),
            ..Default::default()
        });

        let logger = Arc::new(InMemoryLogger::new());
        let config = SignInConfig {
            client_id: Some("abc".to_string()),
            behavior: Some(SignInBehavior::System),
            ..Default::default()
        };

        let (client, _) = client_with(
            Some(flow),
            Arc::new(MockHttpTransport::new()),
            logger.clone(),
            Platform::Web,
        );

        client.sign_in(config).await.unwrap();

        let warnings = logger.get_entries_by_level(LogLevel::Warn);
        assert_eq!(warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_sign_out_with_client_id() {
        let flow = Arc::new(MockAppAuthFlow::new());
        flow.set_next_revoke_result(json!({"status": "ok"}));

        let (client, _) = client_with(
            Some(flow.clone()),
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Web,
        );

        let result = client
            .sign_out(SignOutParams {
                access_token: "tok".to_string(),
                client_id: Some("cid".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result, json!({"status": "ok"}));

        let history = flow.get_revoke_history();
        assert_eq!(history.len(), 1);
        let (config, params) = &history[0];
        assert_eq!(config.issuer, "https://accounts.google.com");
        assert_eq!(config.client_id, Some("cid".to_string()));
        assert_eq!(params.token, "tok");
        assert!(params.client_id_provided);
    }

    #[tokio::test]
    async fn test_sign_out_without_client_id() {
        let flow = Arc::new(MockAppAuthFlow::new());

        let (client, _) = client_with(
            Some(flow.clone()),
            Arc::new(MockHttpTransport::new()),
            Arc::new(NoOpLogger),
            Platform::Web,
        );

        client
            .sign_out(SignOutParams {
                access_token: "tok".to_string(),
                client_id: None,
            })
            .await
            .unwrap();

        let history = flow.get_revoke_history();
        let (config, params) = &history[0];
        assert!(config.client_id.is_none());
        assert!(!params.client_id_provided);
    }
}
