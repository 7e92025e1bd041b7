//! User Info Fetcher
//!
//! Fetches profile data from the Google userinfo endpoint when the
//! authorization flow returned only an access token.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::{HttpRequest, HttpTransport};
use crate::error::{ProtocolError, SignInError};
use crate::types::{GoogleUser, UserInfoResponse};

/// Google userinfo endpoint.
pub const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/userinfo/v2/me";

/// User info fetcher interface.
#[async_trait]
pub trait UserInfoFetcher: Send + Sync {
    /// Fetch the profile for the given access token.
    async fn fetch(&self, access_token: &str) -> Result<GoogleUser, SignInError>;
}

/// Default fetcher issuing a bearer-authenticated GET over the transport.
pub struct DefaultUserInfoFetcher<T: HttpTransport> {
    transport: Arc<T>,
    endpoint: String,
}

impl<T: HttpTransport> DefaultUserInfoFetcher<T> {
    /// Create fetcher against the Google userinfo endpoint.
    pub fn new(transport: Arc<T>) -> Self {
        Self::with_endpoint(transport, USERINFO_ENDPOINT)
    }

    /// Create fetcher against a custom endpoint.
    pub fn with_endpoint(transport: Arc<T>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl<T: HttpTransport> UserInfoFetcher for DefaultUserInfoFetcher<T> {
    async fn fetch(&self, access_token: &str) -> Result<GoogleUser, SignInError> {
        let request = HttpRequest::bearer_get(&self.endpoint, access_token);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(SignInError::Protocol(ProtocolError::UnexpectedStatus {
                status: response.status,
            }));
        }

        let info: UserInfoResponse = serde_json::from_str(&response.body).map_err(|e| {
            SignInError::Protocol(ProtocolError::InvalidJson {
                message: e.to_string(),
            })
        })?;

        Ok(info.into())
    }
}

/// Mock user info fetcher for testing.
#[derive(Default)]
pub struct MockUserInfoFetcher {
    fetch_history: std::sync::Mutex<Vec<String>>,
    next_user: std::sync::Mutex<Option<GoogleUser>>,
    next_error: std::sync::Mutex<Option<SignInError>>,
}

impl MockUserInfoFetcher {
    /// Create new mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user returned by the next `fetch` call.
    pub fn set_next_user(&self, user: GoogleUser) -> &Self {
        *self.next_user.lock().unwrap() = Some(user);
        self
    }

    /// Set the error returned by the next `fetch` call.
    pub fn set_next_error(&self, error: SignInError) -> &Self {
        *self.next_error.lock().unwrap() = Some(error);
        self
    }

    /// Get the access tokens `fetch` was called with.
    pub fn get_fetch_history(&self) -> Vec<String> {
        self.fetch_history.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserInfoFetcher for MockUserInfoFetcher {
    async fn fetch(&self, access_token: &str) -> Result<GoogleUser, SignInError> {
        self.fetch_history
            .lock()
            .unwrap()
            .push(access_token.to_string());

        if let Some(error) = self.next_error.lock().unwrap().take() {
            return Err(error);
        }

        Ok(self.next_user.lock().unwrap().take().unwrap_or_default())
    }
}

/// Create mock user info fetcher for testing.
pub fn create_mock_user_info_fetcher() -> MockUserInfoFetcher {
    MockUserInfoFetcher::new()
}
