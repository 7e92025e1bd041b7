//! Google Sign-In Integration Module
//!
//! Client-side Google OAuth sign-in and sign-out, delegating the protocol
//! work (authorization-code exchange, token issuance, revocation) to an
//! external authorization-flow collaborator.
//!
//! # Features
//!
//! - Scope normalization (required profile scopes, first-occurrence dedup)
//! - Per-platform client-identifier resolution with legacy fallbacks
//! - Delegated authorization via the [`AppAuthFlow`] seam
//! - Profile fetch from the Google userinfo endpoint for web-style flows
//! - Cancellation-aware outcome normalization
//! - Delegated token revocation
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use google_signin_integration::{sign_in_config, GoogleSignIn, SignInOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // `flow` is the platform's authorization library behind AppAuthFlow.
//!     let client = GoogleSignIn::new(flow);
//!
//!     let config = sign_in_config()
//!         .client_id("my-client-id.apps.googleusercontent.com")
//!         .add_scope("https://www.googleapis.com/auth/drive")
//!         .build();
//!
//!     match client.sign_in(config).await? {
//!         SignInOutcome::Cancelled => println!("user backed out"),
//!         SignInOutcome::Success { user, .. } => {
//!             println!("signed in as {:?}", user.email);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The module is organized into several sub-modules:
//!
//! - `types`: configuration, request/result, and user data structures
//! - `error`: error hierarchy with cancellation detection
//! - `core`: HTTP transport and request normalization
//! - `flows`: the external authorization-flow collaborator seam
//! - `userinfo`: profile fetch from the Google userinfo endpoint
//! - `telemetry`: structured logging for advisory deprecation warnings
//! - `builders`: fluent configuration builder
//! - `client`: high-level Google sign-in client

pub mod builders;
pub mod client;
pub mod core;
pub mod error;
pub mod flows;
pub mod telemetry;
pub mod types;
pub mod userinfo;

// Re-export main client
pub use client::GoogleSignIn;

// Re-export builders
pub use builders::{sign_in_config, SignInConfigBuilder};

// Re-export errors
pub use error::{FlowError, NetworkError, ProtocolError, SignInError, SignInResult};

// Re-export types
pub use types::{
    // Auth
    AuthRequest, AuthTokens, RevocationConfig, RevocationParams, SignOutParams,
    // Config
    Platform, SignInBehavior, SignInConfig, GOOGLE_ISSUER, REQUIRED_SCOPES,
    // Outcome
    SignInOutcome,
    // User
    GoogleUser, UserInfoResponse,
};

// Re-export core components
pub use crate::core::{
    // Normalization
    normalize_request, normalize_scopes, resolve_client_id,
    // Transport
    create_mock_transport, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    MockHttpTransport, ReqwestHttpTransport,
};

// Re-export flows
pub use flows::{create_mock_app_auth_flow, AppAuthFlow, MockAppAuthFlow};

// Re-export userinfo
pub use userinfo::{
    create_mock_user_info_fetcher, DefaultUserInfoFetcher, MockUserInfoFetcher, UserInfoFetcher,
    USERINFO_ENDPOINT,
};

// Re-export telemetry
pub use telemetry::{
    create_console_logger, create_in_memory_logger, ConsoleLogger, InMemoryLogger, LogContext,
    LogEntry, LogLevel, Logger, NoOpLogger, TracingLogger,
};
