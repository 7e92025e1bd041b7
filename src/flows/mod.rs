//! Authorization Flows
//!
//! The external authorization-code flow collaborator seam. No flow
//! implementation ships with this crate; the host application plugs in the
//! platform's authorization library behind [`AppAuthFlow`].

pub mod app_auth;

pub use app_auth::{create_mock_app_auth_flow, AppAuthFlow, MockAppAuthFlow};
