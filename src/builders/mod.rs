//! Builders
//!
//! Fluent builders for configuration.

pub mod config;

pub use config::{sign_in_config, SignInConfigBuilder};
