//! Request Normalization
//!
//! Derives the effective scope list and client identifier from a
//! caller-supplied configuration. Purely derivational; the only side effect
//! is advisory deprecation warnings for legacy options.

use crate::telemetry::{LogContext, Logger};
use crate::types::{AuthRequest, Platform, SignInConfig, GOOGLE_ISSUER, REQUIRED_SCOPES};

/// Union of the caller's scopes with the required profile scopes.
///
/// Caller scopes keep their relative order; required scopes are appended
/// after them; duplicates are dropped keeping the first occurrence.
pub fn normalize_scopes(scopes: Option<&[String]>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();

    let required = REQUIRED_SCOPES.iter().map(|s| s.to_string());
    for scope in scopes.unwrap_or_default().iter().cloned().chain(required) {
        if !normalized.contains(&scope) {
            normalized.push(scope);
        }
    }

    normalized
}

/// Resolve the effective client identifier for a platform.
///
/// `client_id` wins unconditionally; otherwise the legacy per-platform
/// fields are consulted in their historical precedence order. An
/// unresolvable identifier yields `None` and is forwarded as-is.
pub fn resolve_client_id(config: &SignInConfig, platform: Platform) -> Option<String> {
    if let Some(client_id) = &config.client_id {
        return Some(client_id.clone());
    }

    match platform {
        Platform::Ios => config.ios_client_id.clone(),
        Platform::Android => config
            .android_client_id
            .clone()
            .or_else(|| config.android_standalone_app_client_id.clone()),
        Platform::Web => config
            .client_id
            .clone()
            .or_else(|| config.ios_standalone_app_client_id.clone()),
    }
}

/// Build the normalized authorization request for the external flow.
///
/// Emits deprecation warnings through `logger` when the `behavior` hint or
/// any legacy identifier field is set. The warnings are advisory and never
/// affect the derived request.
pub fn normalize_request(
    config: &SignInConfig,
    platform: Platform,
    logger: &dyn Logger,
) -> AuthRequest {
    let context = LogContext::new().provider("google").operation("sign_in");

    if config.behavior.is_some() {
        logger.warn(
            "The `behavior` option is deprecated and has no effect; \
             the web authorization flow is always used",
            &context,
        );
    }

    if config.has_legacy_client_id_fields() {
        logger.warn(
            "`ios_client_id`, `android_client_id`, `ios_standalone_app_client_id`, \
             and `android_standalone_app_client_id` are deprecated in favor of `client_id`",
            &context,
        );
    }

    AuthRequest {
        issuer: GOOGLE_ISSUER.to_string(),
        scopes: normalize_scopes(config.scopes.as_deref()),
        client_id: resolve_client_id(config, platform),
    }
}
