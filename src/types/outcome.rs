//! Outcome Types
//!
//! The normalized result returned to the caller after a sign-in attempt.

use serde::{Deserialize, Serialize};

use super::user::GoogleUser;

/// Result of a sign-in attempt.
///
/// Serializes to a tagged shape: `{"type": "cancel"}` when the user backed
/// out, or `{"type": "success", ...}` with the tokens and profile data.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SignInOutcome {
    /// The user cancelled the authorization flow. Not an error.
    #[serde(rename = "cancel")]
    Cancelled,
    /// Authorization completed.
    #[serde(rename = "success")]
    Success {
        #[serde(rename = "accessToken", default, skip_serializing_if = "Option::is_none")]
        access_token: Option<String>,
        #[serde(rename = "idToken")]
        id_token: Option<String>,
        #[serde(rename = "refreshToken")]
        refresh_token: Option<String>,
        user: GoogleUser,
    },
}

impl SignInOutcome {
    /// Check whether the outcome is a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Get the signed-in user, if the outcome is a success.
    pub fn user(&self) -> Option<&GoogleUser> {
        match self {
            Self::Success { user, .. } => Some(user),
            Self::Cancelled => None,
        }
    }

    /// Get the access token, if the outcome is a success that carried one.
    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Success { access_token, .. } => access_token.as_deref(),
            Self::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_serializes_to_tagged_shape() {
        let outcome = SignInOutcome::Cancelled;
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"type": "cancel"}));
    }

    #[test]
    fn test_success_serializes_with_camel_case_tokens() {
        let outcome = SignInOutcome::Success {
            access_token: Some("tok".to_string()),
            id_token: None,
            refresh_token: None,
            user: GoogleUser {
                id: Some("1".to_string()),
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["accessToken"], "tok");
        assert_eq!(json["idToken"], serde_json::Value::Null);
        assert_eq!(json["refreshToken"], serde_json::Value::Null);
        assert_eq!(json["user"]["id"], "1");
    }

    #[test]
    fn test_accessors() {
        assert!(SignInOutcome::Cancelled.is_cancelled());
        assert!(SignInOutcome::Cancelled.user().is_none());

        let outcome = SignInOutcome::Success {
            access_token: Some("tok".to_string()),
            id_token: None,
            refresh_token: None,
            user: GoogleUser::default(),
        };
        assert!(!outcome.is_cancelled());
        assert_eq!(outcome.access_token(), Some("tok"));
        assert!(outcome.user().is_some());
    }
}
