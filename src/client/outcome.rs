//! Tagged outcome of status-sensitive requests
//!
//! Login, signup and invite checks report the server's verdict instead of
//! failing on a non-success status, so callers can tell "invalid credentials"
//! apart from "invite already used".

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::ApiError;

/// Result of a request whose non-success statuses are meaningful to the caller
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    /// 2xx with a decoded body
    Success { data: T },

    /// 401 or 403
    AuthError { status: u16, message: String },

    /// 400, 409 or 422
    ValidationError { status: u16, message: String },

    /// Any other non-success status
    Unknown { status: u16, message: String },
}

impl<T> ApiOutcome<T> {
    /// Classify a non-success status and its body
    pub fn from_failure(status: StatusCode, body: &str) -> Self {
        let message = error_message(status, body);
        let status = status.as_u16();
        match status {
            401 | 403 => ApiOutcome::AuthError { status, message },
            400 | 409 | 422 => ApiOutcome::ValidationError { status, message },
            _ => ApiOutcome::Unknown { status, message },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success { .. })
    }

    /// HTTP status of a non-success outcome
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiOutcome::Success { .. } => None,
            ApiOutcome::AuthError { status, .. }
            | ApiOutcome::ValidationError { status, .. }
            | ApiOutcome::Unknown { status, .. } => Some(*status),
        }
    }

    /// Server message of a non-success outcome
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiOutcome::Success { .. } => None,
            ApiOutcome::AuthError { message, .. }
            | ApiOutcome::ValidationError { message, .. }
            | ApiOutcome::Unknown { message, .. } => Some(message),
        }
    }

    /// Turn a non-success outcome into [`ApiError::Rejected`]
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiOutcome::Success { data } => Ok(data),
            ApiOutcome::AuthError { status, message }
            | ApiOutcome::ValidationError { status, message }
            | ApiOutcome::Unknown { status, message } => {
                Err(ApiError::Rejected { status, message })
            }
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Message for a failed request: the JSON `error` field, else the body text,
/// else the status reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_auth_error() {
        let outcome: ApiOutcome<()> =
            ApiOutcome::from_failure(StatusCode::UNAUTHORIZED, r#"{"error":"Invalid credentials"}"#);
        assert_eq!(
            outcome,
            ApiOutcome::AuthError {
                status: 401,
                message: "Invalid credentials".to_string()
            }
        );
    }

    #[test]
    fn test_forbidden_is_auth_error() {
        let outcome: ApiOutcome<()> = ApiOutcome::from_failure(
            StatusCode::FORBIDDEN,
            r#"{"error":"Invite code already used"}"#,
        );
        assert!(matches!(outcome, ApiOutcome::AuthError { status: 403, .. }));
        assert_eq!(outcome.message(), Some("Invite code already used"));
    }

    #[test]
    fn test_conflict_is_validation_error() {
        let outcome: ApiOutcome<()> = ApiOutcome::from_failure(
            StatusCode::CONFLICT,
            r#"{"error":"Username already taken"}"#,
        );
        assert!(matches!(
            outcome,
            ApiOutcome::ValidationError { status: 409, .. }
        ));
    }

    #[test]
    fn test_bad_request_is_validation_error() {
        let outcome: ApiOutcome<()> =
            ApiOutcome::from_failure(StatusCode::BAD_REQUEST, "Missing required fields\n");
        assert!(matches!(
            outcome,
            ApiOutcome::ValidationError { status: 400, .. }
        ));
        assert_eq!(outcome.message(), Some("Missing required fields"));
    }

    #[test]
    fn test_server_error_is_unknown() {
        let outcome: ApiOutcome<()> =
            ApiOutcome::from_failure(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(
            outcome,
            ApiOutcome::Unknown {
                status: 500,
                message: "Internal Server Error".to_string()
            }
        );
    }

    #[test]
    fn test_into_result() {
        let ok: ApiOutcome<u32> = ApiOutcome::Success { data: 7 };
        assert_eq!(ok.into_result().unwrap(), 7);

        let rejected: ApiOutcome<u32> = ApiOutcome::ValidationError {
            status: 409,
            message: "Username already taken".to_string(),
        };
        match rejected.into_result() {
            Err(ApiError::Rejected { status, message }) => {
                assert_eq!(status, 409);
                assert_eq!(message, "Username already taken");
            }
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_success_accessors() {
        let ok: ApiOutcome<&str> = ApiOutcome::Success { data: "abc" };
        assert!(ok.is_success());
        assert_eq!(ok.status(), None);
        assert_eq!(ok.message(), None);
    }
}
