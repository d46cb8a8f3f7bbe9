//! Turning API outcomes into command results

use crate::client::ApiOutcome;
use crate::error::{ApiError, Error, Result};

/// Unwrap a successful outcome, or fail with the server's message.
///
/// Auth and validation rejections read as `<action>: <message>`; anything
/// else keeps its status code.
pub fn require_success<T>(action: &str, outcome: ApiOutcome<T>) -> Result<T> {
    match outcome {
        ApiOutcome::Success { data } => Ok(data),
        ApiOutcome::AuthError { message, .. } | ApiOutcome::ValidationError { message, .. } => {
            Err(Error::Other(format!("{}: {}", action, message)))
        }
        ApiOutcome::Unknown { status, message } => {
            log::debug!("{} returned unexpected status {}", action, status);
            Err(ApiError::Rejected { status, message }.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes_data_through() {
        let data = require_success("Login failed", ApiOutcome::Success { data: 5 }).unwrap();
        assert_eq!(data, 5);
    }

    #[test]
    fn test_auth_error_uses_server_message() {
        let outcome: ApiOutcome<()> = ApiOutcome::AuthError {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        let err = require_success("Login failed", outcome).unwrap_err();
        assert_eq!(err.to_string(), "Operation failed: Login failed: Invalid credentials");
    }

    #[test]
    fn test_unknown_keeps_status() {
        let outcome: ApiOutcome<()> = ApiOutcome::Unknown {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        let err = require_success("Signup failed", outcome).unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::Rejected { status: 502, .. })
        ));
    }
}
