//! Authentication and signup models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Username and password sent to `/login` (and, for admins, `/admin/invite`).
///
/// Built per call and never persisted.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `/signup`: credentials plus the invite code
#[derive(Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub invite: &'a str,
}

/// Body of `/verify-invite`
#[derive(Serialize)]
pub struct VerifyInviteRequest<'a> {
    pub code: &'a str,
}

/// Successful `/login` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for authenticated requests
    pub token: String,
}

/// Plain `{"message": ...}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
