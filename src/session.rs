//! Client session: the bearer token shared between the CLI and the API client
//!
//! A [`Session`] is handed to the client when it is built. Requests read the
//! token at call time, so a login or logout through the same session is seen
//! by every later request.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::error::ApiError;

/// Shared handle over the current auth token.
///
/// Cloning a session clones the handle, not the token.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create a session with no token
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that already holds a token (e.g. loaded from config)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    /// Store the token obtained from a successful login
    pub async fn init(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    /// Forget the token
    pub async fn clear(&self) {
        *self.token.write().await = None;
    }

    /// Current token, if any
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Authorization headers for the current token
    pub async fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self.token.read().await;
        auth_header(token.as_deref())
    }
}

/// Build the headers that authenticate a request.
///
/// Empty when there is no token; otherwise exactly one
/// `Authorization: Bearer <token>` header carrying the token verbatim.
pub fn auth_header(token: Option<&str>) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::InvalidToken)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

/// Claims readable from the payload of a JWT auth token.
///
/// The signature is not checked. This is for display only; the client never
/// expires or refreshes a token on its own.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub username: Option<String>,

    /// Expiry as a Unix timestamp
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decode the payload of `token`, or `None` if it is not a JWT
    pub fn from_token(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        let payload = general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .ok()?;
        serde_json::from_slice(&payload).ok()
    }

    /// Expiry time, if the token carries one
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at()
            .map(|expires_at| expires_at < Utc::now())
            .unwrap_or(false)
    }
}
