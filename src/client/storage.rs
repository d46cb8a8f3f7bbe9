//! Cloudstash API client implementation

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::models::{SignupRequest, VerifyInviteRequest};
use super::{
    API_URL_ENV, ApiOutcome, Credentials, FileInfo, FileUpload, InviteResponse, LoginResponse,
    MessageResponse, StorageApi, resolve_base_url,
};
use crate::error::{ApiError, Result};
use crate::session::Session;

/// HTTP client for the Cloudstash API
///
/// The base URL is fixed when the client is built. The auth token is read
/// from the [`Session`] on every authenticated request.
pub struct StorageClient {
    http: HttpClient,
    base_url: String,
    session: Session,
}

impl StorageClient {
    /// Create a client whose base URL comes from `CLOUDSTASH_API_URL`, or the default
    pub fn new(session: Session) -> Result<Self> {
        let env_url = std::env::var(API_URL_ENV).ok();
        Self::with_base_url(resolve_base_url(env_url.as_deref()), session)
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(base_url: impl AsRef<str>, session: Session) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("cloudstash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: resolve_base_url(Some(base_url.as_ref())),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and classify the response into an outcome
    async fn post_for_outcome<B, T>(&self, path: &str, body: &B) -> Result<ApiOutcome<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        debug!("POST {} -> {}", url, status);

        if status.is_success() {
            let data = response.json::<T>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return Ok(ApiOutcome::Success { data });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Failed to read error body from {}: {}", url, e);
                String::new()
            }
        };
        Ok(ApiOutcome::from_failure(status, &body))
    }
}

#[async_trait]
impl StorageApi for StorageClient {
    async fn login(&self, username: &str, password: &str) -> Result<ApiOutcome<LoginResponse>> {
        let creds = Credentials::new(username, password);
        self.post_for_outcome("/login", &creds).await
    }

    async fn signup(
        &self,
        username: &str,
        password: &str,
        invite_code: &str,
    ) -> Result<ApiOutcome<MessageResponse>> {
        let body = SignupRequest {
            username,
            password,
            invite: invite_code,
        };
        self.post_for_outcome("/signup", &body).await
    }

    async fn verify_invite(&self, code: &str) -> Result<ApiOutcome<MessageResponse>> {
        self.post_for_outcome("/verify-invite", &VerifyInviteRequest { code })
            .await
    }

    async fn upload_file(&self, file: FileUpload) -> Result<FileInfo> {
        let headers = self.session.auth_headers().await?;

        let mut part = Part::bytes(file.bytes).file_name(file.file_name.clone());
        if let Some(mime) = file.mime.as_deref() {
            part = part.mime_str(mime).map_err(ApiError::from)?;
        }
        let form = Form::new().part("file", part);

        let url = self.url("/upload");
        debug!("POST {} ({})", url, file.file_name);

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        debug!("POST {} -> {}", url, status);
        if !status.is_success() {
            return Err(ApiError::UploadFailed.into());
        }

        let info = response.json::<FileInfo>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse upload response: {}", e))
        })?;
        Ok(info)
    }

    async fn list_files(&self) -> Result<Vec<FileInfo>> {
        let headers = self.session.auth_headers().await?;

        let url = self.url("/files");
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(ApiError::ListFilesFailed.into());
        }

        // An empty listing arrives as `null`
        let files = response
            .json::<Option<Vec<FileInfo>>>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse file list: {}", e)))?;
        Ok(files.unwrap_or_default())
    }

    async fn generate_invite(&self, admin: &Credentials) -> Result<ApiOutcome<InviteResponse>> {
        self.post_for_outcome("/admin/invite", admin).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = StorageClient::with_base_url("http://localhost:8080/api", Session::new());
        assert!(client.is_ok());
    }

    #[test]
    fn test_url_joins_endpoint() {
        let client =
            StorageClient::with_base_url("http://localhost:8080/api/", Session::new()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/files"), "http://localhost:8080/api/files");
    }

    #[tokio::test]
    async fn test_client_shares_session() {
        let session = Session::new();
        let client = StorageClient::with_base_url("http://localhost", session.clone()).unwrap();

        session.init("abc").await;
        assert_eq!(client.session().token().await.as_deref(), Some("abc"));
    }
}
