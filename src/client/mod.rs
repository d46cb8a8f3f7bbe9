//! Cloudstash API client

use async_trait::async_trait;

use crate::error::Result;

pub mod models;
pub mod outcome;
pub mod storage;

pub use models::{
    Credentials, FileInfo, FileUpload, InviteResponse, LoginResponse, MessageResponse,
};
pub use outcome::ApiOutcome;
pub use storage::StorageClient;

/// API base URL used when nothing overrides it
pub const DEFAULT_API_URL: &str = "http://40.90.193.108:8080/api";

/// Environment variable that overrides the API base URL
pub const API_URL_ENV: &str = "CLOUDSTASH_API_URL";

/// Pick the base URL: a non-blank override, else the default.
///
/// Trailing slashes are dropped so endpoint paths can be appended directly.
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    override_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Cloudstash API operations
///
/// Login, signup and invite operations return an [`ApiOutcome`] and only fail
/// on transport errors or undecodable success bodies. File operations collapse
/// every non-success status into one fixed error.
#[async_trait]
pub trait StorageApi: Send + Sync {
    /// `POST /login`
    async fn login(&self, username: &str, password: &str) -> Result<ApiOutcome<LoginResponse>>;

    /// `POST /signup`
    async fn signup(
        &self,
        username: &str,
        password: &str,
        invite_code: &str,
    ) -> Result<ApiOutcome<MessageResponse>>;

    /// `POST /verify-invite`
    async fn verify_invite(&self, code: &str) -> Result<ApiOutcome<MessageResponse>>;

    /// `POST /upload` as multipart field `file`, authenticated
    async fn upload_file(&self, file: FileUpload) -> Result<FileInfo>;

    /// `GET /files`, authenticated
    async fn list_files(&self) -> Result<Vec<FileInfo>>;

    /// `POST /admin/invite` with admin credentials
    async fn generate_invite(&self, admin: &Credentials) -> Result<ApiOutcome<InviteResponse>>;
}
