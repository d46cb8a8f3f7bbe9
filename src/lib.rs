//! Cloudstash - client for the Cloudstash file storage API
//!
//! The [`client`] module talks to the server; a [`Session`] carries the bearer
//! token between login and the authenticated file requests.
//!
//! ```no_run
//! use cloudstash::{Session, StorageApi, StorageClient};
//!
//! # async fn demo() -> cloudstash::Result<()> {
//! let session = Session::new();
//! let client = StorageClient::new(session.clone())?;
//!
//! let login = client.login("alice", "secret").await?.into_result()?;
//! session.init(login.token).await;
//!
//! for file in client.list_files().await? {
//!     println!("{}", file.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod session;

pub use client::{
    ApiOutcome, Credentials, DEFAULT_API_URL, FileInfo, FileUpload, StorageApi, StorageClient,
};
pub use error::{ApiError, ConfigError, Error, Result};
pub use session::Session;
