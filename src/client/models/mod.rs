//! Cloudstash API data models

mod auth;
mod file;
mod invite;

pub use auth::{Credentials, LoginResponse, MessageResponse, SignupRequest, VerifyInviteRequest};
pub use file::{FileInfo, FileUpload};
pub use invite::InviteResponse;
