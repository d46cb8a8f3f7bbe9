//! Display model implementations for table and JSON output
//!
//! Display models turn API records into rows with CLI-friendly column names.

use serde::Serialize;
use tabled::Tabled;

use crate::client::FileInfo;
use crate::output::formatters::{format_bytes, format_local};

/// Stored file display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FileDisplay {
    /// File name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Human-readable size
    #[tabled(rename = "SIZE")]
    pub size: String,

    /// Upload time in local time
    #[tabled(rename = "UPLOADED")]
    pub uploaded: String,

    /// Download URL
    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<FileInfo> for FileDisplay {
    fn from(file: FileInfo) -> Self {
        Self::from(&file)
    }
}

impl From<&FileInfo> for FileDisplay {
    fn from(file: &FileInfo) -> Self {
        Self {
            name: file.name().to_string(),
            size: file.size().map(format_bytes).unwrap_or_else(|| "-".to_string()),
            uploaded: format_local(file.uploaded_at()),
            url: file.url().unwrap_or_default().to_string(),
        }
    }
}
