//! Stored file models

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Metadata the server reports for a stored file.
///
/// The JSON object is kept exactly as received; the typed accessors read from
/// it. Only a string `name` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct FileInfo {
    fields: Map<String, Value>,
}

impl FileInfo {
    /// Blob name (the original upload file name)
    pub fn name(&self) -> &str {
        self.fields
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Time-limited read URL
    pub fn url(&self) -> Option<&str> {
        self.fields.get("url").and_then(Value::as_str)
    }

    /// Size in bytes; whole-number floats are accepted
    pub fn size(&self) -> Option<u64> {
        let size = self.fields.get("size")?;
        size.as_u64().or_else(|| {
            size.as_f64()
                .filter(|s| *s >= 0.0 && s.fract() == 0.0)
                .map(|s| s as u64)
        })
    }

    /// Upload or last-modified time, as sent by the server
    pub fn upload_date(&self) -> Option<&str> {
        self.fields.get("uploadDate").and_then(Value::as_str)
    }

    /// Parse `uploadDate` as RFC 3339
    pub fn uploaded_at(&self) -> Option<DateTime<FixedOffset>> {
        self.upload_date()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
    }

    /// Any field, including ones without an accessor
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The record as the server sent it
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Map<String, Value>> for FileInfo {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        match fields.get("name") {
            Some(Value::String(_)) => Ok(Self { fields }),
            Some(_) => Err("field `name` is not a string".to_string()),
            None => Err("missing field `name`".to_string()),
        }
    }
}

impl From<FileInfo> for Map<String, Value> {
    fn from(info: FileInfo) -> Self {
        info.fields
    }
}

/// A file to send to `/upload`
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let mime = guess_mime(&file_name).map(str::to_string);
        Self {
            file_name,
            bytes: bytes.into(),
            mime,
        }
    }

    /// Read a file from disk; the upload is named after the last path component
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Other(format!("Not a file path: {}", path.display())))?
            .to_string();

        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn guess_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => return None,
    };
    Some(mime)
}
