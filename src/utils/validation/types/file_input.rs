//! File descriptors coming from the Android pickers, and the outcome of
//! checking them against the upload limits.

use serde::{Deserialize, Serialize};

/// Metadata of a file selected for upload. The bytes never reach the
/// validators; only what the picker reports about them.
///
/// `mime_type` is empty when the picker returned a content URI without type
/// metadata, in which case the type is inferred from `uri` or `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub uri: String,
}

impl FileDescriptor {
    pub fn new(name: &str, size: u64, mime_type: &str, uri: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
            uri: uri.to_string(),
        }
    }
}

/// Outcome for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileValidation {
    pub(crate) fn ok() -> Self {
        Self { valid: true, error: None }
    }

    pub(crate) fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Outcome for a batch of files. Per-file errors are prefixed with the
/// 1-based position of the file (`"File 2: ..."`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilesValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl FilesValidation {
    pub(crate) fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self { valid: true, errors: None }
        } else {
            Self {
                valid: false,
                errors: Some(errors),
            }
        }
    }

    /// First error of the batch, if any
    pub fn first_error(&self) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }
}
