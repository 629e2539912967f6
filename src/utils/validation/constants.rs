//! Constants used throughout the validation system

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled patterns shared by the primitive validators and the form screens
pub struct RegexPatterns {
    pub email: Regex,
    /// Allowed password alphabet; the character-class requirements are
    /// checked separately since the regex engine has no lookahead
    pub password: Regex,
    pub url: Regex,
    pub phone: Regex,
}

pub static REGEX_PATTERNS: Lazy<RegexPatterns> = Lazy::new(|| RegexPatterns {
    email: Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("Failed to compile email regex"),
    password: Regex::new(r"^[A-Za-z\d@$!%*?&]{8,}$")
        .expect("Failed to compile password regex"),
    url: Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$")
        .expect("Failed to compile url regex"),
    phone: Regex::new(r"^\+?[0-9]{10,15}$")
        .expect("Failed to compile phone regex"),
});

/// Special characters a password must draw at least one of
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "@$!%*?&";
/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum size of a single upload (10MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
/// Maximum number of files in one upload request
pub const MAX_FILES_PER_REQUEST: usize = 5;

pub const ALLOWED_FILE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/pdf",
    "application/json",
    "text/plain",
    "application/zip",
    "application/x-zip-compressed",
    "application/x-ipynb+json",
];

/// Prefixes of URIs handed out by the Android document and media pickers
pub const ANDROID_CONTENT_URI_PREFIXES: &[&str] =
    &["content://", "file://", "/storage/", "/sdcard/"];

/// Deep-link schemes accepted as URLs without further checks
pub const DEEP_LINK_SCHEMES: &[&str] = &["content://", "market://", "intent://", "app://"];

pub struct FileUploadLimits {
    pub max_file_size: u64,
    pub allowed_file_types: &'static [&'static str],
    pub max_files_per_request: usize,
    pub android_content_uri_prefixes: &'static [&'static str],
}

pub const FILE_UPLOAD_LIMITS: FileUploadLimits = FileUploadLimits {
    max_file_size: MAX_FILE_SIZE,
    allowed_file_types: ALLOWED_FILE_TYPES,
    max_files_per_request: MAX_FILES_PER_REQUEST,
    android_content_uri_prefixes: ANDROID_CONTENT_URI_PREFIXES,
};

/// MIME types reported for the common Android media sources
pub struct AndroidMimeTypes {
    pub camera_jpeg: &'static str,
    pub gallery_jpeg: &'static str,
    pub gallery_png: &'static str,
    pub document_pdf: &'static str,
    pub document_json: &'static str,
    pub document_text: &'static str,
}

pub const ANDROID_MIME_TYPES: AndroidMimeTypes = AndroidMimeTypes {
    camera_jpeg: "image/jpeg",
    gallery_jpeg: "image/jpeg",
    gallery_png: "image/png",
    document_pdf: "application/pdf",
    document_json: "application/json",
    document_text: "text/plain",
};

/// Lowercase file extension to MIME type
pub const EXTENSION_MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("json", "application/json"),
    ("txt", "text/plain"),
    ("ipynb", "application/x-ipynb+json"),
];
