//! Root module for the validation system.
//! Exposes the public API for validating form values and file uploads.

mod constants;
mod files;
mod forms;
mod primitives;
mod rules;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use files::{
    get_android_mime_type, is_android_content_uri, validate_file_upload, validate_file_uploads,
};
pub use forms::*;
pub use primitives::{
    is_valid_amount, is_valid_date, is_valid_date_range, is_valid_uuid, validate_email,
    validate_password, validate_phone, validate_url,
};
pub use rules::{Rules, StandardRules};
pub use types::{
    ErrorMap, FieldErrors, FileDescriptor, FileValidation, FilesValidation, MilestonesValidation,
    ValidationResult,
};

#[cfg(test)]
pub(crate) use forms::test_support;
