//! Type definitions for the validation system

mod file_input;
mod validation_result;

// Re-export commonly used types and functions
pub use file_input::{FileDescriptor, FileValidation, FilesValidation};
pub use validation_result::{ErrorMap, FieldErrors, MilestonesValidation, ValidationResult};
