//! Upload checks for files picked on the device

use log::{debug, trace};
use std::path::Path;

use super::constants::{
    ALLOWED_FILE_TYPES, ANDROID_CONTENT_URI_PREFIXES, EXTENSION_MIME_TYPES, MAX_FILES_PER_REQUEST,
    MAX_FILE_SIZE,
};
use super::types::{FileDescriptor, FileValidation, FilesValidation};
use crate::utils::error_messages::{INVALID_FILES_ARRAY, INVALID_FILE_OBJECT};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Whether `uri` points into the Android content providers or local storage
pub fn is_android_content_uri<'a>(uri: impl Into<Option<&'a str>>) -> bool {
    uri.into()
        .filter(|uri| !uri.is_empty())
        .is_some_and(|uri| {
            ANDROID_CONTENT_URI_PREFIXES
                .iter()
                .any(|prefix| uri.starts_with(prefix))
        })
}

/// Infers a MIME type from a path or URI.
///
/// The extension decides when it is known; otherwise media and document
/// provider paths fall back to JPEG and PDF. Returns an empty string when
/// nothing matches.
pub fn get_android_mime_type<'a>(path: impl Into<Option<&'a str>>) -> &'static str {
    let Some(path) = path.into().filter(|path| !path.is_empty()) else {
        return "";
    };

    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase());

    if let Some(extension) = extension {
        if let Some((_, mime)) = EXTENSION_MIME_TYPES.iter().find(|(ext, _)| *ext == extension) {
            return mime;
        }
    }

    if path.contains("/image/") {
        "image/jpeg"
    } else if path.contains("/document/") {
        "application/pdf"
    } else {
        ""
    }
}

/// Type reported by the picker, or the one inferred from the file location
fn resolve_mime_type(file: &FileDescriptor) -> &str {
    if !file.mime_type.is_empty() {
        return &file.mime_type;
    }

    let inferred = if is_android_content_uri(file.uri.as_str()) {
        get_android_mime_type(file.uri.as_str())
    } else {
        get_android_mime_type(file.name.as_str())
    };
    trace!("Inferred MIME type '{}' for {}", inferred, file.name);
    inferred
}

/// Checks one file against the size limit and the allowed types.
///
/// The declared MIME type wins; when it is empty the type is inferred from the
/// URI for Android content URIs and from the name otherwise. A type that
/// cannot be determined is not rejected.
///
/// # Arguments
/// * `file` - The picked file, `None` when the screen passed nothing usable
///
/// # Returns
/// * `valid: true` with no error if the file may be uploaded
/// * `valid: false` with the first failing rule's message otherwise
pub fn validate_file_upload(file: Option<&FileDescriptor>) -> FileValidation {
    let Some(file) = file else {
        return FileValidation::rejected(INVALID_FILE_OBJECT);
    };

    let mime_type = resolve_mime_type(file);

    if file.size > MAX_FILE_SIZE {
        debug!("Rejected {}: {} bytes", file.name, file.size);
        return FileValidation::rejected(format!(
            "File size exceeds maximum limit of {}MB",
            MAX_FILE_SIZE / BYTES_PER_MB
        ));
    }

    if !mime_type.is_empty() && !ALLOWED_FILE_TYPES.contains(&mime_type) {
        debug!("Rejected {}: type {}", file.name, mime_type);
        return FileValidation::rejected(format!("File type {} is not allowed", mime_type));
    }

    FileValidation::ok()
}

/// Checks a batch of files.
///
/// # Arguments
/// * `files` - The picked files, `None` when the screen passed no list
///
/// # Returns
/// * A single error if there are more than [`MAX_FILES_PER_REQUEST`] files
/// * Otherwise one `File n: ...` error per failing file, `n` being 1-based
pub fn validate_file_uploads(files: Option<&[FileDescriptor]>) -> FilesValidation {
    let Some(files) = files else {
        return FilesValidation::from_errors(vec![INVALID_FILES_ARRAY.to_string()]);
    };

    if files.len() > MAX_FILES_PER_REQUEST {
        return FilesValidation::from_errors(vec![format!(
            "Maximum of {} files allowed per request",
            MAX_FILES_PER_REQUEST
        )]);
    }

    let errors = files
        .iter()
        .enumerate()
        .filter_map(|(i, file)| {
            validate_file_upload(Some(file))
                .error
                .map(|error| format!("File {}: {}", i + 1, error))
        })
        .collect();

    FilesValidation::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_file() -> FileDescriptor {
        let uri = "file:///storage/emulated/0/DCIM/photo.jpg";
        FileDescriptor::new("photo.jpg", 1024, "image/jpeg", uri)
    }

    #[test]
    fn test_content_uris() {
        let cases = vec![
            ("content://media/external/images/media/12", true),
            ("file:///data/user/0/app/cache/x.pdf", true),
            ("/storage/emulated/0/Download/a.zip", true),
            ("/sdcard/Documents/b.txt", true),
            ("https://example.com/a.jpg", false),
            ("photo.jpg", false),
            ("", false),
        ];

        for (uri, expected) in cases {
            assert_eq!(
                is_android_content_uri(uri),
                expected,
                "Unexpected result for uri '{}'", uri
            );
        }
        assert!(!is_android_content_uri(None::<&str>));
    }

    #[test]
    fn test_mime_type_inference() {
        let cases = vec![
            ("photo.JPG", "image/jpeg"),
            ("/storage/emulated/0/DCIM/photo.jpeg", "image/jpeg"),
            ("screenshot.png", "image/png"),
            ("anim.gif", "image/gif"),
            ("file:///sdcard/cv.pdf", "application/pdf"),
            ("archive.zip", "application/zip"),
            ("data.json", "application/json"),
            ("notes.txt", "text/plain"),
            ("analysis.ipynb", "application/x-ipynb+json"),
            ("content://com.android.providers.media/image/42", "image/jpeg"),
            ("content://com.android.providers.downloads/document/7", "application/pdf"),
            ("content://media/external/images/1234", ""),
            ("movie.mp4", ""),
            ("", ""),
        ];

        for (path, expected) in cases {
            assert_eq!(
                get_android_mime_type(path),
                expected,
                "Unexpected MIME type for '{}'", path
            );
        }
        assert_eq!(get_android_mime_type(None::<&str>), "");
    }

    #[test]
    fn test_missing_file_object() {
        let result = validate_file_upload(None);
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some("Invalid file object"));
    }

    #[test]
    fn test_file_size_limit() {
        let file = FileDescriptor::new("large.jpg", 15 * 1024 * 1024, "image/jpeg", "file:///x");
        let result = validate_file_upload(Some(&file));
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("exceeds maximum limit"));

        // Exactly at the limit is fine
        let file = FileDescriptor::new("edge.jpg", MAX_FILE_SIZE, "image/jpeg", "file:///x");
        assert!(validate_file_upload(Some(&file)).valid);
    }

    #[test]
    fn test_file_type_allow_list() {
        let file = FileDescriptor::new("movie.mp4", 1024, "video/mp4", "file:///x");
        let result = validate_file_upload(Some(&file));
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("video/mp4"));

        assert!(validate_file_upload(Some(&valid_file())).valid);
    }

    #[test]
    fn test_file_type_inferred_when_missing() {
        // Inferred from the content URI
        let uri = "content://com.android.providers.downloads/document/7";
        let file = FileDescriptor::new("whatever", 1024, "", uri);
        assert!(validate_file_upload(Some(&file)).valid);

        // Inferred from the name when the URI is not a content URI
        let file = FileDescriptor::new("clip.exe.json", 1024, "", "https://cdn.example.com/clip");
        assert!(validate_file_upload(Some(&file)).valid);

        // Unknown type is not rejected
        let file = FileDescriptor::new("mystery", 1024, "", "content://media/external/1");
        assert!(validate_file_upload(Some(&file)).valid);
    }

    #[test]
    fn test_batch_of_files() {
        assert!(validate_file_uploads(Some(&[][..])).valid);

        let files = vec![
            valid_file(),
            FileDescriptor::new("big.pdf", MAX_FILE_SIZE + 1, "application/pdf", "file:///x"),
            valid_file(),
            FileDescriptor::new("run.sh", 10, "application/x-sh", "file:///y"),
        ];
        let result = validate_file_uploads(Some(files.as_slice()));
        assert!(!result.valid);

        let errors = result.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("File 2: "), "Unexpected error: {}", errors[0]);
        assert!(errors[1].starts_with("File 4: "), "Unexpected error: {}", errors[1]);
    }

    #[test]
    fn test_file_count_ceiling() {
        let files = vec![valid_file(); MAX_FILES_PER_REQUEST + 1];
        let result = validate_file_uploads(Some(files.as_slice()));
        assert!(!result.valid);
        assert_eq!(result.errors.as_ref().map(Vec::len), Some(1));
        assert!(result.first_error().unwrap().contains("Maximum of"));

        let files = vec![valid_file(); MAX_FILES_PER_REQUEST];
        assert!(validate_file_uploads(Some(files.as_slice())).valid);
    }

    #[test]
    fn test_missing_files_array() {
        let result = validate_file_uploads(None);
        assert!(!result.valid);
        assert_eq!(result.errors, Some(vec!["Invalid files array".to_string()]));
    }
}
