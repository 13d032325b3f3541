//! Upload workflow helpers: validation, storage path derivation and the
//! reverse mapping from a public URL back to its storage path.

use rand::Rng;

use crate::error::CoreError;

/// Shown when the upload form is submitted without a file.
pub const MSG_MISSING_FILE: &str = "Please select an image to upload";

/// Shown when the upload form is submitted without a section.
pub const MSG_MISSING_SECTION: &str = "Please select a section for this image";

/// Shown when a section name would split the storage path.
pub const MSG_SECTION_HAS_SLASH: &str = "Section names cannot contain '/'";

/// Shown when neither a title nor a usable file name is available.
pub const MSG_MISSING_TITLE: &str = "Please enter a title for this image";

/// Success message returned after the row is inserted.
pub const MSG_UPLOADED: &str = "Image uploaded successfully!";

/// Length of the random part of a generated object name.
pub const SUFFIX_LEN: usize = 13;

const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Check the two required inputs. The file is checked first.
pub fn validate_upload(has_file: bool, section: Option<&str>) -> Result<(), CoreError> {
    if !has_file {
        return Err(CoreError::Validation(MSG_MISSING_FILE.into()));
    }
    validate_section(section.unwrap_or_default())
}

/// A section must be non-blank and a single path segment, since it becomes
/// the first segment of the object path.
pub fn validate_section(section: &str) -> Result<(), CoreError> {
    let section = section.trim();
    if section.is_empty() {
        return Err(CoreError::Validation(MSG_MISSING_SECTION.into()));
    }
    if section.contains('/') {
        return Err(CoreError::Validation(MSG_SECTION_HAS_SLASH.into()));
    }
    Ok(())
}

/// Text after the last `.` of a file name.
///
/// A name without a dot yields the whole name.
pub fn file_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

/// Build `{section}/{millis}-{suffix}.{ext}`.
pub fn storage_path(section: &str, file_name: &str, now_millis: i64, suffix: &str) -> String {
    format!(
        "{section}/{now_millis}-{suffix}.{}",
        file_extension(file_name)
    )
}

/// Random `[0-9a-z]` suffix of [`SUFFIX_LEN`] characters.
pub fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

/// Storage path for a new upload, unique in practice without coordination.
pub fn generate_storage_path(section: &str, file_name: &str) -> String {
    let now = chrono::Utc::now().timestamp_millis();
    storage_path(section, file_name, now, &random_suffix())
}

/// Recover `{section}/{file}` from a public object URL.
///
/// Takes the final two path segments, ignoring any query string or fragment.
/// Returns `None` when the URL has fewer than two non-empty segments.
pub fn storage_path_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let mut segments = path.rsplit('/').filter(|s| !s.is_empty());
    let file = segments.next()?;
    let section = segments.next()?;
    if section.ends_with(':') {
        // Only a scheme and host were present.
        return None;
    }
    Some(format!("{}/{}", decode_segment(section), decode_segment(file)))
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Default title derived from a file name: the part before the first `.`,
/// with `-` and `_` turned into spaces.
pub fn title_from_file_name(file_name: &str) -> String {
    file_name
        .split('.')
        .next()
        .unwrap_or_default()
        .replace(['-', '_'], " ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
