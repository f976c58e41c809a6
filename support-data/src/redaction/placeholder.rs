//! Placeholder strings substituted for redacted or empty values.
//!
//! Placeholders are plain strings so the rendered snapshot reads naturally.
//! They are not escaped or otherwise distinguished from real string values.

/// Replacement for any redacted value that is not a non-empty sequence.
pub const REDACTED_PLACEHOLDER: &str = "[redacted]";

/// Replacement for an empty sequence.
pub const EMPTY_PLACEHOLDER: &str = "[empty]";

/// Replacement for an empty mapping.
pub const NONE_PLACEHOLDER: &str = "[none]";

/// Prefix identifying keys that name local files (custom filter lists loaded
/// from disk).
pub const LOCAL_FILE_PREFIX: &str = "file://";

/// Replacement for a redacted sequence of `len` elements.
///
/// A zero-length sequence gets [`EMPTY_PLACEHOLDER`] instead.
#[must_use]
pub fn array_placeholder(len: usize) -> String {
    if len == 0 {
        return EMPTY_PLACEHOLDER.to_owned();
    }
    format!("[array of {len} redacted]")
}

/// Anonymized label for the `ordinal`-th local file key (1-based).
#[must_use]
pub fn list_name_placeholder(ordinal: usize) -> String {
    format!("[list name {ordinal} redacted]")
}

/// Returns `true` when `key` names a local file.
#[must_use]
pub fn is_local_file_key(key: &str) -> bool {
    key.starts_with(LOCAL_FILE_PREFIX)
}
