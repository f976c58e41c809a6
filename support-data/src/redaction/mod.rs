//! Redaction of snapshot trees.
//!
//! - **`placeholder`**: the replacement strings and the local-file key test
//! - **`profile`**: which paths are dropped, redacted, or relabelled, and the mode switch
//! - **`transform`**: the in-place tree edits those lists drive
//!
//! The tree edits are exposed as methods on [`crate::Snapshot`].

mod placeholder;
mod profile;
pub(crate) mod transform;

pub use placeholder::{
    array_placeholder, is_local_file_key, list_name_placeholder, EMPTY_PLACEHOLDER,
    LOCAL_FILE_PREFIX, NONE_PLACEHOLDER, REDACTED_PLACEHOLDER,
};
pub use profile::{RedactionMode, RedactionProfile};
