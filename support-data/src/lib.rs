//! Redaction and rendering of diagnostic support snapshots.
//!
//! A support snapshot is a schema-less JSON object describing an extension's
//! configuration. This crate:
//! - drops keys that never help diagnostics
//! - on request, scrubs sensitive values and relabels local file names
//! - renders the result as YAML-like indented text
//! - embeds that text in issue-tracker report URLs
//!
//! Paths into the snapshot are dotted key chains (`"trustedset.added"`).
//! Paths missing from a given snapshot are skipped silently; the transforms
//! never fail.
//!
//! ```
//! use serde_json::json;
//! use support_data::{RedactionMode, RedactionProfile, Snapshot};
//!
//! let snapshot = Snapshot::try_from(json!({
//!     "filterset": ["||ads.example^", "##.banner", "##.popup"],
//!     "trustedset": {"added": []}
//! }))
//! .unwrap();
//! let text = snapshot.render(&RedactionProfile::default(), RedactionMode::Redacted);
//! assert_eq!(
//!     text,
//!     "filterset: [array of 3 redacted]\ntrustedset:\n  added: [empty]\n"
//! );
//! ```
//!
//! What it does not do:
//! - talk to the backend or a real editor widget; [`panel`] defines the traits
//!   a host implements for that
//! - validate snapshot structure beyond best-effort path traversal

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
pub mod panel;
mod path;
mod redaction;
pub mod render;
pub mod report;
pub mod slog;
mod snapshot;

pub use error::{Error, Result};
pub use panel::{BufferSurface, DisplaySurface, Messaging, SupportPanel};
pub use path::SnapshotPath;
pub use redaction::{
    array_placeholder, is_local_file_key, list_name_placeholder, RedactionMode,
    RedactionProfile, EMPTY_PLACEHOLDER, LOCAL_FILE_PREFIX, NONE_PLACEHOLDER,
    REDACTED_PLACEHOLDER,
};
pub use report::{report_url, report_url_str, REPORT_QUERY_PARAM};
pub use snapshot::Snapshot;
