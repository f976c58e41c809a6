//! Adapters for emitting snapshots through `slog`.
//!
//! Snapshots reach the log only in their redacted form: the adapter applies
//! the full redacted-mode pipeline of a [`RedactionProfile`] before storing
//! anything, and emits the result as structured JSON via `slog`'s
//! nested-value support.
//!
//! It does not configure `slog` or choose log levels.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    redaction::{RedactionMode, RedactionProfile},
    snapshot::Snapshot,
};

/// A `slog::Value` holding an already-redacted snapshot.
pub struct RedactedSnapshot {
    value: JsonValue,
}

impl RedactedSnapshot {
    /// Redacts `snapshot` with `profile` in [`RedactionMode::Redacted`].
    pub fn new(snapshot: &Snapshot, profile: &RedactionProfile) -> Self {
        let value = snapshot
            .scrubbed(profile, RedactionMode::Redacted)
            .into_value();
        Self { value }
    }

    /// The JSON that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedSnapshot {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl Snapshot {
    /// Returns a loggable, redacted view of this snapshot.
    ///
    /// ## Example
    /// ```ignore
    /// info!(log, "loaded"; "snapshot" => snapshot.to_redacted_json(&profile));
    /// ```
    pub fn to_redacted_json(&self, profile: &RedactionProfile) -> RedactedSnapshot {
        RedactedSnapshot::new(self, profile)
    }
}
