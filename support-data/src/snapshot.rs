//! The diagnostic snapshot and the redact-then-render pipeline.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    error::{Error, Result},
    path::SnapshotPath,
    redaction::{transform, RedactionMode, RedactionProfile},
    render,
};

/// A schema-less diagnostic snapshot: an ordered mapping of string keys to
/// JSON values.
///
/// Key order is the order the backend produced, which keeps rendering
/// deterministic. `Clone` is a deep copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    root: Map<String, Value>,
}

impl Snapshot {
    /// Wraps an already-parsed mapping.
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Parses a snapshot from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from(value)
    }

    /// The root mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// Looks up the value at `path`.
    pub fn get(&self, path: &SnapshotPath) -> Option<&Value> {
        path.resolve(&self.root)
    }

    /// Deletes the entry at `path`; unresolvable paths are ignored.
    ///
    /// Returns the removed value.
    pub fn remove_key(&mut self, path: &SnapshotPath) -> Option<Value> {
        transform::remove_key(&mut self.root, path)
    }

    /// Replaces the value at `path` with a placeholder.
    ///
    /// A sequence of N elements becomes `"[array of N redacted]"`, an empty one
    /// `"[empty]"`, anything else `"[redacted]"`. Returns `false` when nothing
    /// was there to redact.
    pub fn redact_value(&mut self, path: &SnapshotPath) -> bool {
        transform::redact_value(&mut self.root, path)
    }

    /// Relabels the local-file keys of the mapping at `path` as
    /// `"[list name N redacted]"`, keeping their values.
    ///
    /// Returns the number of relabelled keys.
    pub fn redact_keys(&mut self, path: &SnapshotPath) -> usize {
        transform::redact_keys(&mut self.root, path)
    }

    /// Replaces every empty sequence with `"[empty]"` and every empty mapping
    /// with `"[none]"`, at any depth below the root. Idempotent.
    pub fn normalize_emptiness(&mut self) {
        transform::normalize_emptiness(&mut self.root);
    }

    /// Produces the tree that [`Snapshot::render`] serializes.
    ///
    /// Works on a deep copy; `self` is never modified.
    #[must_use]
    pub fn scrubbed(&self, profile: &RedactionProfile, mode: RedactionMode) -> Self {
        let mut shown = self.clone();
        for path in &profile.useless_paths {
            shown.remove_key(path);
        }
        if mode.is_redacted() {
            for path in &profile.sensitive_values {
                shown.redact_value(path);
            }
            for path in &profile.sensitive_keys {
                shown.redact_keys(path);
            }
        }
        shown.normalize_emptiness();
        shown
    }

    /// Renders the display text for `mode`.
    pub fn render(&self, profile: &RedactionProfile, mode: RedactionMode) -> String {
        render::to_block_text(&self.scrubbed(profile, mode))
    }
}

impl TryFrom<Value> for Snapshot {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(Error::InvalidSnapshot {
                found: kind_name(&other),
            }),
        }
    }
}

impl From<Snapshot> for Value {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.into_value()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::Snapshot;
    use crate::{
        error::Error,
        redaction::{RedactionMode, RedactionProfile},
    };

    fn snapshot(value: Value) -> Snapshot {
        Snapshot::try_from(value).unwrap()
    }

    #[test]
    fn rejects_non_object_payloads() {
        let err = Snapshot::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::InvalidSnapshot { found: "array" }));

        let err = Snapshot::from_json_str("null").unwrap_err();
        assert!(matches!(err, Error::InvalidSnapshot { found: "null" }));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = Snapshot::from_json_str("{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn get_resolves_paths() {
        let data = snapshot(json!({"a": {"b": true}}));
        assert_eq!(data.get(&"a.b".into()), Some(&json!(true)));
        assert_eq!(data.get(&"a.c".into()), None);
    }

    #[test]
    fn scrubbed_leaves_original_untouched() {
        let data = snapshot(json!({
            "filterset": ["a"],
            "modifiedUserSettings": {"externalLists": "x", "kept": 1}
        }));
        let pristine = data.clone();

        let shown = data.scrubbed(&RedactionProfile::default(), RedactionMode::Redacted);

        assert_eq!(data, pristine);
        assert_eq!(
            shown.into_value(),
            json!({
                "filterset": "[array of 1 redacted]",
                "modifiedUserSettings": {"kept": 1}
            })
        );
    }

    #[test]
    fn unredacted_scrub_only_drops_useless_paths() {
        let data = snapshot(json!({
            "filterset": ["a"],
            "modifiedUserSettings": {"importedLists": ["x"]}
        }));
        let shown = data.scrubbed(&RedactionProfile::default(), RedactionMode::Unredacted);
        assert_eq!(
            shown.into_value(),
            json!({"filterset": ["a"], "modifiedUserSettings": "[none]"})
        );
    }

    #[test]
    fn serializes_as_plain_object() {
        let data = snapshot(json!({"b": 1, "a": 2}));
        assert_eq!(serde_json::to_string(&data).unwrap(), r#"{"b":1,"a":2}"#);
    }
}
