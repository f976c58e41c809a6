//! Dotted key paths into a snapshot.
//!
//! A path such as `"trustedset.added"` addresses the key `added` inside the
//! mapping stored under `trustedset`. Paths are best-effort: resolving a path
//! that runs through a scalar, a sequence, or a missing key yields nothing,
//! and the callers treat that as a no-op.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A parsed dot-separated key chain.
///
/// Segments are split on `.` once at construction. There is no escaping, so
/// keys containing a dot cannot be addressed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SnapshotPath {
    raw: String,
    segments: Vec<String>,
}

impl SnapshotPath {
    /// Parses a dotted path.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw.split('.').map(str::to_owned).collect();
        Self { raw, segments }
    }

    /// The path as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The individual keys, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walks to the mapping that holds the final segment and hands it to `action`
    /// together with that final key.
    ///
    /// Returns `None` without calling `action` when an intermediate segment is
    /// absent or is not a mapping. Whether the final key exists is left to
    /// `action`.
    pub(crate) fn with_parent_mut<R>(
        &self,
        root: &mut Map<String, Value>,
        action: impl FnOnce(&mut Map<String, Value>, &str) -> R,
    ) -> Option<R> {
        let (last, parents) = self.segments.split_last()?;
        let mut node = root;
        for segment in parents {
            match node.get_mut(segment.as_str()) {
                Some(Value::Object(child)) => node = child,
                _ => return None,
            }
        }
        Some(action(node, last))
    }

    /// Read-only lookup of the value at this path.
    pub(crate) fn resolve<'a>(&self, root: &'a Map<String, Value>) -> Option<&'a Value> {
        let (last, parents) = self.segments.split_last()?;
        let mut node = root;
        for segment in parents {
            match node.get(segment.as_str()) {
                Some(Value::Object(child)) => node = child,
                _ => return None,
            }
        }
        node.get(last.as_str())
    }
}

impl fmt::Display for SnapshotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for SnapshotPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SnapshotPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl Serialize for SnapshotPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for SnapshotPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
