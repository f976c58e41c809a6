//! In-place transforms over a snapshot's root mapping.
//!
//! Each path-driven transform resolves its path with
//! [`SnapshotPath::with_parent_mut`] and acts on the terminal mapping. A path
//! that does not resolve leaves the tree untouched; none of these functions
//! can fail.

use serde_json::{Map, Value};

use super::placeholder::{
    array_placeholder, is_local_file_key, list_name_placeholder, EMPTY_PLACEHOLDER,
    NONE_PLACEHOLDER, REDACTED_PLACEHOLDER,
};
use crate::path::SnapshotPath;

/// Deletes the key at `path`. Returns the removed value, if any.
pub(crate) fn remove_key(root: &mut Map<String, Value>, path: &SnapshotPath) -> Option<Value> {
    path.with_parent_mut(root, |parent, key| parent.shift_remove(key))
        .flatten()
}

/// Replaces the value at `path` with its placeholder. Returns `true` if a value
/// was replaced.
pub(crate) fn redact_value(root: &mut Map<String, Value>, path: &SnapshotPath) -> bool {
    path.with_parent_mut(root, |parent, key| match parent.get_mut(key) {
        Some(value) => {
            *value = Value::String(placeholder_for(value));
            true
        }
        None => false,
    })
    .unwrap_or(false)
}

fn placeholder_for(value: &Value) -> String {
    match value {
        Value::Array(items) => array_placeholder(items.len()),
        _ => REDACTED_PLACEHOLDER.to_owned(),
    }
}

/// Relabels the local-file keys of the mapping at `path`. Returns how many keys
/// were relabelled.
///
/// Relabelled entries are appended after the untouched keys, numbered in the
/// order the original keys appeared.
pub(crate) fn redact_keys(root: &mut Map<String, Value>, path: &SnapshotPath) -> usize {
    path.with_parent_mut(root, |parent, key| match parent.get_mut(key) {
        Some(Value::Object(target)) => relabel_local_file_keys(target),
        _ => 0,
    })
    .unwrap_or(0)
}

fn relabel_local_file_keys(target: &mut Map<String, Value>) -> usize {
    let local: Vec<String> = target
        .keys()
        .filter(|key| is_local_file_key(key))
        .cloned()
        .collect();
    let mut count = 0;
    for key in local {
        if let Some(value) = target.shift_remove(&key) {
            count += 1;
            target.insert(list_name_placeholder(count), value);
        }
    }
    count
}

/// Replaces empty sequences and mappings below the root with placeholders.
///
/// The root itself is left as is, even when it is empty.
pub(crate) fn normalize_emptiness(root: &mut Map<String, Value>) {
    for value in root.values_mut() {
        patch_emptiness(value);
    }
}

fn patch_emptiness(value: &mut Value) {
    match value {
        Value::Array(items) if items.is_empty() => {
            *value = Value::String(EMPTY_PLACEHOLDER.to_owned());
        }
        Value::Object(map) if map.is_empty() => {
            *value = Value::String(NONE_PLACEHOLDER.to_owned());
        }
        Value::Array(items) => items.iter_mut().for_each(patch_emptiness),
        Value::Object(map) => map.values_mut().for_each(patch_emptiness),
        _ => {}
    }
}
