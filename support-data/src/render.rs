//! YAML-like block rendering of a snapshot.
//!
//! The output is meant for humans and issue trackers, not for parsing back:
//!
//! ```text
//! filterset: [array of 3 redacted]
//! trustedset:
//!   added: [empty]
//! userSettings:
//!   advancedUserEnabled: true
//! ```
//!
//! Rules:
//! - top-level entries start at column 0, each nesting level adds two spaces
//! - a scalar entry is `key: value`; a non-empty container entry is `key:`
//!   followed by its children one level deeper
//! - sequence elements print bare at the sequence's level; container elements
//!   print their children one level deeper, without a marker line
//! - strings and keys print their JSON-escaped content without quotes
//! - empty containers print as `[]` and `{}`
//! - trailing whitespace is trimmed and blank lines are dropped
//! - every line, including the last, ends with `\n`; an empty snapshot
//!   renders as a single `\n`

use serde_json::{Map, Value};

use crate::snapshot::Snapshot;

const INDENT: &str = "  ";

/// Renders `snapshot` as indented key/value text.
pub fn to_block_text(snapshot: &Snapshot) -> String {
    let mut lines = BlockLines::default();
    lines.mapping(snapshot.as_map(), 0);
    lines.finish()
}

#[derive(Default)]
struct BlockLines {
    out: String,
    any: bool,
}

impl BlockLines {
    fn mapping(&mut self, map: &Map<String, Value>, depth: usize) {
        for (key, value) in map {
            let key = escape(key);
            match value {
                Value::Object(child) if !child.is_empty() => {
                    self.line(depth, &format!("{key}:"));
                    self.mapping(child, depth + 1);
                }
                Value::Array(items) if !items.is_empty() => {
                    self.line(depth, &format!("{key}:"));
                    self.sequence(items, depth + 1);
                }
                scalar => self.line(depth, &format!("{key}: {}", scalar_text(scalar))),
            }
        }
    }

    fn sequence(&mut self, items: &[Value], depth: usize) {
        for item in items {
            match item {
                Value::Object(child) if !child.is_empty() => self.mapping(child, depth + 1),
                Value::Array(nested) if !nested.is_empty() => self.sequence(nested, depth + 1),
                scalar => self.line(depth, &scalar_text(scalar)),
            }
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        if self.any {
            self.out.push('\n');
        }
        self.any = true;
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
    }

    fn finish(mut self) -> String {
        self.out.push('\n');
        self.out
    }
}

/// Text for a leaf value. Containers only reach here when empty.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => escape(text),
        Value::Array(_) => "[]".to_owned(),
        Value::Object(_) => "{}".to_owned(),
    }
}

/// JSON string escaping without the surrounding quotes.
fn escape(text: &str) -> String {
    let quoted = Value::String(text.to_owned()).to_string();
    quoted[1..quoted.len() - 1].to_owned()
}
