//! Which paths are dropped, redacted, or relabelled.

use serde::{Deserialize, Serialize};

use crate::path::SnapshotPath;

/// Whether sensitive paths are scrubbed before rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedactionMode {
    /// Render everything except the useless paths.
    #[default]
    Unredacted,
    /// Additionally scrub sensitive values and keys.
    Redacted,
}

impl RedactionMode {
    /// Returns `true` for [`RedactionMode::Redacted`].
    pub fn is_redacted(self) -> bool {
        matches!(self, Self::Redacted)
    }
}

/// The configured path lists driving a render.
///
/// Every list may name paths missing from a particular snapshot; those are
/// skipped. Deserializing a partial table keeps the stock lists for the
/// fields it does not mention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionProfile {
    /// Removed in every mode.
    pub useless_paths: Vec<SnapshotPath>,
    /// Values replaced by placeholders in redacted mode.
    pub sensitive_values: Vec<SnapshotPath>,
    /// Mappings whose local-file keys are relabelled in redacted mode.
    pub sensitive_keys: Vec<SnapshotPath>,
    /// Removed from the pristine snapshot once, right after it is fetched.
    pub load_prune_paths: Vec<SnapshotPath>,
}

impl RedactionProfile {
    /// A profile with no paths at all. Rendering with it only normalizes
    /// emptiness.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            useless_paths: Vec::new(),
            sensitive_values: Vec::new(),
            sensitive_keys: Vec::new(),
            load_prune_paths: Vec::new(),
        }
    }
}

fn paths(raw: &[&str]) -> Vec<SnapshotPath> {
    raw.iter().copied().map(SnapshotPath::from).collect()
}

impl Default for RedactionProfile {
    fn default() -> Self {
        Self {
            useless_paths: paths(&[
                "modifiedUserSettings.popupPanelSections",
                "modifiedUserSettings.externalLists",
                "modifiedUserSettings.importedLists",
            ]),
            sensitive_values: paths(&[
                "filterset",
                "modifiedUserSettings.popupPanelSections",
                "modifiedHiddenSettings.userResourcesLocation",
                "trustedset.added",
                "hostRuleset.added",
                "switchRuleset.added",
                "urlRuleset.added",
            ]),
            sensitive_keys: paths(&["listset.added"]),
            load_prune_paths: paths(&["modifiedHiddenSettings.benchmarkDatasetURL"]),
        }
    }
}
