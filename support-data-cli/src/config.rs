//! Optional TOML configuration.
//!
//! ```toml
//! report_links = ["filterReport", "bugReport"]
//!
//! [profile]
//! sensitive_keys = ["listset.added"]
//!
//! [links]
//! bugReport = "https://issues.example/new?template=bug.yml"
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use support_data::{report::DEFAULT_REPORT_LINKS, RedactionProfile};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub profile: RedactionProfile,
    pub links: BTreeMap<String, String>,
    pub report_links: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: RedactionProfile::default(),
            links: BTreeMap::new(),
            report_links: DEFAULT_REPORT_LINKS.iter().map(|id| (*id).to_owned()).collect(),
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Applies `--link` overrides.
    pub fn with_links(mut self, links: impl IntoIterator<Item = (String, String)>) -> Self {
        self.links.extend(links);
        self
    }
}
