//! Report URLs carrying the rendered snapshot.
//!
//! Issue trackers receive the text through a query parameter, wrapped in a
//! collapsible `<details>` block around a fenced `yaml` code block.

use url::Url;

use crate::error::{Error, Result};

/// Query parameter that receives the wrapped text.
pub const REPORT_QUERY_PARAM: &str = "configuration";

/// Link ids rewritten after every render unless configured otherwise.
pub const DEFAULT_REPORT_LINKS: [&str; 2] = ["filterReport", "bugReport"];

/// Wraps `text` the way it is embedded in a report.
pub fn wrap_details(text: &str) -> String {
    format!("<details>\n\n```yaml\n{text}\n```\n</details>")
}

/// Returns `base` with [`REPORT_QUERY_PARAM`] set to the wrapped `text`.
///
/// An existing value for the parameter is replaced; all other query pairs are
/// kept in order.
pub fn report_url(base: &Url, text: &str) -> Url {
    let mut url = base.clone();
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != REPORT_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(REPORT_QUERY_PARAM, &wrap_details(text));
    url
}

/// Parses `base` and delegates to [`report_url`].
pub fn report_url_str(base: &str, text: &str) -> Result<Url> {
    let parsed = Url::parse(base).map_err(|source| Error::InvalidUrl {
        url: base.to_owned(),
        source,
    })?;
    Ok(report_url(&parsed, text))
}
