//! The support panel: fetches the snapshot, shows it, and keeps report links
//! current.
//!
//! The panel owns the only mutable state, the pristine snapshot and the mode
//! flag. Every `show` renders from the pristine snapshot, so toggling the mode
//! back and forth never accumulates edits.

mod messaging;
mod surface;

use std::collections::BTreeMap;

use slog::{debug, info, o, warn, Discard, Logger};

pub use messaging::{Channel, GotoUrlDetails, Message, Messaging};
pub use surface::{BufferSurface, DisplaySurface, EditorCommand};

use crate::{
    error::Result,
    redaction::{RedactionMode, RedactionProfile},
    report::{report_url_str, DEFAULT_REPORT_LINKS},
    snapshot::Snapshot,
};

pub struct SupportPanel<M, S> {
    messaging: M,
    surface: S,
    profile: RedactionProfile,
    snapshot: Option<Snapshot>,
    mode: RedactionMode,
    links: BTreeMap<String, String>,
    report_links: Vec<String>,
    log: Logger,
}

impl<M: Messaging, S: DisplaySurface> SupportPanel<M, S> {
    pub fn new(messaging: M, surface: S, profile: RedactionProfile) -> Self {
        Self {
            messaging,
            surface,
            profile,
            snapshot: None,
            mode: RedactionMode::default(),
            links: BTreeMap::new(),
            report_links: DEFAULT_REPORT_LINKS.iter().map(|id| (*id).to_owned()).collect(),
            log: Logger::root(Discard, o!()),
        }
    }

    #[must_use]
    pub fn with_logger(mut self, log: Logger) -> Self {
        self.log = log;
        self
    }

    /// Registers a navigable link, like an element carrying a `data-url`.
    #[must_use]
    pub fn with_link(mut self, id: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.insert(id.into(), url.into());
        self
    }

    /// Replaces the ids of the links that receive the rendered text.
    #[must_use]
    pub fn with_report_links<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.report_links = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Fetches the snapshot, prunes the load-time paths, and shows it.
    pub fn load(&mut self) -> Result<()> {
        let reply = self
            .messaging
            .request(Channel::Dashboard, &Message::GetSupportData)?;
        let mut snapshot = Snapshot::try_from(reply)?;
        for path in &self.profile.load_prune_paths {
            snapshot.remove_key(path);
        }
        info!(self.log, "support data loaded";
            "entries" => snapshot.as_map().len(),
            "snapshot" => snapshot.to_redacted_json(&self.profile));
        self.snapshot = Some(snapshot);
        self.show();
        Ok(())
    }

    /// Renders the current snapshot into the surface and refreshes report links.
    ///
    /// Does nothing until a snapshot has been loaded.
    pub fn show(&mut self) {
        let Some(snapshot) = &self.snapshot else {
            debug!(self.log, "show skipped, no support data yet");
            return;
        };
        let text = snapshot.render(&self.profile, self.mode);
        self.surface.set_value(&text);
        self.surface.clear_history();
        debug!(self.log, "support data shown"; "mode" => ?self.mode, "bytes" => text.len());

        for id in &self.report_links {
            let Some(url) = self.links.get_mut(id) else {
                continue;
            };
            match report_url_str(url, self.surface.value()) {
                Ok(updated) => *url = updated.into(),
                Err(err) => warn!(self.log, "report link left unchanged"; "id" => id, "error" => %err),
            }
        }
    }

    pub fn redact(&mut self) {
        self.set_mode(RedactionMode::Redacted);
    }

    pub fn unredact(&mut self) {
        self.set_mode(RedactionMode::Unredacted);
    }

    pub fn set_mode(&mut self, mode: RedactionMode) {
        info!(self.log, "redaction mode changed"; "mode" => ?mode);
        self.mode = mode;
        self.show();
    }

    pub fn select_all(&mut self) {
        self.surface.focus();
        self.surface.execute(EditorCommand::SelectAll);
    }

    /// Asks the host to open the link's current URL.
    ///
    /// Returns `false` when the link is unknown or its URL is empty.
    pub fn activate_link(&mut self, id: &str) -> bool {
        let url = match self.links.get(id) {
            Some(url) if !url.is_empty() => url.clone(),
            _ => {
                debug!(self.log, "link has no target"; "id" => id);
                return false;
            }
        };
        info!(self.log, "opening link"; "id" => id);
        self.messaging.post(Channel::Default, &Message::goto_url(url));
        true
    }

    pub fn mode(&self) -> RedactionMode {
        self.mode
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// The link's current URL, including any embedded report text.
    pub fn link(&self, id: &str) -> Option<&str> {
        self.links.get(id).map(String::as_str)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn messaging(&self) -> &M {
        &self.messaging
    }
}
