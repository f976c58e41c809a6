//! Messages exchanged with the host backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Named channel a message is sent on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Dashboard-scoped requests, such as fetching support data.
    Dashboard,
    /// General requests, such as opening a tab.
    Default,
}

/// A request to the backend, tagged by its `what` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "what")]
pub enum Message {
    #[serde(rename = "getSupportData")]
    GetSupportData,
    #[serde(rename = "gotoURL")]
    GotoUrl { details: GotoUrlDetails },
}

/// Where and how to open a URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotoUrlDetails {
    pub url: String,
    /// Focus the opened view.
    pub select: bool,
    /// Position of the new view; `-1` lets the host decide.
    pub index: i32,
}

impl Message {
    /// Opens `url` in a selected view at the host's chosen position.
    pub fn goto_url(url: impl Into<String>) -> Self {
        Self::GotoUrl {
            details: GotoUrlDetails {
                url: url.into(),
                select: true,
                index: -1,
            },
        }
    }
}

/// The host side of the panel.
pub trait Messaging {
    /// Sends `message` and blocks until the reply arrives.
    fn request(&mut self, channel: Channel, message: &Message) -> Result<Value>;

    /// Sends `message` without waiting for a reply.
    fn post(&mut self, channel: Channel, message: &Message);
}
