//! Command-line stand-in for the extension backend.
//!
//! Support data comes from a JSON file (or stdin); navigation requests are
//! collected so the caller can print them.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use serde_json::Value;
use slog::{debug, info, warn, Logger};
use support_data::{
    panel::{Channel, Message},
    Error, Messaging, Result,
};

pub struct FileHost {
    source: PathBuf,
    opened: Vec<String>,
    log: Logger,
}

impl FileHost {
    pub fn new(source: PathBuf, log: Logger) -> Self {
        Self {
            source,
            opened: Vec::new(),
            log,
        }
    }

    /// URLs the panel asked to open, in order.
    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    fn read_source(&self) -> io::Result<String> {
        if self.source.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            return Ok(text);
        }
        fs::read_to_string(&self.source)
    }
}

impl Messaging for FileHost {
    fn request(&mut self, channel: Channel, message: &Message) -> Result<Value> {
        debug!(self.log, "request"; "channel" => ?channel, "message" => ?message);
        match message {
            Message::GetSupportData => {
                let text = self.read_source().map_err(|err| {
                    Error::Messaging(format!("reading {}: {err}", self.source.display()))
                })?;
                Ok(serde_json::from_str(&text)?)
            }
            other => Err(Error::Messaging(format!("no reply for {other:?}"))),
        }
    }

    fn post(&mut self, channel: Channel, message: &Message) {
        match message {
            Message::GotoUrl { details } => {
                info!(self.log, "goto url"; "channel" => ?channel, "url" => &details.url);
                self.opened.push(details.url.clone());
            }
            other => warn!(self.log, "ignored message"; "message" => ?other),
        }
    }
}
