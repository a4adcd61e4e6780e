//! Outbound notifier: player navigation requests back to the content script.

use std::rc::Rc;

use serde_json::Value;

use ruffle_bridge_core::protocol::command::Notification;
use ruffle_bridge_core::protocol::envelope::Envelope;

use crate::bus::MessageBus;
use crate::player::NavigationHook;

#[derive(Clone)]
pub struct Notifier {
    bus: Rc<dyn MessageBus>,
    channel: String,
}

impl Notifier {
    /// Notifier posting to `channel` (the instance's outbound channel).
    pub fn new(bus: Rc<dyn MessageBus>, channel: impl Into<String>) -> Self {
        Self {
            bus,
            channel: channel.into(),
        }
    }

    /// Ask the content script to open `url` in the extension's player.
    /// `url` is forwarded verbatim. Unsolicited, so the envelope carries no
    /// correlation index.
    pub fn open_url_in_player(&self, url: &str) {
        let notification = Notification::OpenUrlInPlayer {
            url: url.to_string(),
        };
        let data = match serde_json::to_value(&notification) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "open_url_in_player encode failed");
                return;
            }
        };

        tracing::debug!(to = %self.channel, url, "open_url_in_player");
        let env = Envelope::new(self.channel.clone(), Value::Null, data);
        self.bus.post(env.to_value());
    }

    pub fn into_hook(self) -> NavigationHook {
        Rc::new(move |url: &str| self.open_url_in_player(url))
    }
}
