use std::rc::Rc;

use serde_json::{Map, Value};

use ruffle_bridge_core::protocol::command::{ack, spread_entries, Command};

use crate::notifier::Notifier;
use crate::player::PlayerRuntime;

/// Interprets inbound payloads.
///
/// Returns the reply payload, or `None` for "no reply": unrecognized payloads
/// and loads the host failed to apply.
pub struct CommandHandler {
    player: Rc<dyn PlayerRuntime>,
    notifier: Notifier,
    install_context: String,
}

impl CommandHandler {
    pub fn new(
        player: Rc<dyn PlayerRuntime>,
        notifier: Notifier,
        install_context: impl Into<String>,
    ) -> Self {
        Self {
            player,
            notifier,
            install_context: install_context.into(),
        }
    }

    pub fn handle(&self, data: &Value) -> Option<Value> {
        let command = match Command::parse(data) {
            Ok(Some(command)) => command,
            Ok(None) => {
                tracing::trace!("ignoring unrecognized payload");
                return None;
            }
            Err(e) => {
                tracing::warn!(code = e.code().as_str(), error = %e, "dropping malformed command");
                return None;
            }
        };

        match command {
            Command::Load { config } => self.load(spread_entries(&config)),
            Command::Ping => Some(ack()),
        }
    }

    fn load(&self, incoming: Map<String, Value>) -> Option<Value> {
        let hook = self.notifier.clone().into_hook();
        let applied = self
            .player
            .merge_config(incoming, hook)
            .and_then(|()| self.player.install(&self.install_context));

        match applied {
            Ok(()) => Some(ack()),
            Err(e) => {
                tracing::warn!(code = e.code().as_str(), error = %e, "load failed");
                None
            }
        }
    }
}
