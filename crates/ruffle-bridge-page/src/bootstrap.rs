//! One-time boot sequence of an injected bridge instance.
//!
//! 1) Polyfill the asset base path (before any module-relative asset loads).
//! 2) Resolve the instance identifier.
//! 3) Attach the router iff there is an identifier.
//!
//! Nothing here fails: every problem degrades to "feature unavailable" and is
//! only logged.

use std::rc::Rc;

use ruffle_bridge_core::identity::{resolve_instance_id, InstanceId};
use ruffle_bridge_core::protocol::channel::Channels;

use crate::bus::MessageBus;
use crate::config::BridgeSettings;
use crate::dispatch::CommandHandler;
use crate::env::{PublicPathSlot, ScriptElement};
use crate::notifier::Notifier;
use crate::player::PlayerRuntime;
use crate::polyfill::{self, PolyfillApplied, PolyfillInapplicable};
use crate::router::MessageRouter;

/// Everything the bridge needs from its host.
pub struct BridgeHost {
    /// The executing script element, if the host exposes one.
    pub script: Option<Rc<dyn ScriptElement>>,
    pub public_path: Rc<dyn PublicPathSlot>,
    pub bus: Rc<dyn MessageBus>,
    pub player: Rc<dyn PlayerRuntime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Unattached,
    Attached,
}

/// Outcome of booting one instance.
#[derive(Debug)]
pub struct Bridge {
    id: Option<InstanceId>,
    channels: Option<Channels>,
    polyfill: Option<Result<PolyfillApplied, PolyfillInapplicable>>,
}

impl Bridge {
    pub fn boot(host: BridgeHost, settings: &BridgeSettings) -> Self {
        let Some(script) = host.script.as_deref() else {
            tracing::debug!("no executing script element; bridge stays inert");
            return Self {
                id: None,
                channels: None,
                polyfill: None,
            };
        };

        let polyfill = polyfill::apply(script, host.public_path.as_ref(), settings);
        match &polyfill {
            Ok(applied) => tracing::info!(
                previous = %applied.previous,
                public_path = %applied.public_path,
                "asset base path rewritten"
            ),
            Err(reason) => tracing::debug!(%reason, "path polyfill inapplicable"),
        }

        let id = resolve_instance_id(
            &script.src(),
            &settings.id_query_param,
            script.attribute(&settings.id_attribute).as_deref(),
        );
        let Some(id) = id else {
            tracing::debug!("no instance id; bridge stays inert");
            return Self {
                id: None,
                channels: None,
                polyfill: Some(polyfill),
            };
        };

        let span = tracing::info_span!("bridge", id = %id);
        let _guard = span.enter();

        let channels =
            Channels::with_prefixes(&settings.inbound_prefix, &settings.outbound_prefix, &id);
        let notifier = Notifier::new(Rc::clone(&host.bus), channels.outbound());
        let handler = CommandHandler::new(host.player, notifier, settings.install_context.clone());
        MessageRouter::new(channels.clone(), handler, host.bus).attach();
        tracing::info!(inbound = channels.inbound(), "router attached");

        Self {
            id: Some(id),
            channels: Some(channels),
            polyfill: Some(polyfill),
        }
    }

    pub fn state(&self) -> RouterState {
        if self.channels.is_some() {
            RouterState::Attached
        } else {
            RouterState::Unattached
        }
    }

    pub fn id(&self) -> Option<&InstanceId> {
        self.id.as_ref()
    }

    pub fn channels(&self) -> Option<&Channels> {
        self.channels.as_ref()
    }

    /// Polyfill outcome; `None` when there was no script element to inspect.
    pub fn polyfill(&self) -> Option<&Result<PolyfillApplied, PolyfillInapplicable>> {
        self.polyfill.as_ref()
    }
}
