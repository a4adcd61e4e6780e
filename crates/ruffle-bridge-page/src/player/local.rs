use std::cell::RefCell;

use serde_json::{Map, Value};

use ruffle_bridge_core::error::Result;

use crate::player::{NavigationHook, PlayerConfig, PlayerRuntime};

type Installer = Box<dyn Fn(&str, &PlayerConfig)>;

#[derive(Debug, Default)]
struct PlayerNamespace {
    config: Option<PlayerConfig>,
}

/// In-process player namespace.
///
/// Installation is recorded and forwarded to an optional installer callback,
/// which receives a snapshot of the configuration at install time.
#[derive(Default)]
pub struct LocalPlayer {
    namespace: RefCell<Option<PlayerNamespace>>,
    installs: RefCell<Vec<String>>,
    installer: Option<Installer>,
}

impl LocalPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installer(installer: impl Fn(&str, &PlayerConfig) + 'static) -> Self {
        Self {
            installer: Some(Box::new(installer)),
            ..Self::default()
        }
    }

    /// Configuration the page set before the bridge loaded.
    pub fn preset(&self, values: Map<String, Value>) {
        *self.namespace.borrow_mut() = Some(PlayerNamespace {
            config: Some(PlayerConfig::from_values(values)),
        });
    }

    /// Snapshot of the current configuration, if the slot exists.
    pub fn config(&self) -> Option<PlayerConfig> {
        self.namespace
            .borrow()
            .as_ref()
            .and_then(|ns| ns.config.clone())
    }

    /// Context names the player was installed under, in order.
    pub fn installs(&self) -> Vec<String> {
        self.installs.borrow().clone()
    }
}

impl PlayerRuntime for LocalPlayer {
    fn merge_config(&self, incoming: Map<String, Value>, hook: NavigationHook) -> Result<()> {
        let mut namespace = self.namespace.borrow_mut();
        let config = namespace
            .get_or_insert_with(PlayerNamespace::default)
            .config
            .get_or_insert_with(PlayerConfig::default);
        config.merge_load(incoming, hook);
        Ok(())
    }

    fn install(&self, context: &str) -> Result<()> {
        self.installs.borrow_mut().push(context.to_string());
        if let Some(installer) = &self.installer {
            let snapshot = self.config().unwrap_or_default();
            installer(context, &snapshot);
        }
        tracing::info!(context, "player installed");
        Ok(())
    }
}
