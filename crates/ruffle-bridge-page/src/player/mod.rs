//! Player runtime seam.
//!
//! The player library is opaque to the bridge: it has a global namespace with
//! an optional configuration slot and an install entry point. `PlayerRuntime`
//! is that surface; `LocalPlayer` keeps it in process and `global()` is the
//! per-thread instance (the page thread is the only thread).

mod config;
mod local;

use std::rc::Rc;

use serde_json::{Map, Value};

use ruffle_bridge_core::error::Result;

pub use config::{NavigationHook, PlayerConfig, NAVIGATION_HOOK_KEY};
pub use local::LocalPlayer;

pub trait PlayerRuntime {
    /// Merge `incoming` into the global configuration under the load policy
    /// (see [`PlayerConfig::merge_load`]), creating the namespace and its
    /// configuration slot first when absent.
    fn merge_config(&self, incoming: Map<String, Value>, hook: NavigationHook) -> Result<()>;

    /// Install the player into the page under `context`.
    fn install(&self, context: &str) -> Result<()>;
}

thread_local! {
    static GLOBAL: Rc<LocalPlayer> = Rc::new(LocalPlayer::new());
}

/// The process-wide player, created on first use.
pub fn global() -> Rc<LocalPlayer> {
    GLOBAL.with(Rc::clone)
}
