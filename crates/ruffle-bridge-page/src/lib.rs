//! Ruffle page bridge runtime.
//!
//! Runs inside the page the extension injects the player into. It fixes up the
//! module loader's asset base path when the browser masks the script URL,
//! resolves the instance identifier, and relays `load` / `ping` commands from
//! the content script over the window message bus, posting replies and player
//! navigation requests back.

pub mod bootstrap;
pub mod bus;
pub mod config;
pub mod dispatch;
pub mod env;
pub mod notifier;
pub mod player;
pub mod polyfill;
pub mod router;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use bootstrap::{Bridge, BridgeHost, RouterState};
