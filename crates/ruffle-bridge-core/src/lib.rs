//! Ruffle bridge core: transport-agnostic primitives shared by the page runtime.
//!
//! This crate defines the envelope and payload vocabulary exchanged between the
//! extension's content script and the page, the channel naming scheme, instance
//! identifier resolution, and the asset base path rule used by the path
//! polyfill. It carries no DOM or runtime dependencies so it can be tested and
//! reused outside a browser.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. The bridge runs
//! inside arbitrary host pages, so every fallible path is a `Result` or an
//! `Option` instead.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod asset_path;
pub mod error;
pub mod identity;
pub mod protocol;

/// Shared result type.
pub use error::{BridgeError, Result};
pub use identity::InstanceId;
