//! Top-level facade crate for the Ruffle page bridge.
//!
//! Re-exports the core primitives and the page runtime so users can depend on
//! a single crate.

pub mod core {
    pub use ruffle_bridge_core::*;
}

pub mod page {
    pub use ruffle_bridge_page::*;
}
