//! Command dispatch.
//!
//! Re-exports the handler so the router can depend on this module directly.

pub mod handler;

pub use handler::CommandHandler;
