//! Page message bus abstraction.
//!
//! The page bus is a broadcast: every listener sees every message, whoever
//! posted it and whoever it is addressed to. Filtering is the receiver's job.
//! `MemoryBus` implements the same delivery model in process; the browser
//! binding wraps `window.postMessage`.

pub mod memory;

use serde_json::Value;

pub use memory::MemoryBus;

/// Where a bus event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    /// Posted by this browsing context (same window).
    SameContext,
    /// Posted by another frame or window.
    Foreign,
}

/// One delivered bus event.
#[derive(Debug, Clone)]
pub struct BusEvent {
    pub source: EventSource,
    pub data: Value,
}

/// Bus listener. Lives as long as the bus.
pub type Listener = Box<dyn Fn(&BusEvent)>;

pub trait MessageBus {
    /// Broadcast `message` to every listener as a same-context event.
    fn post(&self, message: Value);

    /// Register a listener for every subsequent event.
    fn subscribe(&self, listener: Listener);
}
