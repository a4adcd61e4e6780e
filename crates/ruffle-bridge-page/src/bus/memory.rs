use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::bus::{BusEvent, EventSource, Listener, MessageBus};

/// In-process broadcast bus with FIFO delivery.
///
/// Posting only enqueues; events reach listeners when the owner calls
/// `run_until_idle`, the way a browser delivers `postMessage` on a later task.
pub struct MemoryBus {
    tx: mpsc::UnboundedSender<BusEvent>,
    rx: RefCell<mpsc::UnboundedReceiver<BusEvent>>,
    listeners: RefCell<Vec<Rc<dyn Fn(&BusEvent)>>>,
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: RefCell::new(rx),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Enqueue an event from an explicit source (e.g. another frame).
    pub fn inject(&self, source: EventSource, data: Value) {
        // The receiver lives in `self`, so the channel cannot be closed here.
        let _ = self.tx.send(BusEvent { source, data });
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver queued events, including those posted while delivering,
    /// until the queue is empty. Returns the number of events delivered.
    pub fn run_until_idle(&self) -> usize {
        let mut delivered = 0;
        loop {
            let next = self.rx.borrow_mut().try_recv();
            let Ok(event) = next else { break };

            // Snapshot so listeners may subscribe or post during delivery.
            let listeners: Vec<_> = self.listeners.borrow().clone();
            for listener in &listeners {
                listener(&event);
            }
            delivered += 1;
        }
        tracing::trace!(delivered, "bus idle");
        delivered
    }
}

impl MessageBus for MemoryBus {
    fn post(&self, message: Value) {
        self.inject(EventSource::SameContext, message);
    }

    fn subscribe(&self, listener: Listener) {
        self.listeners.borrow_mut().push(Rc::from(listener));
    }
}
