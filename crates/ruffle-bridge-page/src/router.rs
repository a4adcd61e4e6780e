//! Message router: the instance's single listener on the page bus.
//!
//! Accepts only same-context events addressed to the inbound channel, hands
//! their payload to the command handler, and posts any reply to the outbound
//! channel with the request's `index`.

use std::rc::Rc;

use ruffle_bridge_core::protocol::channel::Channels;
use ruffle_bridge_core::protocol::envelope::{is_present, Envelope};

use crate::bus::{BusEvent, EventSource, MessageBus};
use crate::dispatch::CommandHandler;

pub struct MessageRouter {
    channels: Channels,
    handler: CommandHandler,
    bus: Rc<dyn MessageBus>,
}

impl MessageRouter {
    pub fn new(channels: Channels, handler: CommandHandler, bus: Rc<dyn MessageBus>) -> Self {
        Self {
            channels,
            handler,
            bus,
        }
    }

    /// Filter an event, in order: same context, payload present, addressed to
    /// the inbound channel.
    pub fn accept(&self, event: &BusEvent) -> Option<Envelope> {
        if event.source != EventSource::SameContext {
            return None;
        }
        if !is_present(&event.data) {
            return None;
        }
        if Envelope::peek_to(&event.data) != Some(self.channels.inbound()) {
            return None;
        }
        Envelope::from_value(&event.data)
    }

    /// Handle one bus event. Returns the reply that was posted, if any.
    pub fn route(&self, event: &BusEvent) -> Option<Envelope> {
        let env = self.accept(event)?;
        tracing::trace!(to = %env.to, index = %env.index, "inbound envelope");

        let response = self.handler.handle(&env.data)?;
        let reply = Envelope::new(self.channels.outbound(), env.index, response);
        self.bus.post(reply.to_value());
        Some(reply)
    }

    /// Subscribe to the bus. The listener stays registered for the page
    /// lifetime; there is no detach.
    pub fn attach(self) {
        let bus = Rc::clone(&self.bus);
        let router = Rc::new(self);
        bus.subscribe(Box::new(move |event| {
            router.route(event);
        }));
    }
}
