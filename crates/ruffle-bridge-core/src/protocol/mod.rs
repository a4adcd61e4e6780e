//! Wire vocabulary between the content script and the page.
//!
//! Both directions share one envelope shape, `{ to, index, data }`, posted on
//! the window message bus. Addressing is by channel name only; every listener
//! on the bus sees every message, so receivers filter.
//!
//! - `channel`: channel naming per instance.
//! - `envelope`: the envelope and the bus truthiness rule.
//! - `command`: inbound commands, outbound notifications, and replies.

pub mod channel;
pub mod command;
pub mod envelope;
