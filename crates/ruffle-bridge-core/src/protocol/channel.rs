//! Channel names derived from the instance identifier.

use crate::identity::InstanceId;

/// Prefix of the channel the page listens on.
pub const INBOUND_PREFIX: &str = "ruffle_page";
/// Prefix of the channel the content script listens on.
pub const OUTBOUND_PREFIX: &str = "ruffle_content";

/// Inbound and outbound channel names of one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channels {
    inbound: String,
    outbound: String,
}

impl Channels {
    /// Channels with the standard prefixes.
    pub fn new(id: &InstanceId) -> Self {
        Self::with_prefixes(INBOUND_PREFIX, OUTBOUND_PREFIX, id)
    }

    pub fn with_prefixes(inbound_prefix: &str, outbound_prefix: &str, id: &InstanceId) -> Self {
        Self {
            inbound: format!("{inbound_prefix}{id}"),
            outbound: format!("{outbound_prefix}{id}"),
        }
    }

    /// Channel carrying content script -> page messages.
    pub fn inbound(&self) -> &str {
        &self.inbound
    }

    /// Channel carrying page -> content script messages.
    pub fn outbound(&self) -> &str {
        &self.outbound
    }
}
