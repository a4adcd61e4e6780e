use serde::Deserialize;

use ruffle_bridge_core::error::{BridgeError, Result};
use ruffle_bridge_core::protocol::channel::{INBOUND_PREFIX, OUTBOUND_PREFIX};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeSettings {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Query parameter of the script URL carrying the instance id.
    #[serde(default = "default_id_query_param")]
    pub id_query_param: String,

    /// Script attribute consulted when the URL carries no id.
    #[serde(default = "default_id_attribute")]
    pub id_attribute: String,

    /// Script attribute carrying the real source URL when `src` is masked.
    #[serde(default = "default_src_polyfill_attribute")]
    pub src_polyfill_attribute: String,

    /// Value the browser reports for `src` when it hides the real URL.
    #[serde(default = "default_masked_src_sentinel")]
    pub masked_src_sentinel: String,

    #[serde(default = "default_inbound_prefix")]
    pub inbound_prefix: String,

    #[serde(default = "default_outbound_prefix")]
    pub outbound_prefix: String,

    /// Context name handed to the player installer.
    #[serde(default = "default_install_context")]
    pub install_context: String,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            id_query_param: default_id_query_param(),
            id_attribute: default_id_attribute(),
            src_polyfill_attribute: default_src_polyfill_attribute(),
            masked_src_sentinel: default_masked_src_sentinel(),
            inbound_prefix: default_inbound_prefix(),
            outbound_prefix: default_outbound_prefix(),
            install_context: default_install_context(),
        }
    }
}

impl BridgeSettings {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BridgeError::UnsupportedVersion);
        }

        let required = [
            ("id_query_param", &self.id_query_param),
            ("id_attribute", &self.id_attribute),
            ("src_polyfill_attribute", &self.src_polyfill_attribute),
            ("masked_src_sentinel", &self.masked_src_sentinel),
            ("inbound_prefix", &self.inbound_prefix),
            ("outbound_prefix", &self.outbound_prefix),
            ("install_context", &self.install_context),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(BridgeError::BadConfig(format!("{name} must not be empty")));
            }
        }

        // Equal prefixes would route the bridge's own replies back into it.
        if self.inbound_prefix == self.outbound_prefix {
            return Err(BridgeError::BadConfig(
                "inbound_prefix and outbound_prefix must differ".into(),
            ));
        }

        Ok(())
    }
}

fn default_version() -> u32 {
    1
}
fn default_id_query_param() -> String {
    "id".into()
}
fn default_id_attribute() -> String {
    "ruffle-id".into()
}
fn default_src_polyfill_attribute() -> String {
    "ruffle-src-polyfill".into()
}
fn default_masked_src_sentinel() -> String {
    "webkit-masked-url://hidden/".into()
}
fn default_inbound_prefix() -> String {
    INBOUND_PREFIX.into()
}
fn default_outbound_prefix() -> String {
    OUTBOUND_PREFIX.into()
}
fn default_install_context() -> String {
    "extension".into()
}
