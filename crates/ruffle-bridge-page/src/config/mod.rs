//! Bridge settings loader (strict parsing).
//!
//! Every field has a default, so embedders only write what they override.

pub mod schema;

use ruffle_bridge_core::error::{BridgeError, Result};

pub use schema::BridgeSettings;

pub fn load_from_str(s: &str) -> Result<BridgeSettings> {
    let settings: BridgeSettings = serde_yaml::from_str(s)
        .map_err(|e| BridgeError::BadConfig(format!("invalid yaml: {e}")))?;
    settings.validate()?;
    Ok(settings)
}
