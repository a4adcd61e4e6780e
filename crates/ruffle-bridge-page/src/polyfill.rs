//! Asset base path polyfill for masked script URLs.
//!
//! Some browsers report a fixed placeholder as `src` for extension scripts
//! injected into pages. The bundled module loader then derives its asset base
//! path from the placeholder and every module-relative asset load fails. The
//! injecting side passes the real URL in a separate attribute; when the loader
//! evidently used the placeholder, the base path is recomputed from that URL.
//!
//! Only the one placeholder in `BridgeSettings::masked_src_sentinel` is
//! recognized. Other masking schemes pass through untouched.

use thiserror::Error;

use ruffle_bridge_core::asset_path::public_path_from_script_src;
use ruffle_bridge_core::error::BridgeError;

use crate::config::BridgeSettings;
use crate::env::{PublicPathSlot, ScriptElement};

/// The asset base path was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyfillApplied {
    pub previous: String,
    pub public_path: String,
}

/// Why the polyfill left the asset base path alone.
#[derive(Debug, Error)]
pub enum PolyfillInapplicable {
    #[error("script has no src")]
    NoSource,
    #[error("script carries no original source attribute")]
    NoOriginalSource,
    #[error("script src is not masked")]
    NotMasked,
    #[error("asset base path {current:?} was not derived from the masked src ({masked:?})")]
    PathDiverged { current: String, masked: String },
    #[error(transparent)]
    Environment(#[from] BridgeError),
}

pub fn apply(
    script: &dyn ScriptElement,
    slot: &dyn PublicPathSlot,
    settings: &BridgeSettings,
) -> Result<PolyfillApplied, PolyfillInapplicable> {
    let src = script.src();
    if src.is_empty() {
        return Err(PolyfillInapplicable::NoSource);
    }

    let original = script
        .attribute(&settings.src_polyfill_attribute)
        .filter(|v| !v.is_empty())
        .ok_or(PolyfillInapplicable::NoOriginalSource)?;

    if src != settings.masked_src_sentinel {
        return Err(PolyfillInapplicable::NotMasked);
    }

    let current = slot.get()?;
    let masked = public_path_from_script_src(&src);
    if current != masked {
        return Err(PolyfillInapplicable::PathDiverged { current, masked });
    }

    let public_path = public_path_from_script_src(&original);
    slot.set(&public_path)?;

    Ok(PolyfillApplied {
        previous: current,
        public_path,
    })
}
