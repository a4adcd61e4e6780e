//! Instance identifier resolution.
//!
//! Every injected copy of the page script carries its own identifier, either
//! as an `id` query parameter on its `src` URL or in a fallback attribute. The
//! identifier names both message channels of the instance.

use std::fmt;

use url::Url;

/// Per-injection correlation identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    /// Wrap a raw identifier; empty strings are not identifiers.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read query parameter `param` from `src`.
///
/// Returns `None` when `src` does not parse as an absolute URL or the
/// parameter is missing. A present but empty parameter yields `Some("")`.
pub fn id_from_src(src: &str, param: &str) -> Option<String> {
    let url = match Url::parse(src) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(error = %e, "script src is not a valid url");
            return None;
        }
    };
    url.query_pairs()
        .find(|(k, _)| k == param)
        .map(|(_, v)| v.into_owned())
}

/// Resolve the instance identifier of a script element.
///
/// `src` is the element's resolved source URL (empty when it has none) and
/// `fallback` the value of the identifier attribute. The query parameter takes
/// precedence; once it is present, even empty, the attribute is not consulted.
/// An empty result means the instance stays inert.
pub fn resolve_instance_id(src: &str, param: &str, fallback: Option<&str>) -> Option<InstanceId> {
    let from_src = if src.is_empty() {
        None
    } else {
        id_from_src(src, param)
    };

    let raw = match from_src {
        Some(id) => id,
        None => fallback.filter(|v| !v.is_empty())?.to_string(),
    };

    InstanceId::new(raw)
}
