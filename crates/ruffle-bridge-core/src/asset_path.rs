//! Asset base path derivation from a script URL.
//!
//! The bundled module loader computes its asset base path from the executing
//! script's URL. This module reproduces that rule byte for byte so the page
//! runtime can tell whether the loader derived its path from a masked URL:
//!
//! 1. strip a leading `blob:`
//! 2. strip the fragment (`#` to end)
//! 3. strip the query (`?` to end)
//! 4. replace a trailing `/segment` by `/`

/// Compute the asset base path the loader would derive from `script_url`.
pub fn public_path_from_script_src(script_url: &str) -> String {
    let s = script_url.strip_prefix("blob:").unwrap_or(script_url);
    let s = s.split_once('#').map_or(s, |(head, _)| head);
    let s = s.split_once('?').map_or(s, |(head, _)| head);

    match s.rfind('/') {
        // Only a non-empty last segment is dropped; "dir/" stays as is.
        Some(i) if i + 1 < s.len() => s[..=i].to_string(),
        _ => s.to_string(),
    }
}
