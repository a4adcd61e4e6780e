use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};
use url::Url;

/// Configuration key the navigation hook is published under.
pub const NAVIGATION_HOOK_KEY: &str = "openInNewTab";

/// Callback the player invokes to open a URL in the extension's player.
/// Receives the URL's string form exactly as the player produced it.
pub type NavigationHook = Rc<dyn Fn(&str)>;

/// Global player configuration: JSON settings plus the navigation hook.
#[derive(Clone, Default)]
pub struct PlayerConfig {
    values: Map<String, Value>,
    open_in_new_tab: Option<NavigationHook>,
}

impl fmt::Debug for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerConfig")
            .field("values", &self.values)
            .field("open_in_new_tab", &self.open_in_new_tab.is_some())
            .finish()
    }
}

impl PlayerConfig {
    pub fn from_values(values: Map<String, Value>) -> Self {
        Self {
            values,
            open_in_new_tab: None,
        }
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn has_navigation_hook(&self) -> bool {
        self.open_in_new_tab.is_some()
    }

    /// Invoke the navigation hook. Returns false when none is set.
    pub fn open_in_new_tab(&self, url: &Url) -> bool {
        match &self.open_in_new_tab {
            Some(hook) => {
                hook(url.as_str());
                true
            }
            None => false,
        }
    }

    /// Apply a `load` command.
    ///
    /// Incoming fields go in first, then the existing fields on top (a late
    /// load never clobbers settings the page already made), then the hook,
    /// unconditionally. An incoming `openInNewTab` value is discarded.
    pub fn merge_load(&mut self, incoming: Map<String, Value>, hook: NavigationHook) {
        let mut merged = incoming;
        for (key, value) in std::mem::take(&mut self.values) {
            merged.insert(key, value);
        }
        merged.remove(NAVIGATION_HOOK_KEY);

        self.values = merged;
        self.open_in_new_tab = Some(hook);
    }
}
