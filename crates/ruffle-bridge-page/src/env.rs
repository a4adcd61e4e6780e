//! Host environment seams: the executing script element and the module
//! loader's asset base path.

use std::cell::RefCell;
use std::collections::HashMap;

use ruffle_bridge_core::error::Result;

/// The script element the bridge was loaded from.
pub trait ScriptElement {
    /// Resolved source URL; empty when the element has none.
    fn src(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;
}

/// The module loader's global asset base path.
pub trait PublicPathSlot {
    fn get(&self) -> Result<String>;

    fn set(&self, path: &str) -> Result<()>;
}

/// Script element described up front, for native hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticScript {
    src: String,
    attributes: HashMap<String, String>,
}

impl StaticScript {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl ScriptElement for StaticScript {
    fn src(&self) -> String {
        self.src.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

/// Asset base path held in process.
#[derive(Debug, Default)]
pub struct PublicPathCell(RefCell<String>);

impl PublicPathCell {
    pub fn new(initial: impl Into<String>) -> Self {
        Self(RefCell::new(initial.into()))
    }

    pub fn current(&self) -> String {
        self.0.borrow().clone()
    }
}

impl PublicPathSlot for PublicPathCell {
    fn get(&self) -> Result<String> {
        Ok(self.current())
    }

    fn set(&self, path: &str) -> Result<()> {
        *self.0.borrow_mut() = path.to_string();
        Ok(())
    }
}
