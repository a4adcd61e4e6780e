//! Browser binding (wasm32).
//!
//! Wires the bridge to the real page: `window.postMessage` as the bus,
//! `document.currentScript` as the script element, and `window.RufflePlayer`
//! as the player namespace. The player's setup object and the module loader's
//! asset base path are not reachable from wasm, so the injected script's JS
//! glue hands them in when it calls `bootExtensionBridge`.

use std::rc::Rc;

use js_sys::{Object, Reflect, JSON};
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlScriptElement, MessageEvent, Window};

use ruffle_bridge_core::error::{BridgeError, Result};

use crate::bootstrap::{Bridge, BridgeHost};
use crate::bus::{BusEvent, EventSource, Listener, MessageBus};
use crate::config::BridgeSettings;
use crate::env::{PublicPathSlot, ScriptElement};
use crate::player::{NavigationHook, PlayerRuntime, NAVIGATION_HOOK_KEY};
use crate::telemetry;

#[wasm_bindgen]
extern "C" {
    /// The player library's setup entry point.
    pub type RuffleSetup;

    #[wasm_bindgen(method, catch, js_name = installRuffle)]
    fn install_ruffle(this: &RuffleSetup, source_name: &str) -> std::result::Result<(), JsValue>;

    /// `{ get(), set(path) }` over the module loader's asset base path.
    pub type PublicPathAccessor;

    #[wasm_bindgen(method, catch, js_name = get)]
    fn get_path(this: &PublicPathAccessor) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = set)]
    fn set_path(this: &PublicPathAccessor, path: &str) -> std::result::Result<(), JsValue>;
}

fn env_err(what: &str, e: JsValue) -> BridgeError {
    BridgeError::Environment(format!("{what}: {e:?}"))
}

fn to_js(value: &Value) -> Result<JsValue> {
    let s = serde_json::to_string(value)
        .map_err(|e| BridgeError::Malformed(format!("json encode failed: {e}")))?;
    JSON::parse(&s).map_err(|e| env_err("JSON.parse", e))
}

/// Structured-clone data as JSON.
///
/// The bridge only sees what survives a JSON round trip: top-level values JSON
/// cannot carry become `null`, nested `undefined` fields disappear, and `Map`,
/// `Set` or class instances collapse to plain objects. This applies to the
/// envelope `index` too, so a requester matching replies by `index` must use a
/// JSON-representable token (string, number, plain object or array).
fn from_js(value: &JsValue) -> Value {
    if value.is_undefined() || value.is_null() {
        return Value::Null;
    }
    JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or(Value::Null)
}

/// Get `target[key]`, creating an empty object there when undefined.
fn ensure_object(target: &JsValue, key: &str) -> Result<Object> {
    let key_js = JsValue::from_str(key);
    let existing = Reflect::get(target, &key_js).map_err(|e| env_err(key, e))?;
    if existing.is_undefined() {
        let created = Object::new();
        Reflect::set(target, &key_js, &created).map_err(|e| env_err(key, e))?;
        return Ok(created);
    }
    existing
        .dyn_into::<Object>()
        .map_err(|_| BridgeError::Environment(format!("{key} is not an object")))
}

pub struct WindowBus {
    window: Window,
}

impl MessageBus for WindowBus {
    fn post(&self, message: Value) {
        let result = to_js(&message).and_then(|js| {
            self.window
                .post_message(&js, "*")
                .map_err(|e| env_err("postMessage", e))
        });
        if let Err(e) = result {
            tracing::warn!(code = e.code().as_str(), error = %e, "post failed");
        }
    }

    fn subscribe(&self, listener: Listener) {
        let window = self.window.clone();
        let callback = Closure::<dyn Fn(MessageEvent)>::new(move |event: MessageEvent| {
            let same = event.source().is_some_and(|s| Object::is(&s, &window));
            let source = if same {
                EventSource::SameContext
            } else {
                EventSource::Foreign
            };
            listener(&BusEvent {
                source,
                data: from_js(&event.data()),
            });
        });

        if let Err(e) = self
            .window
            .add_event_listener_with_callback("message", callback.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, "message listener registration failed");
        }
        // Lives for the page lifetime.
        callback.forget();
    }
}

pub struct CurrentScript {
    element: Element,
}

impl ScriptElement for CurrentScript {
    fn src(&self) -> String {
        // SVG script elements have no `src` property.
        self.element
            .dyn_ref::<HtmlScriptElement>()
            .map(HtmlScriptElement::src)
            .unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }
}

pub struct JsPublicPath(PublicPathAccessor);

impl PublicPathSlot for JsPublicPath {
    fn get(&self) -> Result<String> {
        self.0
            .get_path()
            .map_err(|e| env_err("public path get", e))?
            .as_string()
            .ok_or_else(|| BridgeError::Environment("public path is not a string".into()))
    }

    fn set(&self, path: &str) -> Result<()> {
        self.0.set_path(path).map_err(|e| env_err("public path set", e))
    }
}

/// `window.RufflePlayer` plus the setup entry point.
pub struct WebPlayer {
    window: Window,
    setup: RuffleSetup,
}

impl PlayerRuntime for WebPlayer {
    fn merge_config(&self, incoming: Map<String, Value>, hook: NavigationHook) -> Result<()> {
        let namespace = ensure_object(&self.window, "RufflePlayer")?;
        let existing = ensure_object(&namespace, "config")?;
        let incoming = to_js(&Value::Object(incoming))?
            .dyn_into::<Object>()
            .map_err(|_| BridgeError::Malformed("load config is not an object".into()))?;

        // Same policy as `PlayerConfig::merge_load`, applied to the live object
        // so non-JSON values the page set (functions) survive.
        let merged = Object::assign2(&Object::new(), &incoming, &existing);

        let callback = Closure::<dyn Fn(JsValue)>::new(move |url: JsValue| {
            let href = url
                .as_string()
                .unwrap_or_else(|| String::from(url.unchecked_ref::<Object>().to_string()));
            hook(&href);
        });
        Reflect::set(&merged, &JsValue::from_str(NAVIGATION_HOOK_KEY), callback.as_ref())
            .map_err(|e| env_err(NAVIGATION_HOOK_KEY, e))?;
        // Owned by the config object from here on.
        callback.forget();

        Reflect::set(&namespace, &JsValue::from_str("config"), &merged)
            .map_err(|e| env_err("config", e))?;
        Ok(())
    }

    fn install(&self, context: &str) -> Result<()> {
        self.setup
            .install_ruffle(context)
            .map_err(|e| env_err("installRuffle", e))?;
        tracing::info!(context, "player installed");
        Ok(())
    }
}

/// Boot the bridge for the script currently executing.
///
/// Must be called synchronously from the injected script's top level, while
/// `document.currentScript` still points at it.
#[wasm_bindgen(js_name = bootExtensionBridge)]
pub fn boot_extension_bridge(setup: RuffleSetup, public_path: PublicPathAccessor) {
    console_error_panic_hook::set_once();
    telemetry::init();

    let Some(window) = web_sys::window() else {
        return;
    };
    let script = window
        .document()
        .and_then(|d| d.current_script())
        .map(|element| Rc::new(CurrentScript { element }) as Rc<dyn ScriptElement>);

    let host = BridgeHost {
        script,
        public_path: Rc::new(JsPublicPath(public_path)),
        bus: Rc::new(WindowBus {
            window: window.clone(),
        }),
        player: Rc::new(WebPlayer { window, setup }),
    };
    Bridge::boot(host, &BridgeSettings::default());
}
