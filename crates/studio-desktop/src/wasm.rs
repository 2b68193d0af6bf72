//! WASM exports for the desktop
//!
//! [`DesktopController`] wraps the engine with a JSON-in/JSON-out API for
//! the page. Commands, page events and completions arrive as JSON; effects
//! and snapshots leave as JSON.

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::DesktopConfig;
use crate::desktop::DesktopCommand;
use crate::engine::{DesktopEngine, Effect};
use crate::error::DesktopError;
use crate::math::Vec2;
use crate::persistence::{LocalStore, MemoryLocalStore};
use crate::requests::RequestOutcome;
use crate::views::ViewInput;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

// =============================================================================
// Logging
// =============================================================================

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::log_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn init_logging() {
    // A second controller finds the logger already installed
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

// =============================================================================
// Browser local storage
// =============================================================================

/// [`LocalStore`] over `window.localStorage`
struct BrowserLocalStore {
    storage: web_sys::Storage,
}

impl BrowserLocalStore {
    fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

fn storage_error(err: JsValue) -> DesktopError {
    DesktopError::LocalStorage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl LocalStore for BrowserLocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, DesktopError> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DesktopError> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), DesktopError> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}

// =============================================================================
// Controller
// =============================================================================

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| to_js(DesktopError::payload(e)))
}

/// Desktop controller for WASM - wraps DesktopEngine with a JSON API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller; `config_json` may override any config field
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<DesktopController, JsValue> {
        #[cfg(feature = "console-panic")]
        console_error_panic_hook::set_once();
        init_logging();

        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(to_js)?,
            None => DesktopConfig::default(),
        };
        let store: Box<dyn LocalStore> = match BrowserLocalStore::open() {
            Some(store) => Box::new(store),
            None => {
                log::warn!("localStorage unavailable, background will not persist");
                Box::new(MemoryLocalStore::new())
            }
        };

        let mut engine = DesktopEngine::with_store(config, store);
        engine.set_now(date_now() as u64);
        Ok(Self { engine })
    }

    fn tick(&mut self) {
        self.engine.set_now(date_now() as u64);
    }

    // =========================================================================
    // Environment
    // =========================================================================

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Set the signed-in user (`null` signs out)
    #[wasm_bindgen]
    pub fn set_user(&mut self, user_json: &str) -> Result<(), JsValue> {
        let user = parse(user_json)?;
        self.engine.set_user(user);
        Ok(())
    }

    // =========================================================================
    // Commands and events
    // =========================================================================

    /// Apply a desktop command; returns the effects as a JSON array
    #[wasm_bindgen]
    pub fn execute(&mut self, command_json: &str) -> Result<String, JsValue> {
        self.tick();
        let command: DesktopCommand = parse(command_json)?;
        let effects = self.engine.execute(command).map_err(to_js)?;
        Ok(to_json(&effects))
    }

    /// Deliver a page event to a window's view; returns the effects
    #[wasm_bindgen]
    pub fn view_input(&mut self, window_id: u64, input_json: &str) -> Result<String, JsValue> {
        self.tick();
        let input: ViewInput = parse(input_json)?;
        let effects = self.engine.handle_view_input(window_id, input).map_err(to_js)?;
        Ok(to_json(&effects))
    }

    /// Key press; returns `{"handled": bool, "effects": [...]}`
    #[wasm_bindgen]
    pub fn key_down(&mut self, code: &str) -> String {
        let (result, effects) = self.engine.handle_key(code);
        to_json(&serde_json::json!({
            "handled": result.is_handled(),
            "effects": effects,
        }))
    }

    /// A text field gained or lost focus
    #[wasm_bindgen]
    pub fn set_text_input_active(&mut self, active: bool) {
        self.engine.set_text_input_active(active);
    }

    // =========================================================================
    // Drag
    // =========================================================================

    #[wasm_bindgen]
    pub fn begin_drag(&mut self, window_id: u64, x: f32, y: f32) -> Result<(), JsValue> {
        self.engine
            .begin_drag(window_id, Vec2::new(x, y))
            .map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.engine.drag_to(Vec2::new(x, y));
    }

    #[wasm_bindgen]
    pub fn end_drag(&mut self, x: f32, y: f32) {
        self.engine.end_drag(Vec2::new(x, y));
    }

    #[wasm_bindgen]
    pub fn cancel_drag(&mut self) {
        self.engine.cancel_drag();
    }

    // =========================================================================
    // Gateway requests
    // =========================================================================

    /// Requests to execute, as a JSON array of `{id, windowId, request}`
    #[wasm_bindgen]
    pub fn take_requests(&mut self) -> String {
        to_json(&self.engine.take_requests())
    }

    /// Report a request outcome; returns the effects
    #[wasm_bindgen]
    pub fn complete(&mut self, request_id: u64, outcome_json: &str) -> Result<String, JsValue> {
        self.tick();
        let outcome: RequestOutcome = parse(outcome_json)?;
        let effects: Vec<Effect> = self.engine.complete(request_id, outcome).map_err(to_js)?;
        Ok(to_json(&effects))
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Full render snapshot as JSON
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> String {
        to_json(&self.engine.snapshot())
    }
}
