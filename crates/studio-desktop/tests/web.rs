//! Browser smoke tests (run with `wasm-pack test --headless --chrome`)

#![cfg(target_arch = "wasm32")]

use studio_desktop::{DesktopCommand, DesktopEngine};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_engine_in_browser() {
    let mut engine = DesktopEngine::new();
    engine
        .execute(DesktopCommand::ActivateIcon { icon_id: "3".into() })
        .unwrap();
    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    assert!(json.contains("\"title\":\"Merch\""));
}
