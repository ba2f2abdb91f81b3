#![cfg(target_arch = "wasm32")]
use mascot_avatar_wasm::{abi_version, MascotAvatar};
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use mascot_avatar_core::inputs::PointerSample;
use mascot_avatar_core::outputs::Outputs;

#[wasm_bindgen_test]
fn abi_version_is_stable() {
    assert_eq!(abi_version(), 1);
}

/// it should construct with defaults and emit updates every frame
#[wasm_bindgen_test]
fn default_construct_and_update() {
    let mut avatar = MascotAvatar::new(JsValue::UNDEFINED).expect("default avatar");
    avatar.pointer_move(640.0, 360.0);
    let out = avatar.update(1.0 / 60.0).expect("update");
    let outputs: Outputs = swb::from_value(out).expect("outputs parse");
    assert!(!outputs.is_empty());
}

/// it should reject an invalid config at construction
#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let cfg = swb::to_value(&serde_json::json!({ "head": { "smoothing": 7.0 } })).unwrap();
    assert!(MascotAvatar::new(cfg).is_err());
}

/// it should ignore orientation events with null angles
#[wasm_bindgen_test]
fn null_orientation_is_ignored() {
    let mut avatar = MascotAvatar::new(JsValue::UNDEFINED).expect("default avatar");
    avatar.pointer_move(960.0, 180.0);
    avatar.update(1.0 / 60.0).expect("update");
    let before: PointerSample = swb::from_value(avatar.pointer().unwrap()).unwrap();

    avatar.orientation(None, Some(20.0));
    avatar.orientation(Some(20.0), None);
    avatar.update(1.0 / 60.0).expect("update");
    let after: PointerSample = swb::from_value(avatar.pointer().unwrap()).unwrap();
    assert_eq!(before, after);
}

/// it should expose a static scene and flip layout on resize
#[wasm_bindgen_test]
fn scene_and_layout_accessors() {
    let mut avatar = MascotAvatar::new(JsValue::UNDEFINED).expect("default avatar");
    assert_eq!(avatar.layout(), "full");

    let scene = avatar.scene().expect("scene json");
    assert!(!scene.is_undefined());

    avatar.resize(375.0, 667.0);
    avatar.update(1.0 / 60.0).expect("update");
    assert_eq!(avatar.layout(), "compact");
}
