//! wasm-bindgen surface for browser hosts.
//!
//! The host owns the DOM listeners and the requestAnimationFrame loop; this
//! wrapper queues the events those listeners report and steps the core once
//! per frame. Dropping the host listeners is a complete teardown — the
//! wrapper is inert between calls.

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use mascot_avatar_core::{Avatar, Config, InputEvent, Inputs, LayoutMode};

#[wasm_bindgen]
pub struct MascotAvatar {
    core: Avatar,
    pending: Vec<InputEvent>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl MascotAvatar {
    /// Create a new avatar. Pass a JSON config object or undefined/null for
    /// defaults. Example:
    ///   new MascotAvatar({ head: { smoothing: 0.1 } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<MascotAvatar, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        let core =
            Avatar::new(cfg).map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(MascotAvatar {
            core,
            pending: Vec::new(),
        })
    }

    /// Queue a pointer move, in viewport-relative pixel coordinates.
    #[wasm_bindgen(js_name = pointer_move)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pending.push(InputEvent::PointerMoved { x, y });
    }

    /// Queue a touch move, in viewport-relative pixel coordinates.
    #[wasm_bindgen(js_name = touch_move)]
    pub fn touch_move(&mut self, x: f32, y: f32) {
        self.pending.push(InputEvent::TouchMoved { x, y });
    }

    /// Queue a device-orientation change. Pass the raw event angles; either
    /// may be null on devices without a sensor, in which case the event is a
    /// no-op.
    pub fn orientation(&mut self, beta: Option<f32>, gamma: Option<f32>) {
        self.pending
            .push(InputEvent::OrientationChanged { beta, gamma });
    }

    /// Queue a viewport resize, in pixels.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.pending
            .push(InputEvent::ViewportResized { width, height });
    }

    /// Step the avatar by dt (seconds), folding in all queued events.
    /// Returns the frame's typed part updates as JSON.
    pub fn update(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let inputs = Inputs {
            events: std::mem::take(&mut self.pending),
        };
        let out = self.core.update(dt, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Static scene topology for the host to build its scene graph from.
    /// Call once at mount; only the parameters named in update() outputs
    /// change afterwards.
    pub fn scene(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.scene()).map_err(|e| JsError::new(&format!("scene error: {e}")))
    }

    /// Static light rig.
    pub fn lighting(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.lighting())
            .map_err(|e| JsError::new(&format!("lighting error: {e}")))
    }

    /// Camera profile for the current layout mode.
    pub fn camera(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.camera())
            .map_err(|e| JsError::new(&format!("camera error: {e}")))
    }

    /// Particle positions for the host to instantiate under the particle
    /// group node.
    pub fn particles(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.core.particles().positions())
            .map_err(|e| JsError::new(&format!("particles error: {e}")))
    }

    /// Latest normalized pointer sample, mostly useful for debugging hosts.
    pub fn pointer(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.pointer())
            .map_err(|e| JsError::new(&format!("pointer error: {e}")))
    }

    /// Current layout classification: "compact" or "full".
    pub fn layout(&self) -> String {
        match self.core.layout() {
            LayoutMode::Compact => "compact".to_string(),
            LayoutMode::Full => "full".to_string(),
        }
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
