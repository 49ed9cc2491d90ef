use std::{cell::RefCell, rc::Rc};

use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::{QuadApp, QuadScene, SceneConfig};

/// JavaScript wrapper for the quad scene
#[wasm_bindgen]
#[derive(Debug)]
pub struct GlQuad {
    scene: Rc<RefCell<QuadScene>>,
    app: Option<QuadApp>,
}

#[wasm_bindgen]
impl GlQuad {
    /// Create a new quad scene on the canvas matching `canvas_id`.
    ///
    /// `config` is an optional object with any of `fovDegrees`, `near`, `far`,
    /// `initialTranslation`, `moveStep`, `clearColor` and `fillColor`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config: JsValue) -> Result<GlQuad, JsValue> {
        console_error_panic_hook::set_once();

        let config = if config.is_undefined() || config.is_null() {
            SceneConfig::default()
        } else {
            from_value::<SceneConfig>(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid scene config: {e}")))?
        };

        let scene = QuadScene::builder(canvas_id)
            .config(config)
            .build()
            .map_err(|e| JsValue::from_str(&format!("Failed to create scene: {e}")))?;

        console::log_1(&"GlQuad initialized successfully".into());
        Ok(GlQuad { scene: Rc::new(RefCell::new(scene)), app: None })
    }

    /// Start the frame loop and keyboard handling
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.app.is_some() {
            return Ok(());
        }

        let app = QuadApp::start_shared(self.scene.clone())
            .map_err(|e| JsValue::from_str(&format!("Failed to start: {e}")))?;
        self.app = Some(app);
        Ok(())
    }

    /// Stop the frame loop and detach the keyboard listener
    #[wasm_bindgen]
    pub fn stop(&mut self) {
        if let Some(app) = self.app.take() {
            app.stop();
        }
    }

    /// Whether the frame loop is running
    #[wasm_bindgen(js_name = "isRunning")]
    pub fn is_running(&self) -> bool {
        self.app.as_ref().is_some_and(QuadApp::is_running)
    }

    /// Queue a key press, as if delivered by a `keydown` event.
    ///
    /// The press is applied on the next rendered frame; `translation()` does
    /// not reflect it before then. Presses queued while stopped are kept until
    /// `render()` or `start()`.
    #[wasm_bindgen]
    pub fn press(&self, key: &str) {
        self.scene.borrow().press(key);
    }

    /// Render a single frame, applying queued key presses first
    #[wasm_bindgen]
    pub fn render(&self) {
        self.scene.borrow_mut().render_frame();
    }

    /// Current translation of the quad as `[x, y, z]`
    #[wasm_bindgen]
    pub fn translation(&self) -> Vec<f32> {
        self.scene.borrow().model_view().translation().to_vec()
    }
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"glquad WASM module loaded".into());
}
