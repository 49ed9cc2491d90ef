use std::{cell::RefCell, rc::Rc};

use web_sys::console;

use crate::{js, Error, FrameLoop, KeyboardHandler, QuadScene};

/// A running scene: arrow keys pressed anywhere in the window move the quad,
/// and the scene is redrawn every display frame.
#[derive(Debug)]
pub struct QuadApp {
    scene: Rc<RefCell<QuadScene>>,
    keyboard: KeyboardHandler,
    frame_loop: FrameLoop,
}

impl QuadApp {
    /// Attaches the window `keydown` listener and starts the frame loop.
    pub fn start(scene: QuadScene) -> Result<Self, Error> {
        Self::start_shared(Rc::new(RefCell::new(scene)))
    }

    /// Like [`QuadApp::start`], for a scene the caller keeps a handle to.
    pub fn start_shared(scene: Rc<RefCell<QuadScene>>) -> Result<Self, Error> {
        let window = js::window()?;
        let keyboard = KeyboardHandler::new(&window, scene.borrow().input_queue())?;

        let frame_loop = FrameLoop::start(scene.clone())?;

        console::log_1(&"frame loop started".into());
        Ok(Self { scene, keyboard, frame_loop })
    }

    /// Returns the shared scene.
    pub fn scene(&self) -> Rc<RefCell<QuadScene>> {
        self.scene.clone()
    }

    /// Stops rendering, detaches the keyboard listener and discards key
    /// presses that no frame consumed.
    pub fn stop(&self) {
        self.frame_loop.stop();
        self.keyboard.cleanup();
        self.scene.borrow().clear_input();
        console::log_1(&"frame loop stopped".into());
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }
}
