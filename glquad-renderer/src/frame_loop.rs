use std::{
    cell::{Cell, RefCell},
    fmt::{Debug, Formatter},
    rc::Rc,
};

use wasm_bindgen::closure::Closure;
use web_sys::console;

use crate::{js, Error, QuadScene};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Renders a [`QuadScene`] once per display refresh.
///
/// Each animation frame callback renders the scene and requests the next
/// frame. The callback keeps itself alive until [`FrameLoop::stop`] is called
/// or the `FrameLoop` is dropped.
pub struct FrameLoop {
    callback: FrameCallback,
    request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Starts rendering `scene` on every animation frame.
    ///
    /// # Errors
    /// Returns an error if the first animation frame cannot be requested.
    pub fn start(scene: Rc<RefCell<QuadScene>>) -> Result<Self, Error> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));

        let next_frame = callback.clone();
        let pending = request_id.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            scene.borrow_mut().render_frame();

            let next = next_frame
                .borrow()
                .as_ref()
                .map(js::request_animation_frame)
                .transpose();

            match next {
                Ok(id) => pending.set(id),
                Err(e) => {
                    console::error_1(&format!("frame loop halted: {e}").into());
                    pending.set(None);
                },
            }
        }) as Box<dyn FnMut(f64)>));

        let id = match callback.borrow().as_ref() {
            Some(closure) => js::request_animation_frame(closure)?,
            None => return Err(Error::animation_frame_failed()),
        };
        request_id.set(Some(id));

        Ok(Self { callback, request_id })
    }

    /// Cancels the pending animation frame and releases the frame callback.
    pub fn stop(&self) {
        if let Some(id) = self.release() {
            js::cancel_animation_frame(id);
        }
    }

    /// Drops the frame callback, breaking its reference to itself, and
    /// returns the id of the frame request still pending, if any.
    fn release(&self) -> Option<i32> {
        self.callback.borrow_mut().take();
        self.request_id.take()
    }

    /// Returns `true` while a next frame is scheduled.
    pub fn is_running(&self) -> bool {
        self.request_id.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Debug for FrameLoop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameLoop")
            .field("request_id", &self.request_id.get())
            .finish_non_exhaustive()
    }
}
