use std::{
    cell::RefCell,
    fmt::{Debug, Formatter},
    rc::Rc,
};

use glquad_core::{InputEvent, InputQueue};
use wasm_bindgen::{closure::Closure, JsCast};

use crate::Error;

/// Forwards browser `keydown` events into an [`InputQueue`].
///
/// The listener does no interpretation of its own; the queued events are
/// applied to the scene state by the frame loop.
pub struct KeyboardHandler {
    target: web_sys::EventTarget,
    on_key_down: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl KeyboardHandler {
    /// Attaches a `keydown` listener to `target`.
    ///
    /// # Errors
    /// Returns an error if the event listener cannot be attached.
    pub fn new(target: &web_sys::EventTarget, queue: Rc<RefCell<InputQueue>>) -> Result<Self, Error> {
        let on_key_down = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            queue.borrow_mut().push(InputEvent::key_down(&event.key()));
        }) as Box<dyn FnMut(_)>);

        target
            .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())
            .map_err(|_| Error::listener_failed("keydown"))?;

        Ok(Self { target: target.clone(), on_key_down })
    }

    /// Removes the `keydown` listener from its target.
    pub fn cleanup(&self) {
        let _ = self.target.remove_event_listener_with_callback(
            "keydown",
            self.on_key_down.as_ref().unchecked_ref(),
        );
    }
}

impl Drop for KeyboardHandler {
    fn drop(&mut self) {
        self.cleanup();
    }
}

impl Debug for KeyboardHandler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyboardHandler {{ ... }}")
    }
}
