mod app;
mod error;
mod frame_loop;
mod gl;
mod keyboard;
mod scene;

pub(crate) mod js;

#[cfg(feature = "js-api")]
pub mod wasm;

pub use glquad_core::{Direction, InputEvent, InputQueue, Mat4, SceneConfig};

pub use crate::{
    app::QuadApp,
    error::Error,
    frame_loop::FrameLoop,
    gl::Renderer,
    keyboard::KeyboardHandler,
    scene::{QuadScene, QuadSceneBuilder},
};
