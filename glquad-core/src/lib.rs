mod config;
mod error;
mod input;
mod mat4;
mod quad;
mod scene;

pub use config::SceneConfig;
pub use error::ConfigError;
pub use input::{Direction, InputEvent, InputQueue};
pub use mat4::Mat4;
pub use quad::{DrawCall, QuadVertex, Topology, QUAD_VERTICES};
pub use scene::{DepthFunc, FrameParams, SceneState};
