mod buffer;
mod context;
mod program;
mod quad_mesh;
mod renderer;

use buffer::*;
pub(crate) use program::*;
pub(crate) use quad_mesh::QuadMesh;
pub use renderer::*;

pub(crate) type GL = web_sys::WebGl2RenderingContext;
