use glquad_core::DepthFunc;

use crate::gl::GL;

/// Manages simple WebGL state to reduce redundant state changes
#[derive(Debug)]
pub struct GlState {
    // Viewport dimensions
    viewport: [i32; 4], // [x, y, width, height]

    // Clear color
    clear_color: [f32; 4],

    // Depth buffer clear value
    clear_depth: f32,

    // Depth test capability and compare function
    depth_test: bool,
    depth_func: u32,
}

impl GlState {
    /// Create a new GLState object with WebGL defaults
    pub fn new() -> Self {
        Self {
            viewport: [0, 0, 0, 0],
            clear_color: [0.0, 0.0, 0.0, 0.0],
            clear_depth: 1.0,
            depth_test: false,
            depth_func: GL::LESS,
        }
    }

    /// Set viewport dimensions
    pub fn viewport(&mut self, gl: &GL, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let new_viewport = [x, y, width, height];
        if self.viewport != new_viewport {
            gl.viewport(x, y, width, height);
            self.viewport = new_viewport;
        }
        self
    }

    /// Set clear color
    pub fn clear_color(&mut self, gl: &GL, [r, g, b, a]: [f32; 4]) -> &mut Self {
        let new_color = [r, g, b, a];
        if self.clear_color != new_color {
            gl.clear_color(r, g, b, a);
            self.clear_color = new_color;
        }
        self
    }

    /// Set the value the depth buffer is cleared to
    pub fn clear_depth(&mut self, gl: &GL, depth: f32) -> &mut Self {
        if self.clear_depth != depth {
            gl.clear_depth(depth);
            self.clear_depth = depth;
        }
        self
    }

    /// Enable depth testing with the given compare function
    pub fn depth_test(&mut self, gl: &GL, func: DepthFunc) -> &mut Self {
        if !self.depth_test {
            self.capability(gl, GL::DEPTH_TEST, true);
            self.depth_test = true;
        }

        let func = match func {
            DepthFunc::LessEqual => GL::LEQUAL,
        };
        if self.depth_func != func {
            gl.depth_func(func);
            self.depth_func = func;
        }
        self
    }

    fn capability(&self, gl: &GL, capability: u32, enable: bool) {
        if enable {
            gl.enable(capability);
        } else {
            gl.disable(capability);
        }
    }
}

impl Default for GlState {
    fn default() -> Self {
        Self::new()
    }
}
