use glquad_core::FrameParams;
use web_sys::HtmlCanvasElement;

use crate::{
    error::Error,
    gl::{context::GlState, GL},
    js,
};

/// Rendering context that provides access to WebGL state.
pub(crate) struct RenderContext<'a> {
    pub gl: &'a web_sys::WebGl2RenderingContext,
    pub state: &'a mut GlState,
    /// Parameters of the frame being rendered.
    pub frame: &'a FrameParams,
}

/// Owns the WebGL2 context and the canvas it renders to.
///
/// A frame is rendered as `begin_frame` followed by one or more `render`
/// calls. The browser presents the canvas once the animation frame callback
/// returns.
#[derive(Debug)]
pub struct Renderer {
    gl: web_sys::WebGl2RenderingContext,
    canvas: web_sys::HtmlCanvasElement,
    state: GlState,
    frame: FrameParams,
}

impl Renderer {
    /// Creates a new renderer by querying for a canvas element with the given selector.
    ///
    /// # Parameters
    /// * `canvas_id` - CSS selector for the canvas element (e.g., "canvas" or "#glCanvas")
    ///
    /// # Errors
    /// * `Error::Initialization` - Canvas element not found, or WebGL2 unavailable
    pub fn create(canvas_id: &str) -> Result<Self, Error> {
        let canvas = js::get_canvas_by_id(canvas_id)?;
        Self::create_with_canvas(canvas)
    }

    /// Creates a new renderer from an existing HTML canvas element.
    ///
    /// The viewport is set once to the canvas dimensions; later canvas
    /// resizes are not tracked.
    pub fn create_with_canvas(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);

        // initialize WebGL context
        let gl = js::get_webgl2_context(&canvas)?;
        let mut state = GlState::new();
        state.viewport(&gl, 0, 0, width, height);

        Ok(Self { gl, canvas, state, frame: FrameParams::default() })
    }

    /// Begins a new rendering frame.
    ///
    /// Applies the frame's depth state and clears both the color and depth
    /// buffers. `frame` is handed to every drawable rendered until the next
    /// call.
    pub fn begin_frame(&mut self, frame: &FrameParams) {
        self.frame = *frame;

        self.state
            .clear_color(&self.gl, frame.clear_color)
            .clear_depth(&self.gl, frame.clear_depth)
            .depth_test(&self.gl, frame.depth_func);

        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    /// Renders a drawable object.
    ///
    /// Calls the drawable's prepare, draw, and cleanup methods in sequence.
    #[allow(private_bounds)]
    pub fn render(&mut self, drawable: &impl Drawable) {
        let mut context = RenderContext {
            gl: &self.gl,
            state: &mut self.state,
            frame: &self.frame,
        };

        drawable.prepare(&mut context);
        drawable.draw(&mut context);
        drawable.cleanup(&mut context);
    }

    /// Returns a reference to the WebGL2 rendering context.
    pub fn gl(&self) -> &GL {
        &self.gl
    }

    /// Returns a reference to the canvas element.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Returns the current canvas dimensions as a tuple.
    pub fn canvas_size(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }

    /// Returns the canvas width divided by its height.
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.canvas_size();
        width as f32 / height as f32
    }
}

/// Trait for objects that can be rendered by the renderer.
pub(crate) trait Drawable {
    /// Binds the shader program, vertex state and uniforms required for drawing.
    fn prepare(&self, context: &mut RenderContext);

    /// Issues the draw calls described by `context.frame`. All state is
    /// already bound by `prepare()`.
    fn draw(&self, context: &mut RenderContext);

    /// Unbinds the resources bound during `prepare()`.
    fn cleanup(&self, context: &mut RenderContext);
}
