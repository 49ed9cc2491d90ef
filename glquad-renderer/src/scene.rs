use std::{cell::RefCell, rc::Rc};

use compact_str::CompactString;
use glquad_core::{InputEvent, InputQueue, Mat4, SceneConfig, SceneState};
use web_sys::console;

use crate::{
    gl::{QuadMesh, Renderer},
    Error,
};

/// A single perspective-projected quad that moves with the arrow keys.
///
/// `QuadScene` owns the [`Renderer`], the quad's GPU resources and the
/// transform state. Input is queued with [`QuadScene::push_input`] (or by a
/// [`crate::KeyboardHandler`] sharing [`QuadScene::input_queue`]) and applied
/// at the start of the next [`QuadScene::render_frame`].
///
/// # Examples
///
/// ```rust,no_run
/// use glquad_renderer::QuadScene;
///
/// let mut scene = QuadScene::builder("#glCanvas").move_step(0.25).build()?;
/// scene.press("ArrowUp");
/// scene.render_frame();
/// # Ok::<(), glquad_renderer::Error>(())
/// ```
#[derive(Debug)]
pub struct QuadScene {
    renderer: Renderer,
    mesh: QuadMesh,
    state: SceneState,
    input: Rc<RefCell<InputQueue>>,
}

impl QuadScene {
    /// Creates a new scene builder with the specified canvas source.
    ///
    /// # Parameters
    /// * `canvas` - Canvas identifier (CSS selector) or `HtmlCanvasElement`
    #[allow(private_bounds)]
    pub fn builder(canvas: impl Into<CanvasSource>) -> QuadSceneBuilder {
        QuadSceneBuilder::new(canvas.into())
    }

    /// Queues an input event for the next frame.
    pub fn push_input(&self, event: InputEvent) {
        self.input.borrow_mut().push(event);
    }

    /// Queues a key press, as if `key` arrived in a `keydown` event. The
    /// model-view matrix changes on the next [`QuadScene::update`] or
    /// [`QuadScene::render_frame`].
    pub fn press(&self, key: &str) {
        self.push_input(InputEvent::key_down(key));
    }

    /// Discards input queued since the last frame.
    pub fn clear_input(&self) {
        self.input.borrow_mut().clear();
    }

    /// Returns the queue consumed by [`QuadScene::render_frame`].
    pub fn input_queue(&self) -> Rc<RefCell<InputQueue>> {
        self.input.clone()
    }

    /// Applies all queued input, re-uploading the model-view matrix if it
    /// changed. Returns `true` when it did.
    pub fn update(&mut self) -> bool {
        let dirty = self.state.apply_pending(&mut self.input.borrow_mut());
        if dirty {
            self.mesh.upload_model_view(self.renderer.gl(), self.state.model_view());
        }
        dirty
    }

    /// Applies pending input, then clears the canvas and draws the quad.
    pub fn render_frame(&mut self) {
        self.update();

        let frame = self.state.frame();
        self.renderer.begin_frame(&frame);
        self.renderer.render(&self.mesh);
    }

    /// Returns the current model-view matrix.
    pub fn model_view(&self) -> &Mat4 {
        self.state.model_view()
    }

    /// Returns the projection matrix, fixed at construction.
    pub fn projection(&self) -> &Mat4 {
        self.state.projection()
    }

    /// Returns a reference to the HTML canvas element used for rendering.
    pub fn canvas(&self) -> &web_sys::HtmlCanvasElement {
        self.renderer.canvas()
    }

    /// Returns a reference to the underlying renderer.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

/// Canvas source for scene initialization.
///
/// Supports both CSS selector strings and direct `HtmlCanvasElement` references.
pub(crate) enum CanvasSource {
    /// CSS selector string for canvas lookup (e.g., "#glCanvas", "canvas").
    Id(CompactString),
    /// Direct reference to an existing canvas element.
    Element(web_sys::HtmlCanvasElement),
}

/// Builder for configuring and creating a [`QuadScene`].
///
/// Starts from [`SceneConfig::default`]: 45 degree field of view, clip planes
/// at 0.1 and 100, the quad 6 units in front of the camera and a move step
/// of 0.1.
pub struct QuadSceneBuilder {
    canvas: CanvasSource,
    config: SceneConfig,
}

impl QuadSceneBuilder {
    fn new(canvas: CanvasSource) -> Self {
        QuadSceneBuilder { canvas, config: SceneConfig::default() }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: SceneConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the vertical field of view in degrees.
    pub fn fov_degrees(mut self, fov: f32) -> Self {
        self.config.fov_degrees = fov;
        self
    }

    /// Sets the near and far clipping planes.
    pub fn clip_planes(mut self, near: f32, far: f32) -> Self {
        self.config.near = near;
        self.config.far = far;
        self
    }

    /// Sets the starting position of the quad relative to the camera.
    pub fn initial_translation(mut self, translation: [f32; 3]) -> Self {
        self.config.initial_translation = translation;
        self
    }

    /// Sets the distance moved per arrow key press.
    pub fn move_step(mut self, step: f32) -> Self {
        self.config.move_step = step;
        self
    }

    /// Sets the background color as an RGB value (0xRRGGBB).
    pub fn clear_color(mut self, color: u32) -> Self {
        self.config.clear_color = rgb_to_rgba(color);
        self
    }

    /// Sets the quad color as an RGB value (0xRRGGBB).
    pub fn fill_color(mut self, color: u32) -> Self {
        self.config.fill_color = rgb_to_rgba(color);
        self
    }

    /// Builds the scene with the configured options.
    ///
    /// # Errors
    /// Fails if the canvas or WebGL2 context is unavailable, the shaders do
    /// not compile or link, or the configuration is invalid.
    pub fn build(self) -> Result<QuadScene, Error> {
        self.config.validate()?;

        let renderer = match self.canvas {
            CanvasSource::Id(id) => Renderer::create(&id)?,
            CanvasSource::Element(element) => Renderer::create_with_canvas(element)?,
        };

        let state = SceneState::new(&self.config, renderer.aspect_ratio())?;

        let gl = renderer.gl();
        let mesh = QuadMesh::new(gl, state.fill_color())?;
        mesh.upload_projection(gl, state.projection());
        mesh.upload_model_view(gl, state.model_view());

        let (width, height) = renderer.canvas_size();
        console::log_1(&format!("quad scene ready on {width}x{height} canvas").into());

        Ok(QuadScene {
            renderer,
            mesh,
            state,
            input: Rc::new(RefCell::new(InputQueue::new())),
        })
    }
}

fn rgb_to_rgba(color: u32) -> [f32; 4] {
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    [r, g, b, 1.0]
}

impl From<&str> for CanvasSource {
    fn from(id: &str) -> Self {
        CanvasSource::Id(id.into())
    }
}

impl From<web_sys::HtmlCanvasElement> for CanvasSource {
    fn from(element: web_sys::HtmlCanvasElement) -> Self {
        CanvasSource::Element(element)
    }
}

impl<'a> From<&'a web_sys::HtmlCanvasElement> for CanvasSource {
    fn from(value: &'a web_sys::HtmlCanvasElement) -> Self {
        value.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_rgba() {
        assert_eq!(rgb_to_rgba(0xff0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_rgba(0x000000), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_rgba(0x00ff00), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_builder_collects_config() {
        let builder = QuadScene::builder("#glCanvas")
            .fov_degrees(60.0)
            .clip_planes(0.5, 50.0)
            .initial_translation([1.0, 0.0, -3.0])
            .move_step(0.2)
            .fill_color(0x0000ff);

        let config = builder.config;
        assert_eq!(config.fov_degrees, 60.0);
        assert_eq!((config.near, config.far), (0.5, 50.0));
        assert_eq!(config.initial_translation, [1.0, 0.0, -3.0]);
        assert_eq!(config.move_step, 0.2);
        assert_eq!(config.fill_color, [0.0, 0.0, 1.0, 1.0]);
        assert!(matches!(builder.canvas, CanvasSource::Id(ref id) if id == "#glCanvas"));
    }
}
