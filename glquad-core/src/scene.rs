use crate::{
    config::SceneConfig,
    error::ConfigError,
    input::{Direction, InputEvent, InputQueue},
    mat4::Mat4,
    quad::DrawCall,
};

/// Depth comparison used while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFunc {
    LessEqual,
}

/// Everything the host needs to render one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub clear_color: [f32; 4],
    pub clear_depth: f32,
    pub depth_func: DepthFunc,
    pub draw: DrawCall,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            clear_depth: 1.0,
            depth_func: DepthFunc::LessEqual,
            draw: DrawCall::QUAD,
        }
    }
}

/// Transform state of the quad scene.
///
/// The projection is fixed at construction. The model-view matrix only ever
/// receives translations, one step per recognized key press, with no bounds
/// on the resulting position.
#[derive(Debug, Clone)]
pub struct SceneState {
    projection: Mat4,
    model_view: Mat4,
    move_step: f32,
    clear_color: [f32; 4],
    fill_color: [f32; 4],
}

impl SceneState {
    /// Creates the scene state for a viewport with the given aspect ratio.
    pub fn new(config: &SceneConfig, aspect: f32) -> Result<Self, ConfigError> {
        let projection = config.projection(aspect)?;

        Ok(Self {
            projection,
            model_view: config.initial_model_view(),
            move_step: config.move_step,
            clear_color: config.clear_color,
            fill_color: config.fill_color,
        })
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn model_view(&self) -> &Mat4 {
        &self.model_view
    }

    pub fn fill_color(&self) -> [f32; 4] {
        self.fill_color
    }

    /// Moves the quad one step in `direction`.
    pub fn step(&mut self, direction: Direction) {
        self.model_view.translate(direction.offset(self.move_step));
    }

    /// Applies a single input event, returning `true` if the model-view
    /// matrix changed.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        match event.direction() {
            Some(direction) => {
                self.step(direction);
                true
            },
            None => false,
        }
    }

    /// Applies all queued events in arrival order, returning `true` if the
    /// model-view matrix changed and must be re-uploaded.
    pub fn apply_pending(&mut self, queue: &mut InputQueue) -> bool {
        queue.drain().fold(false, |dirty, event| self.apply(&event) | dirty)
    }

    /// Returns the parameters for the next frame.
    pub fn frame(&self) -> FrameParams {
        FrameParams { clear_color: self.clear_color, ..FrameParams::default() }
    }
}
