/// Rejected scene configuration values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("field of view must be within (0, 180) degrees, got {0}")]
    FieldOfView(f32),

    #[error("near plane must be positive and finite, got {0}")]
    NearPlane(f32),

    #[error("far plane ({far}) must lie beyond the near plane ({near})")]
    FarPlane { near: f32, far: f32 },

    #[error("aspect ratio must be positive and finite, got {0}")]
    AspectRatio(f32),

    #[error("move step must be positive and finite, got {0}")]
    MoveStep(f32),

    #[error("{0} must contain only finite values")]
    NonFinite(&'static str),
}
