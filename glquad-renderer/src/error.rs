use glquad_core::ConfigError;

/// Error categories.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failed to initialize WebGL context or retrieve DOM elements.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Shader compilation, linking, or program creation errors.
    #[error("Shader error: {0}")]
    Shader(String),

    /// WebGL resource creation or management errors.
    #[error("Resource error: {0}")]
    Resource(String),

    /// Event listener and animation frame errors.
    #[error("Event listener error: {0}")]
    Callback(String),

    /// Invalid scene configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    // Initialization errors
    pub fn window_not_found() -> Self {
        Self::Initialization("Unable to retrieve window".to_string())
    }

    pub fn document_not_found() -> Self {
        Self::Initialization("Unable to retrieve document".to_string())
    }

    pub fn canvas_not_found() -> Self {
        Self::Initialization("Unable to retrieve canvas".to_string())
    }

    pub fn webgl_context_failed() -> Self {
        Self::Initialization("Failed to retrieve WebGL2 rendering context".to_string())
    }

    pub fn canvas_context_failed() -> Self {
        Self::Initialization("Failed to retrieve canvas rendering context".to_string())
    }

    // Shader errors
    pub fn shader_creation_failed(detail: &str) -> Self {
        Self::Shader(format!("Shader creation failed: {detail}"))
    }

    pub fn shader_compile_failed(stage: &str, log: String) -> Self {
        Self::Shader(format!("Failed compiling {stage} shader: {log}"))
    }

    pub fn shader_program_creation_failed() -> Self {
        Self::Shader("Shader program creation failed".to_string())
    }

    pub fn shader_link_failed(log: String) -> Self {
        Self::Shader(format!("Shader linking failed: {log}"))
    }

    // Resource errors
    pub fn buffer_creation_failed(buffer_type: &str) -> Self {
        Self::Resource(format!("Failed to create {buffer_type} buffer"))
    }

    pub fn vertex_array_creation_failed() -> Self {
        Self::Resource("Failed to create vertex array object".to_string())
    }

    pub fn uniform_location_failed(name: &str) -> Self {
        Self::Resource(format!("Failed to get uniform location: {name}"))
    }

    // Callback errors
    pub fn listener_failed(event: &str) -> Self {
        Self::Callback(format!("Failed to add {event} listener"))
    }

    pub fn animation_frame_failed() -> Self {
        Self::Callback("Failed to request animation frame".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_error_carries_log() {
        let err = Error::shader_compile_failed("vertex", "ERROR: 0:3: syntax error".into());
        assert_eq!(
            err.to_string(),
            "Shader error: Failed compiling vertex shader: ERROR: 0:3: syntax error"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: Error = ConfigError::AspectRatio(0.0).into();
        assert!(matches!(err, Error::Config(ConfigError::AspectRatio(_))));
        assert_eq!(
            err.to_string(),
            "Configuration error: aspect ratio must be positive and finite, got 0"
        );
    }
}
