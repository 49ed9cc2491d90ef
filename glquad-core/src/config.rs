use crate::{error::ConfigError, mat4::Mat4};

/// Parameters for the quad scene.
///
/// With the `serde` feature, omitted fields fall back to
/// [`SceneConfig::default`] when deserializing, so a JavaScript caller can
/// pass `{ moveStep: 0.25 }` and nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SceneConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Translation applied to the model-view matrix at startup.
    pub initial_translation: [f32; 3],
    /// Distance moved per directional key press.
    pub move_step: f32,
    /// RGBA color the framebuffer is cleared to.
    pub clear_color: [f32; 4],
    /// RGBA color of the quad.
    pub fill_color: [f32; 4],
}

impl SceneConfig {
    pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 100.0;
    pub const DEFAULT_MOVE_STEP: f32 = 0.1;

    /// Checks that the configuration describes a usable perspective setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fov = self.fov_degrees;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(ConfigError::FieldOfView(fov));
        }

        if !(self.near > 0.0 && self.near.is_finite()) {
            return Err(ConfigError::NearPlane(self.near));
        }

        // NaN fails the comparison as well
        if !(self.far > self.near) {
            return Err(ConfigError::FarPlane { near: self.near, far: self.far });
        }

        if !(self.move_step > 0.0 && self.move_step.is_finite()) {
            return Err(ConfigError::MoveStep(self.move_step));
        }

        check_finite("initial translation", &self.initial_translation)?;
        check_finite("clear color", &self.clear_color)?;
        check_finite("fill color", &self.fill_color)?;

        Ok(())
    }

    /// Computes the projection matrix for a viewport with the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Result<Mat4, ConfigError> {
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(ConfigError::AspectRatio(aspect));
        }
        self.validate()?;

        Ok(Mat4::new_perspective(self.fov_degrees.to_radians(), aspect, self.near, self.far))
    }

    /// Computes the initial model-view matrix.
    pub fn initial_model_view(&self) -> Mat4 {
        Mat4::from_translation(self.initial_translation)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov_degrees: Self::DEFAULT_FOV_DEGREES,
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
            initial_translation: [0.0, 0.0, -6.0],
            move_step: Self::DEFAULT_MOVE_STEP,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            fill_color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

fn check_finite(name: &'static str, values: &[f32]) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_fov() {
        for fov in [0.0, -10.0, 180.0, f32::NAN] {
            let config = SceneConfig { fov_degrees: fov, ..SceneConfig::default() };
            assert!(matches!(config.validate(), Err(ConfigError::FieldOfView(_))), "fov {fov}");
        }
    }

    #[test]
    fn test_rejects_bad_clip_planes() {
        let config = SceneConfig { near: 0.0, ..SceneConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::NearPlane(0.0)));

        let config = SceneConfig { near: 5.0, far: 5.0, ..SceneConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::FarPlane { near: 5.0, far: 5.0 }));

        let config = SceneConfig { near: 5.0, far: 1.0, ..SceneConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::FarPlane { near: 5.0, far: 1.0 }));

        let config = SceneConfig { far: f32::NAN, ..SceneConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::FarPlane { .. })));

        for near in [f32::NAN, f32::INFINITY, -1.0] {
            let config = SceneConfig { near, ..SceneConfig::default() };
            assert!(matches!(config.validate(), Err(ConfigError::NearPlane(_))), "near {near}");
        }

        let config = SceneConfig { far: f32::INFINITY, ..SceneConfig::default() };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_step() {
        for step in [0.0, -0.1, f32::INFINITY] {
            let config = SceneConfig { move_step: step, ..SceneConfig::default() };
            assert_eq!(config.validate(), Err(ConfigError::MoveStep(step)));
        }
    }

    #[test]
    fn test_rejects_non_finite_colors() {
        let config = SceneConfig { clear_color: [0.0, f32::NAN, 0.0, 1.0], ..SceneConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::NonFinite("clear color")));

        let config = SceneConfig { fill_color: [1.0, 0.0, f32::INFINITY, 1.0], ..SceneConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::NonFinite("fill color")));
    }

    #[test]
    fn test_rejects_non_finite_translation() {
        let config = SceneConfig {
            initial_translation: [0.0, f32::NEG_INFINITY, -6.0],
            ..SceneConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonFinite("initial translation")));
    }

    #[test]
    fn test_projection_rejects_degenerate_aspect() {
        let config = SceneConfig::default();
        assert_eq!(config.projection(0.0), Err(ConfigError::AspectRatio(0.0)));
        assert!(config.projection(f32::INFINITY).is_err());
        assert!(matches!(config.projection(f32::NAN), Err(ConfigError::AspectRatio(_))));
        assert!(config.projection(640.0 / 480.0).is_ok());
    }

    #[test]
    fn test_initial_model_view() {
        let model_view = SceneConfig::default().initial_model_view();
        assert_eq!(model_view.translation(), [0.0, 0.0, -6.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_json() {
        let config: SceneConfig =
            serde_json::from_str(r#"{ "moveStep": 0.25, "fillColor": [0, 1, 0, 1] }"#).unwrap();

        assert_eq!(config.move_step, 0.25);
        assert_eq!(config.fill_color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(config.fov_degrees, SceneConfig::DEFAULT_FOV_DEGREES);
        assert_eq!(config.initial_translation, [0.0, 0.0, -6.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_empty_object_yields_default() {
        let config: SceneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }
}
