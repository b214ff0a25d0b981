//! Render configuration and the two built-in presets.

use ron::extensions::Extensions;
use serde::Deserialize;

use crate::{
    CAMERA_DISTANCE, CUBE_HEIGHT, CUBE_MODEL_SIZE, CUBE_WIDTH, FOV_DEGREES, FRAME_MS,
    MAX_MODEL_SIZE, MAX_SCREEN_SIDE, MESH_HEIGHT, MESH_MODEL_SIZE, MESH_WIDTH, STEP_X, STEP_Y,
};

/// Built-in parameter sets.
///
/// - **Cube**: small 80x40 screen sized for the hardcoded cube
/// - **Mesh**: large 170x170 screen sized for loaded OBJ meshes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    #[default]
    Cube,
    Mesh,
}

impl Preset {
    /// Parse preset from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wireframe_types::Preset;
    ///
    /// assert_eq!(Preset::from_str("cube"), Some(Preset::Cube));
    /// assert_eq!(Preset::from_str("Mesh"), Some(Preset::Mesh));
    /// assert_eq!(Preset::from_str("obj"), Some(Preset::Mesh));
    /// assert_eq!(Preset::from_str("sphere"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cube" => Some(Preset::Cube),
            "mesh" | "obj" => Some(Preset::Mesh),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Cube => "cube",
            Preset::Mesh => "mesh",
        }
    }

    pub fn config(&self) -> RenderConfig {
        match self {
            Preset::Cube => RenderConfig {
                width: CUBE_WIDTH,
                height: CUBE_HEIGHT,
                model_size: CUBE_MODEL_SIZE,
                ..RenderConfig::default()
            },
            Preset::Mesh => RenderConfig {
                width: MESH_WIDTH,
                height: MESH_HEIGHT,
                model_size: MESH_MODEL_SIZE,
                ..RenderConfig::default()
            },
        }
    }
}

/// Screen, camera and animation parameters for one renderer instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Screen width in terminal columns.
    pub width: u16,
    /// Screen height in terminal rows.
    pub height: u16,
    /// Projection scale in cells for a unit-sized model.
    pub model_size: f32,
    pub camera_distance: f32,
    pub fov_degrees: f32,
    /// Sleep between frames.
    pub frame_ms: u64,
    /// Rotation step per frame about X (radians).
    pub step_x: f32,
    /// Rotation step per frame about Y (radians).
    pub step_y: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: CUBE_WIDTH,
            height: CUBE_HEIGHT,
            model_size: CUBE_MODEL_SIZE,
            camera_distance: CAMERA_DISTANCE,
            fov_degrees: FOV_DEGREES,
            frame_ms: FRAME_MS,
            step_x: STEP_X,
            step_y: STEP_Y,
        }
    }
}

impl RenderConfig {
    /// Width over height, used to stretch x so cells look roughly square.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check the values a projection can actually work with.
    ///
    /// Returns a short human-readable reason on failure.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.width == 0 || self.height == 0 {
            return Err("screen width and height must be at least 1");
        }
        if self.width > MAX_SCREEN_SIDE || self.height > MAX_SCREEN_SIDE {
            return Err("screen width and height must be at most 1024");
        }
        if !(self.model_size > 0.0 && self.model_size <= MAX_MODEL_SIZE) {
            return Err("model size must be within (0, 10000]");
        }
        if !self.camera_distance.is_finite() {
            return Err("camera distance must be finite");
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err("field of view must be within (0, 180) degrees");
        }
        if !self.step_x.is_finite() || !self.step_y.is_finite() {
            return Err("rotation steps must be finite");
        }
        Ok(())
    }

    /// Layer `overrides` on top of this config.
    pub fn with_overrides(mut self, overrides: &RenderOverrides) -> Self {
        if let Some(v) = overrides.width {
            self.width = v;
        }
        if let Some(v) = overrides.height {
            self.height = v;
        }
        if let Some(v) = overrides.model_size {
            self.model_size = v;
        }
        if let Some(v) = overrides.camera_distance {
            self.camera_distance = v;
        }
        if let Some(v) = overrides.fov_degrees {
            self.fov_degrees = v;
        }
        if let Some(v) = overrides.frame_ms {
            self.frame_ms = v;
        }
        if let Some(v) = overrides.step_x {
            self.step_x = v;
        }
        if let Some(v) = overrides.step_y {
            self.step_y = v;
        }
        self
    }
}

/// Partial [`RenderConfig`]: every field is optional.
///
/// Config files deserialize into this (RON), and CLI flags build one too, so
/// both can be layered over a preset in order.
///
/// ```
/// use tui_wireframe_types::{Preset, RenderOverrides};
///
/// let file = RenderOverrides::from_ron("(width: 120, fov_degrees: 60.0)").unwrap();
/// let cfg = Preset::Mesh.config().with_overrides(&file);
/// assert_eq!(cfg.width, 120);
/// assert_eq!(cfg.height, 170);
/// assert_eq!(cfg.fov_degrees, 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOverrides {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub model_size: Option<f32>,
    pub camera_distance: Option<f32>,
    pub fov_degrees: Option<f32>,
    pub frame_ms: Option<u64>,
    pub step_x: Option<f32>,
    pub step_y: Option<f32>,
}

impl RenderOverrides {
    /// Parse a RON config file body.
    ///
    /// Bare values are accepted for optional fields (`width: 120`, not
    /// `width: Some(120)`).
    pub fn from_ron(s: &str) -> ron::error::SpannedResult<Self> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_the_two_renderers() {
        let cube = Preset::Cube.config();
        assert_eq!((cube.width, cube.height, cube.model_size), (80, 40, 12.0));

        let mesh = Preset::Mesh.config();
        assert_eq!((mesh.width, mesh.height, mesh.model_size), (170, 170, 150.0));

        for cfg in [cube, mesh] {
            assert_eq!(cfg.camera_distance, 3.0);
            assert_eq!(cfg.fov_degrees, 90.0);
            assert_eq!(cfg.frame_ms, 5);
        }
    }

    #[test]
    fn preset_round_trips_through_str() {
        for p in [Preset::Cube, Preset::Mesh] {
            assert_eq!(Preset::from_str(p.as_str()), Some(p));
        }
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        assert!(RenderConfig::default().validate().is_ok());

        let zero_w = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        assert!(zero_w.validate().is_err());

        let wide_fov = RenderConfig {
            fov_degrees: 180.0,
            ..RenderConfig::default()
        };
        assert!(wide_fov.validate().is_err());

        let nan_cam = RenderConfig {
            camera_distance: f32::NAN,
            ..RenderConfig::default()
        };
        assert!(nan_cam.validate().is_err());
    }

    #[test]
    fn validate_bounds_screen_and_model_size() {
        for model_size in [0.0, -12.0, 1e8, f32::INFINITY, f32::NAN] {
            let cfg = RenderConfig {
                model_size,
                ..RenderConfig::default()
            };
            assert!(cfg.validate().is_err(), "model_size {} accepted", model_size);
        }

        let huge = RenderConfig {
            width: 65535,
            height: 65535,
            ..RenderConfig::default()
        };
        assert!(huge.validate().is_err());

        let largest = RenderConfig {
            width: MAX_SCREEN_SIDE,
            height: MAX_SCREEN_SIDE,
            model_size: MAX_MODEL_SIZE,
            ..RenderConfig::default()
        };
        assert!(largest.validate().is_ok());
        assert!(Preset::Mesh.config().validate().is_ok());
    }

    #[test]
    fn ron_overrides_only_touch_given_fields() {
        let file = RenderOverrides::from_ron("(frame_ms: 16, step_y: 0.0)").unwrap();
        let cfg = Preset::Cube.config().with_overrides(&file);
        assert_eq!(cfg.frame_ms, 16);
        assert_eq!(cfg.step_y, 0.0);
        assert_eq!(cfg.step_x, STEP_X);
        assert_eq!(cfg.width, CUBE_WIDTH);
    }

    #[test]
    fn ron_overrides_reject_unknown_fields() {
        assert!(RenderOverrides::from_ron("(colour: 3)").is_err());
    }

    #[test]
    fn ron_overrides_accept_explicit_some() {
        let file = RenderOverrides::from_ron("(width: Some(90))").unwrap();
        assert_eq!(file.width, Some(90));
    }

    #[test]
    fn later_overrides_win() {
        let file = RenderOverrides {
            width: Some(100),
            height: Some(50),
            ..RenderOverrides::default()
        };
        let cli = RenderOverrides {
            width: Some(60),
            ..RenderOverrides::default()
        };
        let cfg = Preset::Mesh.config().with_overrides(&file).with_overrides(&cli);
        assert_eq!((cfg.width, cfg.height), (60, 50));
        assert_eq!(cfg.model_size, 150.0);
    }
}
