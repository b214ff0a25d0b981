//! Perspective projection to integer screen cells.

use crate::types::{Point2D, Point3D, RenderConfig, MIN_DEPTH};

/// Projects rotated model-space points onto a `width x height` screen.
///
/// The camera sits at the origin looking down +z with the model pushed
/// `camera_distance` away. Screen rows grow downward, so model y is inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    half_w: f32,
    half_h: f32,
    aspect: f32,
    fov_scale: f32,
    model_size: f32,
    camera_distance: f32,
}

impl Projector {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            // Integer halves keep odd-sized screens on the same cell grid as
            // the rows/columns they index.
            half_w: (config.width / 2) as f32,
            half_h: (config.height / 2) as f32,
            aspect: config.aspect(),
            fov_scale: 1.0 / (config.fov_degrees * 0.5).to_radians().tan(),
            model_size: config.model_size,
            camera_distance: config.camera_distance,
        }
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    /// Project one point.
    ///
    /// The divisor is clamped to [`MIN_DEPTH`] so points at or behind the
    /// camera still land on finite coordinates; the returned depth is the
    /// unclamped translated z.
    pub fn project(&self, p: Point3D) -> Point2D {
        let z = p.z + self.camera_distance;
        let scale = self.fov_scale / z.max(MIN_DEPTH) * self.model_size;
        Point2D {
            x: (self.half_w + p.x * scale * self.aspect) as i32,
            y: (self.half_h - p.y * scale) as i32,
            depth: z,
        }
    }

    /// Project every point of `src` into `dst`, reusing `dst`'s allocation.
    pub fn project_all_into(&self, src: &[Point3D], dst: &mut Vec<Point2D>) {
        dst.clear();
        dst.extend(src.iter().map(|&p| self.project(p)));
    }
}
