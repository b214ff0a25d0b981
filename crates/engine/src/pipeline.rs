//! One wireframe frame: rotate, project, rasterize.

use crate::core::{draw_line, rotate_all_into, Model, Projector, Screen};
use crate::types::{Angles, Point2D, Point3D, RenderConfig};

/// Counters for a single rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub edges_drawn: usize,
    /// Edges whose endpoints had no projected vertex.
    pub edges_skipped: usize,
}

/// Renders models into a [`Screen`] with reusable scratch buffers.
///
/// After the first frame for a given model size, rendering does not allocate.
#[derive(Debug, Clone)]
pub struct Pipeline {
    projector: Projector,
    rotated: Vec<Point3D>,
    projected: Vec<Point2D>,
}

impl Pipeline {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            projector: Projector::new(config),
            rotated: Vec::new(),
            projected: Vec::new(),
        }
    }

    /// Projected vertices from the last rendered frame.
    pub fn projected(&self) -> &[Point2D] {
        &self.projected
    }

    /// Clear `screen` and draw `model` rotated by `angles`.
    pub fn render_into(
        &mut self,
        model: &Model,
        angles: Angles,
        screen: &mut Screen,
    ) -> FrameStats {
        screen.clear();

        rotate_all_into(model.vertices(), angles, &mut self.rotated);
        self.projector.project_all_into(&self.rotated, &mut self.projected);

        let camera_distance = self.projector.camera_distance();
        let mut stats = FrameStats::default();
        for edge in model.edges() {
            match (self.projected.get(edge.a()), self.projected.get(edge.b())) {
                (Some(&p1), Some(&p2)) => {
                    draw_line(screen, p1, p2, camera_distance);
                    stats.edges_drawn += 1;
                }
                _ => stats.edges_skipped += 1,
            }
        }
        stats
    }
}
