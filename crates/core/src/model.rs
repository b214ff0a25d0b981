//! Wireframe model: vertices, edges and the normalization applied at load.

use tracing::debug;

use crate::types::Point3D;

/// Default cube vertices, `(±1, ±1, ±1)`.
pub const CUBE_VERTICES: [Point3D; 8] = [
    Point3D::new(-1.0, -1.0, -1.0),
    Point3D::new(1.0, -1.0, -1.0),
    Point3D::new(1.0, 1.0, -1.0),
    Point3D::new(-1.0, 1.0, -1.0),
    Point3D::new(-1.0, -1.0, 1.0),
    Point3D::new(1.0, -1.0, 1.0),
    Point3D::new(1.0, 1.0, 1.0),
    Point3D::new(-1.0, 1.0, 1.0),
];

/// Default cube edges as vertex index pairs.
pub const CUBE_EDGES: [(usize, usize); 12] = [
    // bottom face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // top face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // verticals
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// A wireframe edge between two vertices.
///
/// Only constructible against a vertex count, so both indices are always
/// valid for the model that owns the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    /// Build an edge if both indices are in `0..vertex_count`.
    ///
    /// Indices are signed because OBJ negative references can resolve below
    /// zero on malformed input.
    ///
    /// ```
    /// use tui_wireframe_core::Edge;
    ///
    /// assert!(Edge::new(0, 7, 8).is_some());
    /// assert!(Edge::new(0, 8, 8).is_none());
    /// assert!(Edge::new(-1, 2, 8).is_none());
    /// ```
    pub fn new(a: i64, b: i64, vertex_count: usize) -> Option<Self> {
        let a = usize::try_from(a).ok().filter(|&i| i < vertex_count)?;
        let b = usize::try_from(b).ok().filter(|&i| i < vertex_count)?;
        Some(Self { a, b })
    }

    pub fn a(&self) -> usize {
        self.a
    }

    pub fn b(&self) -> usize {
        self.b
    }

    /// The same edge with the smaller index first.
    pub fn canonical(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            Self {
                a: self.b,
                b: self.a,
            }
        }
    }
}

/// Center and uniform scale applied as `(v - center) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub center: Point3D,
    pub scale: f32,
}

impl Normalization {
    pub const IDENTITY: Normalization = Normalization {
        center: Point3D::ZERO,
        scale: 1.0,
    };

    pub fn apply(&self, v: Point3D) -> Point3D {
        (v - self.center) * self.scale
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3D,
    pub max: Point3D,
}

impl Bounds {
    /// Bounding box of `points`, `None` when empty.
    pub fn of(points: &[Point3D]) -> Option<Self> {
        let first = *points.first()?;
        let mut b = Bounds {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.min.z = b.min.z.min(p.z);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
            b.max.z = b.max.z.max(p.z);
        }
        Some(b)
    }

    pub fn center(&self) -> Point3D {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self) -> Point3D {
        self.max - self.min
    }

    pub fn max_extent(&self) -> f32 {
        let e = self.extent();
        e.x.max(e.y).max(e.z)
    }

    /// Normalization mapping this box into a cube of side 2 at the origin.
    ///
    /// A degenerate box (single point) keeps scale 1.
    pub fn normalization(&self) -> Normalization {
        let max = self.max_extent();
        Normalization {
            center: self.center(),
            scale: if max > 0.0 { 2.0 / max } else { 1.0 },
        }
    }
}

/// An immutable wireframe model.
///
/// The per-frame rotated copy lives in the render pipeline; this value is
/// only replaced wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    vertices: Vec<Point3D>,
    edges: Vec<Edge>,
    normalization: Normalization,
}

impl Default for Model {
    fn default() -> Self {
        Self::cube()
    }
}

impl Model {
    /// The built-in unit cube: 8 vertices, 12 edges.
    pub fn cube() -> Self {
        let pairs = CUBE_EDGES.iter().map(|&(a, b)| (a as i64, b as i64));
        Self::new(CUBE_VERTICES.to_vec(), pairs)
    }

    /// Build a model as-is, dropping edges that reference missing vertices.
    pub fn new(vertices: Vec<Point3D>, pairs: impl IntoIterator<Item = (i64, i64)>) -> Self {
        let edges = validate_edges(vertices.len(), pairs);
        Self {
            vertices,
            edges,
            normalization: Normalization::IDENTITY,
        }
    }

    /// Build a model recentered and rescaled into a `[-1, 1]` cube.
    pub fn normalized(
        mut vertices: Vec<Point3D>,
        pairs: impl IntoIterator<Item = (i64, i64)>,
    ) -> Self {
        let normalization = Bounds::of(&vertices)
            .map(|b| b.normalization())
            .unwrap_or(Normalization::IDENTITY);
        for v in &mut vertices {
            *v = normalization.apply(*v);
        }
        let edges = validate_edges(vertices.len(), pairs);
        Self {
            vertices,
            edges,
            normalization,
        }
    }

    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.vertices)
    }
}

fn validate_edges(vertex_count: usize, pairs: impl IntoIterator<Item = (i64, i64)>) -> Vec<Edge> {
    let mut dropped = 0usize;
    let edges: Vec<Edge> = pairs
        .into_iter()
        .filter_map(|(a, b)| {
            let e = Edge::new(a, b, vertex_count);
            if e.is_none() {
                dropped += 1;
            }
            e
        })
        .collect();
    if dropped > 0 {
        debug!(dropped, vertex_count, "dropped edges with out-of-range vertex indices");
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_8_vertices_and_12_edges() {
        let m = Model::cube();
        assert_eq!(m.vertices().len(), 8);
        assert_eq!(m.edges().len(), 12);
        assert_eq!(m.normalization(), Normalization::IDENTITY);
    }

    #[test]
    fn edge_canonical_orders_indices() {
        let e = Edge::new(5, 2, 8).unwrap();
        assert_eq!((e.a(), e.b()), (5, 2));
        let c = e.canonical();
        assert_eq!((c.a(), c.b()), (2, 5));
        assert_eq!(c.canonical(), c);
    }

    #[test]
    fn new_drops_out_of_range_edges() {
        let verts = vec![Point3D::ZERO, Point3D::new(1.0, 0.0, 0.0)];
        let m = Model::new(verts, [(0, 1), (1, 2), (-1, 0)]);
        assert_eq!(m.edges().len(), 1);
    }

    #[test]
    fn normalized_fits_largest_extent_to_two() {
        let verts = vec![
            Point3D::new(10.0, 0.0, 0.0),
            Point3D::new(14.0, 1.0, 0.5),
            Point3D::new(12.0, -1.0, 0.0),
        ];
        let m = Model::normalized(verts, []);
        let b = m.bounds().unwrap();
        assert!((b.max_extent() - 2.0).abs() < 1e-5);
        assert!(b.center().length() < 1e-5);
        assert_eq!(m.normalization().scale, 0.5);
    }

    #[test]
    fn single_point_keeps_unit_scale() {
        let m = Model::normalized(vec![Point3D::new(3.0, 4.0, 5.0); 3], []);
        assert_eq!(m.normalization().scale, 1.0);
        for v in m.vertices() {
            assert_eq!(*v, Point3D::ZERO);
        }
    }

    #[test]
    fn cube_is_already_normalized() {
        let cube = Model::cube();
        let again = Model::normalized(cube.vertices().to_vec(), []);
        assert_eq!(again.normalization().scale, 1.0);
        assert_eq!(again.vertices(), cube.vertices());
    }
}
