//! Shared types module - geometry primitives and renderer constants
//!
//! Everything in here is plain data with no I/O, so the same values flow
//! through the model loader, the projection math, the rasterizer and the
//! terminal backend without conversion.
//!
//! # Camera Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CAMERA_DISTANCE` | 3.0 | Offset added to view-space z before the perspective divide |
//! | `FOV_DEGREES` | 90.0 | Horizontal/vertical field of view |
//! | `MIN_DEPTH` | 0.1 | Smallest divisor used by the perspective divide |
//! | `DEPTH_SHADE_SCALE` | 2.0 | Depth-to-shade-index multiplier |
//!
//! # Animation Constants
//!
//! - `FRAME_MS`: 5ms sleep between frames (best effort, bounded by terminal throughput)
//! - `STEP_X`: 0.03 rad added to the X rotation every frame
//! - `STEP_Y`: 0.02 rad added to the Y rotation every frame
//!
//! # Limits
//!
//! `RenderConfig::validate` rejects screens wider or taller than
//! `MAX_SCREEN_SIDE` (1024) cells and model sizes outside `(0, MAX_MODEL_SIZE]`
//! (10000).
//!
//! # Shade Ramps
//!
//! The wireframe ramp `".:-=+*#%@"` is ordered light to dark. The ray tracer
//! uses the same ramp with a leading blank so that unlit pixels stay empty.
//!
//! # Examples
//!
//! ```
//! use tui_wireframe_types::{Point3D, Preset, SHADE_RAMP};
//!
//! let p = Point3D::new(1.0, 2.0, 2.0);
//! assert_eq!(p.length(), 3.0);
//!
//! assert_eq!(Preset::from_str("MESH"), Some(Preset::Mesh));
//! assert_eq!(SHADE_RAMP.len(), 9);
//! ```

pub mod config;

use std::ops::{Add, Mul, Sub};

pub use config::{Preset, RenderConfig, RenderOverrides};

/// Distance from the camera to the model origin along +z.
pub const CAMERA_DISTANCE: f32 = 3.0;

/// Field of view in degrees.
pub const FOV_DEGREES: f32 = 90.0;

/// Lower bound for the perspective divisor.
///
/// Points at or behind the camera would otherwise divide by zero or flip sign.
pub const MIN_DEPTH: f32 = 0.1;

/// Multiplier applied to (depth - camera distance) when picking a shade.
pub const DEPTH_SHADE_SCALE: f32 = 2.0;

/// Sleep between frames in milliseconds.
pub const FRAME_MS: u64 = 5;

/// X rotation increment per frame (radians).
pub const STEP_X: f32 = 0.03;

/// Y rotation increment per frame (radians).
pub const STEP_Y: f32 = 0.02;

/// Blank cell glyph.
pub const BLANK: char = ' ';

/// Wireframe shade ramp, light to dark.
pub const SHADE_RAMP: [char; 9] = ['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Ray tracer luminance gradient, dark to bright.
pub const LUMA_GRADIENT: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Cube preset screen width in columns
pub const CUBE_WIDTH: u16 = 80;

/// Cube preset screen height in rows
pub const CUBE_HEIGHT: u16 = 40;

/// Cube preset model size (projection scale in cells)
pub const CUBE_MODEL_SIZE: f32 = 12.0;

/// Mesh preset screen width in columns
pub const MESH_WIDTH: u16 = 170;

/// Mesh preset screen height in rows
pub const MESH_HEIGHT: u16 = 170;

/// Mesh preset model size (projection scale in cells)
pub const MESH_MODEL_SIZE: f32 = 150.0;

/// Largest accepted screen width or height, in cells.
pub const MAX_SCREEN_SIDE: u16 = 1024;

/// Largest accepted projection scale, in cells per model unit.
pub const MAX_MODEL_SIZE: f32 = 10_000.0;

/// A point (or direction) in 3D model space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub const ZERO: Point3D = Point3D::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Point3D) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector is returned unchanged instead of producing NaNs.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return self;
        }
        self * (1.0 / len)
    }

    /// Largest absolute component difference, handy for tolerance checks.
    pub fn max_abs_diff(self, other: Point3D) -> f32 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl Add for Point3D {
    type Output = Point3D;

    fn add(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3D {
    type Output = Point3D;

    fn sub(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Point3D {
    type Output = Point3D;

    fn mul(self, s: f32) -> Point3D {
        Point3D::new(self.x * s, self.y * s, self.z * s)
    }
}

/// A projected point: integer screen cell plus the depth it came from.
///
/// `depth` is the translated view-space z (`z + camera_distance`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
    pub depth: f32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32, depth: f32) -> Self {
        Self { x, y, depth }
    }
}

/// Rotation accumulators (radians) about the X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    pub x: f32,
    pub y: f32,
}

impl Angles {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Advance by one frame's step, wrapping both angles into `[0, 2π)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wireframe_types::Angles;
    ///
    /// let a = Angles::new(0.0, 0.0).advance(0.03, 0.02);
    /// assert!((a.x - 0.03).abs() < 1e-6);
    /// assert!((a.y - 0.02).abs() < 1e-6);
    /// ```
    pub fn advance(self, step_x: f32, step_y: f32) -> Self {
        let tau = std::f32::consts::TAU;
        Self {
            x: (self.x + step_x).rem_euclid(tau),
            y: (self.y + step_y).rem_euclid(tau),
        }
    }
}
