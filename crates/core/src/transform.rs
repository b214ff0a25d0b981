//! Rigid rotations about the X and Y axes (right-handed).

use crate::types::{Angles, Point3D};

/// Rotate `p` about the X axis by `a` radians.
pub fn rotate_x(p: Point3D, a: f32) -> Point3D {
    let (sin, cos) = a.sin_cos();
    Point3D {
        x: p.x,
        y: p.y * cos - p.z * sin,
        z: p.y * sin + p.z * cos,
    }
}

/// Rotate `p` about the Y axis by `a` radians.
pub fn rotate_y(p: Point3D, a: f32) -> Point3D {
    let (sin, cos) = a.sin_cos();
    Point3D {
        x: p.x * cos + p.z * sin,
        y: p.y,
        z: -p.x * sin + p.z * cos,
    }
}

/// Rotate about X first, then Y, as the frame loop does for every vertex.
pub fn rotate(p: Point3D, angles: Angles) -> Point3D {
    rotate_y(rotate_x(p, angles.x), angles.y)
}

/// Rotate every point of `src` into `dst`, reusing `dst`'s allocation.
pub fn rotate_all_into(src: &[Point3D], angles: Angles, dst: &mut Vec<Point3D>) {
    dst.clear();
    dst.extend(src.iter().map(|&p| rotate(p, angles)));
}
