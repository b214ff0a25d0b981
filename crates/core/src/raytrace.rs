//! Tiny ASCII ray tracer: three Phong-shaded spheres and a sky.

use crate::screen::Screen;
use crate::types::{Point3D, LUMA_GRADIENT};

/// Background colour for rays that hit nothing.
pub const SKY: Point3D = Point3D::new(0.2, 0.7, 0.8);

/// Constant light added on top of the diffuse term.
pub const AMBIENT: f32 = 0.3;

/// Specular exponent.
pub const SHININESS: i32 = 32;

/// Specular contribution weight.
pub const SPECULAR_WEIGHT: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3D,
    pub direction: Point3D,
}

impl Ray {
    pub fn new(origin: Point3D, direction: Point3D) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Point3D {
        self.origin + self.direction * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3D,
    pub radius: f32,
    /// RGB in `[0, 1]`.
    pub color: Point3D,
}

impl Sphere {
    pub fn new(center: Point3D, radius: f32, color: Point3D) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Distance along `ray` to the nearest hit in front of the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let offset = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * offset.dot(ray.direction);
        let c = offset.dot(offset) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t0 = (-b - sqrt_d) / (2.0 * a);
        let t1 = (-b + sqrt_d) / (2.0 * a);
        let t = if t0 < t1 && t0 >= 0.0 { t0 } else { t1 };
        (t >= 0.0).then_some(t)
    }
}

/// Camera, point light and spheres.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub camera: Point3D,
    pub light: Point3D,
    pub spheres: Vec<Sphere>,
}

impl Default for Scene {
    /// Red, green and blue spheres lit from the upper left.
    fn default() -> Self {
        Self {
            camera: Point3D::new(0.0, 0.0, 3.0),
            light: Point3D::new(-5.0, 5.0, 5.0),
            spheres: vec![
                Sphere::new(Point3D::ZERO, 1.0, Point3D::new(1.0, 0.2, 0.2)),
                Sphere::new(Point3D::new(2.0, 0.5, -1.0), 0.5, Point3D::new(0.2, 1.0, 0.2)),
                Sphere::new(Point3D::new(-1.0, 0.0, 0.0), 0.8, Point3D::new(0.2, 0.2, 1.0)),
            ],
        }
    }
}

impl Scene {
    fn closest_hit(&self, ray: &Ray) -> Option<(&Sphere, f32)> {
        self.spheres
            .iter()
            .filter_map(|s| s.intersect(ray).map(|t| (s, t)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Colour seen along `ray`.
    pub fn trace(&self, ray: &Ray) -> Point3D {
        let Some((sphere, t)) = self.closest_hit(ray) else {
            return SKY;
        };

        let hit = ray.at(t);
        let normal = (hit - sphere.center).normalize();
        let light_dir = (self.light - hit).normalize();
        let n_dot_l = normal.dot(light_dir);
        let diffuse = n_dot_l.max(0.0);

        let view_dir = (ray.origin - hit).normalize();
        let reflect_dir = light_dir - normal * 2.0 * n_dot_l;
        let specular = view_dir.dot(reflect_dir).max(0.0).powi(SHININESS);

        let white = Point3D::new(1.0, 1.0, 1.0);
        sphere.color * (diffuse + AMBIENT) + white * specular * SPECULAR_WEIGHT
    }

    /// Primary ray through screen cell `(x, y)` of a `width x height` grid.
    ///
    /// Rows are squashed by half to compensate for tall terminal glyphs.
    pub fn primary_ray(&self, x: u16, y: u16, width: u16, height: u16) -> Ray {
        let (w, h) = (width as f32, height as f32);
        let u = (x as f32 - w / 2.0) / w * 2.0;
        let v = (h / 2.0 - y as f32) / h * 2.0 * 0.5;
        Ray::new(self.camera, Point3D::new(u, v, -1.0).normalize())
    }

    /// Trace every cell of `screen`.
    pub fn render_into(&self, screen: &mut Screen) {
        let (w, h) = (screen.width(), screen.height());
        for y in 0..h {
            for x in 0..w {
                let color = self.trace(&self.primary_ray(x, y, w, h));
                screen.set(x as i32, y as i32, luminance_glyph(color));
            }
        }
    }
}

/// Rec. 709 luma of an RGB colour, clamped to `[0, 1]`.
pub fn luminance(color: Point3D) -> f32 {
    (0.2126 * color.x + 0.7152 * color.y + 0.0722 * color.z).clamp(0.0, 1.0)
}

/// Gradient glyph for a colour.
pub fn luminance_glyph(color: Point3D) -> char {
    let idx = (luminance(color) * (LUMA_GRADIENT.len() - 1) as f32) as usize;
    LUMA_GRADIENT[idx.min(LUMA_GRADIENT.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_sphere_in_front() {
        let s = Sphere::new(Point3D::ZERO, 1.0, Point3D::ZERO);
        let ray = Ray::new(Point3D::new(0.0, 0.0, 3.0), Point3D::new(0.0, 0.0, -1.0));
        let t = s.intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_sphere_behind() {
        let s = Sphere::new(Point3D::ZERO, 1.0, Point3D::ZERO);
        let ray = Ray::new(Point3D::new(0.0, 0.0, 3.0), Point3D::new(0.0, 0.0, 1.0));
        assert_eq!(s.intersect(&ray), None);
    }

    #[test]
    fn ray_from_inside_uses_far_root() {
        let s = Sphere::new(Point3D::ZERO, 1.0, Point3D::ZERO);
        let ray = Ray::new(Point3D::ZERO, Point3D::new(1.0, 0.0, 0.0));
        let t = s.intersect(&ray).unwrap();
        assert!((t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn miss_returns_sky() {
        let scene = Scene::default();
        let ray = Ray::new(scene.camera, Point3D::new(0.0, 1.0, 0.0));
        assert_eq!(scene.trace(&ray), SKY);
    }

    #[test]
    fn luminance_glyph_spans_gradient() {
        assert_eq!(luminance_glyph(Point3D::ZERO), ' ');
        assert_eq!(luminance_glyph(Point3D::new(1.0, 1.0, 1.0)), '@');
        assert_eq!(luminance_glyph(Point3D::new(5.0, 5.0, 5.0)), '@');
    }

    #[test]
    fn center_cell_sees_the_red_sphere() {
        let scene = Scene::default();
        let ray = scene.primary_ray(40, 20, 80, 40);
        let color = scene.trace(&ray);
        assert_ne!(color, SKY);
        assert!(color.x > color.y);
    }

    #[test]
    fn render_shows_sky_in_corner_and_spheres_in_middle() {
        let mut screen = Screen::new(80, 40);
        Scene::default().render_into(&mut screen);
        let sky = luminance_glyph(SKY);
        assert_eq!(sky, '+');
        assert_eq!(screen.get(0, 0), Some(sky));
        assert_ne!(screen.get(40, 20), Some(sky));
    }
}
