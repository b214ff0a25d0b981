//! Depth-shaded Bresenham line rasterizer.
//!
//! There is no z-buffer. Each line gets one glyph picked from its average
//! depth, and a cell only changes when it is blank or the new glyph compares
//! greater than the current one as a plain `char`. The ramp is not in ASCII
//! order, so this is a compositing heuristic rather than true depth testing.
//! Shade selection lives in [`shade_index`] and the write rule in
//! [`should_overwrite`] so either can be swapped without touching the line
//! walk.

use crate::screen::Screen;
use crate::types::{Point2D, BLANK, DEPTH_SHADE_SCALE, SHADE_RAMP};

/// Index into [`SHADE_RAMP`] for a line at `avg_depth`.
///
/// `((avg_depth - camera_distance) * 2)` truncated, reduced modulo the ramp
/// length, then clamped to `[0, len - 2]`. The last ramp glyph is never
/// selected.
///
/// ```
/// use tui_wireframe_core::shade_index;
///
/// assert_eq!(shade_index(3.0, 3.0), 0);
/// assert_eq!(shade_index(4.0, 3.0), 2);
/// assert_eq!(shade_index(1.0, 3.0), 0);
/// ```
pub fn shade_index(avg_depth: f32, camera_distance: f32) -> usize {
    let len = SHADE_RAMP.len() as i32;
    let raw = ((avg_depth - camera_distance) * DEPTH_SHADE_SCALE) as i32 % len;
    raw.clamp(0, len - 2) as usize
}

/// Glyph for a line between two projected points.
pub fn shade_for(p1: Point2D, p2: Point2D, camera_distance: f32) -> char {
    let avg = (p1.depth + p2.depth) / 2.0;
    SHADE_RAMP[shade_index(avg, camera_distance)]
}

/// Per-cell write rule: blank cells always take the glyph, otherwise only a
/// glyph that compares greater wins.
#[inline]
pub fn should_overwrite(current: char, new: char) -> bool {
    current == BLANK || new > current
}

/// Draw a line from `p1` to `p2` into `screen`.
///
/// Integer Bresenham in its closed form: one cell per step along the major
/// axis, with the minor coordinate rounded to the nearest cell (ties round
/// away from the start). Both endpoints are plotted. The walk is clipped to
/// the steps that land on screen, so endpoints far outside the grid cost no
/// more than the visible part of the line.
pub fn draw_line(screen: &mut Screen, p1: Point2D, p2: Point2D, camera_distance: f32) {
    let glyph = shade_for(p1, p2, camera_distance);

    let (w, h) = (screen.width() as i64, screen.height() as i64);
    let (x0, y0) = (p1.x as i64, p1.y as i64);
    let (dx, dy) = (p2.x as i64 - x0, p2.y as i64 - y0);

    let x_major = dx.abs() >= dy.abs();
    let (major, minor) = if x_major {
        (Axis::new(x0, dx, w), Axis::new(y0, dy, h))
    } else {
        (Axis::new(y0, dy, h), Axis::new(x0, dx, w))
    };

    let Some((first, last)) = visible_steps(&major, &minor) else {
        return;
    };

    for k in first..=last {
        let a = major.start + major.sign * k;
        let b = minor.start + minor.sign * minor_offset(k, major.span, minor.span);
        let (x, y) = if x_major { (a, b) } else { (b, a) };
        if let Some(cell) = screen.cell_mut(x as i32, y as i32) {
            if should_overwrite(*cell, glyph) {
                *cell = glyph;
            }
        }
    }
}

/// One axis of a line: start coordinate, direction, length in cells, and the
/// screen extent along that axis.
struct Axis {
    start: i64,
    sign: i64,
    span: i64,
    extent: i64,
}

impl Axis {
    fn new(start: i64, delta: i64, extent: i64) -> Self {
        Self {
            start,
            sign: delta.signum(),
            span: delta.abs(),
            extent,
        }
    }

    /// Offsets `t` in `[0, span]` with `start + sign * t` inside `[0, extent)`.
    fn on_screen(&self) -> Option<(i64, i64)> {
        let (lo, hi) = match self.sign {
            1 => (-self.start, self.extent - 1 - self.start),
            -1 => (self.start - (self.extent - 1), self.start),
            _ if (0..self.extent).contains(&self.start) => (0, self.span),
            _ => return None,
        };
        let (lo, hi) = (lo.max(0), hi.min(self.span));
        (lo <= hi).then_some((lo, hi))
    }
}

/// Minor-axis offset after `k` major steps of a line spanning `n` major and
/// `m` minor cells: `round(k * m / n)` with ties rounding up.
fn minor_offset(k: i64, n: i64, m: i64) -> i64 {
    if n == 0 {
        return 0;
    }
    let (k, n, m) = (k as i128, n as i128, m as i128);
    ((2 * k * m + n) / (2 * n)) as i64
}

/// Range of major steps whose cell falls inside the screen on both axes.
fn visible_steps(major: &Axis, minor: &Axis) -> Option<(i64, i64)> {
    let (k_lo, k_hi) = major.on_screen()?;
    let (m_lo, m_hi) = minor.on_screen()?;
    if minor.span == 0 {
        return Some((k_lo, k_hi));
    }

    // Invert minor_offset: smallest k reaching m_lo, largest k staying <= m_hi.
    let (n, m) = (major.span as i128, minor.span as i128);
    let lo = ceil_div(2 * n * m_lo as i128 - n, 2 * m);
    let hi = (2 * n * (m_hi as i128 + 1) - n - 1).div_euclid(2 * m);

    let first = k_lo.max(lo.max(0) as i64);
    let last = k_hi.min(hi.min(major.span as i128) as i64);
    (first <= last).then_some((first, last))
}

fn ceil_div(a: i128, b: i128) -> i128 {
    -((-a).div_euclid(b))
}
