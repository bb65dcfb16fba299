//! Plain 2D geometry used by the stroke trainer.
//!
//! Coordinates are surface-local CSS pixels, origin top-left, y pointing
//! down. Everything here is total: no inputs produce an error or a panic.

/// A sampled pen position on the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn dist(p: Point, q: Point) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

/// Shortest distance from `p` to the line segment `[a, b]`.
///
/// Projects `p` onto the infinite line through `a` and `b`, clamps the
/// projection parameter to `[0, 1]` and measures to the clamped point.
/// A zero-length segment (`a == b`) degrades to point distance.
pub fn dist_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let cx = b.x - a.x;
    let cy = b.y - a.y;
    let len_sq = cx * cx + cy * cy;
    if len_sq == 0.0 {
        return dist(p, a);
    }
    let t = (((p.x - a.x) * cx + (p.y - a.y) * cy) / len_sq).clamp(0.0, 1.0);
    dist(p, Point::new(a.x + t * cx, a.y + t * cy))
}

/// Clamp a value to the unit interval.
#[inline]
pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}
