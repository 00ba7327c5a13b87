use glam::Vec2;

use crate::EPSILON;

/// A half-plane `{p : n.p <= d}`, where `n` is a unit normal.
///
/// Hull planes store the *outward* normal, so a polygon's interior is
/// the intersection of every face's half-plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane2D {
    pub n: Vec2,
    pub d: f32,
}

impl Plane2D {
    #[must_use]
    pub fn new(n: Vec2, d: f32) -> Self {
        Self { n, d }
    }

    #[must_use]
    pub fn is_normal_unit(&self) -> bool {
        (self.n.length() - 1.0).abs() < 1e-4
    }

    /// Signed distance of `p` from the plane along the normal;
    /// negative/zero is inside.
    #[must_use]
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        self.n.dot(p) - self.d
    }

    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        self.signed_distance(p) <= 1e-4
    }
}

/// Whether `a` and `b` are parallel within the shared kernel
/// tolerance.
#[must_use]
pub fn dot_is_parallel(den: f32) -> bool {
    den.abs() < EPSILON
}
