use glam::Vec2;

use crate::GeomError;

/// An ordered sequence of >= 3 vertices in counter-clockwise order,
/// forming a strictly convex ring with no duplicate vertices.
///
/// Immutable after construction; the owning [`crate::Geometry`]
/// derives and caches a [`crate::ConvexHull2D`] from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPoly2D {
    vertices: Vec<Vec2>,
}

impl ConvexPoly2D {
    /// Validates vertex count, duplicate vertices, and CCW winding.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, GeomError> {
        if vertices.len() < 3 {
            return Err(GeomError::TooFewVertices(vertices.len()));
        }

        let n = vertices.len();
        for i in 0..n {
            let next = vertices[(i + 1) % n];
            if vertices[i].abs_diff_eq(next, 1e-6) {
                return Err(GeomError::DuplicateVertex(i));
            }
        }

        let signed_area = Self::signed_area(&vertices);
        if signed_area <= 0.0 {
            return Err(GeomError::NotCounterClockwise { signed_area });
        }

        Ok(Self { vertices })
    }

    /// Builds a polygon without re-validating; used by the codec
    /// after bounds/consistency checks have already been performed
    /// against the file's paired hull chunk.
    #[must_use]
    pub fn from_vertices_unchecked(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The edge from vertex `i` to vertex `(i + 1) % n`.
    #[must_use]
    pub fn edge(&self, i: usize) -> (Vec2, Vec2) {
        let n = self.vertices.len();
        (self.vertices[i], self.vertices[(i + 1) % n])
    }

    /// Axis-aligned bounding box `(mins, maxs)` from the vertex
    /// extrema.
    #[must_use]
    pub fn aabb(&self) -> (Vec2, Vec2) {
        let mut mins = self.vertices[0];
        let mut maxs = self.vertices[0];
        for &v in &self.vertices[1..] {
            mins = mins.min(v);
            maxs = maxs.max(v);
        }
        (mins, maxs)
    }

    fn signed_area(vertices: &[Vec2]) -> f32 {
        let n = vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            area += a.x * b.y - b.x * a.y;
        }
        area * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Vec<Vec2> {
        vec![
            Vec2::new(60.0, 40.0),
            Vec2::new(40.0, 60.0),
            Vec2::new(20.0, 40.0),
            Vec2::new(40.0, 20.0),
        ]
    }

    #[test]
    fn accepts_ccw_diamond() {
        let poly = ConvexPoly2D::new(diamond()).unwrap();
        assert_eq!(poly.num_vertices(), 4);
    }

    #[test]
    fn rejects_too_few_vertices() {
        let err = ConvexPoly2D::new(vec![Vec2::ZERO, Vec2::ONE]).unwrap_err();
        assert!(matches!(err, GeomError::TooFewVertices(2)));
    }

    #[test]
    fn rejects_clockwise_winding() {
        let mut cw = diamond();
        cw.reverse();
        let err = ConvexPoly2D::new(cw).unwrap_err();
        assert!(matches!(err, GeomError::NotCounterClockwise { .. }));
    }

    #[test]
    fn rejects_duplicate_vertex() {
        let verts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ];
        assert!(ConvexPoly2D::new(verts).is_err());
    }

    #[test]
    fn aabb_matches_extrema() {
        let poly = ConvexPoly2D::new(diamond()).unwrap();
        let (mins, maxs) = poly.aabb();
        assert_eq!(mins, Vec2::new(20.0, 20.0));
        assert_eq!(maxs, Vec2::new(60.0, 60.0));
    }
}
