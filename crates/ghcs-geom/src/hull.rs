use glam::Vec2;

use crate::{rot90_cw, ConvexPoly2D, GeomError, Plane2D};

/// An unordered set of half-plane faces whose positive-normal
/// half-spaces' intersection is a convex polygon's interior.
///
/// Derived from, but stored independently of, a [`ConvexPoly2D`] — the
/// codec persists both so it never has to re-derive the hull on load,
/// and so the two can (in principle) drift; the hull is authoritative
/// for raycast queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull2D {
    planes: Vec<Plane2D>,
}

impl ConvexHull2D {
    /// For each polygon edge `(v_i, v_{i+1})`, the outward unit normal
    /// is `rot90_cw(edge)` and `d = n.v_i`.
    #[must_use]
    pub fn from_polygon(polygon: &ConvexPoly2D) -> Self {
        let n = polygon.num_vertices();
        let mut planes = Vec::with_capacity(n);
        for i in 0..n {
            let (v_i, v_next) = polygon.edge(i);
            let edge = v_next - v_i;
            let normal = rot90_cw(edge).normalize();
            let d = normal.dot(v_i);
            planes.push(Plane2D::new(normal, d));
        }
        Self { planes }
    }

    #[must_use]
    pub fn from_planes(planes: Vec<Plane2D>) -> Self {
        Self { planes }
    }

    /// The four half-planes bounding an axis-aligned rectangle,
    /// interior `min <= p <= max`. Used to clip a semi-infinite ray to
    /// the world bounds for broadphase mask computation.
    #[must_use]
    pub fn from_aabb(min: Vec2, max: Vec2) -> Self {
        Self {
            planes: vec![
                Plane2D::new(Vec2::new(1.0, 0.0), max.x),
                Plane2D::new(Vec2::new(-1.0, 0.0), -min.x),
                Plane2D::new(Vec2::new(0.0, 1.0), max.y),
                Plane2D::new(Vec2::new(0.0, -1.0), -min.y),
            ],
        }
    }

    #[must_use]
    pub fn planes(&self) -> &[Plane2D] {
        &self.planes
    }

    #[must_use]
    pub fn num_planes(&self) -> usize {
        self.planes.len()
    }

    /// Validates that every `polygon` vertex satisfies every plane
    /// within tolerance, and that every normal is unit length. Used
    /// by the codec to check a file-supplied (polygon, hull) pair
    /// before trusting the hull for queries.
    pub fn validate_against_polygon(&self, polygon: &ConvexPoly2D) -> Result<(), GeomError> {
        if self.planes.len() != polygon.num_vertices() {
            return Err(GeomError::HullPolygonMismatch {
                hull_planes: self.planes.len(),
                polygon_vertices: polygon.num_vertices(),
            });
        }

        for (plane_index, plane) in self.planes.iter().enumerate() {
            if !plane.is_normal_unit() {
                return Err(GeomError::NonUnitNormal {
                    length: plane.n.length(),
                });
            }
            for (vertex_index, &v) in polygon.vertices().iter().enumerate() {
                let value = plane.n.dot(v);
                if value > plane.d + 1e-4 {
                    return Err(GeomError::VertexOutsideHull {
                        vertex_index,
                        plane_index,
                        value,
                        d: plane.d,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn diamond() -> ConvexPoly2D {
        ConvexPoly2D::new(vec![
            Vec2::new(60.0, 40.0),
            Vec2::new(40.0, 60.0),
            Vec2::new(20.0, 40.0),
            Vec2::new(40.0, 20.0),
        ])
        .unwrap()
    }

    #[test]
    fn derived_hull_has_unit_normals_and_bounds_vertices() {
        let poly = diamond();
        let hull = ConvexHull2D::from_polygon(&poly);
        assert_eq!(hull.num_planes(), 4);
        for plane in hull.planes() {
            assert_relative_eq!(plane.n.length(), 1.0, epsilon = 1e-5);
        }
        hull.validate_against_polygon(&poly).unwrap();
    }

    #[test]
    fn aabb_hull_contains_its_corners() {
        let min = Vec2::new(0.0, 0.0);
        let max = Vec2::new(10.0, 5.0);
        let hull = ConvexHull2D::from_aabb(min, max);
        for plane in hull.planes() {
            assert!(plane.contains(min));
            assert!(plane.contains(max));
            assert!(plane.contains(Vec2::new(5.0, 2.5)));
        }
    }
}
