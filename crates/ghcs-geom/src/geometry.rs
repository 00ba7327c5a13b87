use crate::{BroadphaseMask, ConvexHull2D, ConvexPoly2D, GeomError};

/// A (polygon, hull, broadphase-mask) triple.
///
/// [`Geometry::from_polygon`] eagerly derives and caches the hull at
/// construction time, so callers never see a polygon without its
/// dual. [`Geometry::from_parts`] is for the codec, which persists
/// both representations and validates their consistency on load
/// rather than re-deriving.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    polygon: ConvexPoly2D,
    hull: ConvexHull2D,
    pub mask: BroadphaseMask,
}

impl Geometry {
    #[must_use]
    pub fn from_polygon(polygon: ConvexPoly2D) -> Self {
        let hull = ConvexHull2D::from_polygon(&polygon);
        Self {
            polygon,
            hull,
            mask: BroadphaseMask::EMPTY,
        }
    }

    /// Pairs a codec-supplied polygon and hull, validating that the
    /// hull could plausibly have been derived from the polygon (plane
    /// count matches vertex count, normals are unit, every vertex
    /// satisfies every plane).
    pub fn from_parts(polygon: ConvexPoly2D, hull: ConvexHull2D) -> Result<Self, GeomError> {
        hull.validate_against_polygon(&polygon)?;
        Ok(Self {
            polygon,
            hull,
            mask: BroadphaseMask::EMPTY,
        })
    }

    #[must_use]
    pub fn polygon(&self) -> &ConvexPoly2D {
        &self.polygon
    }

    #[must_use]
    pub fn hull(&self) -> &ConvexHull2D {
        &self.hull
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn from_polygon_derives_matching_hull() {
        let poly = ConvexPoly2D::new(vec![
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, -1.0),
        ])
        .unwrap();
        let geom = Geometry::from_polygon(poly);
        assert_eq!(geom.hull().num_planes(), geom.polygon().num_vertices());
    }

    #[test]
    fn from_parts_rejects_mismatched_hull() {
        let poly = ConvexPoly2D::new(vec![
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, -1.0),
        ])
        .unwrap();
        let wrong_hull = ConvexHull2D::from_aabb(Vec2::new(-5.0, -5.0), Vec2::new(5.0, 5.0));
        assert!(Geometry::from_parts(poly, wrong_hull).is_err());
    }
}
