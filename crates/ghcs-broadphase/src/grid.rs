use glam::Vec2;

use ghcs_geom::raycast::ray_vs_convex_hull;
use ghcs_geom::{BroadphaseMask, ConvexHull2D, ConvexPoly2D, Ray2D};

use crate::BroadphaseError;

/// Grid resolution along each axis. Fixed per the sandbox's format —
/// a mask pair is two 32-bit words, one bit per cell per axis, so this
/// can never change without widening the wire representation.
pub const GRID_RESOLUTION: u32 = 32;

/// A single lattice cell: its world-space bounds and the one-hot mask
/// pair identifying it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub mins: Vec2,
    pub maxs: Vec2,
    pub mask: BroadphaseMask,
}

/// A 32x32 world-aligned lattice over a fixed AABB.
///
/// Built once per world-bounds assignment and immutable thereafter —
/// callers rebuild it (not mutate it) when the world's bounds change.
#[derive(Debug, Clone, PartialEq)]
pub struct BroadphaseGrid {
    world_min: Vec2,
    world_max: Vec2,
    cell_size: Vec2,
    world_hull: ConvexHull2D,
}

impl BroadphaseGrid {
    pub fn new(world_min: Vec2, world_max: Vec2) -> Result<Self, BroadphaseError> {
        let size = world_max - world_min;
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(BroadphaseError::DegenerateWorldBounds {
                min: world_min,
                max: world_max,
            });
        }
        let cell_size = size / GRID_RESOLUTION as f32;
        let world_hull = ConvexHull2D::from_aabb(world_min, world_max);
        Ok(Self {
            world_min,
            world_max,
            cell_size,
            world_hull,
        })
    }

    #[must_use]
    pub fn world_min(&self) -> Vec2 {
        self.world_min
    }

    #[must_use]
    pub fn world_max(&self) -> Vec2 {
        self.world_max
    }

    #[must_use]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// The cell at lattice coordinates `(cx, cy)`, each in `[0, 32)`.
    #[must_use]
    pub fn cell(&self, cx: u32, cy: u32) -> Cell {
        let mins = Vec2::new(
            self.world_min.x + cx as f32 * self.cell_size.x,
            self.world_min.y + cy as f32 * self.cell_size.y,
        );
        let maxs = mins + self.cell_size;
        Cell {
            mins,
            maxs,
            mask: BroadphaseMask::new(1 << cx, 1 << cy),
        }
    }

    /// Mask for an AABB, clamped into range and inclusive on both the
    /// lower and upper cell boundary.
    ///
    /// Subtracts the world origin before dividing by cell size — the
    /// original implementation this format is modeled on divided raw
    /// world coordinates by cell size directly, which only produced
    /// correct results when the world's minimum was the origin.
    #[must_use]
    pub fn mask_for_aabb(&self, mins: Vec2, maxs: Vec2) -> BroadphaseMask {
        let cx_lo = self.cell_index(mins.x - self.world_min.x, self.cell_size.x);
        let cx_hi = self.cell_index(maxs.x - self.world_min.x, self.cell_size.x);
        let cy_lo = self.cell_index(mins.y - self.world_min.y, self.cell_size.y);
        let cy_hi = self.cell_index(maxs.y - self.world_min.y, self.cell_size.y);

        let mut x_mask = 0u32;
        for i in cx_lo..=cx_hi {
            x_mask |= 1 << i;
        }
        let mut y_mask = 0u32;
        for i in cy_lo..=cy_hi {
            y_mask |= 1 << i;
        }
        BroadphaseMask::new(x_mask, y_mask)
    }

    fn cell_index(&self, offset: f32, delta: f32) -> u32 {
        let raw = (offset / delta).floor();
        raw.clamp(0.0, (GRID_RESOLUTION - 1) as f32) as u32
    }

    #[must_use]
    pub fn mask_for_polygon(&self, polygon: &ConvexPoly2D) -> BroadphaseMask {
        let (mins, maxs) = polygon.aabb();
        self.mask_for_aabb(mins, maxs)
    }

    /// Clips the semi-infinite ray against the world bounds (treated
    /// as a four-plane convex hull) and masks the bounding box of the
    /// resulting segment. A ray that never enters the world gets an
    /// empty mask.
    #[must_use]
    pub fn mask_for_ray(&self, ray: &Ray2D) -> BroadphaseMask {
        let Some(hit) = ray_vs_convex_hull(ray, &self.world_hull, 0.0) else {
            return BroadphaseMask::EMPTY;
        };
        let end = hit.point;
        let mins = ray.s.min(end);
        let maxs = ray.s.max(end);
        self.mask_for_aabb(mins, maxs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_bounds() {
        let err = BroadphaseGrid::new(Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)).unwrap_err();
        assert!(matches!(err, BroadphaseError::DegenerateWorldBounds { .. }));
    }

    #[test]
    fn cell_zero_zero_sits_at_world_min() {
        let grid = BroadphaseGrid::new(Vec2::ZERO, Vec2::new(320.0, 320.0)).unwrap();
        let cell = grid.cell(0, 0);
        assert_eq!(cell.mins, Vec2::ZERO);
        assert_eq!(cell.mask, BroadphaseMask::new(1, 1));
    }

    #[test]
    fn aabb_on_cell_boundary_sets_both_bits() {
        // World is 320x320 split into 32 cells of size 10; a boundary
        // exactly at x=100 sits between cell 9 (ends at 100) and cell
        // 10 (starts at 100) and must set both bits.
        let grid = BroadphaseGrid::new(Vec2::ZERO, Vec2::new(320.0, 320.0)).unwrap();
        let mask = grid.mask_for_aabb(Vec2::new(90.0, 0.0), Vec2::new(100.0, 10.0));
        assert_ne!(mask.x & (1 << 9), 0);
        assert_ne!(mask.x & (1 << 10), 0);
    }

    #[test]
    fn mask_respects_nonzero_world_origin() {
        // Regression: the world-min subtraction must be applied, or a
        // shape near a shifted origin maps to the wrong cell entirely.
        let grid = BroadphaseGrid::new(Vec2::new(1000.0, 1000.0), Vec2::new(1320.0, 1320.0)).unwrap();
        let mask = grid.mask_for_aabb(Vec2::new(1000.0, 1000.0), Vec2::new(1010.0, 1010.0));
        assert_eq!(mask, BroadphaseMask::new(1, 1));
    }

    #[test]
    fn mask_for_ray_clips_to_world_and_is_empty_outside() {
        let grid = BroadphaseGrid::new(Vec2::ZERO, Vec2::new(320.0, 320.0)).unwrap();
        let ray = Ray2D::new(Vec2::new(-50.0, 160.0), Vec2::new(1.0, 0.0));
        let mask = grid.mask_for_ray(&ray);
        assert!(!mask.is_empty());

        let away = Ray2D::new(Vec2::new(-50.0, 160.0), Vec2::new(-1.0, 0.0));
        assert!(grid.mask_for_ray(&away).is_empty());
    }

    #[test]
    fn broadphase_soundness_against_exact_kernel() {
        use ghcs_geom::ConvexHull2D as Hull;

        let grid = BroadphaseGrid::new(Vec2::ZERO, Vec2::new(300.0, 150.0)).unwrap();
        let poly = ConvexPoly2D::new(vec![
            Vec2::new(160.0, 40.0),
            Vec2::new(140.0, 60.0),
            Vec2::new(120.0, 40.0),
            Vec2::new(140.0, 20.0),
        ])
        .unwrap();
        let hull = Hull::from_polygon(&poly);
        let poly_mask = grid.mask_for_polygon(&poly);

        let ray = Ray2D::new(Vec2::new(0.0, 40.0), Vec2::new(1.0, 0.0));
        let ray_mask = grid.mask_for_ray(&ray);

        if ray_vs_convex_hull(&ray, &hull, 0.0).is_some() {
            assert!(poly_mask.overlaps(&ray_mask));
        }
    }
}
