use ghcs_broadphase::BroadphaseGrid;
use ghcs_geom::{Ray2D, RayHit2D, Vec2};
use rand::Rng;

/// Parallel `rays[K]`/`hits[K]` arrays, pre-allocated once per ray
/// count. `hits[i]` is only ever written by a batched raycast pass —
/// [`crate::QueryDriver::raycast_batch`] overwrites it on every
/// matching pair within a pass (last-writer-wins), not just the first.
#[derive(Debug, Clone, PartialEq)]
pub struct RaySet {
    rays: Vec<Ray2D>,
    hits: Vec<Option<RayHit2D>>,
}

impl RaySet {
    #[must_use]
    pub fn new(rays: Vec<Ray2D>) -> Self {
        let hits = vec![None; rays.len()];
        Self { rays, hits }
    }

    /// `count` rays with random origins inside `[world_min, world_max]`
    /// and uniformly random unit directions.
    pub fn randomized(count: usize, world_min: Vec2, world_max: Vec2, rng: &mut impl Rng) -> Self {
        let rays = (0..count)
            .map(|_| {
                let s = Vec2::new(
                    rng.gen_range(world_min.x..=world_max.x),
                    rng.gen_range(world_min.y..=world_max.y),
                );
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let v = Vec2::new(angle.cos(), angle.sin());
                Ray2D::new(s, v)
            })
            .collect();
        Self::new(rays)
    }

    #[must_use]
    pub fn rays(&self) -> &[Ray2D] {
        &self.rays
    }

    #[must_use]
    pub fn hits(&self) -> &[Option<RayHit2D>] {
        &self.hits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Recomputes and stores each ray's broadphase mask, clearing any
    /// stale hit from a previous grid.
    pub fn assign_masks(&mut self, grid: &BroadphaseGrid) {
        for ray in &mut self.rays {
            ray.mask = Some(grid.mask_for_ray(ray));
        }
        self.hits.fill(None);
    }

    pub(crate) fn set_hit(&mut self, i: usize, hit: RayHit2D) {
        self.hits[i] = Some(hit);
    }

    pub(crate) fn clear_hits(&mut self) {
        self.hits.fill(None);
    }
}
