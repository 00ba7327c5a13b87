use std::time::{Duration, Instant};

use ghcs_broadphase::BroadphaseGrid;
use ghcs_geom::raycast::ray_vs_convex_hull;
use ghcs_geom::{Geometry, Ray2D, RayHit2D, Vec2};

use crate::rayset::RaySet;

/// Selects whether [`QueryDriver::raycast_batch`] tests every pair or
/// skips pairs whose broadphase masks don't overlap. Both modes write
/// the same contract into `hits[i]`: last-writer-wins, not
/// closest-hit.
#[derive(Debug, Clone, Copy)]
pub enum RaycastMode<'a> {
    Exhaustive,
    Pruned(&'a BroadphaseGrid),
}

/// Runs batched and single-ray queries and tracks the wall-clock cost
/// of the last batch as a profile counter.
#[derive(Debug, Default)]
pub struct QueryDriver {
    last_batch_duration: Duration,
}

impl QueryDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_batch_duration(&self) -> Duration {
        self.last_batch_duration
    }

    /// For each `(ray, geometry)` pair — pruned by broadphase masks in
    /// [`RaycastMode::Pruned`] — runs the exact hull kernel and
    /// overwrites `hits[i]` on every pair that registers a hit.
    ///
    /// This is a deliberate contract, not an oversight: the batch
    /// reports *some* hit per ray, not the closest one. Callers that
    /// need the closest hit along a bounded segment should use
    /// [`QueryDriver::visual_ray`] instead.
    pub fn raycast_batch(&mut self, ray_set: &mut RaySet, geometries: &[Geometry], mode: RaycastMode) {
        let start = Instant::now();
        ray_set.clear_hits();

        for i in 0..ray_set.len() {
            let ray = ray_set.rays()[i];
            for geom in geometries {
                if let RaycastMode::Pruned(_) = mode {
                    let ray_mask = ray.mask.unwrap_or_default();
                    if !ray_mask.overlaps(&geom.mask) {
                        continue;
                    }
                }
                if let Some(hit) = ray_vs_convex_hull(&ray, geom.hull(), 0.0) {
                    ray_set.set_hit(i, hit);
                }
            }
        }

        self.last_batch_duration = start.elapsed();
    }

    /// The renderer's per-frame query: closest hit along the bounded
    /// segment `[ray.s, end]`, rejecting any hit whose impact point
    /// lies beyond `end`.
    #[must_use]
    pub fn visual_ray(&self, ray: &Ray2D, end: Vec2, geometries: &[Geometry]) -> Option<RayHit2D> {
        let segment_len = (end - ray.s).length();
        let mut best: Option<RayHit2D> = None;

        for geom in geometries {
            let Some(hit) = ray_vs_convex_hull(ray, geom.hull(), 0.0) else {
                continue;
            };
            if hit.t > segment_len {
                continue;
            }
            let better = match best {
                Some(b) => hit.t < b.t,
                None => true,
            };
            if better {
                best = Some(hit);
            }
        }

        best
    }
}
