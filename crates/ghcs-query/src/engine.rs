use std::path::Path;
use std::time::Duration;

use ghcs_broadphase::BroadphaseGrid;
use ghcs_codec::Scene;
use ghcs_geom::{Ray2D, RayHit2D, Vec2};
use ghcs_io::Endian;
use rand::Rng;

use crate::driver::{QueryDriver, RaycastMode};
use crate::error::EngineError;
use crate::rayset::RaySet;

/// Owns the scene, its broadphase grid, and the active ray set for a
/// host's frame loop. The only long-lived mutable state in the crate —
/// everything else (kernels, codec, grid math) is a pure function.
pub struct Engine {
    scene: Scene,
    grid: BroadphaseGrid,
    rays: RaySet,
    driver: QueryDriver,
}

impl Engine {
    /// Builds an engine around an already-assembled scene, deriving
    /// its grid and assigning every geometry's mask immediately.
    pub fn new(scene: Scene) -> Result<Self, EngineError> {
        let grid = BroadphaseGrid::new(scene.world_min, scene.world_max)?;
        let mut scene = scene;
        for geom in &mut scene.geometries {
            geom.mask = grid.mask_for_polygon(geom.polygon());
        }
        Ok(Self {
            scene,
            grid,
            rays: RaySet::new(Vec::new()),
            driver: QueryDriver::new(),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let scene = ghcs_codec::load(path)?;
        Self::new(scene)
    }

    pub fn save(&self, path: impl AsRef<Path>, endian: Endian) -> Result<(), EngineError> {
        ghcs_codec::save(&self.scene, path, endian).map_err(EngineError::from)
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn grid(&self) -> &BroadphaseGrid {
        &self.grid
    }

    #[must_use]
    pub fn rays(&self) -> &RaySet {
        &self.rays
    }

    /// Rebuilds the grid from the scene's current world bounds and
    /// recomputes every geometry's and ray's mask against it.
    pub fn rebuild_grid(&mut self) -> Result<(), EngineError> {
        self.grid = BroadphaseGrid::new(self.scene.world_min, self.scene.world_max)?;
        for geom in &mut self.scene.geometries {
            geom.mask = self.grid.mask_for_polygon(geom.polygon());
        }
        self.rays.assign_masks(&self.grid);
        Ok(())
    }

    /// Replaces the active ray set with `count` random rays over the
    /// world bounds and assigns their masks against the current grid.
    pub fn rebuild_rays(&mut self, count: usize, rng: &mut impl Rng) {
        self.rays = RaySet::randomized(count, self.scene.world_min, self.scene.world_max, rng);
        self.rays.assign_masks(&self.grid);
    }

    pub fn raycast_batch(&mut self, pruned: bool) -> Duration {
        let mode = if pruned {
            RaycastMode::Pruned(&self.grid)
        } else {
            RaycastMode::Exhaustive
        };
        self.driver.raycast_batch(&mut self.rays, &self.scene.geometries, mode);
        self.driver.last_batch_duration()
    }

    #[must_use]
    pub fn visual_ray(&self, ray: &Ray2D, end: Vec2) -> Option<RayHit2D> {
        self.driver.visual_ray(ray, end, &self.scene.geometries)
    }
}
