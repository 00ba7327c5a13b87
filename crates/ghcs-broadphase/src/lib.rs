//! Fixed-resolution bit-field broadphase over a 2D world.
//!
//! A [`BroadphaseGrid`] divides a world AABB into a 32x32 lattice and
//! hands out [`BroadphaseMask`] pairs for polygons, AABBs, and rays.
//! The masks are a conservative filter only: [`BroadphaseMask::overlaps`]
//! passing is necessary, not sufficient, for a real intersection — the
//! caller still runs the exact kernel in `ghcs-geom::raycast`.

mod error;
mod grid;

pub use error::BroadphaseError;
pub use grid::{BroadphaseGrid, Cell, GRID_RESOLUTION};
