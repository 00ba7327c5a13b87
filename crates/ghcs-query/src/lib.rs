//! Batched raycast query driver and a host-facing engine facade.
//!
//! [`QueryDriver::raycast_batch`] runs every ray against every hull
//! (optionally pruned by a [`ghcs_broadphase::BroadphaseGrid`]) and
//! reports wall-clock time as a profile counter.
//! [`QueryDriver::visual_ray`] is the per-frame single-ray query the
//! renderer uses, which always reports the closest hit along a
//! bounded segment.
//! [`Engine`] owns the scene, grid, and ray set for a host's frame loop.

mod driver;
mod engine;
mod error;
mod rayset;

pub use driver::{QueryDriver, RaycastMode};
pub use engine::Engine;
pub use error::EngineError;
pub use rayset::RaySet;
