/// Errors constructing or querying a [`crate::BroadphaseGrid`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BroadphaseError {
    #[error("world bounds are degenerate: min {min:?}, max {max:?}")]
    DegenerateWorldBounds { min: glam::Vec2, max: glam::Vec2 },
}
