/// Errors surfaced by the [`crate::Engine`] facade.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Codec(#[from] ghcs_codec::CodecError),
    #[error(transparent)]
    Broadphase(#[from] ghcs_broadphase::BroadphaseError),
}
