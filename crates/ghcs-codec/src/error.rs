/// Errors from loading or saving a GHCS file.
///
/// Grouped by propagation policy: the first five are fatal to the
/// whole operation; `ChunkMalformed` is fatal only for a *known* chunk
/// type that fails validation (an unknown type is logged and skipped,
/// never surfaced as an error).
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("file not found: {0}")]
    FileNotFound(#[source] std::io::Error),
    #[error("file not writable: {0}")]
    FileNotWritable(#[source] std::io::Error),
    #[error("invalid magic bytes, this is not a GHCS file")]
    InvalidMagic,
    #[error("unsupported major version {found} (expected {expected})")]
    UnsupportedMajorVersion { found: u8, expected: u8 },
    #[error("truncated file: {0}")]
    Truncated(#[from] ghcs_io::ReaderError),
    #[error("malformed chunk (type {chunk_type}): {reason}")]
    ChunkMalformed { chunk_type: u8, reason: String },
    #[error("serialization error: {0}")]
    Serialization(#[from] ghcs_io::WriterError),
}
