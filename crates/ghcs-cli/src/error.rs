/// Errors the CLI itself can produce, beyond what the codec/query
/// crates already report.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] ghcs_query::EngineError),
    #[error(transparent)]
    Codec(#[from] ghcs_codec::CodecError),
    #[error(transparent)]
    Geom(#[from] ghcs_geom::GeomError),
    #[error("world dimensions must be positive, got {width}x{height}")]
    InvalidWorldDimensions { width: f32, height: f32 },
}

/// Process exit codes per the GHCS save/load contract: success is 0;
/// every failure kind gets its own stable code so a host scripting
/// around this binary can branch on it without parsing stderr.
impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Engine(ghcs_query::EngineError::Codec(e)) | CliError::Codec(e) => codec_exit_code(e),
            CliError::Engine(ghcs_query::EngineError::Broadphase(_)) => 10,
            CliError::Geom(_) => 11,
            CliError::InvalidWorldDimensions { .. } => 12,
        }
    }
}

fn codec_exit_code(e: &ghcs_codec::CodecError) -> u8 {
    use ghcs_codec::CodecError;
    match e {
        CodecError::FileNotFound(_) => 2,
        CodecError::FileNotWritable(_) => 3,
        CodecError::InvalidMagic => 4,
        CodecError::UnsupportedMajorVersion { .. } => 5,
        CodecError::Truncated(_) => 6,
        CodecError::ChunkMalformed { .. } => 7,
        CodecError::Serialization(_) => 8,
    }
}
