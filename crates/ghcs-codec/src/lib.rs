//! The GHCS v1.0 scene file format: a 12-byte header, a sequence of
//! typed chunks, and a trailing table of contents.
//!
//! [`save`]/[`load`] operate on paths; [`save_to_writer`]/[`load_from_reader`]
//! operate on an in-memory buffer directly, which is what the round-trip
//! tests exercise without touching disk.

mod chunk;
mod error;
mod header;
mod scene;
mod toc;

pub use chunk::ChunkKind;
pub use error::CodecError;
pub use scene::Scene;

use std::path::Path;

use ghcs_io::Endian;

const MAJOR_VERSION: u8 = 1;
const MINOR_VERSION: u8 = 0;

pub fn save(scene: &Scene, path: impl AsRef<Path>, endian: Endian) -> Result<(), CodecError> {
    let bytes = save_to_writer(scene, endian)?;
    std::fs::write(path, bytes).map_err(CodecError::FileNotWritable)
}

pub fn load(path: impl AsRef<Path>) -> Result<Scene, CodecError> {
    let bytes = std::fs::read(path).map_err(CodecError::FileNotFound)?;
    load_from_reader(&bytes)
}

pub fn save_to_writer(scene: &Scene, endian: Endian) -> Result<Vec<u8>, CodecError> {
    scene::write_scene(scene, endian)
}

pub fn load_from_reader(data: &[u8]) -> Result<Scene, CodecError> {
    scene::read_scene(data)
}
