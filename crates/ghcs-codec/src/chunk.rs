/// The four defined chunk types. `Unknown` preserves forward
/// compatibility: a reader that doesn't recognize a type skips its
/// payload rather than failing the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    SceneInfo,
    ConvexPolys,
    ConvexHulls,
    Reserved,
    Unknown(u8),
}

impl ChunkKind {
    #[must_use]
    pub fn tag(self) -> u8 {
        match self {
            ChunkKind::SceneInfo => 0,
            ChunkKind::ConvexPolys => 1,
            ChunkKind::ConvexHulls => 2,
            ChunkKind::Reserved => 3,
            ChunkKind::Unknown(tag) => tag,
        }
    }
}

impl From<u8> for ChunkKind {
    fn from(tag: u8) -> Self {
        match tag {
            0 => ChunkKind::SceneInfo,
            1 => ChunkKind::ConvexPolys,
            2 => ChunkKind::ConvexHulls,
            3 => ChunkKind::Reserved,
            other => ChunkKind::Unknown(other),
        }
    }
}

/// One table-of-contents entry: a chunk's type and where to find it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkInfo {
    pub kind_tag: u8,
    pub offset: u32,
    pub payload_size: u32,
}
