use ghcs_io::{ByteReader, ByteWriter};

use crate::chunk::ChunkInfo;
use crate::CodecError;

const TOC_MAGIC: [u8; 4] = [0x00, b'T', b'O', b'C'];
const CHUNK_MAGIC: [u8; 4] = [0x00, b'C', b'H', b'K'];

pub fn write_toc(w: &mut ByteWriter, entries: &[ChunkInfo]) -> Result<(), CodecError> {
    w.append_bytes(&TOC_MAGIC)?;
    let count: u8 = entries
        .len()
        .try_into()
        .expect("chunk count fits in a byte for any realistic scene");
    w.append_byte(count)?;
    for entry in entries {
        w.append_byte(entry.kind_tag)?;
        w.append_uint32(entry.offset)?;
        w.append_uint32(entry.payload_size)?;
    }
    Ok(())
}

/// Seeks to `toc_offset`, reads the TOC, and restores the reader's
/// prior position so chunk dispatch can proceed from where it left off.
pub fn read_toc(r: &mut ByteReader, toc_offset: u32) -> Result<Vec<ChunkInfo>, CodecError> {
    let saved = r.read_location();
    r.set_read_location(toc_offset as usize)?;

    let magic: [u8; 4] = r.parse_bytes(4)?.try_into().expect("exactly 4 bytes");
    if magic != TOC_MAGIC {
        return Err(CodecError::ChunkMalformed {
            chunk_type: 0xFF,
            reason: "TOC magic mismatch".to_string(),
        });
    }

    let count = r.parse_byte()?;
    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let kind_tag = r.parse_byte()?;
        let offset = r.parse_uint32()?;
        let payload_size = r.parse_uint32()?;
        entries.push(ChunkInfo {
            kind_tag,
            offset,
            payload_size,
        });
    }

    r.set_read_location(saved)?;
    Ok(entries)
}

/// Writes the 10-byte chunk prefix (own magic, type, endian tag, and
/// a placeholder payload size) and returns the placeholder's offset.
pub fn write_chunk_prefix(w: &mut ByteWriter, chunk_type: u8) -> Result<usize, CodecError> {
    w.append_bytes(&CHUNK_MAGIC)?;
    w.append_byte(chunk_type)?;
    w.append_byte(w.endian().to_tag())?;
    let size_location = w.total_size();
    w.append_uint32(0)?;
    Ok(size_location)
}

/// Seeks to an absolute chunk offset and verifies its prefix matches
/// the dispatched type, switching the reader's endian mode to the
/// chunk's own tag.
pub fn read_chunk_prefix(r: &mut ByteReader, offset: u32, expected_type: u8) -> Result<u32, CodecError> {
    r.set_read_location(offset as usize)?;
    let magic: [u8; 4] = r.parse_bytes(4)?.try_into().expect("exactly 4 bytes");
    if magic != CHUNK_MAGIC {
        return Err(CodecError::ChunkMalformed {
            chunk_type: expected_type,
            reason: "chunk magic mismatch".to_string(),
        });
    }
    let chunk_type = r.parse_byte()?;
    if chunk_type != expected_type {
        return Err(CodecError::ChunkMalformed {
            chunk_type: expected_type,
            reason: format!("dispatched as type {expected_type} but prefix says {chunk_type}"),
        });
    }
    let endian_tag = r.parse_byte()?;
    r.set_endian(ghcs_io::Endian::from_tag(endian_tag));
    let payload_size = r.parse_uint32()?;
    Ok(payload_size)
}
