use ghcs_io::{ByteReader, ByteWriter, Endian};

use crate::{CodecError, MAJOR_VERSION, MINOR_VERSION};

const MAGIC: [u8; 4] = *b"GHCS";

/// Writes the 12-byte header with a placeholder TOC offset and
/// returns the absolute offset of that placeholder, to be backpatched
/// once the TOC's real location is known.
pub fn write_header(w: &mut ByteWriter) -> Result<usize, CodecError> {
    w.append_bytes(&MAGIC)?;
    w.append_byte(0)?; // reserved
    w.append_byte(MAJOR_VERSION)?;
    w.append_byte(MINOR_VERSION)?;
    w.append_byte(w.endian().to_tag())?;
    let toc_offset_location = w.total_size();
    w.append_uint32(0)?; // placeholder, backpatched after the TOC is written
    Ok(toc_offset_location)
}

pub struct ParsedHeader {
    pub toc_offset: u32,
}

/// Verifies magic (fatal) and major version (fatal), warns on minor
/// version mismatch, and switches the reader's endian mode from the
/// header's tag before returning the TOC offset.
pub fn read_header(r: &mut ByteReader) -> Result<ParsedHeader, CodecError> {
    let magic: [u8; 4] = r.parse_bytes(4)?.try_into().expect("exactly 4 bytes");
    if magic != MAGIC {
        return Err(CodecError::InvalidMagic);
    }
    let _reserved = r.parse_byte()?;
    let major = r.parse_byte()?;
    let minor = r.parse_byte()?;
    if major != MAJOR_VERSION {
        return Err(CodecError::UnsupportedMajorVersion {
            found: major,
            expected: MAJOR_VERSION,
        });
    }
    if minor != MINOR_VERSION {
        log::warn!("GHCS minor version mismatch: file is {minor}, reader is {MINOR_VERSION}");
    }

    let endian_tag = r.parse_byte()?;
    r.set_endian(Endian::from_tag(endian_tag));
    if !matches!(endian_tag, 1 | 2) {
        log::warn!("unrecognized endian tag {endian_tag}, falling back to native");
    }

    let toc_offset = r.parse_uint32()?;
    Ok(ParsedHeader { toc_offset })
}
