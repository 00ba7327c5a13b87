use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, NativeEndian, ReadBytesExt};
use glam::{IVec2, Vec2, Vec3};

use crate::Endian;

#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("buffer underflow: requested {requested} byte(s), {remaining} remaining at offset {at}")]
    Underflow {
        requested: usize,
        remaining: usize,
        at: usize,
    },
    #[error("UTF-8 error - {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("seek to {requested} out of bounds (buffer is {size} byte(s))")]
    SeekOutOfBounds { requested: usize, size: usize },
}

pub type ReaderResult<T> = Result<T, ReaderError>;

/// A 4-channel 8-bit color, in file order (never byte-swapped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Borrows a byte slice and tracks an advancing read cursor over it.
///
/// Multi-byte scalars are read through `byteorder`'s [`ReadBytesExt`],
/// dispatched on the runtime [`Endian`] mode; `parse_bytes` hands back
/// a sub-slice borrowed from the same lifetime as the input.
pub struct ByteReader<'a> {
    cursor: Cursor<&'a [u8]>,
    endian: Endian,
}

impl<'a> ByteReader<'a> {
    #[must_use]
    pub fn new(data: &'a [u8], endian: Endian) -> Self {
        Self {
            cursor: Cursor::new(data),
            endian,
        }
    }

    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    #[must_use]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    #[must_use]
    pub fn total_size(&self) -> usize {
        self.cursor.get_ref().len()
    }

    #[must_use]
    pub fn remaining_size(&self) -> usize {
        self.total_size() - self.read_location()
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.read_location() >= self.total_size()
    }

    #[must_use]
    pub fn read_location(&self) -> usize {
        self.cursor.position() as usize
    }

    /// Absolute seek, used for out-of-order chunk access (TOC entries
    /// carry absolute offsets).
    pub fn set_read_location(&mut self, offset: usize) -> ReaderResult<()> {
        if offset > self.total_size() {
            return Err(ReaderError::SeekOutOfBounds {
                requested: offset,
                size: self.total_size(),
            });
        }
        self.cursor.set_position(offset as u64);
        Ok(())
    }

    fn ensure_available(&self, n: usize) -> ReaderResult<()> {
        if self.remaining_size() < n {
            return Err(ReaderError::Underflow {
                requested: n,
                remaining: self.remaining_size(),
                at: self.read_location(),
            });
        }
        Ok(())
    }

    /// `n` raw bytes, verbatim (never byte-swapped), borrowed from the
    /// reader's own lifetime.
    pub fn parse_bytes(&mut self, n: usize) -> ReaderResult<&'a [u8]> {
        self.ensure_available(n)?;
        let start = self.read_location();
        let data: &'a [u8] = *self.cursor.get_ref();
        self.cursor.set_position((start + n) as u64);
        Ok(&data[start..start + n])
    }

    pub fn parse_byte(&mut self) -> ReaderResult<u8> {
        self.ensure_available(1)?;
        Ok(self.cursor.read_u8().expect("ensure_available checked bounds"))
    }

    pub fn parse_char(&mut self) -> ReaderResult<u8> {
        self.parse_byte()
    }

    pub fn parse_bool(&mut self) -> ReaderResult<bool> {
        Ok(self.parse_byte()? != 0)
    }

    pub fn parse_int16(&mut self) -> ReaderResult<i16> {
        self.ensure_available(2)?;
        Ok(match self.endian {
            Endian::Little => self.cursor.read_i16::<LittleEndian>(),
            Endian::Big => self.cursor.read_i16::<BigEndian>(),
            Endian::Native => self.cursor.read_i16::<NativeEndian>(),
        }
        .expect("ensure_available checked bounds"))
    }

    pub fn parse_uint16(&mut self) -> ReaderResult<u16> {
        self.ensure_available(2)?;
        Ok(match self.endian {
            Endian::Little => self.cursor.read_u16::<LittleEndian>(),
            Endian::Big => self.cursor.read_u16::<BigEndian>(),
            Endian::Native => self.cursor.read_u16::<NativeEndian>(),
        }
        .expect("ensure_available checked bounds"))
    }

    pub fn parse_int32(&mut self) -> ReaderResult<i32> {
        self.ensure_available(4)?;
        Ok(match self.endian {
            Endian::Little => self.cursor.read_i32::<LittleEndian>(),
            Endian::Big => self.cursor.read_i32::<BigEndian>(),
            Endian::Native => self.cursor.read_i32::<NativeEndian>(),
        }
        .expect("ensure_available checked bounds"))
    }

    pub fn parse_uint32(&mut self) -> ReaderResult<u32> {
        self.ensure_available(4)?;
        Ok(match self.endian {
            Endian::Little => self.cursor.read_u32::<LittleEndian>(),
            Endian::Big => self.cursor.read_u32::<BigEndian>(),
            Endian::Native => self.cursor.read_u32::<NativeEndian>(),
        }
        .expect("ensure_available checked bounds"))
    }

    pub fn parse_float(&mut self) -> ReaderResult<f32> {
        self.ensure_available(4)?;
        Ok(match self.endian {
            Endian::Little => self.cursor.read_f32::<LittleEndian>(),
            Endian::Big => self.cursor.read_f32::<BigEndian>(),
            Endian::Native => self.cursor.read_f32::<NativeEndian>(),
        }
        .expect("ensure_available checked bounds"))
    }

    pub fn parse_double(&mut self) -> ReaderResult<f64> {
        self.ensure_available(8)?;
        Ok(match self.endian {
            Endian::Little => self.cursor.read_f64::<LittleEndian>(),
            Endian::Big => self.cursor.read_f64::<BigEndian>(),
            Endian::Native => self.cursor.read_f64::<NativeEndian>(),
        }
        .expect("ensure_available checked bounds"))
    }

    /// Bytes up to (not including) a `0x00` terminator; the
    /// terminator itself is consumed.
    pub fn parse_string_zero_terminated(&mut self) -> ReaderResult<String> {
        let start = self.read_location();
        let data: &'a [u8] = *self.cursor.get_ref();
        let len = data[start..]
            .iter()
            .position(|&b| b == 0)
            .ok_or(ReaderError::Underflow {
                requested: 1,
                remaining: 0,
                at: start,
            })?;
        let s = std::str::from_utf8(&data[start..start + len])?.to_string();
        self.cursor.set_position((start + len + 1) as u64);
        Ok(s)
    }

    pub fn parse_string_after_u32_length(&mut self) -> ReaderResult<String> {
        let len = self.parse_uint32()? as usize;
        let bytes = self.parse_bytes(len)?;
        Ok(std::str::from_utf8(bytes)?.to_string())
    }

    pub fn parse_string_after_u8_length(&mut self) -> ReaderResult<String> {
        let len = self.parse_byte()? as usize;
        let bytes = self.parse_bytes(len)?;
        Ok(std::str::from_utf8(bytes)?.to_string())
    }

    /// 4 bytes R,G,B,A in file order; never byte-swapped.
    pub fn parse_rgba(&mut self) -> ReaderResult<Rgba> {
        let b = self.parse_bytes(4)?;
        Ok(Rgba {
            r: b[0],
            g: b[1],
            b: b[2],
            a: b[3],
        })
    }

    /// 3 bytes R,G,B; alpha defaults to 255.
    pub fn parse_rgb(&mut self) -> ReaderResult<Rgba> {
        let b = self.parse_bytes(3)?;
        Ok(Rgba {
            r: b[0],
            g: b[1],
            b: b[2],
            a: 255,
        })
    }

    pub fn parse_vec2(&mut self) -> ReaderResult<Vec2> {
        Ok(Vec2::new(self.parse_float()?, self.parse_float()?))
    }

    pub fn parse_vec3(&mut self) -> ReaderResult<Vec3> {
        Ok(Vec3::new(
            self.parse_float()?,
            self.parse_float()?,
            self.parse_float()?,
        ))
    }

    pub fn parse_intvec2(&mut self) -> ReaderResult<IVec2> {
        Ok(IVec2::new(self.parse_int32()?, self.parse_int32()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underflow_on_short_buffer() {
        let mut r = ByteReader::new(&[0x01], Endian::Little);
        assert!(r.parse_uint32().is_err());
    }

    #[test]
    fn zero_terminated_string_consumes_terminator() {
        let mut r = ByteReader::new(b"Hello\0rest", Endian::Little);
        assert_eq!(r.parse_string_zero_terminated().unwrap(), "Hello");
        assert_eq!(r.remaining_size(), 4);
    }

    #[test]
    fn seek_and_restore() {
        let data = [1u8, 2, 3, 4, 5];
        let mut r = ByteReader::new(&data, Endian::Little);
        r.set_read_location(3).unwrap();
        assert_eq!(r.parse_byte().unwrap(), 4);
        assert!(r.set_read_location(100).is_err());
    }

    #[test]
    fn rgb_defaults_alpha() {
        let mut r = ByteReader::new(&[10, 20, 30], Endian::Little);
        let c = r.parse_rgb().unwrap();
        assert_eq!(c, Rgba { r: 10, g: 20, b: 30, a: 255 });
    }
}
