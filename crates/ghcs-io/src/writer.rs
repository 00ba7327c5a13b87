use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian, WriteBytesExt};
use glam::{IVec2, Vec2, Vec3};

use crate::reader::Rgba;
use crate::Endian;

#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("capacity exceeded: {requested} byte(s) requested, {capacity} byte cap")]
    Capacity { requested: usize, capacity: usize },
    #[error("backpatch offset {offset} + {len} exceeds buffer size {size}")]
    BackpatchOutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },
    #[error("string too long for {prefix}-byte length prefix: {len} bytes")]
    StringTooLong { prefix: &'static str, len: usize },
}

pub type WriterResult<T> = Result<T, WriterError>;

/// Growable byte buffer with endian-aware scalar writes and absolute
/// backpatching.
///
/// `write_uint32_at` is the operation the GHCS writer leans on: the
/// header's TOC offset and every chunk's payload size are written as
/// 0 placeholders, remembered, and overwritten once their true value
/// is known.
pub struct ByteWriter {
    data: Vec<u8>,
    endian: Endian,
    initial_size: usize,
    capacity: Option<usize>,
}

impl ByteWriter {
    #[must_use]
    pub fn new(endian: Endian) -> Self {
        Self {
            data: Vec::new(),
            endian,
            initial_size: 0,
            capacity: None,
        }
    }

    /// Continues appending to an existing buffer (`initial_size` is
    /// recorded as the buffer's current length).
    #[must_use]
    pub fn with_buffer(data: Vec<u8>, endian: Endian) -> Self {
        let initial_size = data.len();
        Self {
            data,
            endian,
            initial_size,
            capacity: None,
        }
    }

    /// Caps the buffer to at most `capacity` bytes; writes beyond it
    /// fail with [`WriterError::Capacity`] instead of growing.
    #[must_use]
    pub fn with_capacity_limit(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
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
        self.data.len()
    }

    #[must_use]
    pub fn appended_size(&self) -> usize {
        self.data.len() - self.initial_size
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn check_capacity(&self, additional: usize) -> WriterResult<()> {
        if let Some(cap) = self.capacity {
            if self.data.len() + additional > cap {
                return Err(WriterError::Capacity {
                    requested: additional,
                    capacity: cap,
                });
            }
        }
        Ok(())
    }

    pub fn append_byte(&mut self, b: u8) -> WriterResult<()> {
        self.check_capacity(1)?;
        self.data.write_u8(b).expect("Vec<u8> writes never fail");
        Ok(())
    }

    pub fn append_char(&mut self, c: u8) -> WriterResult<()> {
        self.append_byte(c)
    }

    pub fn append_bool(&mut self, b: bool) -> WriterResult<()> {
        self.append_byte(u8::from(b))
    }

    pub fn append_int16(&mut self, v: i16) -> WriterResult<()> {
        self.check_capacity(2)?;
        match self.endian {
            Endian::Little => self.data.write_i16::<LittleEndian>(v),
            Endian::Big => self.data.write_i16::<BigEndian>(v),
            Endian::Native => self.data.write_i16::<NativeEndian>(v),
        }
        .expect("Vec<u8> writes never fail");
        Ok(())
    }

    pub fn append_uint16(&mut self, v: u16) -> WriterResult<()> {
        self.check_capacity(2)?;
        match self.endian {
            Endian::Little => self.data.write_u16::<LittleEndian>(v),
            Endian::Big => self.data.write_u16::<BigEndian>(v),
            Endian::Native => self.data.write_u16::<NativeEndian>(v),
        }
        .expect("Vec<u8> writes never fail");
        Ok(())
    }

    pub fn append_int32(&mut self, v: i32) -> WriterResult<()> {
        self.check_capacity(4)?;
        match self.endian {
            Endian::Little => self.data.write_i32::<LittleEndian>(v),
            Endian::Big => self.data.write_i32::<BigEndian>(v),
            Endian::Native => self.data.write_i32::<NativeEndian>(v),
        }
        .expect("Vec<u8> writes never fail");
        Ok(())
    }

    pub fn append_uint32(&mut self, v: u32) -> WriterResult<()> {
        self.check_capacity(4)?;
        match self.endian {
            Endian::Little => self.data.write_u32::<LittleEndian>(v),
            Endian::Big => self.data.write_u32::<BigEndian>(v),
            Endian::Native => self.data.write_u32::<NativeEndian>(v),
        }
        .expect("Vec<u8> writes never fail");
        Ok(())
    }

    pub fn append_float(&mut self, v: f32) -> WriterResult<()> {
        self.check_capacity(4)?;
        match self.endian {
            Endian::Little => self.data.write_f32::<LittleEndian>(v),
            Endian::Big => self.data.write_f32::<BigEndian>(v),
            Endian::Native => self.data.write_f32::<NativeEndian>(v),
        }
        .expect("Vec<u8> writes never fail");
        Ok(())
    }

    pub fn append_double(&mut self, v: f64) -> WriterResult<()> {
        self.check_capacity(8)?;
        match self.endian {
            Endian::Little => self.data.write_f64::<LittleEndian>(v),
            Endian::Big => self.data.write_f64::<BigEndian>(v),
            Endian::Native => self.data.write_f64::<NativeEndian>(v),
        }
        .expect("Vec<u8> writes never fail");
        Ok(())
    }

    /// Raw bytes, verbatim (never byte-swapped).
    pub fn append_bytes(&mut self, bytes: &[u8]) -> WriterResult<()> {
        self.check_capacity(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    pub fn append_zeros(&mut self, n: usize) -> WriterResult<()> {
        self.check_capacity(n)?;
        self.data.resize(self.data.len() + n, 0);
        Ok(())
    }

    /// Appends `n` unspecified bytes and returns a mutable view into
    /// them, for the caller to fill in-place.
    pub fn append_uninitialized(&mut self, n: usize) -> WriterResult<&mut [u8]> {
        self.check_capacity(n)?;
        let start = self.data.len();
        self.data.resize(start + n, 0);
        Ok(&mut self.data[start..])
    }

    pub fn append_string_zero_terminated(&mut self, s: &str) -> WriterResult<()> {
        self.append_bytes(s.as_bytes())?;
        self.append_byte(0)
    }

    pub fn append_string_after_u32_length(&mut self, s: &str) -> WriterResult<()> {
        let len: u32 = s
            .len()
            .try_into()
            .map_err(|_| WriterError::StringTooLong { prefix: "u32", len: s.len() })?;
        self.append_uint32(len)?;
        self.append_bytes(s.as_bytes())
    }

    pub fn append_string_after_u8_length(&mut self, s: &str) -> WriterResult<()> {
        let len: u8 = s
            .len()
            .try_into()
            .map_err(|_| WriterError::StringTooLong { prefix: "u8", len: s.len() })?;
        self.append_byte(len)?;
        self.append_bytes(s.as_bytes())
    }

    pub fn append_rgba(&mut self, c: Rgba) -> WriterResult<()> {
        self.append_bytes(&[c.r, c.g, c.b, c.a])
    }

    /// Writes only R,G,B; alpha is dropped.
    pub fn append_rgb(&mut self, c: Rgba) -> WriterResult<()> {
        self.append_bytes(&[c.r, c.g, c.b])
    }

    pub fn append_vec2(&mut self, v: Vec2) -> WriterResult<()> {
        self.append_float(v.x)?;
        self.append_float(v.y)
    }

    pub fn append_vec3(&mut self, v: Vec3) -> WriterResult<()> {
        self.append_float(v.x)?;
        self.append_float(v.y)?;
        self.append_float(v.z)
    }

    pub fn append_intvec2(&mut self, v: IVec2) -> WriterResult<()> {
        self.append_int32(v.x)?;
        self.append_int32(v.y)
    }

    /// Endian-correct overwrite of 4 bytes at an absolute offset,
    /// using the writer's *current* endian mode — not the mode that
    /// was active when those bytes were first written. Callers that
    /// backpatch across an endian-mode switch (the forced-little-endian
    /// `ConvexPolys` chunk) must restore the mode before calling this.
    pub fn write_uint32_at(&mut self, offset: usize, value: u32) -> WriterResult<()> {
        let mut bytes = [0u8; 4];
        match self.endian {
            Endian::Little => LittleEndian::write_u32(&mut bytes, value),
            Endian::Big => BigEndian::write_u32(&mut bytes, value),
            Endian::Native => NativeEndian::write_u32(&mut bytes, value),
        }
        if offset + bytes.len() > self.data.len() {
            return Err(WriterError::BackpatchOutOfBounds {
                offset,
                len: bytes.len(),
                size: self.data.len(),
            });
        }
        self.data[offset..offset + bytes.len()].copy_from_slice(&bytes);
        Ok(())
    }
}
