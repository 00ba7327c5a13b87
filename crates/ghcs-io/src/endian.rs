/// Byte order to use for subsequent multi-byte scalar reads/writes.
///
/// `Native` defers to the host's own endianness, matching the file
/// format's endian tag `0` fallback (an unrecognized tag is treated
/// as native rather than rejected, per the codec's forward-compat
/// policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Native,
    Little,
    Big,
}

impl Endian {
    /// Maps the on-disk endian tag byte (1 = little, 2 = big) to a
    /// mode, falling back to `Native` for anything else.
    #[must_use]
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            1 => Endian::Little,
            2 => Endian::Big,
            _ => Endian::Native,
        }
    }

    /// The on-disk tag byte this mode would be written as, with
    /// `Native` resolved to whatever the host platform actually is.
    #[must_use]
    pub fn to_tag(self) -> u8 {
        match self.resolve() {
            Endian::Little => 1,
            Endian::Big => 2,
            Endian::Native => unreachable!("resolve() never returns Native"),
        }
    }

    fn resolve(self) -> Self {
        match self {
            Endian::Native => {
                if cfg!(target_endian = "big") {
                    Endian::Big
                } else {
                    Endian::Little
                }
            }
            other => other,
        }
    }

    #[must_use]
    pub fn is_big(self) -> bool {
        matches!(self.resolve(), Endian::Big)
    }
}
