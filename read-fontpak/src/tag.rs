use std::fmt::{self, Debug, Display, Formatter};

use crate::read::{sealed, Scalar};

/// A 4-byte section tag.
///
/// Tags identify sections of a fontpak file. They are conventionally
/// printable ASCII, but we do not enforce that: an unexpected tag is
/// something we want to report, so it has to be representable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Construct a `Tag` from raw bytes.
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }

    /// Create a tag from raw big-endian bytes, as encountered during parsing.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Return the memory representation of this tag.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }
}

impl sealed::Sealed for Tag {}

impl Scalar for Tag {
    const RAW_BYTE_LEN: usize = 4;

    fn read(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
        Some(Tag(raw))
    }

    fn write_be(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8; 4]> for Tag {
    fn eq(&self, other: &[u8; 4]) -> bool {
        &self.0 == other
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02X}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{self}\")")
    }
}
