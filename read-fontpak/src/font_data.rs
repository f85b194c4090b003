//! raw fontpak bytes

use std::ops::RangeBounds;

use crate::read::{ReadError, Scalar};

/// A reference to raw binary fontpak data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// A cursor for sequential reads during parsing.
///
/// Reserved and padding regions are consumed with [`skip`](Cursor::skip) and
/// never exposed to callers.
pub(crate) struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    ///
    /// This is handled for you when loading data from disk, but may be
    /// useful in tests.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Return the data from `pos` to the end, or `None` if out of bounds.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData { bytes })
    }

    /// Return the data in `range`, or `None` if out of bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(|bytes| FontData { bytes })
    }

    /// Read a big-endian scalar out of the buffer at `offset`.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        offset
            .checked_add(T::RAW_BYTE_LEN)
            .and_then(|end| self.bytes.get(offset..end))
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    pub(crate) fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    pub(crate) fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos += T::RAW_BYTE_LEN;
        temp
    }

    /// Consume `n` reserved or padding bytes.
    pub(crate) fn skip(&mut self, n: usize) {
        self.pos += n;
    }

    pub(crate) fn read_array(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        let bytes = self
            .pos
            .checked_add(len)
            .and_then(|end| self.data.bytes.get(self.pos..end))
            .ok_or(ReadError::OutOfBounds)?;
        self.pos += len;
        Ok(bytes)
    }

    /// Ensure every consumed byte, including skips, was in bounds.
    pub(crate) fn finish(self) -> Result<(), ReadError> {
        if self.pos > self.data.len() {
            return Err(ReadError::OutOfBounds);
        }
        Ok(())
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_reads_are_big_endian() {
        let data = FontData::new(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(data.read_at::<u8>(0), Ok(0x01));
        assert_eq!(data.read_at::<u16>(0), Ok(0x0102));
        assert_eq!(data.read_at::<u16>(2), Ok(0x0304));
        assert_eq!(data.read_at::<u32>(0), Ok(0x01020304));
    }

    #[test]
    fn out_of_bounds_read() {
        let data = FontData::new(&[0x01, 0x02]);
        assert_eq!(data.read_at::<u32>(0), Err(ReadError::OutOfBounds));
        assert_eq!(data.read_at::<u8>(2), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn cursor_skips_are_checked_at_finish() {
        let data = FontData::new(&[0u8; 4]);
        let mut cursor = data.cursor();
        cursor.skip(3);
        assert_eq!(cursor.read::<u8>(), Ok(0));
        assert!(cursor.finish().is_ok());

        let mut cursor = data.cursor();
        cursor.skip(5);
        assert_eq!(cursor.finish(), Err(ReadError::OutOfBounds));
    }
}
