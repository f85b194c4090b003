//! The texture section: atlas header and glyph bitmap.

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// Byte length of the fixed atlas header.
pub const ATLAS_HEADER_LEN: usize = 32;

/// The sample value marking a foreground (inked) pixel.
///
/// Any other byte value is background.
pub const FOREGROUND: u8 = 0xFF;

/// The fixed 32-byte header of the texture section.
///
/// There is no expected value for `magic`; only the structural length is
/// validated. `data_size` is carried as metadata, but the bitmap that
/// follows is always `width * height` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasHeader {
    pub magic: [u8; 3],
    pub width: u16,
    pub height: u16,
    pub data_size: u32,
}

impl<'a> FontRead<'a> for AtlasHeader {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        if data.len() != ATLAS_HEADER_LEN {
            return Err(ReadError::MalformedRecord {
                expected: ATLAS_HEADER_LEN,
                actual: data.len(),
            });
        }
        let mut cursor = data.cursor();
        let magic_bytes = cursor.read_array(3)?;
        let magic = [magic_bytes[0], magic_bytes[1], magic_bytes[2]];
        cursor.skip(5); // reserved
        let width = cursor.read::<u16>()?;
        let height = cursor.read::<u16>()?;
        cursor.skip(8); // reserved
        let data_size = cursor.read::<u32>()?;
        cursor.skip(8); // reserved
        cursor.finish()?;
        Ok(AtlasHeader {
            magic,
            width,
            height,
            data_size,
        })
    }
}

/// A decoded glyph atlas: header plus the raw monochrome bitmap.
///
/// Pixels are row-major with no row padding, one byte per sample,
/// [`FOREGROUND`] marking ink. The pixel data borrows from the source
/// buffer and is never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Atlas<'a> {
    header: AtlasHeader,
    data: &'a [u8],
}

impl<'a> Atlas<'a> {
    /// Construct an atlas from an already-parsed header and its pixels.
    ///
    /// `data` must be exactly `width * height` bytes.
    pub fn new(header: AtlasHeader, data: &'a [u8]) -> Result<Self, ReadError> {
        let needed = header.width as usize * header.height as usize;
        if data.len() != needed {
            return Err(ReadError::TruncatedBitmap {
                needed,
                available: data.len(),
            });
        }
        Ok(Atlas { header, data })
    }

    /// Read the 32-byte atlas header and the `width * height` byte bitmap
    /// that follows it from the front of `data`.
    pub fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let header_data = data.slice(..ATLAS_HEADER_LEN).ok_or(ReadError::TruncatedSection {
            needed: ATLAS_HEADER_LEN,
            available: data.len(),
        })?;
        let header = AtlasHeader::read(header_data)?;
        let needed = header.width as usize * header.height as usize;
        let pixels = data
            .slice(ATLAS_HEADER_LEN..ATLAS_HEADER_LEN + needed)
            .ok_or(ReadError::TruncatedBitmap {
                needed,
                available: data.len() - ATLAS_HEADER_LEN,
            })?;
        Ok(Atlas {
            header,
            data: pixels.as_bytes(),
        })
    }

    pub fn header(&self) -> &AtlasHeader {
        &self.header
    }

    /// Width of the atlas in pixels.
    pub fn width(&self) -> u16 {
        self.header.width
    }

    /// Height of the atlas in pixels.
    pub fn height(&self) -> u16 {
        self.header.height
    }

    /// The raw row-major pixel bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The sample at (x, y), or `None` outside the atlas.
    pub fn pixel(&self, x: u16, y: u16) -> Option<u8> {
        (x < self.width() && y < self.height())
            .then(|| self.data[y as usize * self.width() as usize + x as usize])
    }

    /// `true` if the sample at (x, y) is the foreground marker.
    pub fn is_foreground(&self, x: u16, y: u16) -> bool {
        self.pixel(x, y) == Some(FOREGROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::BeBuffer;

    fn atlas_header_bytes(width: u16, height: u16, data_size: u32) -> BeBuffer {
        BeBuffer::new()
            .extend(*b"TEX") // magic
            .extend([0u8; 5]) // reserved
            .push(width)
            .push(height)
            .extend([0u8; 8]) // reserved
            .push(data_size)
            .extend([0u8; 8]) // reserved
    }

    #[test]
    fn read_atlas_header() {
        let bytes = atlas_header_bytes(128, 64, 8192).to_vec();
        let header = AtlasHeader::read(FontData::new(&bytes)).unwrap();
        assert_eq!(&header.magic, b"TEX");
        assert_eq!(header.width, 128);
        assert_eq!(header.height, 64);
        assert_eq!(header.data_size, 8192);
    }

    #[test]
    fn read_atlas_with_bitmap() {
        let bytes = atlas_header_bytes(4, 2, 8)
            .extend([0x00, 0xFF, 0x00, 0xFF, 0xFF, 0x00, 0xFF, 0x00])
            .to_vec();
        let atlas = Atlas::read(FontData::new(&bytes)).unwrap();
        assert_eq!(atlas.data().len(), 8);
        assert!(!atlas.is_foreground(0, 0));
        assert!(atlas.is_foreground(1, 0));
        assert!(atlas.is_foreground(0, 1));
        assert_eq!(atlas.pixel(3, 1), Some(0x00));
        // outside the atlas
        assert_eq!(atlas.pixel(4, 0), None);
        assert!(!atlas.is_foreground(0, 2));
    }

    #[test]
    fn short_bitmap_is_truncated() {
        let bytes = atlas_header_bytes(4, 2, 8).extend([0xFFu8; 5]).to_vec();
        assert_eq!(
            Atlas::read(FontData::new(&bytes)).unwrap_err(),
            ReadError::TruncatedBitmap {
                needed: 8,
                available: 5
            }
        );
    }

    #[test]
    fn short_header_is_truncated() {
        let bytes = [0u8; 16];
        assert_eq!(
            Atlas::read(FontData::new(&bytes)).unwrap_err(),
            ReadError::TruncatedSection {
                needed: ATLAS_HEADER_LEN,
                available: 16
            }
        );
    }
}
