//! The font header and character table.

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};
use crate::tag::Tag;

/// The expected tag for the font section.
pub const FONT_MAGIC: Tag = Tag::new(b"FONT");

/// The one format version this crate knows how to read.
pub const FORMAT_VERSION: u8 = 1;

/// Byte length of the fixed font header.
pub const FONT_HEADER_LEN: usize = 24;

/// Byte length of one character record.
pub const CHAR_RECORD_LEN: usize = 16;

/// The fixed 24-byte header at the start of a fontpak file.
///
/// `section_size` bounds the character table plus its trailing padding;
/// [`FontPak::read`](crate::FontPak::read) computes and skips the trailing
/// byte count from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontHeader {
    pub magic: Tag,
    pub version: u8,
    pub char_count: u16,
    pub char_record_size: u16,
    pub section_size: u32,
    pub atlas_height: u16,
}

impl<'a> FontRead<'a> for FontHeader {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        if data.len() != FONT_HEADER_LEN {
            return Err(ReadError::MalformedRecord {
                expected: FONT_HEADER_LEN,
                actual: data.len(),
            });
        }
        let mut cursor = data.cursor();
        let magic = cursor.read::<Tag>()?;
        let version = cursor.read::<u8>()?;
        cursor.skip(7); // reserved
        let char_count = cursor.read::<u16>()?;
        let char_record_size = cursor.read::<u16>()?;
        let section_size = cursor.read::<u32>()?;
        cursor.skip(2); // reserved
        let atlas_height = cursor.read::<u16>()?;
        cursor.finish()?;
        Ok(FontHeader {
            magic,
            version,
            char_count,
            char_record_size,
            section_size,
            atlas_height,
        })
    }
}

impl FontHeader {
    /// Re-encode the header as it appears on disk, reserved bytes zeroed.
    pub fn to_be_bytes(&self) -> [u8; FONT_HEADER_LEN] {
        let mut raw = [0u8; FONT_HEADER_LEN];
        raw[0..4].copy_from_slice(&self.magic.to_be_bytes());
        raw[4] = self.version;
        raw[12..14].copy_from_slice(&self.char_count.to_be_bytes());
        raw[14..16].copy_from_slice(&self.char_record_size.to_be_bytes());
        raw[16..20].copy_from_slice(&self.section_size.to_be_bytes());
        raw[22..24].copy_from_slice(&self.atlas_height.to_be_bytes());
        raw
    }
}

/// One 16-byte entry in the character table.
///
/// `x`, `y`, `width` and `height` select this character's rectangle in the
/// glyph atlas; the remaining fields are layout metrics that pass through
/// to consumers unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterRecord {
    /// The raw codepoint byte as stored in the file. See
    /// [`character`](Self::character).
    pub codepoint: u8,
    pub x: u16,
    pub y: u16,
    pub width: u8,
    pub height: u8,
    pub baseline: u8,
    pub spacing_before: u16,
    pub spacing_after: u16,
}

impl<'a> FontRead<'a> for CharacterRecord {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        if data.len() != CHAR_RECORD_LEN {
            return Err(ReadError::MalformedRecord {
                expected: CHAR_RECORD_LEN,
                actual: data.len(),
            });
        }
        let mut cursor = data.cursor();
        cursor.skip(3); // reserved
        let codepoint = cursor.read::<u8>()?;
        let x = cursor.read::<u16>()?;
        let y = cursor.read::<u16>()?;
        let width = cursor.read::<u8>()?;
        let height = cursor.read::<u8>()?;
        let baseline = cursor.read::<u8>()?;
        let spacing_before = cursor.read::<u16>()?;
        let spacing_after = cursor.read::<u16>()?;
        cursor.skip(1); // reserved
        cursor.finish()?;
        Ok(CharacterRecord {
            codepoint,
            x,
            y,
            width,
            height,
            baseline,
            spacing_before,
            spacing_after,
        })
    }
}

impl CharacterRecord {
    /// The character identity of this record, if the codepoint byte is a
    /// complete UTF-8 sequence on its own.
    ///
    /// The format stores one byte per codepoint, which limits it to
    /// characters with a single-byte UTF-8 encoding, i.e. ASCII. Any other
    /// byte value yields `None`: the record is "unknown", retained in
    /// metadata but excluded from vector export.
    pub fn character(&self) -> Option<char> {
        self.codepoint.is_ascii().then_some(self.codepoint as char)
    }

    /// `true` if this record has no drawable pixels.
    ///
    /// Empty records are legitimate (spacing-only characters) and are never
    /// extracted from the atlas.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::BeBuffer;

    fn sample_header_bytes() -> Vec<u8> {
        BeBuffer::new()
            .push(FONT_MAGIC)
            .push(1u8) // version
            .extend([0u8; 7]) // reserved
            .push(2u16) // char_count
            .push(16u16) // char_record_size
            .push(56u32) // section_size
            .extend([0u8; 2]) // reserved
            .push(8u16) // atlas_height
            .to_vec()
    }

    #[test]
    fn read_font_header() {
        let bytes = sample_header_bytes();
        let header = FontHeader::read(FontData::new(&bytes)).unwrap();
        assert_eq!(header.magic, FONT_MAGIC);
        assert_eq!(header.version, 1);
        assert_eq!(header.char_count, 2);
        assert_eq!(header.char_record_size, 16);
        assert_eq!(header.section_size, 56);
        assert_eq!(header.atlas_height, 8);
    }

    #[test]
    fn header_round_trip() {
        let bytes = sample_header_bytes();
        let header = FontHeader::read(FontData::new(&bytes)).unwrap();
        assert_eq!(header.to_be_bytes().as_slice(), bytes.as_slice());
    }

    #[test]
    fn header_wrong_length_is_malformed() {
        let bytes = sample_header_bytes();
        assert_eq!(
            FontHeader::read(FontData::new(&bytes[..23])),
            Err(ReadError::MalformedRecord {
                expected: FONT_HEADER_LEN,
                actual: 23
            })
        );
    }

    #[test]
    fn read_character_record() {
        let bytes = BeBuffer::new()
            .extend([0u8; 3]) // reserved
            .push(b'A')
            .push(12u16) // x
            .push(3u16) // y
            .push(4u8) // width
            .push(5u8) // height
            .push(6u8) // baseline
            .push(1u16) // spacing_before
            .push(2u16) // spacing_after
            .extend([0u8; 1]) // reserved
            .to_vec();
        let record = CharacterRecord::read(FontData::new(&bytes)).unwrap();
        assert_eq!(record.character(), Some('A'));
        assert_eq!((record.x, record.y), (12, 3));
        assert_eq!((record.width, record.height), (4, 5));
        assert_eq!(record.baseline, 6);
        assert_eq!((record.spacing_before, record.spacing_after), (1, 2));
        assert!(!record.is_empty());
    }

    #[test]
    fn non_ascii_codepoint_is_unknown() {
        let mut bytes = [0u8; CHAR_RECORD_LEN];
        bytes[3] = 0xC3; // a UTF-8 continuation lead byte, invalid alone
        let record = CharacterRecord::read(FontData::new(&bytes)).unwrap();
        assert_eq!(record.codepoint, 0xC3);
        assert_eq!(record.character(), None);
    }

    #[test]
    fn zero_dimension_records_are_empty() {
        let mut bytes = [0u8; CHAR_RECORD_LEN];
        bytes[3] = b' ';
        bytes[8] = 0; // width
        bytes[9] = 4; // height
        let record = CharacterRecord::read(FontData::new(&bytes)).unwrap();
        assert!(record.is_empty());

        bytes[8] = 4;
        bytes[9] = 0;
        let record = CharacterRecord::read(FontData::new(&bytes)).unwrap();
        assert!(record.is_empty());
    }
}
