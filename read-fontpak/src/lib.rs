//! Reading fontpak bitmap font containers
//!
//! This crate provides memory safe parsing of the fontpak `.font` container:
//! a 24-byte font header, a table of fixed-size character records, optional
//! trailing padding, and a texture section holding a monochrome glyph atlas.
//! All multi-byte integers are big-endian.
//!
//! Decoding is strictly linear and happens exactly once per file, producing
//! a single immutable [`FontPak`] that downstream consumers (raster dumps,
//! vector export) share. Non-fatal oddities — an unexpected magic tag, an
//! unknown version byte, a codepoint byte with no character identity — are
//! delivered through an injected [`DiagnosticSink`] rather than aborting the
//! decode or touching any global logger state.
//!
//! For glyph extraction and vectorization on top of the decoded data, see
//! the `glyphpak` crate.
//!
//! # Example
//!
//! ```
//! use read_fontpak::{FontData, FontPak, NullSink};
//!
//! # fn load(font_bytes: &[u8]) -> Result<(), read_fontpak::ReadError> {
//! let pak = FontPak::read(FontData::new(font_bytes), &mut NullSink)?;
//! println!(
//!     "{} characters, atlas {}x{}",
//!     pak.characters.len(),
//!     pak.atlas.width(),
//!     pak.atlas.height()
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod diagnostic;
mod font_data;
mod read;
pub mod tables;
mod tag;

#[cfg(any(test, feature = "test_helpers"))]
pub mod test_helpers;

pub use diagnostic::{Diagnostic, DiagnosticSink, NullSink};
pub use font_data::FontData;
pub use read::{FontRead, ReadError, Scalar};
pub use tag::Tag;

use tables::atlas::Atlas;
use tables::font::{
    CharacterRecord, FontHeader, CHAR_RECORD_LEN, FONT_HEADER_LEN, FONT_MAGIC, FORMAT_VERSION,
};

/// A fully decoded fontpak file.
///
/// The header and character records are owned; the atlas bitmap borrows
/// from the source buffer. Everything is immutable once decoded.
#[derive(Debug, Clone)]
pub struct FontPak<'a> {
    pub header: FontHeader,
    /// Character records in file order. Order is meaningful: diagnostics
    /// refer to records by table position.
    pub characters: Vec<CharacterRecord>,
    pub atlas: Atlas<'a>,
}

impl<'a> FontPak<'a> {
    /// Decode a fontpak file from the front of `data`.
    ///
    /// The stages run in file order with no backtracking: header, character
    /// table, trailing padding skip, atlas header, atlas bitmap. Any
    /// [`ReadError`] is fatal for this file; magic and version mismatches
    /// are reported to `sink` and decoding proceeds with the known layout.
    pub fn read(data: FontData<'a>, sink: &mut dyn DiagnosticSink) -> Result<Self, ReadError> {
        let header_data = data
            .slice(..FONT_HEADER_LEN)
            .ok_or(ReadError::TruncatedSection {
                needed: FONT_HEADER_LEN,
                available: data.len(),
            })?;
        let header = FontHeader::read(header_data)?;
        if header.magic != FONT_MAGIC {
            sink.report(Diagnostic::UnsupportedMagic {
                found: header.magic,
            });
        }
        if header.version != FORMAT_VERSION {
            sink.report(Diagnostic::UnsupportedVersion {
                found: header.version,
            });
        }
        if header.char_record_size as usize != CHAR_RECORD_LEN {
            return Err(ReadError::MalformedRecord {
                expected: CHAR_RECORD_LEN,
                actual: header.char_record_size as usize,
            });
        }

        let mut pos = FONT_HEADER_LEN;
        let mut characters = Vec::with_capacity(header.char_count as usize);
        for index in 0..header.char_count as usize {
            let record_data =
                data.slice(pos..pos + CHAR_RECORD_LEN)
                    .ok_or(ReadError::TruncatedSection {
                        needed: pos + CHAR_RECORD_LEN,
                        available: data.len(),
                    })?;
            let record = CharacterRecord::read(record_data)?;
            if record.character().is_none() {
                sink.report(Diagnostic::UnresolvedCodepoint {
                    index,
                    raw: record.codepoint,
                });
            }
            characters.push(record);
            pos += CHAR_RECORD_LEN;
        }

        // The section size covers the header, the table and any trailing
        // padding; a declared size smaller than header + table means the
        // header is corrupt, and we fail before attempting any skip.
        let occupied = header.char_count as i64 * header.char_record_size as i64
            + FONT_HEADER_LEN as i64;
        let trailing = header.section_size as i64 - occupied;
        if trailing < 0 {
            return Err(ReadError::TruncatedSection {
                needed: occupied as usize,
                available: header.section_size as usize,
            });
        }
        let trailing = trailing as usize;
        if data.len() < pos + trailing {
            return Err(ReadError::TruncatedSection {
                needed: pos + trailing,
                available: data.len(),
            });
        }
        pos += trailing;

        let atlas_data = data.split_off(pos).ok_or(ReadError::OutOfBounds)?;
        let atlas = Atlas::read(atlas_data)?;
        Ok(FontPak {
            header,
            characters,
            atlas,
        })
    }
}
