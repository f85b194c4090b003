//! The per-character export pipeline.

use read_fontpak::tables::font::CharacterRecord;
use read_fontpak::FontPak;

use crate::bitmap::extract;
use crate::error::GlyphError;
use crate::vector::VectorGlyph;

/// The result of processing one character record.
#[derive(Debug, Clone, PartialEq)]
pub enum GlyphOutcome {
    /// A vectorized glyph ready for serialization.
    Vector {
        character: char,
        glyph: VectorGlyph,
    },
    /// The record has a zero dimension; there is nothing to draw.
    SkippedEmpty,
    /// The codepoint byte has no character identity. The record stays in
    /// the metadata, but there is no name to export a vector file under.
    SkippedUnknown { raw: u8 },
    /// Extraction failed; this glyph is skipped, later records are
    /// unaffected.
    Failed(GlyphError),
}

/// Process every character in table order, yielding one outcome per record.
///
/// There is no shared mutable state between characters, and one
/// character's failure never aborts the rest: callers get an outcome for
/// every record and decide how to report skips.
pub fn export_glyphs<'a>(
    pak: &'a FontPak<'a>,
) -> impl Iterator<Item = (usize, &'a CharacterRecord, GlyphOutcome)> {
    pak.characters
        .iter()
        .enumerate()
        .map(move |(index, record)| (index, record, export_one(pak, record)))
}

fn export_one(pak: &FontPak<'_>, record: &CharacterRecord) -> GlyphOutcome {
    let Some(character) = record.character() else {
        return GlyphOutcome::SkippedUnknown {
            raw: record.codepoint,
        };
    };
    if record.is_empty() {
        return GlyphOutcome::SkippedEmpty;
    }
    match extract(&pak.atlas, record) {
        Ok(bitmap) => GlyphOutcome::Vector {
            character,
            glyph: VectorGlyph::from_bitmap(&bitmap),
        },
        Err(err) => GlyphOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use read_fontpak::test_helpers::BeBuffer;
    use read_fontpak::{FontData, NullSink};

    const ATLAS_SIZE: u16 = 8;

    fn record(codepoint: u8, x: u16, y: u16, width: u8, height: u8) -> BeBuffer {
        BeBuffer::new()
            .extend([0u8; 3])
            .push(codepoint)
            .push(x)
            .push(y)
            .push(width)
            .push(height)
            .push(0u8)
            .push(0u16)
            .push(0u16)
            .extend([0u8; 1])
    }

    /// A font whose atlas is all foreground, with four records: a good
    /// glyph, one that overruns the atlas, an empty one, and one with an
    /// undecodable codepoint byte.
    fn mixed_font() -> Vec<u8> {
        let records = 4u16;
        BeBuffer::new()
            .push(read_fontpak::tables::font::FONT_MAGIC)
            .push(1u8)
            .extend([0u8; 7])
            .push(records)
            .push(16u16)
            .push(24 + u32::from(records) * 16)
            .extend([0u8; 2])
            .push(ATLAS_SIZE)
            .extend(record(b'A', 0, 0, 4, 4).to_vec())
            .extend(record(b'B', 6, 0, 4, 4).to_vec()) // x + width > 8
            .extend(record(b' ', 0, 0, 0, 0).to_vec())
            .extend(record(0xC3, 4, 4, 2, 2).to_vec())
            .extend(*b"TEX")
            .extend([0u8; 5])
            .push(ATLAS_SIZE)
            .push(ATLAS_SIZE)
            .extend([0u8; 8])
            .push(u32::from(ATLAS_SIZE) * u32::from(ATLAS_SIZE))
            .extend([0u8; 8])
            .extend([0xFFu8; (ATLAS_SIZE as usize) * (ATLAS_SIZE as usize)])
            .to_vec()
    }

    #[test]
    fn one_bad_glyph_does_not_stop_the_rest() {
        let bytes = mixed_font();
        let pak = FontPak::read(FontData::new(&bytes), &mut NullSink).unwrap();
        let outcomes: Vec<_> = export_glyphs(&pak).collect();
        assert_eq!(outcomes.len(), 4);

        match &outcomes[0].2 {
            GlyphOutcome::Vector { character, glyph } => {
                assert_eq!(*character, 'A');
                assert_eq!(glyph.cells().len(), 16);
            }
            other => panic!("expected vector outcome, got {other:?}"),
        }
        assert!(matches!(
            outcomes[1].2,
            GlyphOutcome::Failed(GlyphError::OutOfBounds { x: 6, width: 4, .. })
        ));
        assert_eq!(outcomes[2].2, GlyphOutcome::SkippedEmpty);
        assert_eq!(outcomes[3].2, GlyphOutcome::SkippedUnknown { raw: 0xC3 });
    }

    #[test]
    fn outcomes_follow_table_order() {
        let bytes = mixed_font();
        let pak = FontPak::read(FontData::new(&bytes), &mut NullSink).unwrap();
        let indices: Vec<_> = export_glyphs(&pak).map(|(index, ..)| index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
