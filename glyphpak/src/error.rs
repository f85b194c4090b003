use std::fmt;

/// An error producing a single glyph.
///
/// These are recoverable: the affected glyph is reported and skipped, and
/// processing continues with the next character in the table. Records
/// whose codepoint byte has no character identity are not errors here;
/// they surface as
/// [`GlyphOutcome::SkippedUnknown`](crate::GlyphOutcome::SkippedUnknown)
/// and as a decode-time diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphError {
    /// The record's rectangle exceeds the atlas bounds. This is a
    /// data-corruption signal, not user error.
    OutOfBounds {
        x: u16,
        y: u16,
        width: u8,
        height: u8,
        atlas_width: u16,
        atlas_height: u16,
    },
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::OutOfBounds {
                x,
                y,
                width,
                height,
                atlas_width,
                atlas_height,
            } => write!(
                f,
                "glyph rectangle {width}x{height} at ({x}, {y}) exceeds \
                 {atlas_width}x{atlas_height} atlas"
            ),
        }
    }
}

impl std::error::Error for GlyphError {}
