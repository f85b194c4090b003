//! Cropping glyph bitmaps out of the atlas.

use read_fontpak::tables::atlas::{Atlas, FOREGROUND};
use read_fontpak::tables::font::CharacterRecord;

use crate::error::GlyphError;

/// An owned monochrome raster for a single glyph.
///
/// Always a copy of the atlas sub-rectangle; never a mutable alias back
/// into the atlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapGlyph {
    width: u8,
    height: u8,
    pixels: Vec<u8>,
}

impl BitmapGlyph {
    /// Width of the glyph in pixels.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height of the glyph in pixels.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The row-major pixel bytes, `width * height` of them.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// `true` if the pixel at (x, y) is inked.
    pub fn is_ink(&self, x: u8, y: u8) -> bool {
        x < self.width
            && y < self.height
            && self.pixels[y as usize * self.width as usize + x as usize] == FOREGROUND
    }
}

/// Crop the rectangle described by `record` out of the atlas.
///
/// Returns a row-major copy of the selected pixels. Records with a zero
/// dimension are undrawable and must be skipped by the caller before
/// extraction; see [`CharacterRecord::is_empty`].
pub fn extract(atlas: &Atlas<'_>, record: &CharacterRecord) -> Result<BitmapGlyph, GlyphError> {
    debug_assert!(!record.is_empty(), "empty records are never extracted");
    let right = record.x as u32 + record.width as u32;
    let bottom = record.y as u32 + record.height as u32;
    if right > atlas.width() as u32 || bottom > atlas.height() as u32 {
        return Err(GlyphError::OutOfBounds {
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            atlas_width: atlas.width(),
            atlas_height: atlas.height(),
        });
    }
    let width = record.width as usize;
    let stride = atlas.width() as usize;
    let data = atlas.data();
    let mut pixels = Vec::with_capacity(width * record.height as usize);
    for row in 0..record.height as usize {
        let start = (record.y as usize + row) * stride + record.x as usize;
        pixels.extend_from_slice(&data[start..start + width]);
    }
    Ok(BitmapGlyph {
        width: record.width,
        height: record.height,
        pixels,
    })
}
