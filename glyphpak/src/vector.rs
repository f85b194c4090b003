//! Converting glyph rasters into vector form.

use crate::bitmap::BitmapGlyph;
use crate::pen::Pen;

/// A scalable representation of a glyph: one filled unit cell per inked
/// pixel, on a grid matching the source raster.
///
/// Cells are stored in the row-major scan order of the source, so the same
/// bitmap always produces identical output, element for element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorGlyph {
    width: u8,
    height: u8,
    cells: Vec<(u8, u8)>,
}

impl VectorGlyph {
    /// Vectorize a cropped glyph raster.
    ///
    /// The foreground marker byte is ink and everything else is
    /// background; the cells cover exactly the glyph's inked pixel set.
    pub fn from_bitmap(glyph: &BitmapGlyph) -> Self {
        let mut cells = Vec::new();
        for y in 0..glyph.height() {
            for x in 0..glyph.width() {
                if glyph.is_ink(x, y) {
                    cells.push((x, y));
                }
            }
        }
        VectorGlyph {
            width: glyph.width(),
            height: glyph.height(),
            cells,
        }
    }

    /// Width of the cell grid, matching the source raster.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height of the cell grid, matching the source raster.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The filled cells, in row-major scan order.
    pub fn cells(&self) -> &[(u8, u8)] {
        &self.cells
    }

    /// `true` if no pixel of the source was inked.
    pub fn is_blank(&self) -> bool {
        self.cells.is_empty()
    }

    /// Draw one closed unit square per filled cell, in cell order.
    pub fn draw(&self, pen: &mut impl Pen) {
        for &(x, y) in &self.cells {
            let (x, y) = (x as f32, y as f32);
            pen.move_to(x, y);
            pen.line_to(x + 1.0, y);
            pen.line_to(x + 1.0, y + 1.0);
            pen.line_to(x, y + 1.0);
            pen.close();
        }
    }
}
