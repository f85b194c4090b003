//! Extracting and vectorizing glyphs from fontpak files
//!
//! This crate sits on top of [`read_fontpak`] and turns a decoded
//! [`FontPak`](read_fontpak::FontPak) into per-character artifacts:
//!
//! - [`extract`] crops one character's rectangle out of the atlas into an
//!   owned [`BitmapGlyph`];
//! - [`VectorGlyph`] converts that raster into a deterministic set of
//!   filled unit cells and draws them through a [`Pen`];
//! - [`export_glyphs`] runs the whole per-character pipeline in table
//!   order, yielding one [`GlyphOutcome`] per record so that a single bad
//!   glyph never aborts the rest of the font.
//!
//! # Example
//!
//! ```
//! use glyphpak::{export_glyphs, GlyphOutcome, SvgPen};
//!
//! # fn export(pak: &read_fontpak::FontPak) {
//! for (index, _record, outcome) in export_glyphs(pak) {
//!     if let GlyphOutcome::Vector { character, glyph } = outcome {
//!         let mut pen = SvgPen::new();
//!         glyph.draw(&mut pen);
//!         println!("{index}: '{character}' -> {pen}");
//!     }
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bitmap;
mod error;
mod export;
mod pen;
mod vector;

pub use bitmap::{extract, BitmapGlyph};
pub use error::GlyphError;
pub use export::{export_glyphs, GlyphOutcome};
pub use pen::{PathElement, Pen, SvgPen};
pub use vector::VectorGlyph;
