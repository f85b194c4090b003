//! The sections of a fontpak file.

pub mod atlas;
pub mod font;
