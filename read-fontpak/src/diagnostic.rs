//! Non-fatal decode diagnostics.

use std::fmt;

use crate::tag::Tag;

/// A non-fatal condition observed while decoding a fontpak file.
///
/// Decoding proceeds best-effort past any of these; they exist so that the
/// caller can surface them with whatever context it has (file name, batch
/// position).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The container tag did not match
    /// [`FONT_MAGIC`](crate::tables::font::FONT_MAGIC).
    UnsupportedMagic { found: Tag },
    /// The declared format version is not one we recognize; decoding
    /// proceeds with the version 1 record layout.
    UnsupportedVersion { found: u8 },
    /// A character record's codepoint byte is not valid UTF-8 on its own.
    /// The record is retained, but has no character identity.
    UnresolvedCodepoint { index: usize, raw: u8 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedMagic { found } => {
                write!(f, "unexpected container tag '{found}'")
            }
            Diagnostic::UnsupportedVersion { found } => {
                write!(f, "unknown format version {found}, reading as version 1")
            }
            Diagnostic::UnresolvedCodepoint { index, raw } => {
                write!(f, "record {index}: codepoint byte 0x{raw:02X} is not valid UTF-8")
            }
        }
    }
}

/// A capability for receiving decode diagnostics.
///
/// The decoder never configures global logger state; callers inject a sink
/// and decide what a warning means to them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic)
    }
}

/// Sink that drops all diagnostics into the ether.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _: Diagnostic) {}
}
