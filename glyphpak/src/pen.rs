//! Collecting path output when drawing a vector glyph.

use std::fmt::{self, Write};

/// Interface for accepting a sequence of path commands.
///
/// Pixel-grid vectorization only ever produces axis-aligned straight
/// edges, so the command set is move/line/close.
pub trait Pen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f32, y: f32);

    /// Emit a command to close the current subpath.
    fn close(&mut self);
}

/// Single element of a path.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathElement {
    /// Begin a new subpath at (x, y).
    MoveTo { x: f32, y: f32 },
    /// Draw a line from the current point to (x, y).
    LineTo { x: f32, y: f32 },
    /// Close the current subpath.
    Close,
}

impl Pen for Vec<PathElement> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PathElement::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PathElement::LineTo { x, y })
    }

    fn close(&mut self) {
        self.push(PathElement::Close)
    }
}

/// Pen that generates SVG style path data.
#[derive(Clone, Default, Debug)]
pub struct SvgPen(String);

impl SvgPen {
    pub fn new() -> Self {
        Self::default()
    }

    fn maybe_push_space(&mut self) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
    }
}

impl Pen for SvgPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.maybe_push_space();
        let _ = write!(self.0, "M{x},{y}");
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.maybe_push_space();
        let _ = write!(self.0, "L{x},{y}");
    }

    fn close(&mut self) {
        self.maybe_push_space();
        self.0.push('Z');
    }
}

impl AsRef<str> for SvgPen {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<SvgPen> for String {
    fn from(value: SvgPen) -> Self {
        value.0
    }
}

impl fmt::Display for SvgPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_pen_output() {
        let mut pen = SvgPen::new();
        pen.move_to(0.0, 0.0);
        pen.line_to(1.0, 0.0);
        pen.line_to(1.0, 1.0);
        pen.line_to(0.0, 1.0);
        pen.close();
        assert_eq!(pen.as_ref(), "M0,0 L1,0 L1,1 L0,1 Z");
    }

    #[test]
    fn recording_pen() {
        use PathElement::*;
        let mut recording: Vec<PathElement> = vec![];
        recording.move_to(2.0, 3.0);
        recording.line_to(3.0, 3.0);
        recording.close();
        assert_eq!(
            recording.as_slice(),
            &[
                MoveTo { x: 2.0, y: 3.0 },
                LineTo { x: 3.0, y: 3.0 },
                Close
            ]
        );
    }
}
