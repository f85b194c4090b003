//! Traits for interpreting raw fontpak data

use crate::font_data::FontData;

/// A type that can be read from raw section data.
///
/// Implementations are responsible for their own layout: the ordered field
/// reads, the byte order, and the reserved-byte skips. A buffer whose length
/// does not match the layout's total width fails with
/// [`ReadError::MalformedRecord`]; given correct upstream slicing that is an
/// integration bug, not a property of the input file.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// A fixed-width scalar with a big-endian wire encoding.
///
/// This trait is sealed; it is implemented for the unsigned integers used by
/// the format and for [`Tag`](crate::Tag).
pub trait Scalar: Sized + Copy + sealed::Sealed {
    /// The number of bytes occupied on the wire.
    const RAW_BYTE_LEN: usize;

    /// Read from the front of `bytes`; `None` if fewer than
    /// `RAW_BYTE_LEN` bytes are available.
    fn read(bytes: &[u8]) -> Option<Self>;

    /// Append the big-endian encoding of this value to `out`.
    fn write_be(self, out: &mut Vec<u8>);
}

// a sealed trait. see <https://rust-lang.github.io/api-guidelines/future-proofing.html>
pub(crate) mod sealed {
    pub trait Sealed {}
}

macro_rules! int_scalar {
    ($ty:ty, $len:literal) => {
        impl sealed::Sealed for $ty {}

        impl Scalar for $ty {
            const RAW_BYTE_LEN: usize = $len;

            fn read(bytes: &[u8]) -> Option<Self> {
                let raw: [u8; $len] = bytes.get(..$len)?.try_into().ok()?;
                Some(<$ty>::from_be_bytes(raw))
            }

            fn write_be(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }
        }
    };
}

int_scalar!(u8, 1);
int_scalar!(u16, 2);
int_scalar!(u32, 4);

/// An error that occurs when reading fontpak data.
///
/// All of these are fatal for the file being decoded; non-fatal conditions
/// are delivered as [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// A read ran past the end of the available data.
    OutOfBounds,
    /// A fixed-size structural read received a buffer of the wrong length.
    MalformedRecord { expected: usize, actual: usize },
    /// The font section declares more data than the source provides.
    TruncatedSection { needed: usize, available: usize },
    /// The atlas bitmap is shorter than its declared dimensions require.
    TruncatedBitmap { needed: usize, available: usize },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "a read was out of bounds"),
            ReadError::MalformedRecord { expected, actual } => {
                write!(f, "expected a {expected} byte record, got {actual} bytes")
            }
            ReadError::TruncatedSection { needed, available } => {
                write!(f, "section needs {needed} bytes, {available} available")
            }
            ReadError::TruncatedBitmap { needed, available } => {
                write!(f, "atlas bitmap needs {needed} bytes, {available} available")
            }
        }
    }
}

impl std::error::Error for ReadError {}
