//! small utilities used in tests

use crate::read::Scalar;

/// A convenience type for building big-endian test buffers.
///
/// Methods consume and return the buffer so layouts can be written as one
/// chained expression that reads like the wire format.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer(Vec<u8>);

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Append any scalar, big-endian.
    pub fn push(mut self, item: impl Scalar) -> Self {
        item.write_be(&mut self.0);
        self
    }

    /// Append raw bytes unchanged.
    pub fn extend(mut self, bytes: impl IntoIterator<Item = u8>) -> Self {
        self.0.extend(bytes);
        self
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
