//! PNG chunk framing.

use super::crc::Crc32;

/// A length-prefixed, type-tagged, CRC-trailed PNG chunk.
///
/// Borrowed view over one chunk's payload: constructed, serialized, and
/// dropped within a single encode call. The wire layout is
/// `length(4B BE) || type(4B ASCII) || data || crc32(4B BE)`, where the CRC
/// covers type and data.
pub(crate) struct Chunk<'a> {
    kind: [u8; 4],
    data: &'a [u8],
}

impl<'a> Chunk<'a> {
    pub(crate) fn new(kind: [u8; 4], data: &'a [u8]) -> Self {
        Self { kind, data }
    }

    fn crc(&self) -> u32 {
        let mut crc = Crc32::new();
        crc.update(&self.kind);
        crc.update(self.data);
        crc.finalize()
    }

    /// Appends the serialized chunk to `out`.
    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.kind);
        out.extend_from_slice(self.data);
        out.extend_from_slice(&self.crc().to_be_bytes());
    }
}
