//! CRC-32 as required by the PNG chunk trailer.
//!
//! Standard ISO 3309 / ITU-T V.42 polynomial in reflected form, seed
//! `0xFFFFFFFF`, final xor `0xFFFFFFFF`. Any conformant PNG reader computes
//! the same value over a chunk's type and payload bytes.

const POLYNOMIAL: u32 = 0xEDB8_8320;

const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 {
                POLYNOMIAL ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Running CRC-32 over a chunk's type and payload bytes.
pub(crate) struct Crc32 {
    state: u32,
}

impl Crc32 {
    pub(crate) fn new() -> Self {
        Self { state: 0xFFFF_FFFF }
    }

    pub(crate) fn update(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            let index = ((self.state ^ u32::from(byte)) & 0xFF) as usize;
            self.state = TABLE[index] ^ (self.state >> 8);
        }
    }

    pub(crate) fn finalize(self) -> u32 {
        self.state ^ 0xFFFF_FFFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One-shot CRC-32 of a byte slice.
    fn crc32(bytes: &[u8]) -> u32 {
        let mut crc = Crc32::new();
        crc.update(bytes);
        crc.finalize()
    }

    #[test]
    fn crc_check_value() {
        // The standard CRC-32 check value.
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn crc_of_empty_iend_chunk() {
        // The CRC every PNG file carries in its final four bytes.
        assert_eq!(crc32(b"IEND"), 0xAE42_6082);
    }

    #[test]
    fn incremental_update_matches_one_shot() {
        let mut crc = Crc32::new();
        crc.update(b"IDAT");
        crc.update(&[1, 2, 3, 4]);
        assert_eq!(crc.finalize(), crc32(b"IDAT\x01\x02\x03\x04"));
    }
}
