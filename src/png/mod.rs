//! Minimal 8-bit RGBA PNG encoder.
//!
//! Produces exactly three chunks after the fixed signature: a 13-byte `IHDR`
//! (bit depth 8, color type 6), one `IDAT` holding the zlib-compressed
//! scanline stream, and an empty `IEND`. Scanlines use the `None` filter
//! (a single `0` byte prepended to each row), so decoders recover the input
//! bytes exactly; the compressed bytes themselves may differ between DEFLATE
//! implementations.
//!
//! Decoding is out of scope.

mod chunk;
mod crc;

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::error::{Error, Result};
use crate::pixel::PixelBuffer;

use chunk::Chunk;

/// The fixed 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encodes a pixel buffer as a complete PNG byte stream.
pub fn encode(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    encode_rgba(buffer.as_bytes(), buffer.width(), buffer.height())
}

/// Encodes raw row-major RGBA bytes as a complete PNG byte stream.
///
/// Fails fast with [`Error::InvalidDimension`] if either dimension is zero
/// or `pixels.len() != width * height * 4`; no partial output is produced.
pub fn encode_rgba(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let expected = width as usize * height as usize * 4;
    if width == 0 || height == 0 || pixels.len() != expected {
        return Err(Error::InvalidDimension {
            width,
            height,
            bytes: pixels.len(),
        });
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // bit depth 8, color type 6 (truecolor + alpha), compression 0,
    // filter method 0, no interlace
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);

    let idat = compress_scanlines(pixels, width)?;

    let mut out = Vec::with_capacity(SIGNATURE.len() + ihdr.len() + idat.len() + 3 * 12);
    out.extend_from_slice(&SIGNATURE);
    Chunk::new(*b"IHDR", &ihdr).write_to(&mut out);
    Chunk::new(*b"IDAT", &idat).write_to(&mut out);
    Chunk::new(*b"IEND", &[]).write_to(&mut out);
    Ok(out)
}

/// Prefixes each row with the `None` filter byte and compresses the whole
/// stream with zlib at maximum effort.
fn compress_scanlines(pixels: &[u8], width: u32) -> Result<Vec<u8>> {
    let stride = width as usize * 4;
    let mut raw = Vec::with_capacity(pixels.len() + pixels.len() / stride);
    for row in pixels.chunks_exact(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&raw).map_err(Error::Compression)?;
    encoder.finish().map_err(Error::Compression)
}
