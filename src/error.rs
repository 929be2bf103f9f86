//! Error types shared across the crate.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by rasterization, encoding, and icon writing.
///
/// The core operations are pure and deterministic: they either succeed or
/// fail fast with no partial output, and nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// A zero icon size, or a pixel buffer whose byte length does not match
    /// its declared dimensions.
    #[error("invalid dimensions: {width}x{height} with {bytes} bytes")]
    InvalidDimension {
        width: u32,
        height: u32,
        bytes: usize,
    },

    /// The zlib compressor rejected the scanline stream.
    ///
    /// Compression of a well-formed byte stream is not expected to fail under
    /// normal operation, so this is fatal and propagated to the caller.
    #[error("deflate compression failed")]
    Compression(#[source] std::io::Error),

    /// Manifest serialization failed.
    #[error("manifest serialization failed")]
    Manifest(#[from] serde_json::Error),

    /// File-system failure while writing generated icons.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
