//! loupe-renderer: procedural launcher-icon rasterizer and PNG encoder
//!
//! This crate renders a magnifying-glass launcher icon as a raw RGBA pixel
//! buffer and encodes it as a standalone 8-bit RGBA PNG, with no imaging
//! library in the path from geometry to file bytes.
//!
//! Both halves are pure functions over their inputs: rendering the same size
//! twice yields byte-identical buffers, and neither half performs I/O.
//!
//! # Example
//!
//! ```
//! use loupe_renderer::{png, IconRasterizer, IconStyle};
//!
//! let icon = IconRasterizer::render(128, IconStyle::Opaque).unwrap();
//! let bytes = png::encode(&icon).unwrap();
//! assert_eq!(&bytes[..8], &png::SIGNATURE);
//! ```
//!
//! # Platform tables
//!
//! The [`platform`] module layers packaging conventions on top of the core:
//! data tables mapping density tokens to sizes and file names, and a writer
//! that renders each table row to disk alongside a JSON manifest.
//!
//! ```no_run
//! use loupe_renderer::platform::{android_targets, IconWriter};
//!
//! let writer = IconWriter::new("app/src/main/res");
//! let manifest = writer.write_targets(&android_targets()).unwrap();
//! println!("generated {} icons", manifest.icons.len());
//! ```

mod error;
mod pixel;
mod raster;
mod shape;

pub mod platform;
pub mod png;

pub use error::{Error, Result};
pub use pixel::{PixelBuffer, Rgba};
pub use raster::{BACKGROUND, CLEAR, FOREGROUND, IconRasterizer, IconStyle};
pub use shape::ShapeSpec;
