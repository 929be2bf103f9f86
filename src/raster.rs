//! Hard-edged rasterization of the magnifying-glass launcher icon.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pixel::{PixelBuffer, Rgba};
use crate::shape::ShapeSpec;

/// Stroke color of the ring and handle.
pub const FOREGROUND: Rgba = Rgba::new(255, 255, 255, 255);

/// Opaque launcher background.
pub const BACKGROUND: Rgba = Rgba::new(0, 122, 255, 255);

/// Fully transparent background, used for adaptive-icon foregrounds.
pub const CLEAR: Rgba = Rgba::new(0, 0, 0, 0);

/// Background treatment for a rendered icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IconStyle {
    /// White icon on the opaque blue background.
    #[default]
    Opaque,
    /// White icon on a fully transparent background.
    Transparent,
}

/// Renders the magnifier icon as an immutable RGBA pixel buffer.
///
/// Rendering is pure and CPU-bound: no I/O, no shared state, and two calls
/// with the same arguments produce byte-identical buffers. Independent
/// renders may run in parallel freely.
pub struct IconRasterizer;

impl IconRasterizer {
    /// Renders a `size x size` icon.
    ///
    /// Every pixel is exactly one of two colors: [`FOREGROUND`] where the
    /// squared-distance tests of [`ShapeSpec`] hit the ring or handle, and
    /// the background color everywhere else. There is no blending.
    ///
    /// Sizes small enough that the lens radius collapses to zero still
    /// render (a handle-only or near-empty icon); only `size == 0` is an
    /// error.
    pub fn render(size: u32, style: IconStyle) -> Result<PixelBuffer> {
        if size == 0 {
            return Err(Error::InvalidDimension {
                width: 0,
                height: 0,
                bytes: 0,
            });
        }

        let spec = ShapeSpec::from_size(size);
        let background = match style {
            IconStyle::Opaque => BACKGROUND,
            IconStyle::Transparent => CLEAR,
        };

        PixelBuffer::from_fn(size, size, |x, y| {
            if spec.contains(i64::from(x), i64::from(y)) {
                FOREGROUND
            } else {
                background
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic() {
        let a = IconRasterizer::render(64, IconStyle::Opaque).unwrap();
        let b = IconRasterizer::render(64, IconStyle::Opaque).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(IconRasterizer::render(0, IconStyle::Opaque).is_err());
    }

    #[test]
    fn every_pixel_is_exactly_one_of_two_colors() {
        let buf = IconRasterizer::render(48, IconStyle::Opaque).unwrap();
        for y in 0..48 {
            for x in 0..48 {
                let p = buf.pixel(x, y).unwrap();
                assert!(
                    p == FOREGROUND || p == BACKGROUND,
                    "unexpected color {p:?} at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn center_pixel_is_background_at_size_48() {
        let buf = IconRasterizer::render(48, IconStyle::Opaque).unwrap();
        let (cx, cy) = ShapeSpec::from_size(48).center();
        assert_eq!(buf.pixel(cx as u32, cy as u32), Some(BACKGROUND));
    }

    #[test]
    fn transparent_background_is_all_zero_bytes() {
        let buf = IconRasterizer::render(48, IconStyle::Transparent).unwrap();
        for y in 0..48 {
            for x in 0..48 {
                let p = buf.pixel(x, y).unwrap();
                assert!(
                    p == FOREGROUND || p == CLEAR,
                    "non-icon pixel must be fully transparent, got {p:?} at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn transparent_icon_contains_foreground() {
        let buf = IconRasterizer::render(48, IconStyle::Transparent).unwrap();
        let hits = buf
            .as_bytes()
            .chunks_exact(4)
            .filter(|px| *px == FOREGROUND.to_array())
            .count();
        assert!(hits > 0, "icon should contain at least one stroke pixel");
    }

    #[test]
    fn tiny_sizes_render_without_error() {
        // size 15: radius 3, thickness floors to 1.
        let buf = IconRasterizer::render(15, IconStyle::Transparent).unwrap();
        assert_eq!(buf.as_bytes().len(), 15 * 15 * 4);

        for size in 1..8 {
            let buf = IconRasterizer::render(size, IconStyle::Opaque).unwrap();
            assert_eq!(buf.as_bytes().len(), (size * size * 4) as usize);
        }
    }
}
