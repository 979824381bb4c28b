//! Exportable raster encoding
//!
//! Serializes the composited surface into a compressed bitmap byte
//! stream. Export is a pure serialization of current surface state: the
//! pixel content is unpremultiplied for the codec but never otherwise
//! modified.

use crate::error::{Error, ImageError, Result};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Encoded output format for the exportable raster
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Png,
    Jpeg(u8), // quality 0-100
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Png
    }
}

/// Encodes the surface into a byte stream in the requested format
pub fn encode_image(pixmap: &Pixmap, format: OutputFormat) -> Result<Vec<u8>> {
    let width = pixmap.width();
    let height = pixmap.height();
    let pixels = pixmap.data();

    // Convert from premultiplied RGBA to straight RGBA
    let mut rgba_data = Vec::with_capacity(pixels.len());
    for chunk in pixels.chunks_exact(4) {
        let r = chunk[0];
        let g = chunk[1];
        let b = chunk[2];
        let a = chunk[3];

        let (r, g, b) = if a > 0 && a < 255 {
            let alpha = a as f32 / 255.0;
            (
                ((r as f32 / alpha).min(255.0)) as u8,
                ((g as f32 / alpha).min(255.0)) as u8,
                ((b as f32 / alpha).min(255.0)) as u8,
            )
        } else if a == 0 {
            (0, 0, 0)
        } else {
            (r, g, b)
        };

        rgba_data.push(r);
        rgba_data.push(g);
        rgba_data.push(b);
        rgba_data.push(a);
    }

    let mut buffer = Vec::new();

    match format {
        OutputFormat::Png => {
            let img = RgbaImage::from_raw(width, height, rgba_data).ok_or_else(|| {
                Error::Image(ImageError::EncodeFailed {
                    format: "PNG".to_string(),
                    reason: "Failed to create RGBA image".to_string(),
                })
            })?;

            let mut cursor = Cursor::new(&mut buffer);
            img.write_to(&mut cursor, ImageFormat::Png).map_err(|e| {
                Error::Image(ImageError::EncodeFailed {
                    format: "PNG".to_string(),
                    reason: e.to_string(),
                })
            })?;
        }
        OutputFormat::Jpeg(quality) => {
            // Convert RGBA to RGB for JPEG
            let rgb_data: Vec<u8> = rgba_data
                .chunks_exact(4)
                .flat_map(|chunk| [chunk[0], chunk[1], chunk[2]])
                .collect();

            let rgb_img = image::RgbImage::from_raw(width, height, rgb_data).ok_or_else(|| {
                Error::Image(ImageError::EncodeFailed {
                    format: "JPEG".to_string(),
                    reason: "Failed to create RGB image".to_string(),
                })
            })?;

            let mut cursor = Cursor::new(&mut buffer);
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality);
            rgb_img.write_with_encoder(encoder).map_err(|e| {
                Error::Image(ImageError::EncodeFailed {
                    format: "JPEG".to_string(),
                    reason: e.to_string(),
                })
            })?;
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_pixmap(width: u32, height: u32, color: tiny_skia::Color) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        pixmap.fill(color);
        pixmap
    }

    #[test]
    fn png_roundtrip_preserves_pixels() {
        let pixmap = solid_pixmap(8, 6, tiny_skia::Color::from_rgba8(40, 80, 120, 255));
        let bytes = encode_image(&pixmap, OutputFormat::Png).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 6));
        assert_eq!(decoded.get_pixel(3, 3).0, [40, 80, 120, 255]);
    }

    #[test]
    fn jpeg_encodes_nonempty() {
        let pixmap = solid_pixmap(8, 6, tiny_skia::Color::from_rgba8(200, 10, 10, 255));
        let bytes = encode_image(&pixmap, OutputFormat::Jpeg(90)).unwrap();
        assert!(!bytes.is_empty());
        assert!(image::load_from_memory(&bytes).is_ok());
    }

    #[test]
    fn default_format_is_png() {
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
    }
}
