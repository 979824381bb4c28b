//! Base image loading
//!
//! Decodes the user's uploaded or captured photo into the premultiplied
//! RGBA pixmap the paint subsystem draws on. Any format the `image`
//! crate understands is accepted; decoding happens entirely before
//! `render` is invoked, so the renderer itself never blocks on I/O.

use crate::error::{ImageError, Result};
use image::RgbaImage;
use std::path::Path;
use tiny_skia::{IntSize, Pixmap};

/// Decodes an encoded image (PNG, JPEG, ...) into a pixmap
///
/// # Examples
///
/// ```rust,ignore
/// let bytes = std::fs::read("portrait.jpg")?;
/// let base = facepaint::image_loader::decode_image(&bytes)?;
/// ```
pub fn decode_image(bytes: &[u8]) -> Result<Pixmap> {
    let dynamic = image::load_from_memory(bytes).map_err(|e| ImageError::DecodeFailed {
        reason: e.to_string(),
    })?;
    pixmap_from_rgba(dynamic.to_rgba8())
}

/// Reads and decodes an image file from disk
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Pixmap> {
    let bytes = std::fs::read(path.as_ref()).map_err(|e| ImageError::DecodeFailed {
        reason: format!("{}: {}", path.as_ref().display(), e),
    })?;
    decode_image(&bytes)
}

/// Converts straight-alpha RGBA image data into a premultiplied pixmap
pub fn pixmap_from_rgba(img: RgbaImage) -> Result<Pixmap> {
    let (width, height) = img.dimensions();
    let size = IntSize::from_wh(width, height).ok_or(ImageError::DecodeFailed {
        reason: format!("invalid image dimensions {}x{}", width, height),
    })?;

    let mut data = img.into_raw();
    // tiny-skia stores premultiplied RGBA
    for pixel in data.chunks_exact_mut(4) {
        let a = pixel[3] as u16;
        if a < 255 {
            pixel[0] = ((pixel[0] as u16 * a + 127) / 255) as u8;
            pixel[1] = ((pixel[1] as u16 * a + 127) / 255) as u8;
            pixel[2] = ((pixel[2] as u16 * a + 127) / 255) as u8;
        }
    }

    Pixmap::from_vec(data, size).ok_or_else(|| {
        ImageError::DecodeFailed {
            reason: format!("pixmap creation failed for {}x{}", width, height),
        }
        .into()
    })
}
