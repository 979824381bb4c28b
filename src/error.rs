//! Error types for facepaint
//!
//! This module provides error types for the two subsystems that can fail:
//!
//! - Image I/O (decoding the base photo, encoding the exported raster)
//! - Rendering (surface creation)
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.
//!
//! Missing landmark data is deliberately *not* part of this taxonomy:
//! an enabled region whose landmark list is empty is a recoverable,
//! per-painter condition ([`RegionError`]) that is logged and skipped
//! without aborting the other regions.

use thiserror::Error;

/// Result type alias for facepaint operations
///
/// # Examples
///
/// ```
/// use facepaint::Result;
///
/// fn prepare() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for facepaint
#[derive(Error, Debug)]
pub enum Error {
    /// Base image loading or decoding error
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Rendering or rasterization error
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Color parsing error
    #[error("Color error: {0}")]
    Color(#[from] crate::style::color::ColorParseError),
}

/// Errors that occur while decoding or encoding images
#[derive(Error, Debug, Clone)]
pub enum ImageError {
    /// Image decoding failed
    #[error("Failed to decode image: {reason}")]
    DecodeFailed { reason: String },

    /// Image encoding failed
    #[error("Failed to encode image as {format}: {reason}")]
    EncodeFailed { format: String, reason: String },
}

/// Errors that occur during rendering and rasterization
///
/// These are programmer/setup errors: an unusable surface.
/// Missing-but-optional landmark data never surfaces here.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    /// Canvas creation failed
    #[error("Failed to create canvas: {width}x{height}")]
    CanvasCreationFailed { width: u32, height: u32 },
}

/// Recoverable per-region conditions raised by the geometry builder
///
/// A painter receiving one of these logs the skip and returns without
/// touching the surface; rendering of the remaining regions continues.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    /// The landmark list for an enabled region is empty
    #[error("region has no landmark points")]
    EmptyRegion,

    /// Too few points to form a traversable boundary
    #[error("region needs at least {needed} points, got {got}")]
    TooFewPoints { needed: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_error_display() {
        let error = ImageError::EncodeFailed {
            format: "PNG".to_string(),
            reason: "buffer too small".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("PNG"));
        assert!(display.contains("buffer too small"));
    }

    #[test]
    fn render_error_display() {
        let error = RenderError::CanvasCreationFailed {
            width: 0,
            height: 600,
        };
        assert!(format!("{}", error).contains("0x600"));
    }

    #[test]
    fn region_error_display() {
        let error = RegionError::TooFewPoints { needed: 3, got: 2 };
        let display = format!("{}", error);
        assert!(display.contains("at least 3"));
        assert!(display.contains("got 2"));
    }

    #[test]
    fn top_level_error_wraps_subsystems() {
        let error: Error = RenderError::CanvasCreationFailed {
            width: 0,
            height: 600,
        }
        .into();
        assert!(format!("{}", error).starts_with("Render error"));
    }
}
