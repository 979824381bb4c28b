//! Landmark-driven makeup compositing renderer
//!
//! This module provides the main entry point for compositing cosmetic
//! overlays onto a portrait image.
//!
//! # Pipeline
//!
//! One render pass consists of:
//! 1. **Clear**: surface reset to transparent
//! 2. **Base**: portrait pixmap drawn scaled to the surface
//! 3. **Paint**: region painters run back to front over the base
//! 4. **Encode** (optional): surface → PNG/JPEG via [`export`]
//!
//! Painters run in a fixed order so overlapping regions composite
//! predictably: hair first, then cheeks, eyes, eyebrows, and lips on
//! top. Regions absent from the config, or whose landmark lists are
//! empty, are skipped without affecting the rest of the pass.
//!
//! [`export`]: MakeupRenderer::export

use crate::error::Result;
use crate::image_output::{self, OutputFormat};
use crate::landmarks::LandmarkSet;
use crate::paint::canvas::Canvas;
use crate::paint::{brows, cheeks, eyes, hair, lips};
use crate::paint::{BrowTexture, HairTexture};
use crate::style::MakeupConfig;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tiny_skia::Pixmap;

/// Main renderer for compositing makeup onto portrait images
///
/// Owns the raster surface and the RNG feeding the hair texture. One
/// renderer serves one surface; renders are synchronous and
/// single-threaded. A newer render simply overwrites the surface, so
/// superseded results are discarded by rendering again, not cancelled.
pub struct MakeupRenderer {
    canvas: Canvas,
    rng: StdRng,
    brow_texture: BrowTexture,
    hair_texture: HairTexture,
}

impl MakeupRenderer {
    /// Creates a renderer with an OS-seeded RNG
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::CanvasCreationFailed`] when either
    /// dimension is zero.
    ///
    /// [`RenderError::CanvasCreationFailed`]: crate::error::RenderError::CanvasCreationFailed
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            rng: StdRng::from_entropy(),
            brow_texture: BrowTexture::default(),
            hair_texture: HairTexture::default(),
        })
    }

    /// Creates a renderer whose hair texture is reproducible
    ///
    /// Two renderers built with the same seed, surface size, and inputs
    /// produce byte-identical output.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            rng: StdRng::seed_from_u64(seed),
            brow_texture: BrowTexture::default(),
            hair_texture: HairTexture::default(),
        })
    }

    pub fn builder() -> MakeupRendererBuilder {
        MakeupRendererBuilder::new()
    }

    /// Returns the surface width in pixels
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Returns the surface height in pixels
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Replaces the surface with a new one of the given dimensions
    ///
    /// Previous surface contents are discarded. The RNG and texture
    /// settings carry over.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.canvas = Canvas::new(width, height)?;
        Ok(())
    }

    /// Composites the configured makeup over the base image
    ///
    /// The base is scaled to the surface dimensions, then each
    /// configured region is painted in back-to-front order. Landmark
    /// coordinates are interpreted in base-image pixel space, so the
    /// surface is normally sized to match the base.
    ///
    /// Rendering twice with the same inputs produces the same output
    /// except for the hair strand jitter, which advances the RNG.
    pub fn render(
        &mut self,
        base: &Pixmap,
        landmarks: &LandmarkSet,
        config: &MakeupConfig,
    ) -> Result<()> {
        self.canvas.clear();
        self.canvas.draw_base_image(base);

        if let Some(style) = &config.hair {
            debug!("painting hair");
            hair::paint(
                &mut self.canvas,
                &landmarks.face,
                style,
                &self.hair_texture,
                &mut self.rng,
            );
        }

        if let Some(style) = &config.cheeks {
            debug!("painting cheeks");
            cheeks::paint(
                &mut self.canvas,
                &landmarks.left_cheek,
                &landmarks.right_cheek,
                style,
            );
        }

        if let Some(style) = &config.eyes {
            debug!("painting eyes");
            eyes::paint(
                &mut self.canvas,
                &landmarks.left_eye,
                &landmarks.right_eye,
                style,
            );
        }

        if let Some(style) = &config.eyebrows {
            debug!("painting eyebrows");
            brows::paint(
                &mut self.canvas,
                &landmarks.left_eyebrow,
                &landmarks.right_eyebrow,
                style,
                &self.brow_texture,
            );
        }

        if let Some(style) = &config.lips {
            debug!("painting lips");
            lips::paint(&mut self.canvas, &landmarks.lips, style);
        }

        Ok(())
    }

    /// Returns the current surface contents
    pub fn pixmap(&self) -> &Pixmap {
        self.canvas.pixmap()
    }

    /// Consumes the renderer and returns the surface
    pub fn into_pixmap(self) -> Pixmap {
        self.canvas.into_pixmap()
    }

    /// Encodes the current surface contents
    ///
    /// Pure serialization of surface state; does not re-render.
    pub fn export(&self, format: OutputFormat) -> Result<Vec<u8>> {
        image_output::encode_image(self.canvas.pixmap(), format)
    }

    /// Encodes the current surface contents as PNG
    pub fn export_png(&self) -> Result<Vec<u8>> {
        self.export(OutputFormat::Png)
    }
}

/// Builder for creating MakeupRenderer instances
pub struct MakeupRendererBuilder {
    width: u32,
    height: u32,
    seed: Option<u64>,
    brow_texture: BrowTexture,
    hair_texture: HairTexture,
}

impl MakeupRendererBuilder {
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 600,
            seed: None,
            brow_texture: BrowTexture::default(),
            hair_texture: HairTexture::default(),
        }
    }

    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn brow_texture(mut self, texture: BrowTexture) -> Self {
        self.brow_texture = texture;
        self
    }

    pub fn hair_texture(mut self, texture: HairTexture) -> Self {
        self.hair_texture = texture;
        self
    }

    pub fn build(self) -> Result<MakeupRenderer> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(MakeupRenderer {
            canvas: Canvas::new(self.width, self.height)?,
            rng,
            brow_texture: self.brow_texture,
            hair_texture: self.hair_texture,
        })
    }
}

impl Default for MakeupRendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}
