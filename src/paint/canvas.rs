//! Canvas wrapper for tiny-skia 2D graphics library
//!
//! This module provides the raster surface the region painters draw on.
//! It handles:
//!
//! - Base image compositing (scaled to the surface dimensions)
//! - Path filling and stroking
//! - Radial gradient fills with graduated alpha stops
//! - Graphics state management (opacity, blend mode)
//!
//! # Architecture
//!
//! The Canvas wraps a tiny-skia `Pixmap` and maintains a stack of
//! graphics states. Each state holds the current opacity and blend mode.
//! Painters never push and pop manually: [`Canvas::scoped`] returns an
//! RAII guard that restores the saved state on every exit path,
//! including early returns on empty regions.
//!
//! # Example
//!
//! ```rust,ignore
//! use facepaint::paint::Canvas;
//! use facepaint::{BlendMode, Rgba};
//!
//! let mut canvas = Canvas::new(800, 600)?;
//! {
//!     let mut scope = canvas.scoped();
//!     scope.set_blend_mode(BlendMode::Multiply);
//!     scope.set_opacity(0.8);
//!     scope.fill_path(&path, Rgba::rgb(204, 34, 68));
//! } // blend mode and opacity restored here
//! ```

use crate::error::{RenderError, Result};
use crate::geometry::Point;
use crate::style::color::Rgba;
use crate::style::BlendMode;
use log::warn;
use std::ops::{Deref, DerefMut};
use tiny_skia::BlendMode as SkiaBlendMode;
use tiny_skia::FillRule;
use tiny_skia::FilterQuality;
use tiny_skia::GradientStop;
use tiny_skia::LineCap;
use tiny_skia::LineJoin;
use tiny_skia::Paint;
use tiny_skia::Path;
use tiny_skia::Pixmap;
use tiny_skia::PixmapPaint;
use tiny_skia::RadialGradient;
use tiny_skia::SpreadMode;
use tiny_skia::Stroke;
use tiny_skia::Transform;

// ============================================================================
// Canvas State
// ============================================================================

/// Graphics state for the canvas
///
/// Holds the opacity and blend mode a paint pass composites with.
/// States are stacked through [`Canvas::scoped`].
#[derive(Debug, Clone, Copy)]
struct CanvasState {
    /// Current opacity (0.0 to 1.0), multiplied into color alpha
    opacity: f32,
    /// Compositing operator for subsequent draws
    blend_mode: SkiaBlendMode,
}

impl CanvasState {
    fn new() -> Self {
        Self {
            opacity: 1.0,
            blend_mode: SkiaBlendMode::SourceOver,
        }
    }

    /// Creates a paint with the current state applied
    fn create_paint(&self, color: Rgba) -> Paint<'static> {
        let mut paint = Paint::default();
        let alpha = color.a * self.opacity;
        paint.set_color_rgba8(color.r, color.g, color.b, (alpha * 255.0 + 0.5) as u8);
        paint.anti_alias = true;
        paint.blend_mode = self.blend_mode;
        paint
    }

    /// Converts a stop color to tiny-skia form with state opacity folded in
    fn to_skia_color(&self, color: Rgba) -> tiny_skia::Color {
        let alpha = (color.a * self.opacity).clamp(0.0, 1.0);
        tiny_skia::Color::from_rgba8(color.r, color.g, color.b, (alpha * 255.0 + 0.5) as u8)
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Canvas
// ============================================================================

/// Raster surface for compositing cosmetic overlays
///
/// Owned exclusively by one renderer instance at a time; callers must not
/// share a canvas across concurrent renders (single-writer precondition,
/// no internal locking).
pub struct Canvas {
    /// The underlying pixel buffer (premultiplied RGBA)
    pixmap: Pixmap,
    /// Stack of saved graphics states
    state_stack: Vec<CanvasState>,
    /// Current graphics state
    current_state: CanvasState,
}

impl Canvas {
    /// Creates a transparent canvas with the given dimensions
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::CanvasCreationFailed`] when either dimension
    /// is zero or the allocation is rejected. An unsized surface is a
    /// setup error, not a runtime data error.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::CanvasCreationFailed { width, height })?;

        Ok(Self {
            pixmap,
            state_stack: Vec::new(),
            current_state: CanvasState::new(),
        })
    }

    /// Returns the canvas width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Returns the canvas height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Clears the full surface to transparent
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Draws the base image scaled to the surface's current dimensions
    ///
    /// The surface is assumed freshly cleared; pixels are copied rather
    /// than blended so the no-makeup render is exactly the base image.
    pub fn draw_base_image(&mut self, base: &Pixmap) {
        let sx = self.width() as f32 / base.width() as f32;
        let sy = self.height() as f32 / base.height() as f32;
        let scaling = sx != 1.0 || sy != 1.0;

        let mut paint = PixmapPaint::default();
        paint.blend_mode = SkiaBlendMode::Source;
        if scaling {
            paint.quality = FilterQuality::Bilinear;
        }

        let transform = if scaling {
            Transform::from_scale(sx, sy)
        } else {
            Transform::identity()
        };
        self
            .pixmap
            .draw_pixmap(0, 0, base.as_ref(), &paint, transform, None);
    }

    /// Consumes the canvas and returns the underlying pixmap
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Returns a reference to the underlying pixmap
    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    // ========================================================================
    // State Management
    // ========================================================================

    /// Opens a scoped graphics state
    ///
    /// The returned guard dereferences to the canvas; blend mode and
    /// opacity changes made through it are reverted when it drops,
    /// whatever the exit path. Scopes nest.
    pub fn scoped(&mut self) -> StateScope<'_> {
        self.state_stack.push(self.current_state);
        StateScope { canvas: self }
    }

    fn restore(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.current_state = state;
        }
    }

    /// Returns the current state stack depth
    #[inline]
    pub fn state_depth(&self) -> usize {
        self.state_stack.len()
    }

    /// Sets the current opacity (clamped to 0.0-1.0)
    ///
    /// Opacity multiplies color and gradient-stop alpha when drawing.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.current_state.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Returns the current opacity
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.current_state.opacity
    }

    /// Sets the blend mode for subsequent drawing operations
    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.current_state.blend_mode = mode.to_skia();
    }

    // ========================================================================
    // Drawing Operations
    // ========================================================================

    /// Fills a path with a solid color under the current state
    pub fn fill_path(&mut self, path: &Path, color: Rgba) {
        let paint = self.current_state.create_paint(color);
        self.pixmap.fill_path(
            path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Fills a path with a radial gradient
    ///
    /// Stop alphas are multiplied by the current state opacity; the
    /// gradient composites with the current blend mode. Degenerate
    /// gradients (zero radius, fewer than two stops) are skipped with a
    /// warning rather than aborting the pass.
    pub fn fill_radial_gradient(
        &mut self,
        path: &Path,
        center: Point,
        radius: f32,
        stops: &[(f32, Rgba)],
    ) {
        let skia_stops: Vec<GradientStop> = stops
            .iter()
            .map(|&(position, color)| GradientStop::new(position, self.current_state.to_skia_color(color)))
            .collect();

        let skia_center = tiny_skia::Point::from_xy(center.x, center.y);
        let shader = match RadialGradient::new(
            skia_center,
            skia_center,
            radius,
            skia_stops,
            SpreadMode::Pad,
            Transform::identity(),
        ) {
            Some(shader) => shader,
            None => {
                warn!("degenerate radial gradient skipped (radius {radius})");
                return;
            }
        };

        let mut paint = Paint::default();
        paint.shader = shader;
        paint.anti_alias = true;
        paint.blend_mode = self.current_state.blend_mode;
        self.pixmap.fill_path(
            path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Strokes a path with butt caps and miter joins
    pub fn stroke_path(&mut self, path: &Path, color: Rgba, width: f32) {
        self.stroke_with(path, color, width, LineCap::Butt, LineJoin::Miter);
    }

    /// Strokes a path with rounded caps and joins
    pub fn stroke_path_round(&mut self, path: &Path, color: Rgba, width: f32) {
        self.stroke_with(path, color, width, LineCap::Round, LineJoin::Round);
    }

    fn stroke_with(
        &mut self,
        path: &Path,
        color: Rgba,
        width: f32,
        line_cap: LineCap,
        line_join: LineJoin,
    ) {
        let paint = self.current_state.create_paint(color);
        let stroke = Stroke {
            width,
            line_cap,
            line_join,
            ..Default::default()
        };
        self
            .pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }
}

// ============================================================================
// Scoped State Guard
// ============================================================================

/// RAII guard restoring the canvas graphics state on drop
///
/// Returned by [`Canvas::scoped`]. Dereferences to [`Canvas`], so all
/// drawing and state operations are available through it.
pub struct StateScope<'a> {
    canvas: &'a mut Canvas,
}

impl Deref for StateScope<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for StateScope<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

impl Drop for StateScope<'_> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

// ============================================================================
// Blend Mode Conversion
// ============================================================================

/// Extension trait for converting BlendMode to tiny-skia
trait BlendModeExt {
    fn to_skia(self) -> SkiaBlendMode;
}

impl BlendModeExt for BlendMode {
    fn to_skia(self) -> SkiaBlendMode {
        match self {
            BlendMode::Multiply => SkiaBlendMode::Multiply,
            BlendMode::Overlay => SkiaBlendMode::Overlay,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
