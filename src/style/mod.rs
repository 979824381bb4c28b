//! Style configuration for a single render pass
//!
//! A [`MakeupConfig`] holds one optional [`RegionStyle`] per cosmetic
//! region. The upstream UI mutates its own copy one region at a time and
//! passes an immutable snapshot into every
//! [`render`](crate::paint::MakeupRenderer::render) call; the renderer
//! never reaches into shared state.
//!
//! Absence of an entry means the region is not painted this frame.
//! Presence with an explicit `opacity` of 0.0 still runs the painter
//! (the pass is visually transparent) so the UI's "applied" bookkeeping
//! stays honest; an omitted opacity selects the painter's per-region
//! default instead.

pub mod color;

pub use color::{ColorParseError, Rgba};

use serde::{Deserialize, Serialize};

/// Compositing operator for a region's paint pass
///
/// `Multiply` darkens the backdrop, simulating pigment on skin.
/// `Overlay` boosts contrast, simulating shimmer and gloss highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    Multiply,
    Overlay,
}

/// Cosmetic parameters for one facial region
///
/// # Examples
///
/// ```
/// use facepaint::{BlendMode, RegionStyle, Rgba};
///
/// let lips = RegionStyle::new(Rgba::parse("#cc2244").unwrap())
///     .with_opacity(0.8)
///     .with_gloss();
/// assert_eq!(lips.blend_mode, None); // painter default (multiply)
/// assert_eq!(lips.opacity, Some(0.8));
/// assert!(lips.gloss);
/// # let _ = BlendMode::Overlay;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStyle {
    /// Base pigment color
    pub color: Rgba,
    /// Overall pass opacity, 0.0-1.0; `None` selects the painter's
    /// per-region default
    #[serde(default)]
    pub opacity: Option<f32>,
    /// Compositing operator; `None` selects the painter's per-region default
    #[serde(default)]
    pub blend_mode: Option<BlendMode>,
    /// Gold shimmer overlay (eyes only; ignored elsewhere)
    #[serde(default)]
    pub shimmer: bool,
    /// Radial gloss highlight (lips only; ignored elsewhere)
    #[serde(default)]
    pub gloss: bool,
}

impl RegionStyle {
    /// Creates a style with painter-default blending and opacity
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            opacity: None,
            blend_mode: None,
            shimmer: false,
            gloss: false,
        }
    }

    /// Sets an explicit pass opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Sets an explicit blend mode
    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = Some(mode);
        self
    }

    /// Enables the shimmer overlay
    pub fn with_shimmer(mut self) -> Self {
        self.shimmer = true;
        self
    }

    /// Enables the gloss highlight
    pub fn with_gloss(mut self) -> Self {
        self.gloss = true;
        self
    }
}

/// Per-region style snapshot consumed by one render call
///
/// One optional entry per cosmetic region. The renderer treats this as
/// read-only; set, replace, or clear entries upstream between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MakeupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lips: Option<RegionStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyes: Option<RegionStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheeks: Option<RegionStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrows: Option<RegionStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair: Option<RegionStyle>,
}

impl MakeupConfig {
    /// Returns true if no region is enabled
    pub fn is_empty(&self) -> bool {
        self.lips.is_none()
            && self.eyes.is_none()
            && self.cheeks.is_none()
            && self.eyebrows.is_none()
            && self.hair.is_none()
    }
}
