//! Painting and rasterization
//!
//! This module turns landmark point lists and region styles into pixels.
//!
//! # Responsibilities
//!
//! - **Canvas**: raster surface with scoped opacity/blend state
//! - **Region geometry**: centroids, smoothed contours, path builders
//! - **Painters**: one module per cosmetic region
//! - **Renderer**: orchestrates a full compositing pass
//!
//! # Painting Order
//!
//! Regions composite back to front in a fixed order:
//!
//! 1. Hair
//! 2. Cheeks
//! 3. Eyes
//! 4. Eyebrows
//! 5. Lips
//!
//! Each painter opens a [`StateScope`] for its pass, so opacity and
//! blend mode never leak between regions, whatever the exit path.

pub mod canvas;
pub mod region;
pub mod renderer;

mod brows;
mod cheeks;
mod eyes;
mod hair;
mod lips;

pub use brows::BrowTexture;
pub use canvas::{Canvas, StateScope};
pub use hair::HairTexture;
pub use renderer::{MakeupRenderer, MakeupRendererBuilder};
