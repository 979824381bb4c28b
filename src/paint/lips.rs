//! Lips painter
//!
//! Fills the smoothed closed contour of the combined outer+inner lip
//! boundary. The inner boundary is deliberately NOT subtracted as a
//! hole: the rendered fill is a single blended region, not an
//! anatomically hollow one. Preserve this behavior; do not turn it into
//! an annulus without an explicit product request.

use crate::geometry::Point;
use crate::paint::canvas::Canvas;
use crate::paint::region;
use crate::style::{BlendMode, RegionStyle, Rgba};
use log::debug;

/// Pigment darkens skin, so lips default to multiply
const DEFAULT_BLEND: BlendMode = BlendMode::Multiply;
/// Pass opacity when the style does not set one
const DEFAULT_OPACITY: f32 = 0.8;

/// Gloss highlight radius, in base-image pixels
const GLOSS_RADIUS: f32 = 20.0;
/// Highlight center sits this far above the lip centroid
const GLOSS_CENTER_LIFT: f32 = 3.0;
/// Gloss pass opacity, independent of the base opacity setting
const GLOSS_OPACITY: f32 = 0.3;
/// White intensity at the highlight core
const GLOSS_CORE_ALPHA: f32 = 0.8;

pub(crate) fn paint(canvas: &mut Canvas, points: &[Point], style: &RegionStyle) {
    let path = match region::smooth_closed_path(points) {
        Ok(path) => path,
        Err(err) => {
            debug!("lips painter skipped: {err}");
            return;
        }
    };

    let mut scope = canvas.scoped();
    scope.set_blend_mode(style.blend_mode.unwrap_or(DEFAULT_BLEND));
    scope.set_opacity(style.opacity.unwrap_or(DEFAULT_OPACITY));
    scope.fill_path(&path, style.color);

    if style.gloss {
        let Ok(centroid) = region::centroid(points) else {
            return; // unreachable once the contour built, but never panic here
        };
        let center = centroid.translate(0.0, -GLOSS_CENTER_LIFT);

        scope.set_blend_mode(BlendMode::Overlay);
        scope.set_opacity(GLOSS_OPACITY);
        // the highlight is clipped to the lip contour by refilling the same path
        scope.fill_radial_gradient(
            &path,
            center,
            GLOSS_RADIUS,
            &[
                (0.0, Rgba::WHITE.with_alpha(GLOSS_CORE_ALPHA)),
                (1.0, Rgba::WHITE.with_alpha(0.0)),
            ],
        );
    }
}
