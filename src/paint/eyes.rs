//! Eyes painter
//!
//! Paints a soft eyeshadow ellipse above each eye centroid, filled with
//! a graduated radial falloff so the shadow looks blended rather than a
//! hard-edged disk. An optional shimmer pass overlays a fixed gold
//! radial gradient, independent of the configured color.

use crate::geometry::Point;
use crate::paint::canvas::Canvas;
use crate::paint::region;
use crate::style::{BlendMode, RegionStyle, Rgba};
use log::debug;

const DEFAULT_BLEND: BlendMode = BlendMode::Multiply;
/// Pass opacity when the style does not set one
const DEFAULT_OPACITY: f32 = 0.6;

/// Shadow ellipse half-width at base-image resolution
const SHADOW_RX: f32 = 40.0;
/// Shadow ellipse half-height
const SHADOW_RY: f32 = 30.0;
/// Shadow center sits this far above the eye centroid
const SHADOW_LIFT: f32 = 10.0;
/// Radial falloff radius
const SHADOW_RADIUS: f32 = 40.0;

/// Shimmer center lift above the eye centroid
const SHIMMER_LIFT: f32 = 8.0;
/// Shimmer radial radius
const SHIMMER_RADIUS: f32 = 25.0;
/// Fixed shimmer pass opacity
const SHIMMER_OPACITY: f32 = 0.4;

pub(crate) fn paint(canvas: &mut Canvas, left: &[Point], right: &[Point], style: &RegionStyle) {
    if left.is_empty() || right.is_empty() {
        debug!("eyes painter skipped: missing eye landmarks");
        return;
    }

    let mut scope = canvas.scoped();
    scope.set_blend_mode(style.blend_mode.unwrap_or(DEFAULT_BLEND));
    scope.set_opacity(style.opacity.unwrap_or(DEFAULT_OPACITY));

    for points in [left, right] {
        let centroid = match region::centroid(points) {
            Ok(c) => c,
            Err(err) => {
                debug!("eye skipped: {err}");
                continue;
            }
        };
        let center = centroid.translate(0.0, -SHADOW_LIFT);

        let Some(ellipse) = region::ellipse_path(center, SHADOW_RX, SHADOW_RY) else {
            debug!("eye skipped: degenerate ellipse at {center}");
            continue;
        };

        // graduated falloff: full color through two reduced stops to clear
        scope.fill_radial_gradient(
            &ellipse,
            center,
            SHADOW_RADIUS,
            &[
                (0.0, style.color),
                (0.4, style.color.with_alpha(0.6)),
                (0.8, style.color.with_alpha(0.2)),
                (1.0, style.color.with_alpha(0.0)),
            ],
        );

        if style.shimmer {
            // nested scope so blend/opacity come back for the next eye
            let mut shimmer = scope.scoped();
            shimmer.set_blend_mode(BlendMode::Overlay);
            shimmer.set_opacity(SHIMMER_OPACITY);

            let shimmer_center = centroid.translate(0.0, -SHIMMER_LIFT);
            shimmer.fill_radial_gradient(
                &ellipse,
                shimmer_center,
                SHIMMER_RADIUS,
                &[
                    (0.0, Rgba::GOLD.with_alpha(0.8)),
                    (0.6, Rgba::GOLD.with_alpha(0.3)),
                    (1.0, Rgba::GOLD.with_alpha(0.0)),
                ],
            );
        }
    }
}
