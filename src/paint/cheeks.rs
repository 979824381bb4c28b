//! Cheeks painter
//!
//! Soft circular blush centered on each cheek centroid. Uses more
//! gradation steps than the eye shadow by design: blush has to look
//! softer and more diffuse than eyeshadow.

use crate::geometry::Point;
use crate::paint::canvas::Canvas;
use crate::paint::region;
use crate::style::{BlendMode, RegionStyle};
use log::debug;

/// Blush brightens and warms rather than darkens, so cheeks default to overlay
const DEFAULT_BLEND: BlendMode = BlendMode::Overlay;
/// Pass opacity when the style does not set one
const DEFAULT_OPACITY: f32 = 0.5;

/// Blush radius at base-image resolution
const BLUSH_RADIUS: f32 = 50.0;

pub(crate) fn paint(canvas: &mut Canvas, left: &[Point], right: &[Point], style: &RegionStyle) {
    if left.is_empty() || right.is_empty() {
        debug!("cheeks painter skipped: missing cheek landmarks");
        return;
    }

    let mut scope = canvas.scoped();
    scope.set_blend_mode(style.blend_mode.unwrap_or(DEFAULT_BLEND));
    scope.set_opacity(style.opacity.unwrap_or(DEFAULT_OPACITY));

    for points in [left, right] {
        let center = match region::centroid(points) {
            Ok(c) => c,
            Err(err) => {
                debug!("cheek skipped: {err}");
                continue;
            }
        };

        let Some(circle) = region::circle_path(center, BLUSH_RADIUS) else {
            debug!("cheek skipped: degenerate circle at {center}");
            continue;
        };

        scope.fill_radial_gradient(
            &circle,
            center,
            BLUSH_RADIUS,
            &[
                (0.0, style.color),
                (0.3, style.color.with_alpha(0.7)),
                (0.6, style.color.with_alpha(0.4)),
                (0.9, style.color.with_alpha(0.1)),
                (1.0, style.color.with_alpha(0.0)),
            ],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgba;

    fn cheek(cx: f32, cy: f32) -> Vec<Point> {
        vec![
            Point::new(cx - 4.0, cy),
            Point::new(cx, cy - 4.0),
            Point::new(cx + 4.0, cy),
        ]
    }

    #[test]
    fn skips_when_either_cheek_missing() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        paint(
            &mut canvas,
            &[],
            &cheek(60.0, 60.0),
            &RegionStyle::new(Rgba::rgb(255, 120, 120)),
        );
        assert!(canvas.pixmap().data().iter().all(|&b| b == 0));
    }

    #[test]
    fn blush_fades_with_four_steps() {
        let mut canvas = Canvas::new(240, 120).unwrap();
        paint(
            &mut canvas,
            &cheek(60.0, 60.0),
            &cheek(180.0, 60.0),
            &RegionStyle::new(Rgba::rgb(255, 120, 120)),
        );

        let data = canvas.pixmap().data();
        let alpha_at = |x: u32, y: u32| data[((y * 240 + x) * 4 + 3) as usize];
        let center = alpha_at(60, 60);
        let mid = alpha_at(60 + 25, 60);
        let rim = alpha_at(60 + 46, 60);
        assert!(center > mid, "center {center} mid {mid}");
        assert!(mid > rim, "mid {mid} rim {rim}");
        assert!(alpha_at(180, 60) > 0);
    }
}
