//! Eyebrows painter
//!
//! Strokes a connected polyline through each brow's points, then lays
//! short vertical tick strokes along it to suggest individual hairs.
//! The ticks are a deliberate low-fidelity hand-drawn approximation,
//! not a hair-simulation system.

use crate::geometry::Point;
use crate::paint::canvas::Canvas;
use crate::paint::region;
use crate::style::{BlendMode, RegionStyle};
use log::debug;

const DEFAULT_BLEND: BlendMode = BlendMode::Multiply;
/// Pass opacity when the style does not set one
const DEFAULT_OPACITY: f32 = 0.8;

/// Tunable parameters for the brow hair texture
///
/// Defaults preserve visual parity with the original tick layout: five
/// 1.5px-wide ticks per sampled point, spread on 2px horizontal steps,
/// at 80% of the configured opacity.
#[derive(Debug, Clone, Copy)]
pub struct BrowTexture {
    /// Main polyline stroke width
    pub stroke_width: f32,
    /// Ticks are drawn at every `point_stride`-th polyline point
    pub point_stride: usize,
    /// Ticks per sampled point
    pub tick_count: u32,
    /// Horizontal distance between adjacent ticks
    pub tick_step: f32,
    /// Half-length of each vertical tick
    pub tick_half_len: f32,
    /// Tick stroke width
    pub tick_width: f32,
    /// Tick opacity relative to the base opacity
    pub tick_alpha_scale: f32,
}

impl Default for BrowTexture {
    fn default() -> Self {
        Self {
            stroke_width: 4.0,
            point_stride: 2,
            tick_count: 5,
            tick_step: 2.0,
            tick_half_len: 3.0,
            tick_width: 1.5,
            tick_alpha_scale: 0.8,
        }
    }
}

pub(crate) fn paint(
    canvas: &mut Canvas,
    left: &[Point],
    right: &[Point],
    style: &RegionStyle,
    texture: &BrowTexture,
) {
    if left.is_empty() || right.is_empty() {
        debug!("eyebrows painter skipped: missing brow landmarks");
        return;
    }

    let opacity = style.opacity.unwrap_or(DEFAULT_OPACITY);
    let mut scope = canvas.scoped();
    scope.set_blend_mode(style.blend_mode.unwrap_or(DEFAULT_BLEND));
    scope.set_opacity(opacity);

    for points in [left, right] {
        let Some(path) = region::polyline_path(points) else {
            debug!("brow skipped: fewer than two points");
            continue;
        };
        scope.stroke_path_round(&path, style.color, texture.stroke_width);

        // hair texture: vertical ticks fanned around every second point
        let mut ticks = scope.scoped();
        ticks.set_opacity(opacity * texture.tick_alpha_scale);

        let stride = texture.point_stride.max(1);
        let spread = texture.tick_count as i32 / 2;
        for point in points[..points.len() - 1].iter().step_by(stride) {
            for j in 0..texture.tick_count {
                let x = point.x + (j as i32 - spread) as f32 * texture.tick_step;
                let top = Point::new(x, point.y - texture.tick_half_len);
                let bottom = Point::new(x, point.y + texture.tick_half_len);
                if let Some(tick) = region::segment_path(top, bottom) {
                    ticks.stroke_path_round(&tick, style.color, texture.tick_width);
                }
            }
        }
    }
}
