//! Hair painter
//!
//! Fills a band from the canvas top edge down to a curved hairline
//! derived from the face contour, then scatters short strand strokes
//! inside the band for texture. The strand scatter draws from the
//! renderer's RNG and is the only source of nondeterminism in a render;
//! seed the renderer to make it reproducible.

use crate::geometry::Point;
use crate::paint::canvas::Canvas;
use crate::paint::region;
use crate::style::{BlendMode, RegionStyle};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use tiny_skia::{Path, PathBuilder};

const DEFAULT_BLEND: BlendMode = BlendMode::Multiply;
/// Pass opacity when the style does not set one
const DEFAULT_OPACITY: f32 = 0.7;

/// Hairline sits this far above the selected contour points
const HAIRLINE_LIFT: f32 = 40.0;
/// Side edges of the band drop this far below the topmost contour y
const BAND_DROP: f32 = 100.0;
/// Contour points within this distance of the topmost y count as hairline
const FILTER_BAND: f32 = 150.0;
/// Strand y positions are sampled down to this depth below the topmost y
const SCATTER_BAND: f32 = 120.0;

/// Tunable parameters for the hair strand texture
#[derive(Debug, Clone, Copy)]
pub struct HairTexture {
    /// Strand strokes scattered per render
    pub strand_count: u32,
    /// Fixed opacity of the strand pass
    pub strand_alpha: f32,
    /// Maximum downward strand length
    pub max_drop: f32,
    /// Maximum sideways strand drift, either direction
    pub max_drift: f32,
    /// Narrowest strand stroke width
    pub min_width: f32,
    /// Width varies by up to this much above the minimum
    pub width_range: f32,
    /// Per-strand brightness jitter, in channel levels either direction
    pub brightness_jitter: i32,
}

impl Default for HairTexture {
    fn default() -> Self {
        Self {
            strand_count: 80,
            strand_alpha: 0.3,
            max_drop: 30.0,
            max_drift: 10.0,
            min_width: 0.5,
            width_range: 1.5,
            brightness_jitter: 20,
        }
    }
}

pub(crate) fn paint(
    canvas: &mut Canvas,
    face: &[Point],
    style: &RegionStyle,
    texture: &HairTexture,
    rng: &mut StdRng,
) {
    let (top_y, left_x, right_x) = match face_bounds(face) {
        Some(bounds) => bounds,
        None => {
            debug!("hair painter skipped: missing face landmarks");
            return;
        }
    };

    let width = canvas.width() as f32;
    let Some(band) = band_path(face, width, top_y) else {
        debug!("hair painter skipped: degenerate band path");
        return;
    };

    let mut scope = canvas.scoped();
    scope.set_blend_mode(style.blend_mode.unwrap_or(DEFAULT_BLEND));
    scope.set_opacity(style.opacity.unwrap_or(DEFAULT_OPACITY));
    scope.fill_path(&band, style.color);

    if texture.strand_count == 0 || right_x <= left_x {
        return;
    }

    // strand pass runs at its own fixed opacity, not the style's
    let mut strands = scope.scoped();
    strands.set_opacity(texture.strand_alpha);

    for _ in 0..texture.strand_count {
        let x = rng.gen_range(left_x..right_x);
        let y = rng.gen::<f32>() * (top_y + SCATTER_BAND);
        // rejection keeps the sample density uniform over the band
        if y >= top_y + BAND_DROP {
            continue;
        }

        let drift = rng.gen::<f32>() * (texture.max_drift * 2.0) - texture.max_drift;
        let drop = rng.gen::<f32>() * texture.max_drop;
        let jitter_span = (texture.brightness_jitter * 2) as f32;
        let jitter = (rng.gen::<f32>() * jitter_span) as i32 - texture.brightness_jitter;
        let strand_width = rng.gen::<f32>() * texture.width_range + texture.min_width;

        let start = Point::new(x, y);
        let end = Point::new(x + drift, y + drop);
        if let Some(strand) = region::segment_path(start, end) {
            strands.stroke_path(&strand, style.color.adjust_brightness(jitter), strand_width);
        }
    }
}

fn face_bounds(face: &[Point]) -> Option<(f32, f32, f32)> {
    let top = region::bounding_top(face).ok()?;
    let left = region::bounding_left(face).ok()?;
    let right = region::bounding_right(face).ok()?;
    Some((top, left, right))
}

/// Band outline: canvas top edge, down the right side, back right-to-left
/// along the lifted hairline, then up the left side.
fn band_path(face: &[Point], width: f32, top_y: f32) -> Option<Path> {
    let mut hairline: Vec<Point> = face
        .iter()
        .copied()
        .filter(|p| p.y < top_y + FILTER_BAND)
        .collect();
    hairline.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(width, 0.0);
    pb.line_to(width, top_y + BAND_DROP);
    for point in hairline.iter().rev() {
        pb.line_to(point.x, point.y - HAIRLINE_LIFT);
    }
    pb.line_to(0.0, top_y + BAND_DROP);
    pb.close();
    pb.finish()
}
