//! Region geometry builder
//!
//! Turns the ordered landmark point lists into the geometry the painters
//! consume: a smoothed closed contour for fill-based regions, a centroid
//! plus extent for gradient-based regions, and bounding projections for
//! the hair band. Also hosts the small shared path builders.
//!
//! All failures here are recoverable [`RegionError`]s; the calling
//! painter logs and skips its pass, never aborting the render.

use crate::error::RegionError;
use crate::geometry::Point;
use tiny_skia::{Path, PathBuilder, Rect};

/// Arithmetic mean of all point coordinates
///
/// # Examples
///
/// ```
/// use facepaint::paint::region::centroid;
/// use facepaint::Point;
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// assert_eq!(centroid(&square).unwrap(), Point::new(5.0, 5.0));
/// ```
pub fn centroid(points: &[Point]) -> Result<Point, RegionError> {
    if points.is_empty() {
        return Err(RegionError::EmptyRegion);
    }
    let n = points.len() as f32;
    let sum = points
        .iter()
        .fold(Point::ZERO, |acc, p| Point::new(acc.x + p.x, acc.y + p.y));
    Ok(Point::new(sum.x / n, sum.y / n))
}

/// Builds a smoothed closed contour through the points
///
/// Each point connects to the midpoint of itself and its cyclic
/// successor via a quadratic curve, producing a rounded polygon rather
/// than a faceted one. This is a deliberate smoothing policy, not a
/// precision contour.
pub fn smooth_closed_path(points: &[Point]) -> Result<Path, RegionError> {
    if points.is_empty() {
        return Err(RegionError::EmptyRegion);
    }
    if points.len() < 3 {
        return Err(RegionError::TooFewPoints {
            needed: 3,
            got: points.len(),
        });
    }

    let mut pb = PathBuilder::new();
    pb.move_to(points[0].x, points[0].y);
    for i in 1..points.len() {
        let current = points[i];
        let next = points[(i + 1) % points.len()];
        let mid = current.midpoint(next);
        pb.quad_to(current.x, current.y, mid.x, mid.y);
    }
    pb.close();

    // finish() only fails for degenerate bounds (e.g. non-finite input)
    pb.finish().ok_or(RegionError::EmptyRegion)
}

/// Minimum y projection (topmost extent)
pub fn bounding_top(points: &[Point]) -> Result<f32, RegionError> {
    fold_projection(points, |p| p.y, f32::min)
}

/// Minimum x projection (leftmost extent)
pub fn bounding_left(points: &[Point]) -> Result<f32, RegionError> {
    fold_projection(points, |p| p.x, f32::min)
}

/// Maximum x projection (rightmost extent)
pub fn bounding_right(points: &[Point]) -> Result<f32, RegionError> {
    fold_projection(points, |p| p.x, f32::max)
}

fn fold_projection(
    points: &[Point],
    project: impl Fn(&Point) -> f32,
    pick: impl Fn(f32, f32) -> f32,
) -> Result<f32, RegionError> {
    points
        .iter()
        .map(project)
        .reduce(pick)
        .ok_or(RegionError::EmptyRegion)
}

/// Axis-aligned ellipse path centered on `center`
pub fn ellipse_path(center: Point, rx: f32, ry: f32) -> Option<Path> {
    let bounds = Rect::from_xywh(center.x - rx, center.y - ry, rx * 2.0, ry * 2.0)?;
    PathBuilder::from_oval(bounds)
}

/// Circle path centered on `center`
pub fn circle_path(center: Point, radius: f32) -> Option<Path> {
    PathBuilder::from_circle(center.x, center.y, radius)
}

/// Open polyline through the points, in order
pub fn polyline_path(points: &[Point]) -> Option<Path> {
    if points.len() < 2 {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(points[0].x, points[0].y);
    for point in &points[1..] {
        pb.line_to(point.x, point.y);
    }
    pb.finish()
}

/// Single straight segment from `start` to `end`
pub fn segment_path(start: Point, end: Point) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(start.x, start.y);
    pb.line_to(end.x, end.y);
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn centroid_of_square() {
        assert_eq!(centroid(&square()).unwrap(), Point::new(5.0, 5.0));
    }

    #[test]
    fn centroid_of_empty_list_fails() {
        assert_eq!(centroid(&[]), Err(RegionError::EmptyRegion));
    }

    #[test]
    fn smooth_path_requires_three_points() {
        assert_eq!(smooth_closed_path(&[]), Err(RegionError::EmptyRegion));
        assert_eq!(
            smooth_closed_path(&square()[..2]),
            Err(RegionError::TooFewPoints { needed: 3, got: 2 })
        );
        assert!(smooth_closed_path(&square()[..3]).is_ok());
    }

    #[test]
    fn smooth_path_stays_within_hull_bounds() {
        let path = smooth_closed_path(&square()).unwrap();
        let bounds = path.bounds();
        assert!(bounds.left() >= -0.5 && bounds.top() >= -0.5);
        assert!(bounds.right() <= 10.5 && bounds.bottom() <= 10.5);
    }

    #[test]
    fn bounding_projections() {
        let points = vec![
            Point::new(3.0, 7.0),
            Point::new(-2.0, 1.0),
            Point::new(9.0, 4.0),
        ];
        assert_eq!(bounding_top(&points).unwrap(), 1.0);
        assert_eq!(bounding_left(&points).unwrap(), -2.0);
        assert_eq!(bounding_right(&points).unwrap(), 9.0);
        assert_eq!(bounding_top(&[]), Err(RegionError::EmptyRegion));
    }

    #[test]
    fn ellipse_path_bounds() {
        let path = ellipse_path(Point::new(50.0, 40.0), 40.0, 30.0).unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.left(), 10.0);
        assert_eq!(bounds.top(), 10.0);
        assert_eq!(bounds.right(), 90.0);
        assert_eq!(bounds.bottom(), 70.0);
    }

    #[test]
    fn polyline_needs_two_points() {
        assert!(polyline_path(&[Point::new(0.0, 0.0)]).is_none());
        assert!(polyline_path(&square()[..2]).is_some());
    }
}
