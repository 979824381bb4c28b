//! Core geometry type for landmark and painting coordinates
//!
//! This module provides the pixel-space point shared by the landmark
//! contract and the painters. All units are pixels in the base image's
//! coordinate space.
//!
//! # Coordinate System
//!
//! The coordinate system has its origin at the top-left corner:
//! - Positive X extends to the right
//! - Positive Y extends downward

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point in image pixel space
///
/// Represents a coordinate in the base image's coordinate system.
/// The origin (0, 0) is at the top-left corner.
///
/// # Examples
///
/// ```
/// use facepaint::Point;
///
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::ZERO;
///
/// assert_eq!(p1.x, 10.0);
/// assert_eq!(p1.y, 20.0);
/// assert_eq!(p2, Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (horizontal position, increases to the right)
    pub x: f32,
    /// Y coordinate (vertical position, increases downward)
    pub y: f32,
}

impl Point {
    /// The zero point at the origin (0, 0)
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point at the given coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translates this point by the given offsets
    ///
    /// # Examples
    ///
    /// ```
    /// use facepaint::Point;
    ///
    /// let p = Point::new(10.0, 20.0).translate(5.0, -3.0);
    /// assert_eq!(p, Point::new(15.0, 17.0));
    /// ```
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Midpoint between this point and another
    ///
    /// Used by the region builder's contour smoothing.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
