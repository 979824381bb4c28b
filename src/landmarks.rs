//! Facial landmark data contract
//!
//! A [`LandmarkSet`] is produced once per image by the external detector
//! and stays immutable for the lifetime of a preview session; processing
//! a new image replaces it wholesale. The detector maps its raw mesh
//! (≥468 points) into the eight named region lists below, in the pixel
//! coordinate space of the supplied image (not normalized).
//!
//! Each list is either empty (feature undetected) or contains at least
//! three points forming a boundary traversable in order. Detection
//! failure (`detect(image) -> null` upstream) means the renderer is never
//! invoked; an empty *individual* list only skips that region's painter.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// The eight named ordered point lists marking facial regions
///
/// # Examples
///
/// ```
/// use facepaint::{LandmarkSet, Point};
///
/// let mut landmarks = LandmarkSet::default();
/// landmarks.lips = vec![
///     Point::new(120.0, 200.0),
///     Point::new(140.0, 195.0),
///     Point::new(160.0, 200.0),
///     Point::new(140.0, 210.0),
/// ];
/// assert!(!landmarks.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkSet {
    /// Combined outer + inner lip boundary
    #[serde(default)]
    pub lips: Vec<Point>,
    #[serde(default)]
    pub left_eye: Vec<Point>,
    #[serde(default)]
    pub right_eye: Vec<Point>,
    #[serde(default)]
    pub left_cheek: Vec<Point>,
    #[serde(default)]
    pub right_cheek: Vec<Point>,
    #[serde(default)]
    pub left_eyebrow: Vec<Point>,
    #[serde(default)]
    pub right_eyebrow: Vec<Point>,
    /// Face contour; used to infer the hair region
    #[serde(default)]
    pub face: Vec<Point>,
}

impl LandmarkSet {
    /// Returns true if every region list is empty
    pub fn is_empty(&self) -> bool {
        self.lips.is_empty()
            && self.left_eye.is_empty()
            && self.right_eye.is_empty()
            && self.left_cheek.is_empty()
            && self.right_cheek.is_empty()
            && self.left_eyebrow.is_empty()
            && self.right_eyebrow.is_empty()
            && self.face.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(LandmarkSet::default().is_empty());
    }

    #[test]
    fn deserializes_detector_json() {
        // Shape emitted by the upstream detector: camelCase keys, point
        // structs in image pixel space, absent regions defaulting to empty.
        let json = r#"{
            "lips": [
                { "x": 10.0, "y": 20.0 },
                { "x": 30.0, "y": 18.0 },
                { "x": 22.0, "y": 28.0 }
            ],
            "leftEye": [
                { "x": 5.0, "y": 6.0 },
                { "x": 9.0, "y": 5.0 },
                { "x": 7.0, "y": 8.0 }
            ]
        }"#;
        let landmarks: LandmarkSet = serde_json::from_str(json).unwrap();
        assert_eq!(landmarks.lips.len(), 3);
        assert_eq!(landmarks.left_eye[1], Point::new(9.0, 5.0));
        assert!(landmarks.right_eye.is_empty());
        assert!(landmarks.face.is_empty());
    }
}
