use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D point in the detector's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let d = *other - *self;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// A bounding box defined by top-left corner, width, and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The box's size, dropping its position.
    pub fn geometry(&self) -> FaceGeometry {
        FaceGeometry::new(self.width, self.height)
    }

    /// Express this box as fractions [0,1] of an image of the given size.
    pub fn normalized(&self, image_width: f64, image_height: f64) -> Self {
        Self {
            x: self.x / image_width,
            y: self.y / image_height,
            width: self.width / image_width,
            height: self.height / image_height,
        }
    }
}

/// Width and height of a detected face.
///
/// Both values must be positive and in the same unit. Nothing here
/// checks that; zero sizes produce non-finite ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceGeometry {
    pub width: f64,
    pub height: f64,
}

impl FaceGeometry {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Landmarks reported by the detector. Each point is independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_eye: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_eye: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nose_base: Option<Point>,
}

impl LandmarkSet {
    pub fn with_eyes(mut self, left: Point, right: Point) -> Self {
        self.left_eye = Some(left);
        self.right_eye = Some(right);
        self
    }

    pub fn with_nose_base(mut self, nose_base: Point) -> Self {
        self.nose_base = Some(nose_base);
        self
    }

    /// Distance between the eye centers, if both were detected.
    pub fn eye_distance(&self) -> Option<f64> {
        match (self.left_eye, self.right_eye) {
            (Some(l), Some(r)) => Some(l.distance(&r)),
            _ => None,
        }
    }
}

/// Estimated age interval in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeEstimate {
    pub min: u32,
    pub max: u32,
}

impl AgeEstimate {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderEstimate {
    pub label: Gender,
    /// Heuristic certainty, always within [0.58, 0.90] once estimated.
    pub confidence: f64,
}

impl GenderEstimate {
    pub const fn new(label: Gender, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

/// Both attributes estimated for a single face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceAttributes {
    pub age: AgeEstimate,
    pub gender: GenderEstimate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);

        let diff = b - a;
        assert_eq!(diff, Point::new(3.0, 4.0));
    }

    #[test]
    fn bounding_box_normalization() {
        let bbox = BoundingBox::new(100.0, 50.0, 200.0, 250.0);
        let n = bbox.normalized(400.0, 500.0);
        assert!((n.x - 0.25).abs() < 1e-12);
        assert!((n.y - 0.1).abs() < 1e-12);
        assert!((n.width - 0.5).abs() < 1e-12);
        assert!((n.height - 0.5).abs() < 1e-12);
        assert_eq!(bbox.geometry(), FaceGeometry::new(200.0, 250.0));
        assert_eq!(bbox.area(), 50_000.0);
    }

    #[test]
    fn eye_distance_needs_both_eyes() {
        let only_left = LandmarkSet {
            left_eye: Some(Point::new(0.0, 0.0)),
            ..Default::default()
        };
        assert_eq!(only_left.eye_distance(), None);

        let both = LandmarkSet::default().with_eyes(Point::new(10.0, 10.0), Point::new(40.0, 50.0));
        assert_eq!(both.eye_distance(), Some(50.0));
    }

    #[test]
    fn gender_serializes_lowercase() {
        let g = GenderEstimate::new(Gender::Female, 0.7);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"label":"female","confidence":0.7}"#);
        assert_eq!(Gender::Male.to_string(), "male");
    }

    #[test]
    fn landmarks_deserialize_with_missing_points() {
        let lm: LandmarkSet = serde_json::from_str(r#"{"nose_base":{"x":1.0,"y":2.0}}"#).unwrap();
        assert_eq!(lm.left_eye, None);
        assert_eq!(lm.right_eye, None);
        assert_eq!(lm.nose_base, Some(Point::new(1.0, 2.0)));
    }
}
