//! Facial proportions derived from a detected face.
//!
//! Every rule in the age and gender estimators reads from a
//! [`FaceMeasurements`], so the ratios and their fallbacks are computed
//! in exactly one place.

use crate::types::{FaceGeometry, LandmarkSet};

/// Eye-to-face ratio used when the eyes were not both detected.
pub const DEFAULT_EYE_TO_FACE_RATIO: f64 = 0.4;

/// Nose-to-face ratio used when no nose landmark was detected.
pub const DEFAULT_NOSE_TO_FACE_RATIO: f64 = 0.3;

/// Typical nose width as a fraction of face width.
pub const NOSE_WIDTH_FRACTION: f64 = 0.32;

/// Measurements taken once per face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMeasurements {
    /// Bounding box area (width * height)
    pub area: f64,

    /// Width / height of the bounding box
    pub aspect_ratio: f64,

    /// Distance between eye centers, 0 when either eye is missing
    pub eye_distance: f64,

    /// Eye distance relative to face width, or [`DEFAULT_EYE_TO_FACE_RATIO`]
    pub eye_to_face_ratio: f64,

    /// Estimated nose width, 0 when the nose base was not detected.
    ///
    /// Only the presence of the nose landmark matters; its position is ignored.
    pub nose_width: f64,

    /// Nose width relative to face width, or [`DEFAULT_NOSE_TO_FACE_RATIO`]
    pub nose_to_face_ratio: f64,

    /// Smiling probability in [0,1], if the detector classified it
    pub expression: Option<f64>,
}

impl FaceMeasurements {
    pub fn derive(
        geometry: &FaceGeometry,
        landmarks: Option<&LandmarkSet>,
        expression: Option<f64>,
    ) -> Self {
        let width = geometry.width;

        let eye_distance = landmarks
            .and_then(LandmarkSet::eye_distance)
            .unwrap_or(0.0);
        let nose_width = match landmarks.and_then(|lm| lm.nose_base) {
            Some(_) => width * NOSE_WIDTH_FRACTION,
            None => 0.0,
        };

        let eye_to_face_ratio = if eye_distance > 0.0 {
            eye_distance / width
        } else {
            DEFAULT_EYE_TO_FACE_RATIO
        };
        let nose_to_face_ratio = if nose_width > 0.0 {
            nose_width / width
        } else {
            DEFAULT_NOSE_TO_FACE_RATIO
        };

        Self {
            area: geometry.area(),
            aspect_ratio: geometry.aspect_ratio(),
            eye_distance,
            eye_to_face_ratio,
            nose_width,
            nose_to_face_ratio,
            expression,
        }
    }
}
