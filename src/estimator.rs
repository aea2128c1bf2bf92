//! Age and gender estimation for a single detected face.

use tracing::trace;

use crate::age::{adjust_for_area, cascade_age, fallback_age};
use crate::gender::{fallback_gender, resolve_gender, score_gender};
use crate::measurements::FaceMeasurements;
use crate::types::{AgeEstimate, FaceAttributes, FaceGeometry, GenderEstimate, LandmarkSet};

pub const MIN_AGE: u32 = 5;
/// Highest value the lower age bound may take.
pub const MAX_AGE_FLOOR: u32 = 70;
pub const MAX_AGE: u32 = 75;
/// Narrowest reported age interval.
pub const MIN_AGE_SPAN: u32 = 3;

pub const MIN_CONFIDENCE: f64 = 0.58;
pub const MAX_CONFIDENCE: f64 = 0.90;

/// Which evidence an estimate was based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// A landmark set was supplied, even if all its points are missing.
    Landmarks,
    /// Bounding box only.
    Geometry,
}

/// Estimate age range and gender for one face.
///
/// `expression` is the smiling probability in [0,1], if classified. The
/// function is pure and never fails; `geometry` must have a positive
/// width and height.
pub fn estimate(
    geometry: &FaceGeometry,
    landmarks: Option<&LandmarkSet>,
    expression: Option<f64>,
) -> FaceAttributes {
    let (branch, age, gender) = match landmarks {
        Some(lm) => {
            let m = FaceMeasurements::derive(geometry, Some(lm), expression);
            let rule = cascade_age(&m);
            trace!(
                rule = rule.name,
                eye_to_face = m.eye_to_face_ratio,
                aspect = m.aspect_ratio,
                "age rule"
            );
            let age = adjust_for_area(rule.range, m.area);
            let gender = resolve_gender(&score_gender(&m), m.aspect_ratio);
            (Branch::Landmarks, age, gender)
        }
        None => (
            Branch::Geometry,
            fallback_age(geometry.area()),
            fallback_gender(geometry.aspect_ratio()),
        ),
    };

    let attrs = FaceAttributes {
        age: clamp_age(age),
        gender: clamp_gender(gender),
    };
    trace!(?branch, ?attrs, "estimated face attributes");
    attrs
}

/// Force an age range into [5,70] / [8,75] with a span of at least three years.
pub fn clamp_age(age: AgeEstimate) -> AgeEstimate {
    let min = age.min.clamp(MIN_AGE, MAX_AGE_FLOOR);
    let max = age.max.min(MAX_AGE).max(min + MIN_AGE_SPAN);
    AgeEstimate::new(min, max)
}

pub fn clamp_gender(gender: GenderEstimate) -> GenderEstimate {
    GenderEstimate::new(
        gender.label,
        gender.confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
    )
}
