//! Age range estimation.
//!
//! With landmarks, an ordered cascade of proportion rules picks a base
//! range which is then refined by face area. Without landmarks only the
//! face area is used.

use crate::measurements::FaceMeasurements;
use crate::types::AgeEstimate;

/// A guarded rule in the age cascade.
#[derive(Clone, Copy)]
pub struct AgeRule {
    pub name: &'static str,
    pub applies: fn(&FaceMeasurements) -> bool,
    pub range: AgeEstimate,
}

/// Rules are tried top to bottom and the first match wins. All
/// comparisons are strict, so a ratio sitting exactly on a threshold
/// falls through to the next rule.
pub static AGE_RULES: [AgeRule; 6] = [
    AgeRule {
        name: "large-eyes-wide-face",
        applies: |m| m.eye_to_face_ratio > 0.45 && m.aspect_ratio > 0.8,
        range: AgeEstimate::new(8, 16),
    },
    AgeRule {
        name: "large-eyes",
        applies: |m| m.eye_to_face_ratio > 0.45,
        range: AgeEstimate::new(12, 20),
    },
    AgeRule {
        name: "medium-eyes",
        applies: |m| m.eye_to_face_ratio > 0.38,
        range: AgeEstimate::new(16, 28),
    },
    AgeRule {
        name: "narrow-face",
        applies: |m| m.aspect_ratio < 0.7,
        range: AgeEstimate::new(30, 50),
    },
    AgeRule {
        name: "wide-face",
        applies: |m| m.aspect_ratio > 0.85,
        range: AgeEstimate::new(28, 48),
    },
    AgeRule {
        name: "balanced",
        applies: |_| true,
        range: AgeEstimate::new(22, 38),
    },
];

/// Faces larger than this are assumed to be close-up adults.
pub const LARGE_FACE_AREA: f64 = 40_000.0;
/// Faces smaller than this pull the range towards children.
pub const SMALL_FACE_AREA: f64 = 10_000.0;

/// Evaluate the cascade, returning the first matching rule.
pub fn cascade_age(m: &FaceMeasurements) -> &'static AgeRule {
    // the last rule always applies
    AGE_RULES
        .iter()
        .find(|rule| (rule.applies)(m))
        .unwrap_or(&AGE_RULES[AGE_RULES.len() - 1])
}

/// Refine a cascade result by face area.
pub fn adjust_for_area(range: AgeEstimate, area: f64) -> AgeEstimate {
    if area > LARGE_FACE_AREA {
        AgeEstimate::new(range.min.max(25), range.max.min(55))
    } else if area < SMALL_FACE_AREA {
        AgeEstimate::new(range.min.saturating_sub(5).max(5), range.max.min(25))
    } else {
        range
    }
}

/// Age from face area alone, used when no landmarks were detected.
pub fn fallback_age(area: f64) -> AgeEstimate {
    if area < 8_000.0 {
        AgeEstimate::new(8, 18)
    } else if area < 20_000.0 {
        AgeEstimate::new(18, 30)
    } else {
        AgeEstimate::new(25, 45)
    }
}
