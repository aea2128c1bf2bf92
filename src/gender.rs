//! Gender classification by weighted facial factors.
//!
//! Each factor can add weight to at most one side. The balance between
//! the two accumulated scores picks the label and its confidence.

use tracing::trace;

use crate::measurements::FaceMeasurements;
use crate::types::{Gender, GenderEstimate};

/// Label and confidence used when no factor produces a score.
pub const DEFAULT_GENDER: GenderEstimate = GenderEstimate::new(Gender::Male, 0.65);

/// Confidence reported when the scores are too close to call.
pub const TIE_BREAK_CONFIDENCE: f64 = 0.62;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    /// Face width relative to height, as a jaw width proxy
    Aspect,
    EyeSpacing,
    NoseWidth,
    /// Oval versus square outline
    Elongation,
    /// Smiling probability
    Expression,
}

/// One conditional contribution to a side's score.
#[derive(Clone, Copy)]
pub struct Contribution {
    pub factor: Factor,
    pub applies: fn(&FaceMeasurements) -> bool,
    pub target: Gender,
    pub weight: f64,
}

/// Evaluated in order. The two entries of a factor are mutually exclusive.
pub static GENDER_FACTORS: [Contribution; 10] = [
    Contribution {
        factor: Factor::Aspect,
        applies: |m| m.aspect_ratio > 0.82,
        target: Gender::Male,
        weight: 2.0,
    },
    Contribution {
        factor: Factor::Aspect,
        applies: |m| m.aspect_ratio < 0.72,
        target: Gender::Female,
        weight: 2.0,
    },
    Contribution {
        factor: Factor::EyeSpacing,
        applies: |m| m.eye_to_face_ratio > 0.42,
        target: Gender::Female,
        weight: 1.5,
    },
    Contribution {
        factor: Factor::EyeSpacing,
        applies: |m| m.eye_to_face_ratio < 0.36,
        target: Gender::Male,
        weight: 1.5,
    },
    Contribution {
        factor: Factor::NoseWidth,
        applies: |m| m.nose_to_face_ratio > 0.35,
        target: Gender::Male,
        weight: 1.5,
    },
    Contribution {
        factor: Factor::NoseWidth,
        applies: |m| m.nose_to_face_ratio < 0.28,
        target: Gender::Female,
        weight: 1.5,
    },
    Contribution {
        factor: Factor::Elongation,
        applies: |m| m.aspect_ratio < 0.75,
        target: Gender::Female,
        weight: 1.0,
    },
    Contribution {
        factor: Factor::Elongation,
        applies: |m| m.aspect_ratio > 0.85,
        target: Gender::Male,
        weight: 1.0,
    },
    Contribution {
        factor: Factor::Expression,
        applies: |m| m.expression.is_some_and(|p| p > 0.75),
        target: Gender::Female,
        weight: 0.5,
    },
    Contribution {
        factor: Factor::Expression,
        applies: |m| m.expression.is_some_and(|p| p < 0.3),
        target: Gender::Male,
        weight: 0.5,
    },
];

/// Accumulated weight per side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenderScore {
    pub male: f64,
    pub female: f64,
}

impl GenderScore {
    pub fn total(&self) -> f64 {
        self.male + self.female
    }

    /// Share of the total held by the male side, `None` when nothing scored.
    pub fn male_ratio(&self) -> Option<f64> {
        let total = self.total();
        (total > 0.0).then(|| self.male / total)
    }

    fn add(&mut self, target: Gender, weight: f64) {
        match target {
            Gender::Male => self.male += weight,
            Gender::Female => self.female += weight,
        }
    }
}

pub fn score_gender(m: &FaceMeasurements) -> GenderScore {
    let mut score = GenderScore::default();
    for c in GENDER_FACTORS.iter().filter(|c| (c.applies)(m)) {
        trace!(factor = ?c.factor, side = %c.target, weight = c.weight, "gender factor");
        score.add(c.target, c.weight);
    }
    score
}

/// Turn a score into a label and (unclamped) confidence.
///
/// The aspect ratio breaks ties when the male ratio lies within [0.45, 0.55].
pub fn resolve_gender(score: &GenderScore, aspect_ratio: f64) -> GenderEstimate {
    let Some(male_ratio) = score.male_ratio() else {
        return DEFAULT_GENDER;
    };

    if male_ratio > 0.55 {
        GenderEstimate::new(Gender::Male, (0.6 + (male_ratio - 0.55) * 0.7).min(0.88))
    } else if male_ratio < 0.45 {
        GenderEstimate::new(Gender::Female, (0.6 + (0.55 - male_ratio) * 0.7).min(0.88))
    } else {
        let label = if aspect_ratio > 0.8 {
            Gender::Male
        } else {
            Gender::Female
        };
        GenderEstimate::new(label, TIE_BREAK_CONFIDENCE)
    }
}

/// Gender from the aspect ratio alone, used when no landmarks were detected.
pub fn fallback_gender(aspect_ratio: f64) -> GenderEstimate {
    if aspect_ratio > 0.82 {
        GenderEstimate::new(Gender::Male, 0.68)
    } else if aspect_ratio < 0.75 {
        GenderEstimate::new(Gender::Female, 0.68)
    } else {
        DEFAULT_GENDER
    }
}
