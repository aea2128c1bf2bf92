//! # face-attrs
//!
//! Rule-based age and gender estimation from detected face geometry.
//!
//! This crate provides:
//! - **Measurements**: face area, aspect ratio, eye and nose proportions
//! - **Age**: an ordered cascade of proportion rules, refined by face size
//! - **Gender**: additive weighted factors with a clamped confidence
//! - **Analysis**: per-image assembly of predictions from detector output
//!
//! Face detection itself is out of scope. Any detector that reports a
//! bounding box, and optionally eye and nose landmarks plus a smiling
//! probability, can feed the estimator.
//!
//! ## Algorithm Overview
//!
//! 1. Derive measurements once: area, width/height, eye distance / width
//!    (0.4 when the eyes are missing), nose width / width (0.3 when the
//!    nose base is missing)
//! 2. With a landmark set:
//!    - Pick an age range from the first matching proportion rule
//!    - Narrow it for very large faces, shift it down for very small ones
//!    - Score five factors for each side and derive label and confidence
//!      from the male share of the total
//! 3. Without a landmark set, use face area for age and aspect ratio for
//!    gender
//! 4. Clamp ages to [5,70] / [8,75] with a span of at least three years,
//!    and confidence to [0.58, 0.90]
//!
//! ## Quick Start
//!
//! ```rust
//! use face_attrs::{estimate, FaceGeometry, Gender, LandmarkSet, Point};
//!
//! let geometry = FaceGeometry::new(180.0, 220.0);
//! let landmarks = LandmarkSet::default()
//!     .with_eyes(Point::new(50.0, 90.0), Point::new(120.0, 90.0))
//!     .with_nose_base(Point::new(85.0, 140.0));
//!
//! let attrs = estimate(&geometry, Some(&landmarks), Some(0.2));
//! assert!(attrs.age.max >= attrs.age.min + 3);
//! assert!(matches!(attrs.gender.label, Gender::Male | Gender::Female));
//! ```

pub mod age;
pub mod analysis;
mod error;
pub mod estimator;
mod format;
pub mod gender;
mod measurements;
mod types;

pub use analysis::{analyze, AnalysisRequest, AnalysisResult, DetectedFace, FacePrediction, ImageSize};
pub use error::{Error, Result};
pub use estimator::{estimate, Branch};
pub use format::{format_age_range, format_confidence};
pub use measurements::FaceMeasurements;
pub use types::{
    AgeEstimate, BoundingBox, FaceAttributes, FaceGeometry, Gender, GenderEstimate, LandmarkSet,
    Point,
};
