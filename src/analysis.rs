//! Per-image assembly of face predictions.
//!
//! A face detector supplies one [`DetectedFace`] per face in pixel space.
//! Each face is estimated on its pixel geometry and reported with a
//! bounding box normalized to the image.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::estimator::estimate;
use crate::types::{AgeEstimate, BoundingBox, GenderEstimate, LandmarkSet};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

/// Detector output for a single face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    /// Face bounds in image pixels
    pub bounds: BoundingBox,
    #[serde(default)]
    pub landmarks: Option<LandmarkSet>,
    #[serde(default)]
    pub smiling_probability: Option<f64>,
}

/// Everything a detector reports for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub image: ImageSize,
    #[serde(default)]
    pub faces: Vec<DetectedFace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacePrediction {
    /// `face1`, `face2`, ... in detector order
    pub id: String,
    /// Bounds as fractions [0,1] of the image size
    pub bbox: BoundingBox,
    pub age: AgeEstimate,
    pub gender: GenderEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub image: ImageSize,
    pub faces: Vec<FacePrediction>,
}

/// Estimate attributes for every detected face in an image.
///
/// Fails only when the image size cannot be used to normalize bounds.
pub fn analyze(image: ImageSize, faces: &[DetectedFace]) -> Result<AnalysisResult> {
    if !(image.width > 0.0 && image.height > 0.0) {
        return Err(Error::InvalidImageSize {
            width: image.width,
            height: image.height,
        });
    }

    let faces = faces
        .iter()
        .enumerate()
        .map(|(i, face)| {
            let attrs = estimate(
                &face.bounds.geometry(),
                face.landmarks.as_ref(),
                face.smiling_probability,
            );
            FacePrediction {
                id: format!("face{}", i + 1),
                bbox: face.bounds.normalized(image.width, image.height),
                age: attrs.age,
                gender: attrs.gender,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        faces = faces.len(),
        width = image.width,
        height = image.height,
        "analyzed image"
    );

    Ok(AnalysisResult { image, faces })
}

impl AnalysisRequest {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn analyze(&self) -> Result<AnalysisResult> {
        analyze(self.image, &self.faces)
    }
}
