//! Display strings for estimates.

use crate::types::AgeEstimate;

/// `"25-38 years"`
pub fn format_age_range(age: &AgeEstimate) -> String {
    format!("{}-{} years", age.min, age.max)
}

/// Confidence as a whole percentage, e.g. `0.706` → `"71%"`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", (confidence * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_range() {
        assert_eq!(format_age_range(&AgeEstimate::new(25, 38)), "25-38 years");
    }

    #[test]
    fn confidence_rounds() {
        assert_eq!(format_confidence(0.706), "71%");
        assert_eq!(format_confidence(0.58), "58%");
        assert_eq!(format_confidence(0.9), "90%");
        assert_eq!(format_confidence(0.624), "62%");
    }
}
