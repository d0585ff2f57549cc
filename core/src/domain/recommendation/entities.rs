use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const MIN_CONFIDENCE: f64 = 0.0;
pub const MAX_CONFIDENCE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SupplementEntry {
    pub name: String,
    pub dosage: String,
    pub benefits: Vec<String>,
    pub reasoning: String,
    pub precautions: Vec<String>,
    /// 0-100
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl SupplementEntry {
    pub fn confidence_level(&self) -> ConfidenceLevel {
        if self.confidence >= 80.0 {
            ConfidenceLevel::High
        } else if self.confidence >= 60.0 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    fn check(&self, position: usize) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidProviderResponse(format!(
                "recommendation {position} has an empty name"
            )));
        }
        if self.benefits.is_empty() {
            return Err(CoreError::InvalidProviderResponse(format!(
                "recommendation {position} lists no benefits"
            )));
        }
        if !self.confidence.is_finite()
            || self.confidence < MIN_CONFIDENCE
            || self.confidence > MAX_CONFIDENCE
        {
            return Err(CoreError::InvalidProviderResponse(format!(
                "recommendation {position} has confidence {} outside 0-100",
                self.confidence
            )));
        }
        Ok(())
    }
}

/// A resolved answer. Entry order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationRecord {
    pub recommendations: Vec<SupplementEntry>,
    pub summary: String,
    pub disclaimer: String,
}

impl RecommendationRecord {
    /// Checks a record produced outside the knowledge base and trims it to
    /// at most [`MAX_RECOMMENDATIONS`] entries.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        if self.recommendations.is_empty() {
            return Err(CoreError::InvalidProviderResponse(
                "no recommendations returned".to_string(),
            ));
        }
        if self.summary.trim().is_empty() {
            return Err(CoreError::InvalidProviderResponse(
                "summary is empty".to_string(),
            ));
        }
        if self.disclaimer.trim().is_empty() {
            return Err(CoreError::InvalidProviderResponse(
                "disclaimer is empty".to_string(),
            ));
        }

        self.recommendations.truncate(MAX_RECOMMENDATIONS);
        for (position, entry) in self.recommendations.iter().enumerate() {
            entry.check(position)?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, confidence: f64) -> SupplementEntry {
        SupplementEntry {
            name: name.to_string(),
            dosage: "1 capsule daily".to_string(),
            benefits: vec!["Supports overall health".to_string()],
            reasoning: String::new(),
            precautions: vec![],
            confidence,
        }
    }

    fn record(entries: Vec<SupplementEntry>) -> RecommendationRecord {
        RecommendationRecord {
            recommendations: entries,
            summary: "Summary".to_string(),
            disclaimer: "Consult a professional.".to_string(),
        }
    }

    #[test]
    fn test_confidence_level_bands() {
        assert_eq!(entry("A", 95.0).confidence_level(), ConfidenceLevel::High);
        assert_eq!(entry("A", 80.0).confidence_level(), ConfidenceLevel::High);
        assert_eq!(entry("A", 79.5).confidence_level(), ConfidenceLevel::Medium);
        assert_eq!(entry("A", 60.0).confidence_level(), ConfidenceLevel::Medium);
        assert_eq!(entry("A", 59.0).confidence_level(), ConfidenceLevel::Low);
    }

    #[test]
    fn test_validated_truncates_to_five_in_order() {
        let entries = (0..7).map(|i| entry(&format!("S{i}"), 70.0)).collect();
        let record = record(entries).validated().unwrap();

        assert_eq!(record.recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(record.recommendations[0].name, "S0");
        assert_eq!(record.recommendations[4].name, "S4");
    }

    #[test]
    fn test_validated_rejects_empty_recommendations() {
        let err = record(vec![]).validated().unwrap_err();
        assert!(matches!(err, CoreError::InvalidProviderResponse(_)));
    }

    #[test]
    fn test_validated_rejects_out_of_range_confidence() {
        assert!(record(vec![entry("A", 101.0)]).validated().is_err());
        assert!(record(vec![entry("A", -1.0)]).validated().is_err());
        assert!(record(vec![entry("A", f64::NAN)]).validated().is_err());
        assert!(record(vec![entry("A", 0.0)]).validated().is_ok());
        assert!(record(vec![entry("A", 100.0)]).validated().is_ok());
    }

    #[test]
    fn test_validated_rejects_blank_disclaimer() {
        let mut invalid = record(vec![entry("A", 50.0)]);
        invalid.disclaimer = "   ".to_string();
        assert!(invalid.validated().is_err());
    }

    #[test]
    fn test_validated_rejects_entry_without_benefits() {
        let mut bare = entry("A", 50.0);
        bare.benefits.clear();
        assert!(record(vec![bare]).validated().is_err());
    }
}
