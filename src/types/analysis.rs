//! Structured output of one classification pass

use serde::{Deserialize, Serialize};
use crate::error::ContractViolation;
use crate::types::{EmotionSignal, RedFlag, Trajectory};

/// Full classifier output for one transcript.
///
/// Created once per transcript and never mutated afterwards. All four
/// fields are required on the wire; a response missing any of them
/// fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Detected emotions, in detection order
    pub emotions_detected: Vec<EmotionSignal>,
    /// Aggregate intensity, 0.0-1.0, supplied by the classifier
    pub overall_emotional_intensity: f64,
    /// Direction of the call's emotional intensity
    pub emotional_trajectory: Trajectory,
    /// Red flags raised
    pub flags: Vec<RedFlag>,
}

impl AnalysisRecord {
    /// Create a record with no emotions and no flags
    pub fn new(overall_emotional_intensity: f64, emotional_trajectory: Trajectory) -> Self {
        Self {
            emotions_detected: Vec::new(),
            overall_emotional_intensity,
            emotional_trajectory,
            flags: Vec::new(),
        }
    }

    /// Add a detected emotion
    pub fn with_emotion(mut self, signal: EmotionSignal) -> Self {
        self.emotions_detected.push(signal);
        self
    }

    /// Add a red flag
    pub fn with_flag(mut self, flag: RedFlag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Check numeric ranges that the JSON schema alone cannot enforce
    pub fn validate(&self) -> Result<(), ContractViolation> {
        check_unit_interval("overall_emotional_intensity", self.overall_emotional_intensity)?;
        for (i, signal) in self.emotions_detected.iter().enumerate() {
            check_unit_interval(&format!("emotions_detected[{}].intensity", i), signal.intensity)?;
        }
        Ok(())
    }

    /// Flags with duplicates removed, first-seen order kept
    pub fn distinct_flags(&self) -> Vec<RedFlag> {
        let mut seen = Vec::with_capacity(self.flags.len());
        for flag in &self.flags {
            if !seen.contains(flag) {
                seen.push(*flag);
            }
        }
        seen
    }

    /// Every indicator span across all emotions
    pub fn indicators(&self) -> impl Iterator<Item = &str> {
        self.emotions_detected
            .iter()
            .flat_map(|s| s.indicators.iter().map(String::as_str))
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ContractViolation> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ContractViolation::IntensityOutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Emotion;

    #[test]
    fn test_bounds_inclusive() {
        let record = AnalysisRecord::new(1.0, Trajectory::Stable)
            .with_emotion(EmotionSignal::new(Emotion::Anger, 0.0));
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_emotion_intensity_above_one() {
        let record = AnalysisRecord::new(0.5, Trajectory::Stable)
            .with_emotion(EmotionSignal::new(Emotion::Urgency, 0.4))
            .with_emotion(EmotionSignal::new(Emotion::Distress, 1.5));
        match record.validate() {
            Err(ContractViolation::IntensityOutOfRange { field, value }) => {
                assert_eq!(field, "emotions_detected[1].intensity");
                assert_eq!(value, 1.5);
            }
            other => panic!("expected out-of-range, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_and_nan_overall() {
        assert!(AnalysisRecord::new(-0.1, Trajectory::Stable).validate().is_err());
        assert!(AnalysisRecord::new(f64::NAN, Trajectory::Stable).validate().is_err());
    }

    #[test]
    fn test_distinct_flags_keeps_order() {
        let record = AnalysisRecord::new(0.2, Trajectory::Escalating)
            .with_flag(RedFlag::TimeBomb)
            .with_flag(RedFlag::Isolation)
            .with_flag(RedFlag::TimeBomb);
        assert_eq!(record.distinct_flags(), vec![RedFlag::TimeBomb, RedFlag::Isolation]);
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let json = r#"{"emotions_detected": [], "overall_emotional_intensity": 0.3, "flags": []}"#;
        assert!(serde_json::from_str::<AnalysisRecord>(json).is_err());
    }
}
