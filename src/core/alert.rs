//! Alert Generator: threshold-gated agent notification

use crate::types::{AlertPayload, AnalysisRecord, REMEDIATION};
use crate::ALERT_THRESHOLD;

/// Builds an [`AlertPayload`] when a score reaches the threshold
#[derive(Debug, Clone, Copy)]
pub struct AlertGenerator {
    threshold: u32,
}

impl Default for AlertGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertGenerator {
    /// Create generator with the default threshold (70)
    pub fn new() -> Self {
        Self::with_threshold(ALERT_THRESHOLD)
    }

    /// Create generator with a custom inclusive threshold
    pub fn with_threshold(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// `None` below threshold; the caller renders its own low-risk line
    pub fn generate(&self, record: &AnalysisRecord, score: u32) -> Option<AlertPayload> {
        if score < self.threshold {
            return None;
        }

        Some(AlertPayload {
            risk_score: score,
            emotions: format_emotions(record),
            flags: format_flags(record),
            action: REMEDIATION.to_string(),
        })
    }
}

/// Emotions in detection order; empty string when none
fn format_emotions(record: &AnalysisRecord) -> String {
    record
        .emotions_detected
        .iter()
        .map(|s| s.summary())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Distinct flags in first-seen order, or `None`
fn format_flags(record: &AnalysisRecord) -> String {
    let flags = record.distinct_flags();
    if flags.is_empty() {
        return "None".to_string();
    }
    flags.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Emotion, EmotionSignal, RedFlag, Trajectory};
    use pretty_assertions::assert_eq;

    fn suspicious_record() -> AnalysisRecord {
        AnalysisRecord::new(0.9, Trajectory::Escalating)
            .with_emotion(EmotionSignal::new(Emotion::Urgency, 0.9))
            .with_emotion(EmotionSignal::new(Emotion::Distress, 0.7))
            .with_flag(RedFlag::BypassingProtocol)
            .with_flag(RedFlag::TimeBomb)
    }

    #[test]
    fn test_boundary_69_no_alert() {
        assert!(AlertGenerator::new().generate(&suspicious_record(), 69).is_none());
    }

    #[test]
    fn test_boundary_70_alerts() {
        let alert = AlertGenerator::new().generate(&suspicious_record(), 70).unwrap();
        assert_eq!(alert.risk_score, 70);
    }

    #[test]
    fn test_rendered_template() {
        let alert = AlertGenerator::new().generate(&suspicious_record(), 81).unwrap();
        assert_eq!(
            alert.render(),
            "*** FRAUD ALERT ***\n\
             Risk Score: 81/100\n\
             Emotions Detected: urgency (90%), distress (70%)\n\
             Red Flags: BYPASSING_PROTOCOL, TIME_BOMB\n\
             Action: Do not bypass verification. Follow strict protocol."
        );
    }

    #[test]
    fn test_empty_emotions_and_flags() {
        let record = AnalysisRecord::new(0.0, Trajectory::Stable);
        let alert = AlertGenerator::new().generate(&record, 100).unwrap();
        assert_eq!(alert.emotions, "");
        assert_eq!(alert.flags, "None");
        assert!(alert.render().contains("\nEmotions Detected: \n"));
    }

    #[test]
    fn test_duplicate_flags_listed_once() {
        let record = suspicious_record().with_flag(RedFlag::BypassingProtocol);
        let alert = AlertGenerator::new().generate(&record, 90).unwrap();
        assert_eq!(alert.flags, "BYPASSING_PROTOCOL, TIME_BOMB");
    }

    #[test]
    fn test_custom_threshold() {
        let generator = AlertGenerator::with_threshold(50);
        assert!(generator.generate(&suspicious_record(), 50).is_some());
        assert!(generator.generate(&suspicious_record(), 49).is_none());
        assert_eq!(generator.threshold(), 50);
    }
}
