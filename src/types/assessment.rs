//! Pipeline output for one transcript

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{AlertPayload, AnalysisRecord, RiskLevel};

/// How many indicator spans actually occur in the caller's speech
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceCheck {
    /// Indicators found verbatim (case/whitespace-insensitive)
    pub grounded: usize,
    /// All indicators reported
    pub total: usize,
    /// Spans the classifier quoted that do not appear in the transcript
    pub ungrounded: Vec<String>,
}

impl EvidenceCheck {
    /// Check if every indicator was found
    pub fn is_fully_grounded(&self) -> bool {
        self.ungrounded.is_empty()
    }
}

/// Result of assessing one transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// When the assessment finished
    pub timestamp: DateTime<Utc>,
    /// SHA-256 prefix identifying the transcript without storing it
    pub transcript_digest: String,
    /// Number of speaker turns recognised
    pub turn_count: usize,
    /// Validated classifier output
    pub analysis: AnalysisRecord,
    /// 0-100
    pub risk_score: u32,
    pub level: RiskLevel,
    /// Present only when the score reached the threshold
    pub alert: Option<AlertPayload>,
    pub evidence: EvidenceCheck,
}

impl Assessment {
    /// Create new assessment; the level follows from whether an alert exists
    pub fn new(
        transcript_digest: String,
        turn_count: usize,
        analysis: AnalysisRecord,
        risk_score: u32,
        alert: Option<AlertPayload>,
        evidence: EvidenceCheck,
    ) -> Self {
        let level = if alert.is_some() { RiskLevel::Alert } else { RiskLevel::Low };
        Self {
            timestamp: Utc::now(),
            transcript_digest,
            turn_count,
            analysis,
            risk_score,
            level,
            alert,
            evidence,
        }
    }

    /// Low-risk status line
    pub fn status_line(&self) -> String {
        format!("No fraud detected. Risk score: {}/100", self.risk_score)
    }

    /// Format for terminal display (with colors). The emoji and level sit on
    /// their own line so the alert template keeps its first line.
    pub fn to_terminal_string(&self) -> String {
        let text = self.to_parseable_string();
        format!("{} {}\n{}", self.level.emoji(), self.level, self.level.paint(&text))
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        match &self.alert {
            Some(alert) => alert.render(),
            None => self.status_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Trajectory;

    #[test]
    fn test_low_risk_line() {
        let assessment = Assessment::new(
            "abc".into(),
            0,
            AnalysisRecord::new(0.8, Trajectory::Stable),
            64,
            None,
            EvidenceCheck::default(),
        );
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.to_parseable_string(), "No fraud detected. Risk score: 64/100");
    }

    #[test]
    fn test_terminal_output_keeps_banner_line() {
        let alert = AlertPayload {
            risk_score: 84,
            emotions: "urgency (90%)".into(),
            flags: "TIME_BOMB".into(),
            action: crate::types::REMEDIATION.into(),
        };
        let assessment = Assessment::new(
            "abc".into(),
            0,
            AnalysisRecord::new(1.0, Trajectory::Escalating),
            84,
            Some(alert),
            EvidenceCheck::default(),
        );
        let terminal = assessment.to_terminal_string();
        let mut lines = terminal.lines();
        let first = lines.next().unwrap();
        assert!(first.contains("ALERT"));
        assert!(!first.contains(crate::types::ALERT_BANNER));
        assert!(lines.next().unwrap().contains(crate::types::ALERT_BANNER));
    }
}
