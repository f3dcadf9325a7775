//! Emotion vocabulary reported by the classifier

use serde::{Deserialize, Serialize};

/// Closed set of manipulation-relevant emotions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Time pressure, "right now"
    Urgency,
    /// Panic, fear of loss
    Distress,
    /// Aggression aimed at the agent
    Anger,
    /// Pleading, last-resort framing
    Desperation,
    /// Praise used to lower the agent's guard
    Flattery,
    /// Making the agent feel responsible
    GuiltInduction,
    /// Caller casts themself as the wronged party
    Victimhood,
}

impl Emotion {
    /// Every variant, in schema order
    pub const ALL: [Emotion; 7] = [
        Emotion::Urgency,
        Emotion::Distress,
        Emotion::Anger,
        Emotion::Desperation,
        Emotion::Flattery,
        Emotion::GuiltInduction,
        Emotion::Victimhood,
    ];

    /// Wire name used in the classifier schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Urgency => "urgency",
            Emotion::Distress => "distress",
            Emotion::Anger => "anger",
            Emotion::Desperation => "desperation",
            Emotion::Flattery => "flattery",
            Emotion::GuiltInduction => "guilt_induction",
            Emotion::Victimhood => "victimhood",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected emotional expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSignal {
    /// Which emotion
    pub emotion: Emotion,
    /// Detected strength, 0.0-1.0
    pub intensity: f64,
    /// Verbatim transcript spans supporting the detection
    pub indicators: Vec<String>,
}

impl EmotionSignal {
    /// Create a signal with no supporting spans
    pub fn new(emotion: Emotion, intensity: f64) -> Self {
        Self {
            emotion,
            intensity,
            indicators: Vec::new(),
        }
    }

    /// Attach a supporting span
    pub fn with_indicator(mut self, span: impl Into<String>) -> Self {
        self.indicators.push(span.into());
        self
    }

    /// Display form used in alerts, e.g. `urgency (90%)`
    pub fn summary(&self) -> String {
        format!("{} ({:.0}%)", self.emotion, self.intensity * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for emotion in Emotion::ALL {
            let json = serde_json::to_string(&emotion).unwrap();
            assert_eq!(json, format!("\"{}\"", emotion.as_str()));
        }
    }

    #[test]
    fn test_unknown_emotion_rejected() {
        let result: Result<Emotion, _> = serde_json::from_str("\"boredom\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_percentage() {
        let signal = EmotionSignal::new(Emotion::GuiltInduction, 0.85);
        assert_eq!(signal.summary(), "guilt_induction (85%)");
        assert_eq!(EmotionSignal::new(Emotion::Anger, 0.0).summary(), "anger (0%)");
        assert_eq!(EmotionSignal::new(Emotion::Anger, 1.0).summary(), "anger (100%)");
    }
}
