//! Transcript turns

use serde::{Deserialize, Serialize};

/// Who is speaking in a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// Contact-center agent
    Agent,
    /// The person who called in
    Caller,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::Agent => write!(f, "Agent"),
            Speaker::Caller => write!(f, "Caller"),
        }
    }
}

/// A single speaker turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }
}

/// A transcript split into turns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    /// Turns in call order
    pub turns: Vec<Turn>,
}

impl Transcript {
    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check if no turns were recognised
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Turns spoken by one party
    pub fn turns_by(&self, speaker: Speaker) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(move |t| t.speaker == speaker)
    }

    /// All caller speech joined with newlines
    pub fn caller_text(&self) -> String {
        self.turns_by(Speaker::Caller)
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
