//! Risk level of an assessed call

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// Whether a call crossed the alert threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Below threshold, no alert
    Low,
    /// At or above threshold, agent alerted
    Alert,
}

impl RiskLevel {
    /// Colour the given text for this level
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            RiskLevel::Low => text.green(),
            RiskLevel::Alert => text.red().bold(),
        }
    }

    /// Get emoji for level
    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Low => "✅",
            RiskLevel::Alert => "🚨",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Alert => "ALERT",
        };
        write!(f, "{}", name)
    }
}
