//! Agent-facing fraud alert

use serde::{Deserialize, Serialize};

/// Banner line opening every alert
pub const ALERT_BANNER: &str = "*** FRAUD ALERT ***";

/// Fixed instruction shown to the agent
pub const REMEDIATION: &str = "Do not bypass verification. Follow strict protocol.";

/// Alert raised when a call's risk score reaches the threshold.
///
/// The rendered template (see [`AlertPayload::render`]) is the stable
/// contract for programmatic consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPayload {
    /// Risk score that triggered the alert
    pub risk_score: u32,
    /// e.g. `urgency (90%), distress (70%)`; empty when no emotions
    pub emotions: String,
    /// e.g. `BYPASSING_PROTOCOL, TIME_BOMB`, or `None`
    pub flags: String,
    /// Remediation instruction
    pub action: String,
}

impl AlertPayload {
    /// Plain-text alert, one field per line
    pub fn render(&self) -> String {
        format!(
            "{}\nRisk Score: {}/100\nEmotions Detected: {}\nRed Flags: {}\nAction: {}",
            ALERT_BANNER, self.risk_score, self.emotions, self.flags, self.action
        )
    }
}

impl std::fmt::Display for AlertPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
