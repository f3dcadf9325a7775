//! Red flags for social-engineering tactics

use serde::{Deserialize, Serialize};

/// Closed set of red flags the classifier may raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedFlag {
    /// Caller pushes the agent to skip verification
    BypassingProtocol,
    MedicalEmergency,
    FamilyCrisis,
    FinancialRuin,
    /// Artificial deadline ("before it's gone")
    TimeBomb,
    /// Caller cuts the agent off from colleagues or supervisors
    Isolation,
    /// Caller questions the agent's authority or the rules
    AuthorityChallenge,
}

impl RedFlag {
    /// Every variant, in schema order
    pub const ALL: [RedFlag; 7] = [
        RedFlag::BypassingProtocol,
        RedFlag::MedicalEmergency,
        RedFlag::FamilyCrisis,
        RedFlag::FinancialRuin,
        RedFlag::TimeBomb,
        RedFlag::Isolation,
        RedFlag::AuthorityChallenge,
    ];

    /// Wire name used in the classifier schema
    pub fn as_str(&self) -> &'static str {
        match self {
            RedFlag::BypassingProtocol => "BYPASSING_PROTOCOL",
            RedFlag::MedicalEmergency => "MEDICAL_EMERGENCY",
            RedFlag::FamilyCrisis => "FAMILY_CRISIS",
            RedFlag::FinancialRuin => "FINANCIAL_RUIN",
            RedFlag::TimeBomb => "TIME_BOMB",
            RedFlag::Isolation => "ISOLATION",
            RedFlag::AuthorityChallenge => "AUTHORITY_CHALLENGE",
        }
    }
}

impl std::fmt::Display for RedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
