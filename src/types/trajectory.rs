//! Direction of emotional intensity over a call

use serde::{Deserialize, Serialize};

/// Emotional trajectory reported by the classifier. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trajectory {
    #[serde(rename = "escalating")]
    Escalating,
    #[serde(rename = "stable")]
    Stable,
    #[serde(rename = "de-escalating")]
    DeEscalating,
}

impl Trajectory {
    /// Every variant, in schema order
    pub const ALL: [Trajectory; 3] = [
        Trajectory::Escalating,
        Trajectory::Stable,
        Trajectory::DeEscalating,
    ];

    /// Wire name used in the classifier schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Trajectory::Escalating => "escalating",
            Trajectory::Stable => "stable",
            Trajectory::DeEscalating => "de-escalating",
        }
    }

    /// Arrow for terminal display
    pub fn arrow(&self) -> &'static str {
        match self {
            Trajectory::Escalating => "↗",
            Trajectory::Stable => "→",
            Trajectory::DeEscalating => "↘",
        }
    }
}

impl std::fmt::Display for Trajectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
