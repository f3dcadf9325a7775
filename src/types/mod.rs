//! Core types for CallGuard

mod emotion;
mod flag;
mod trajectory;
mod analysis;
mod alert;
mod level;
mod assessment;
mod transcript;

pub use emotion::{Emotion, EmotionSignal};
pub use flag::RedFlag;
pub use trajectory::Trajectory;
pub use analysis::AnalysisRecord;
pub use alert::{AlertPayload, ALERT_BANNER, REMEDIATION};
pub use level::RiskLevel;
pub use assessment::{Assessment, EvidenceCheck};
pub use transcript::{Speaker, Turn, Transcript};
