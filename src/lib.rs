//! CallGuard: fraud-risk scoring for contact-center calls
//!
//! transcript → classifier → AnalysisRecord → RiskScorer → AlertGenerator

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use error::{ContractViolation, Error, Result};

// =============================================================================
// SCORING POLICY
// =============================================================================

/// Points awarded for `overall_emotional_intensity = 1.0`
pub const INTENSITY_POINTS: f64 = 50.0;

/// Points per distinct red flag
pub const POINTS_PER_FLAG: u32 = 12;

/// Scores at or above this raise an alert
/// Intensity alone tops out at 50, so an alert always needs flags
pub const ALERT_THRESHOLD: u32 = 70;

/// Upper clamp for every score
pub const MAX_RISK_SCORE: u32 = 100;

// =============================================================================
// CLASSIFIER DEFAULTS
// =============================================================================

/// Environment variable holding the classifier credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_MODEL: &str = "gpt-4o";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Request timeout for one classification call (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
