//! Classifier credentials and scoring policy

use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::{
    ALERT_THRESHOLD, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS, INTENSITY_POINTS, POINTS_PER_FLAG,
};

/// Connection settings for the network classifier
#[derive(Clone)]
pub struct ClassifierConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL of an OpenAI-compatible API, without trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl ClassifierConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using a custom variable lookup. A missing or blank credential is fatal.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config(format!("{} not set", API_KEY_ENV)))?;

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full chat-completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl std::fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Tunable scoring constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Points for full overall intensity
    pub intensity_points: f64,
    /// Points per distinct red flag
    pub points_per_flag: u32,
    /// Inclusive alert threshold
    pub alert_threshold: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            intensity_points: INTENSITY_POINTS,
            points_per_flag: POINTS_PER_FLAG,
            alert_threshold: ALERT_THRESHOLD,
        }
    }
}

impl ScoringPolicy {
    /// Override the alert threshold
    pub fn with_threshold(mut self, alert_threshold: u32) -> Self {
        self.alert_threshold = alert_threshold;
        self
    }

    /// Reject values that would break score bounds
    pub fn validate(&self) -> Result<()> {
        if !self.intensity_points.is_finite() || self.intensity_points < 0.0 {
            return Err(Error::Config(format!(
                "intensity_points must be a non-negative number, got {}",
                self.intensity_points
            )));
        }
        Ok(())
    }
}
