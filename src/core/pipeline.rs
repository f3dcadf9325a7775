//! Assessment pipeline: transcript → classifier → scorer → alert
//!
//! Stateless per call. A classifier failure aborts the assessment; there
//! is no fallback record and no default score.

use std::sync::Arc;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::config::ScoringPolicy;
use crate::core::alert::AlertGenerator;
use crate::core::classifier::Classifier;
use crate::core::evidence::check_evidence;
use crate::core::scorer::RiskScorer;
use crate::core::transcript::TranscriptParser;
use crate::error::{Error, Result};
use crate::types::Assessment;

/// Composes the classifier with the scorer and alert generator
#[derive(Clone)]
pub struct Pipeline {
    classifier: Arc<dyn Classifier>,
    scorer: RiskScorer,
    alerts: AlertGenerator,
}

impl Pipeline {
    /// Create pipeline with the default scoring policy
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self::with_policy(classifier, ScoringPolicy::default())
    }

    /// Create pipeline with a custom scoring policy
    pub fn with_policy(classifier: Arc<dyn Classifier>, policy: ScoringPolicy) -> Self {
        Self {
            classifier,
            scorer: RiskScorer::with_policy(policy),
            alerts: AlertGenerator::with_threshold(policy.alert_threshold),
        }
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    pub fn policy(&self) -> &ScoringPolicy {
        self.scorer.policy()
    }

    /// Assess one transcript
    pub async fn assess(&self, transcript: &str) -> Result<Assessment> {
        if transcript.trim().is_empty() {
            return Err(Error::EmptyTranscript);
        }

        let digest = digest(transcript);
        let turns = TranscriptParser::new().parse(transcript);
        info!(
            %digest,
            turns = turns.len(),
            classifier = self.classifier.name(),
            "assessing transcript"
        );

        let analysis = match self.classifier.classify(transcript).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(%digest, error = %e, "classification failed");
                return Err(e);
            }
        };

        let score = self.scorer.score(&analysis);
        let alert = self.alerts.generate(&analysis, score);
        let evidence = check_evidence(&analysis, &turns, transcript);

        if !evidence.is_fully_grounded() {
            warn!(
                %digest,
                ungrounded = evidence.ungrounded.len(),
                total = evidence.total,
                "indicators not found in caller speech"
            );
        }
        if alert.is_some() {
            warn!(%digest, score, threshold = self.alerts.threshold(), "fraud alert raised");
        } else {
            info!(%digest, score, "below alert threshold");
        }

        Ok(Assessment::new(digest, turns.len(), analysis, score, alert, evidence))
    }
}

/// First 16 hex chars of the transcript's SHA-256
fn digest(transcript: &str) -> String {
    let hash = Sha256::digest(transcript.as_bytes());
    hash.iter().take(8).map(|b| format!("{:02x}", b)).collect()
}
