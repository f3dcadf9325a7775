//! Classifier boundary: transcript in, validated AnalysisRecord out

use async_trait::async_trait;
use crate::core::schema::parse_analysis;
use crate::error::Result;
use crate::types::AnalysisRecord;

/// Anything that can turn a transcript into a schema-valid record.
///
/// Implementations must fail rather than return a record that did not
/// come from a successful classification.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify one transcript
    async fn classify(&self, transcript: &str) -> Result<AnalysisRecord>;

    /// Name for logs and health output
    fn name(&self) -> &str;
}

/// Returns the same record for every transcript.
///
/// Used for offline replay of saved classifier output and as a test double.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    record: AnalysisRecord,
}

impl FixedClassifier {
    /// Wrap an already-built record (validated here)
    pub fn new(record: AnalysisRecord) -> Result<Self> {
        record.validate()?;
        Ok(Self { record })
    }

    /// Load a saved classifier response through the same checks as live output
    pub fn from_json(json: &str) -> Result<Self> {
        let record = parse_analysis(json)?;
        Ok(Self { record })
    }
}

#[async_trait]
impl Classifier for FixedClassifier {
    async fn classify(&self, _transcript: &str) -> Result<AnalysisRecord> {
        Ok(self.record.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
