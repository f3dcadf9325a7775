//! Error types for CallGuard

use thiserror::Error;

/// The classifier answered, but not in the agreed shape
#[derive(Error, Debug)]
pub enum ContractViolation {
    #[error("classifier response does not match schema: {0}")]
    Malformed(String),

    #[error("{field} = {value} is outside [0.0, 1.0]")]
    IntensityOutOfRange { field: String, value: f64 },

    #[error("classifier response carried no function call")]
    MissingToolCall,

    #[error("classifier called unexpected function `{0}`")]
    UnexpectedTool(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("classifier contract violation: {0}")]
    Contract(#[from] ContractViolation),

    #[error("classifier unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("classifier returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("transcript is empty")]
    EmptyTranscript,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::Contract(_))
    }

    /// Unreachable, timed out, or non-success status
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Upstream { .. })
    }

    /// Short machine-readable kind, used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "configuration",
            Error::Contract(_) => "contract_violation",
            Error::Transport(_) | Error::Upstream { .. } => "transport",
            Error::EmptyTranscript => "empty_transcript",
            Error::Io(_) => "io",
        }
    }
}

impl From<serde_json::Error> for ContractViolation {
    fn from(err: serde_json::Error) -> Self {
        ContractViolation::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
