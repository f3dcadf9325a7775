//! Core modules for CallGuard

pub mod prompt;
pub mod schema;
pub mod classifier;
pub mod openai;
pub mod scorer;
pub mod alert;
pub mod transcript;
pub mod evidence;
pub mod pipeline;
pub mod api;

pub use classifier::{Classifier, FixedClassifier};
pub use openai::{OpenAiClassifier, parse_completion};
pub use scorer::RiskScorer;
pub use alert::AlertGenerator;
pub use transcript::TranscriptParser;
pub use evidence::check_evidence;
pub use pipeline::Pipeline;
pub use api::{create_router, run_server};
