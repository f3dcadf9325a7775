//! Network classifier backed by an OpenAI-compatible chat-completions API.
//!
//! The request offers exactly one tool and forces the model to call it,
//! so the only acceptable answer is a function call whose arguments are
//! then parsed strictly against the schema.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ClassifierConfig;
use crate::core::classifier::Classifier;
use crate::core::prompt::{user_message, SYSTEM_PROMPT, TOOL_NAME};
use crate::core::schema::{forced_tool_choice, parse_analysis, tool_definition};
use crate::error::{ContractViolation, Error, Result};
use crate::types::AnalysisRecord;

/// Message in a conversation
#[derive(Debug, Clone, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Chat-completions request with a forced tool call
#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
    tools: Vec<Value>,
    tool_choice: Value,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

/// Token counts are informational; partial objects are accepted
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// Classifier that calls a hosted language model
pub struct OpenAiClassifier {
    config: ClassifierConfig,
    client: Client,
}

impl OpenAiClassifier {
    /// Create a classifier; the HTTP client carries the configured timeout
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    fn build_request(&self, transcript: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message { role: "system", content: SYSTEM_PROMPT.to_string() },
                Message { role: "user", content: user_message(transcript) },
            ],
            tools: vec![tool_definition()],
            tool_choice: forced_tool_choice(),
        }
    }
}

#[async_trait]
impl Classifier for OpenAiClassifier {
    async fn classify(&self, transcript: &str) -> Result<AnalysisRecord> {
        let url = self.config.completions_url();
        debug!(%url, model = %self.config.model, "sending classification request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&self.build_request(transcript))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream { status: status.as_u16(), body });
        }

        let body = response.text().await?;
        let record = parse_completion(&body)?;
        info!(
            emotions = record.emotions_detected.len(),
            flags = record.flags.len(),
            "classification received"
        );
        Ok(record)
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

/// Extract and validate the forced function call from a completion body
pub fn parse_completion(body: &str) -> std::result::Result<AnalysisRecord, ContractViolation> {
    let response: CompletionResponse = serde_json::from_str(body)?;

    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "token usage"
        );
    }

    let call = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.tool_calls.into_iter().next())
        .ok_or(ContractViolation::MissingToolCall)?;

    if call.function.name != TOOL_NAME {
        return Err(ContractViolation::UnexpectedTool(call.function.name));
    }

    parse_analysis(&call.function.arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completion(name: &str, arguments: &str) -> String {
        json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": { "name": name, "arguments": arguments }
                    }]
                }
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        })
        .to_string()
    }

    const ARGS: &str = r#"{"emotions_detected": [], "overall_emotional_intensity": 0.3,
        "emotional_trajectory": "stable", "flags": ["ISOLATION"]}"#;

    #[test]
    fn test_parse_forced_call() {
        let record = parse_completion(&completion(TOOL_NAME, ARGS)).unwrap();
        assert_eq!(record.overall_emotional_intensity, 0.3);
        assert_eq!(record.flags.len(), 1);
    }

    #[test]
    fn test_wrong_tool_rejected() {
        let err = parse_completion(&completion("get_weather", ARGS)).unwrap_err();
        assert!(matches!(err, ContractViolation::UnexpectedTool(name) if name == "get_weather"));
    }

    #[test]
    fn test_plain_text_answer_rejected() {
        let body = json!({
            "choices": [{ "message": { "role": "assistant", "content": "Looks fine to me." } }]
        })
        .to_string();
        assert!(matches!(parse_completion(&body), Err(ContractViolation::MissingToolCall)));
    }

    #[test]
    fn test_no_choices_rejected() {
        assert!(matches!(
            parse_completion(r#"{"choices": []}"#),
            Err(ContractViolation::MissingToolCall)
        ));
    }

    #[test]
    fn test_partial_usage_accepted() {
        let mut body: Value = serde_json::from_str(&completion(TOOL_NAME, ARGS)).unwrap();
        body["usage"] = json!({ "total_tokens": 15 });
        let record = parse_completion(&body.to_string()).unwrap();
        assert_eq!(record.flags.len(), 1);

        body["usage"] = Value::Null;
        assert!(parse_completion(&body.to_string()).is_ok());
    }

    #[test]
    fn test_request_forces_tool() {
        let config = ClassifierConfig::from_lookup(|_| Some("sk-test".into())).unwrap();
        let classifier = OpenAiClassifier::new(config).unwrap();
        let request = serde_json::to_value(classifier.build_request("Caller: now!")).unwrap();

        assert_eq!(request["model"], "gpt-4o");
        assert_eq!(request["messages"][0]["role"], "system");
        assert_eq!(request["tools"].as_array().unwrap().len(), 1);
        assert_eq!(request["tool_choice"]["function"]["name"], TOOL_NAME);
        assert!(request["messages"][1]["content"].as_str().unwrap().contains("Caller: now!"));
    }
}
