//! Function-call schema and strict parsing of classifier output
//!
//! The enum lists in the schema are generated from the Rust enums, so the
//! model is constrained to exactly the values [`AnalysisRecord`] accepts.

use serde_json::{json, Value};
use crate::core::prompt::{TOOL_DESCRIPTION, TOOL_NAME};
use crate::error::ContractViolation;
use crate::types::{AnalysisRecord, Emotion, RedFlag, Trajectory};

/// JSON schema of the `analyze_emotional_state` parameters
pub fn parameters_schema() -> Value {
    let emotions: Vec<&str> = Emotion::ALL.iter().map(|e| e.as_str()).collect();
    let trajectories: Vec<&str> = Trajectory::ALL.iter().map(|t| t.as_str()).collect();
    let flags: Vec<&str> = RedFlag::ALL.iter().map(|f| f.as_str()).collect();

    json!({
        "type": "object",
        "properties": {
            "emotions_detected": {
                "type": "array",
                "description": "List of emotions identified in the caller's speech",
                "items": {
                    "type": "object",
                    "properties": {
                        "emotion": {
                            "type": "string",
                            "enum": emotions,
                            "description": "The type of emotion detected"
                        },
                        "intensity": {
                            "type": "number",
                            "minimum": 0.0,
                            "maximum": 1.0,
                            "description": "Strength of the emotion from 0.0 (barely present) to 1.0 (extreme)"
                        },
                        "indicators": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Exact phrases from the transcript that triggered this detection"
                        }
                    },
                    "required": ["emotion", "intensity", "indicators"]
                }
            },
            "overall_emotional_intensity": {
                "type": "number",
                "minimum": 0.0,
                "maximum": 1.0,
                "description": "Aggregate emotional intensity from 0.0 to 1.0"
            },
            "emotional_trajectory": {
                "type": "string",
                "enum": trajectories,
                "description": "Direction of emotional intensity in the conversation"
            },
            "flags": {
                "type": "array",
                "items": { "type": "string", "enum": flags },
                "description": "Red flags indicating potential social engineering tactics"
            }
        },
        "required": [
            "emotions_detected",
            "overall_emotional_intensity",
            "emotional_trajectory",
            "flags"
        ]
    })
}

/// Tool definition in chat-completions format
pub fn tool_definition() -> Value {
    json!({
        "type": "function",
        "function": {
            "name": TOOL_NAME,
            "description": TOOL_DESCRIPTION,
            "parameters": parameters_schema()
        }
    })
}

/// `tool_choice` forcing the model to call our function
pub fn forced_tool_choice() -> Value {
    json!({ "type": "function", "function": { "name": TOOL_NAME } })
}

/// Parse function-call arguments into a validated record.
///
/// Missing fields, unknown enum values, wrong types and out-of-range
/// intensities are all rejected; nothing is coerced.
pub fn parse_analysis(arguments: &str) -> Result<AnalysisRecord, ContractViolation> {
    let record: AnalysisRecord = serde_json::from_str(arguments)?;
    record.validate()?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "emotions_detected": [
            {"emotion": "urgency", "intensity": 0.9, "indicators": ["This is urgent."]},
            {"emotion": "victimhood", "intensity": 0.5, "indicators": []}
        ],
        "overall_emotional_intensity": 0.8,
        "emotional_trajectory": "escalating",
        "flags": ["BYPASSING_PROTOCOL", "FINANCIAL_RUIN"]
    }"#;

    #[test]
    fn test_valid_arguments() {
        let record = parse_analysis(VALID).unwrap();
        assert_eq!(record.emotions_detected.len(), 2);
        assert_eq!(record.emotions_detected[0].emotion, Emotion::Urgency);
        assert_eq!(record.emotional_trajectory, Trajectory::Escalating);
        assert_eq!(record.flags, vec![RedFlag::BypassingProtocol, RedFlag::FinancialRuin]);
    }

    #[test]
    fn test_out_of_enum_emotion_rejected() {
        let bad = VALID.replace("\"victimhood\"", "\"nostalgia\"");
        assert!(matches!(parse_analysis(&bad), Err(ContractViolation::Malformed(_))));
    }

    #[test]
    fn test_out_of_enum_flag_rejected() {
        let bad = VALID.replace("FINANCIAL_RUIN", "CRYPTO_SCAM");
        assert!(matches!(parse_analysis(&bad), Err(ContractViolation::Malformed(_))));
    }

    #[test]
    fn test_intensity_above_one_rejected() {
        let bad = VALID.replace("\"intensity\": 0.9", "\"intensity\": 1.5");
        assert!(matches!(
            parse_analysis(&bad),
            Err(ContractViolation::IntensityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_missing_indicators_rejected() {
        let bad = VALID.replace(", \"indicators\": []", "");
        assert!(matches!(parse_analysis(&bad), Err(ContractViolation::Malformed(_))));
    }

    #[test]
    fn test_free_text_rejected() {
        assert!(parse_analysis("The caller seems upset.").is_err());
    }

    #[test]
    fn test_schema_enums_follow_types() {
        let schema = parameters_schema();
        let emotions = &schema["properties"]["emotions_detected"]["items"]["properties"]["emotion"]["enum"];
        assert_eq!(emotions.as_array().unwrap().len(), Emotion::ALL.len());
        assert_eq!(emotions[5], "guilt_induction");

        let trajectories = &schema["properties"]["emotional_trajectory"]["enum"];
        assert_eq!(trajectories[2], "de-escalating");

        let flags = &schema["properties"]["flags"]["items"]["enum"];
        assert_eq!(flags.as_array().unwrap().len(), RedFlag::ALL.len());

        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
    }

    #[test]
    fn test_tool_choice_matches_definition() {
        assert_eq!(
            tool_definition()["function"]["name"],
            forced_tool_choice()["function"]["name"]
        );
    }
}
