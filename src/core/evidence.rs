//! Indicator grounding: do the quoted spans actually occur in the call?
//!
//! Informational only. The result is reported next to the score and
//! never feeds into it.

use crate::types::{AnalysisRecord, EvidenceCheck, Transcript};

/// Check each indicator against the caller's speech.
///
/// Falls back to the raw transcript when no caller turns were recognised.
/// Matching ignores case and collapses whitespace.
pub fn check_evidence(record: &AnalysisRecord, transcript: &Transcript, raw: &str) -> EvidenceCheck {
    let caller = transcript.caller_text();
    let haystack = if caller.is_empty() { normalize(raw) } else { normalize(&caller) };

    let mut check = EvidenceCheck::default();
    for span in record.indicators() {
        check.total += 1;
        let needle = normalize(span);
        if !needle.is_empty() && haystack.contains(&needle) {
            check.grounded += 1;
        } else {
            check.ungrounded.push(span.to_string());
        }
    }
    check
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::TranscriptParser;
    use crate::types::{Emotion, EmotionSignal, Trajectory};

    const RAW: &str = "Agent: I need to verify you first.\n\
                       Caller: This is urgent.   I'm about to lose\n\
                       access to everything.";

    fn record(spans: &[&str]) -> AnalysisRecord {
        let mut signal = EmotionSignal::new(Emotion::Urgency, 0.8);
        for span in spans {
            signal = signal.with_indicator(*span);
        }
        AnalysisRecord::new(0.8, Trajectory::Escalating).with_emotion(signal)
    }

    #[test]
    fn test_grounded_across_line_break() {
        let transcript = TranscriptParser::new().parse(RAW);
        let check = check_evidence(&record(&["this is URGENT.", "lose access to everything"]), &transcript, RAW);
        assert_eq!(check.total, 2);
        assert_eq!(check.grounded, 2);
        assert!(check.is_fully_grounded());
    }

    #[test]
    fn test_agent_speech_does_not_count() {
        let transcript = TranscriptParser::new().parse(RAW);
        let check = check_evidence(&record(&["verify you first"]), &transcript, RAW);
        assert_eq!(check.grounded, 0);
        assert_eq!(check.ungrounded, vec!["verify you first".to_string()]);
    }

    #[test]
    fn test_unstructured_transcript_uses_raw_text() {
        let raw = "please just reset it, my kids need the money";
        let transcript = TranscriptParser::new().parse(raw);
        let check = check_evidence(&record(&["My kids need the money"]), &transcript, raw);
        assert_eq!(check.grounded, 1);
    }

    #[test]
    fn test_blank_indicator_is_ungrounded() {
        let transcript = TranscriptParser::new().parse(RAW);
        let check = check_evidence(&record(&["  "]), &transcript, RAW);
        assert_eq!(check.grounded, 0);
        assert_eq!(check.total, 1);
    }
}
