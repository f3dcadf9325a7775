//! Transcript parser: splits `Speaker: text` lines into turns
//!
//! Lines without a recognised prefix continue the previous turn, so a
//! caller's sentence broken across lines stays in one turn.

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::{Speaker, Transcript, Turn};

lazy_static! {
    static ref RE_SPEAKER: Regex = Regex::new(
        r"(?i)^\s*(agent|representative|rep|caller|customer|client)\s*:\s*(.*)$"
    ).unwrap();
}

/// Stateless transcript parser
#[derive(Debug, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    /// Create new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse raw transcript text into turns
    pub fn parse(&self, raw: &str) -> Transcript {
        let mut transcript = Transcript::default();

        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = RE_SPEAKER.captures(line) {
                let speaker = speaker_for(&caps[1]);
                transcript.turns.push(Turn::new(speaker, caps[2].trim()));
                continue;
            }

            // Headers before the first speaker are not speech
            if let Some(turn) = transcript.turns.last_mut() {
                if !turn.text.is_empty() {
                    turn.text.push(' ');
                }
                turn.text.push_str(line);
            }
        }

        transcript
    }
}

fn speaker_for(label: &str) -> Speaker {
    match label.to_ascii_lowercase().as_str() {
        "agent" | "representative" | "rep" => Speaker::Agent,
        _ => Speaker::Caller,
    }
}
