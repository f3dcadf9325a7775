//! Fixed instructions sent with every classification request

/// Name of the single function the model is forced to call
pub const TOOL_NAME: &str = "analyze_emotional_state";

pub const TOOL_DESCRIPTION: &str = "Analyze the caller's speech to detect emotional manipulation \
tactics used in social engineering. Call this tool to assess emotional indicators and identify \
potential fraud attempts.";

pub const SYSTEM_PROMPT: &str = "You are a fraud detection specialist reviewing contact center calls.
Your task is to spot emotional manipulation that callers use to social engineer agents.

Common manipulation techniques:
- Urgency or panic: inventing time pressure so verification gets skipped
- Sympathy stories: emotional narratives meant to bend the rules
- Flattery: excessive praise to build rapport and lower the agent's guard
- Aggression: intimidation to pressure compliance
- Guilt tripping: making the agent feel responsible for the outcome

When you receive a transcript, analyze the caller's speech for these patterns and report your \
findings by calling the analyze_emotional_state tool. Quote indicator phrases exactly as they \
appear in the transcript.

Be vigilant but fair: not every emotional caller is a fraudster, but certain combinations of \
tactics are red flags.";

/// User message wrapping the transcript
pub fn user_message(transcript: &str) -> String {
    format!(
        "Analyze this caller transcript for emotional manipulation:\n\n{}",
        transcript
    )
}
