//! Sample prompts offered under the prompt box.

/// Prompts a user can pick instead of typing.
pub const PROMPT_SUGGESTIONS: [&str; 6] = [
    "Make notes on Python basics",
    "Explain Binary Search with code",
    "Summarize CNN architecture logically",
    "Notes on JavaScript promises",
    "Explain SQL joins with examples",
    "Graph theory fundamentals",
];

/// Returns true if `prompt` is one of the offered suggestions.
pub fn is_suggestion(prompt: &str) -> bool {
    PROMPT_SUGGESTIONS.contains(&prompt)
}
