//! Session presets.

use crease_core::{ChatSession, ChatSessionBuilder};

/// Models offered by the general chat.
pub const CHAT_MODELS: &[&str] = &["gemma3:4b"];

/// Default sampling temperature of the general chat.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Model used by the tactical assistant.
pub const TACTICS_MODEL: &str = "gemma3:latest";

/// Instructions that fix the tactical assistant's style.
pub const TACTICS_SYSTEM_PROMPT: &str = include_str!("./tactics_prompt.md");

/// Number of words a tactical reply is cut to.
pub const TACTICS_WORD_LIMIT: usize = 4;

/// Reply of the tactical assistant when no model backend is available.
pub const TACTICS_FALLBACK_REPLY: &str = "Short ball leg trap";

/// Match situations the tactical assistant can be asked about.
pub const SITUATIONS: [&str; 8] = [
    "Powerplay 6 overs left",
    "Death overs 3 overs left",
    "Tailender batting 10 runs",
    "New batsman at crease",
    "Last over defending 12 runs",
    "Spinners bowling middle overs",
    "Fast bowler opening spell",
    "Set batsman on strike",
];

/// Looks up a situation by its 1-based number.
#[inline]
pub fn situation(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|idx| SITUATIONS.get(idx))
        .copied()
}

/// Builds a free-form chat session without system instructions.
pub fn general_chat(
    builder: ChatSessionBuilder,
    temperature: f32,
) -> ChatSession {
    debug!(temperature, "building general chat");
    builder.with_temperature(temperature).build()
}

/// Builds the cricket tactical assistant.
///
/// Replies are cut to [`TACTICS_WORD_LIMIT`] words, and
/// [`TACTICS_FALLBACK_REPLY`] is used if the session has no backend.
pub fn tactical_assistant(builder: ChatSessionBuilder) -> ChatSession {
    debug!("building tactical assistant");
    builder
        .with_system_prompt(TACTICS_SYSTEM_PROMPT.trim())
        .with_word_limit(TACTICS_WORD_LIMIT)
        .with_fallback_reply(TACTICS_FALLBACK_REPLY)
        .build()
}
