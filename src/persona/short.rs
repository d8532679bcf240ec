// src/persona/short.rs

/// Single-sentence replies, friendly tone.
pub const SHORT_PERSONA_PROMPT: &str =
    "You are concise and respond in one short sentence. Friendly tone.";
