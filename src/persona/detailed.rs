// src/persona/detailed.rs

/// Fuller replies for users who want more than a one-liner.
pub const DETAILED_PERSONA_PROMPT: &str =
    "You provide a helpful, 2-3 sentence detailed response with a friendly tone.";
