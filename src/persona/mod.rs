// src/persona/mod.rs
// Persona presets for the voice assistant.
// The client selects a preset per request; each preset resolves to a
// system prompt shaping the reply style.

pub mod default;
pub mod detailed;
pub mod short;

use serde::{Deserialize, Serialize};

pub use default::{CandidateAnswers, CANDIDATE_ANSWERS};
pub use detailed::DETAILED_PERSONA_PROMPT;
pub use short::SHORT_PERSONA_PROMPT;

/// A resolved persona: the system-level instruction string sent ahead of
/// the user's utterance. Built per request, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Empty is treated the same as absent downstream.
    #[serde(default)]
    pub system: String,
}

/// Preset identifiers the client may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaPreset {
    Short,    // one concise sentence
    Detailed, // 2-3 sentence replies
    Default,  // the candidate's voice, with canned interview answers
}

impl PersonaPreset {
    /// Parse a preset from client input. Total over all inputs: absent,
    /// empty, or unrecognized values fall through to Default.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("short") => PersonaPreset::Short,
            Some("detailed") => PersonaPreset::Detailed,
            _ => PersonaPreset::Default,
        }
    }

    /// Returns the system prompt for this preset.
    pub fn prompt(&self) -> &'static str {
        match self {
            PersonaPreset::Short => SHORT_PERSONA_PROMPT,
            PersonaPreset::Detailed => DETAILED_PERSONA_PROMPT,
            PersonaPreset::Default => default::prompt(),
        }
    }

    /// Resolve this preset into a request-scoped Persona.
    pub fn resolve(&self) -> Persona {
        Persona {
            system: self.prompt().to_string(),
        }
    }
}

impl std::fmt::Display for PersonaPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PersonaPreset::Short => "short",
                PersonaPreset::Detailed => "detailed",
                PersonaPreset::Default => "default",
            }
        )
    }
}
