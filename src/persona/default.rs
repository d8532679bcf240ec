// src/persona/default.rs
//! The default persona - the candidate's own voice, carrying canned
//! answers for the questions an interviewer is expected to ask.

use once_cell::sync::Lazy;

/// Canned answers keyed by interview topic. Read-only, process-wide;
/// embedded verbatim into the default persona prompt.
pub struct CandidateAnswers {
    pub life_story: &'static str,
    pub superpower: &'static str,
    pub top_growth: &'static str,
    pub misconception: &'static str,
    pub push_boundaries: &'static str,
}

pub const CANDIDATE_ANSWERS: CandidateAnswers = CandidateAnswers {
    life_story: "I grew up fascinated by data and football, studied data science, and have built machine-learning features for products that millions use.",
    superpower: "Pattern recognition — I quickly spot trends in messy data and turn them into actionable plans.",
    top_growth: "1) Public speaking and storytelling with data, 2) Real-time systems engineering, 3) Advanced deep learning for sequence models.",
    misconception: "People sometimes think I prefer solo work, but I actually push collaboration and open communication.",
    push_boundaries: "I set small weekly stretch goals and pair with people who challenge my assumptions to learn faster.",
};

// Assembled once at first use; the answer set never changes at runtime.
static DEFAULT_PERSONA_PROMPT: Lazy<String> = Lazy::new(|| {
    format!(
        r#"You are a friendly, human-sounding voice assistant representing the candidate. Prefer concision but expand if the user explicitly asks for more. Use the candidate answers when the user asks:
- life story -> "{}"
- superpower -> "{}"
- top growth areas -> "{}"
- misconception -> "{}"
- push boundaries -> "{}"
Keep tone confident and approachable."#,
        CANDIDATE_ANSWERS.life_story,
        CANDIDATE_ANSWERS.superpower,
        CANDIDATE_ANSWERS.top_growth,
        CANDIDATE_ANSWERS.misconception,
        CANDIDATE_ANSWERS.push_boundaries,
    )
});

/// The default persona's system prompt.
pub fn prompt() -> &'static str {
    DEFAULT_PERSONA_PROMPT.as_str()
}
