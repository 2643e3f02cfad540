// Shared prompt fragments. Each operation's own template lives in gateway/prompts.rs.

/// Persona line opening every coaching prompt.
pub const COACH_PERSONA: &str = "You are an expert AI Career Coach.";

/// Appended to every prompt that carries a response schema.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with the raw JSON value only. \
    Do NOT include introductory text, explanations, or markdown code fences.";

/// Appended to every prompt whose answer is prose.
pub const PLAIN_TEXT_INSTRUCTION: &str =
    "Return the answer as plain text. Do NOT wrap it in JSON or any other format.";
