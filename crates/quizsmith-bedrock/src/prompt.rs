//! Prompt assembly for quiz generation.

/// System prompt constraining the response to the quiz JSON shape.
pub const QUIZ_SYSTEM_PROMPT: &str = "\
You are a teacher writing a multiple-choice quiz. \
Respond with JSON only: no prose, no code fences. The JSON must be an \
object with a single key \"questions\", an array where every element has \
exactly these keys: \"text\" (the question), \"options\" (an array of \
exactly 4 answer strings), \"answer\" (the single letter A, B, C or D of \
the correct option), and \"explanation\" (why it is correct).";

/// Fill the fixed user-message template with the requested question count
/// and the source text sample.
pub fn build_user_message(count: u8, sample: &str) -> String {
    format!(
        "Make a quiz with {count} questions from this text. \
         Make sure you give me 4 options for every question.\n\nTEXT:\n{sample}"
    )
}
