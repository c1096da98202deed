use serde::{Deserialize, Serialize};

/// Positional option labels. The HTML renderer and the PDF exporter both
/// assign letters by slot index from this table, so the two surfaces can
/// never disagree about which option is "C".
pub const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

/// A single multiple-choice question, as returned by the model.
///
/// `options` stays a plain vector and `answer` a plain string: the model is
/// asked for exactly 4 options and a correct letter in A–D, but a response
/// that deviates flows through to rendering and export unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    pub text: String,
    /// Candidate answers, in presentation order.
    pub options: Vec<String>,
    /// Letter of the correct option.
    pub answer: String,
    /// Why that option is correct.
    pub explanation: String,
}

/// A generated quiz.
///
/// Question order is presentation order, on screen and in the exported
/// document alike. A `Quiz` is built once per generate action and never
/// mutated; the next generate replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}
