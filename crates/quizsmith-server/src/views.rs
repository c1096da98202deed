//! View models for the quiz page.
//!
//! Letters are assigned positionally here, from the same table the PDF
//! export draws on, so the screen and the download can never disagree.

use serde::Serialize;

use quizsmith_core::models::quiz::{OPTION_LETTERS, Quiz};

#[derive(Debug, Serialize)]
pub struct QuizView {
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub text: String,
    pub options: Vec<OptionView>,
    pub answer: String,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct OptionView {
    pub letter: String,
    pub text: String,
}

impl QuizView {
    pub fn from_quiz(quiz: &Quiz) -> Self {
        let questions = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionView {
                number: i + 1,
                text: q.text.clone(),
                options: q
                    .options
                    .iter()
                    .enumerate()
                    .map(|(slot, text)| OptionView {
                        letter: OPTION_LETTERS.get(slot).copied().unwrap_or("?").to_string(),
                        text: text.clone(),
                    })
                    .collect(),
                answer: q.answer.clone(),
                explanation: q.explanation.clone(),
            })
            .collect();
        Self { questions }
    }
}
