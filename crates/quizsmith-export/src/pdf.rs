//! Two-page quiz export: the exam paper, then the answer key.
//!
//! Page 1 onwards carries the questions with positionally lettered options;
//! the answer key always begins on its own fresh page. Long content page-
//! breaks automatically through the layout cursor.

use printpdf::{Mm, PdfDocument};
use tracing::info;

use quizsmith_core::models::quiz::{OPTION_LETTERS, Quiz};

use crate::error::ExportError;
use crate::layout::{Cursor, Faces, MARGIN_LEFT_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, X_OFFSET_MM};

const TITLE_SIZE: f32 = 16.0;
const QUESTION_SIZE: f32 = 12.0;
const OPTION_SIZE: f32 = 11.0;
const ANSWER_SIZE: f32 = 11.0;
const EXPLANATION_SIZE: f32 = 10.0;

const TITLE_LINE_MM: f32 = 10.0;
const QUESTION_LINE_MM: f32 = 10.0;
const OPTION_LINE_MM: f32 = 8.0;
const ANSWER_LINE_MM: f32 = 10.0;
const EXPLANATION_LINE_MM: f32 = 8.0;

const TITLE_GAP_MM: f32 = 10.0;
const QUESTION_GAP_MM: f32 = 5.0;
const ANSWER_GAP_MM: f32 = 8.0;

/// Render `quiz` as a finished document and return its bytes.
///
/// The result always has at least two pages: even a zero-question quiz
/// carries the "EXAM PAPER" and "ANSWER KEY" title pages.
pub fn render_quiz_pdf(quiz: &Quiz) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        "quiz",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let faces = Faces::load(&doc)?;

    let mut cursor = Cursor::new(&doc, doc.get_page(page).get_layer(layer));

    cursor.centered("EXAM PAPER", &faces.bold, TITLE_SIZE, TITLE_LINE_MM);
    cursor.gap(TITLE_GAP_MM);

    for (i, q) in quiz.questions.iter().enumerate() {
        cursor.text_block(
            &format!("{}. {}", i + 1, q.text),
            &faces.bold,
            QUESTION_SIZE,
            MARGIN_LEFT_MM,
            QUESTION_LINE_MM,
        );

        for (slot, option) in q.options.iter().enumerate() {
            let letter = OPTION_LETTERS.get(slot).copied().unwrap_or("?");
            let clean = strip_option_prefix(letter, option);
            cursor.text_block(
                &format!("{letter}) {clean}"),
                &faces.regular,
                OPTION_SIZE,
                X_OFFSET_MM,
                OPTION_LINE_MM,
            );
        }

        cursor.gap(QUESTION_GAP_MM);
    }

    // The answer key always starts on a fresh page.
    cursor.break_page();
    cursor.centered("ANSWER KEY", &faces.bold, TITLE_SIZE, TITLE_LINE_MM);
    cursor.gap(TITLE_GAP_MM);

    for (i, q) in quiz.questions.iter().enumerate() {
        cursor.text_block(
            &format!("Q{} Correct Answer: {}", i + 1, q.answer),
            &faces.bold,
            ANSWER_SIZE,
            X_OFFSET_MM,
            ANSWER_LINE_MM,
        );
        cursor.text_block(
            &format!("Explanation: {}", q.explanation),
            &faces.italic,
            EXPLANATION_SIZE,
            X_OFFSET_MM,
            EXPLANATION_LINE_MM,
        );
        cursor.gap(ANSWER_GAP_MM);
    }

    drop(cursor);

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    info!(
        questions = quiz.questions.len(),
        bytes = bytes.len(),
        "rendered quiz pdf"
    );

    Ok(bytes)
}

/// Strip a pre-embedded positional label from raw option text.
///
/// The model sometimes labels options itself ("A) Paris"). Only a prefix
/// matching the letter assigned to this slot is removed — "B) Paris" in
/// slot A keeps its text — and only at the very start, case-sensitively.
pub fn strip_option_prefix<'a>(letter: &str, option: &'a str) -> &'a str {
    for mark in [')', '.'] {
        let prefix = format!("{letter}{mark}");
        if let Some(rest) = option.strip_prefix(&prefix) {
            return rest.trim_start();
        }
    }
    option
}
