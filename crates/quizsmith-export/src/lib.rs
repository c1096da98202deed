//! quizsmith-export
//!
//! Deterministic PDF layout for generated quizzes: an exam paper page
//! followed by an answer key page, built on printpdf's builtin Helvetica
//! faces. The whole document is produced in memory; nothing touches disk.

pub mod error;
pub mod layout;
pub mod pdf;

pub use error::ExportError;
pub use pdf::{render_quiz_pdf, strip_option_prefix};
