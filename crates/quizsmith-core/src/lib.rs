//! quizsmith-core
//!
//! Pure domain types for generated quizzes. No AWS, PDF, or web dependency —
//! this is the shared vocabulary of the Quizsmith system.

pub mod models;
