//! quizsmith-bedrock
//!
//! Quiz generation against the Bedrock Converse API. The model is asked for
//! JSON conforming to the [`Quiz`](quizsmith_core::models::quiz::Quiz) shape
//! via the system prompt; the response is parsed into the typed model, and
//! anything that fails to parse surfaces as a distinguishable
//! [`BedrockError::SchemaViolation`].

pub mod error;
pub mod generate;
pub mod prompt;

pub use error::BedrockError;
pub use generate::{generate_quiz, parse_quiz};
