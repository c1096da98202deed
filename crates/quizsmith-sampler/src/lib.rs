//! quizsmith-sampler
//!
//! Turns a PDF on disk into a bounded text sample suitable for prompting a
//! model: extract the page texts, chunk them with overlap, keep an early
//! slice. Only the first few chunks are ever shown to the model — the
//! truncation is deliberate, not a limitation of the extractor.

pub mod chunker;
pub mod error;
pub mod extract;

pub use chunker::{ChunkConfig, split_text};
pub use error::SamplerError;

use std::path::Path;

use tracing::info;

/// Number of leading chunks included in the model sample.
pub const SAMPLE_CHUNK_LIMIT: usize = 5;

/// Concatenate the first `min(SAMPLE_CHUNK_LIMIT, chunks.len())` chunks,
/// in original order.
pub fn assemble_sample(chunks: &[String]) -> String {
    chunks
        .iter()
        .take(SAMPLE_CHUNK_LIMIT)
        .map(String::as_str)
        .collect()
}

/// Produce the text sample for the PDF at `path`.
///
/// A file that cannot be read or parsed is fatal for the request; a PDF
/// whose text layer is empty (scanned pages, images only) fails with
/// [`SamplerError::EmptyDocument`].
pub async fn sample_pdf(path: &Path, config: &ChunkConfig) -> Result<String, SamplerError> {
    let pages = extract::extract_page_texts(path).await?;
    let full_text = pages.join("\n");
    if full_text.trim().is_empty() {
        return Err(SamplerError::EmptyDocument);
    }

    let chunks = split_text(&full_text, config);
    let sample = assemble_sample(&chunks);

    info!(
        chunks = chunks.len(),
        sample_len = sample.len(),
        "assembled text sample"
    );

    Ok(sample)
}
