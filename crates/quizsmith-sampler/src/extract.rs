//! Per-page PDF text extraction.
//!
//! Wraps `pdf-extract`, which walks the PDF content streams and recovers
//! the text layer page by page. Extraction is CPU-bound, so it runs on a
//! blocking thread rather than on the async executor.

use std::path::Path;

use tracing::info;

use crate::error::SamplerError;

/// Extract the text of each page, in document order.
pub async fn extract_page_texts(path: &Path) -> Result<Vec<String>, SamplerError> {
    let bytes = tokio::fs::read(path).await?;

    let pages =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem_by_pages(&bytes))
            .await
            .map_err(|e| SamplerError::Join(e.to_string()))?
            .map_err(|e| SamplerError::Extraction(e.to_string()))?;

    info!(pages = pages.len(), "extracted page texts");

    Ok(pages)
}
