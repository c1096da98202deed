use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("failed to read PDF file: {0}")]
    Read(#[from] std::io::Error),

    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("document contains no extractable text")]
    EmptyDocument,

    #[error("extraction task failed: {0}")]
    Join(String),
}
