//! Overlapping character chunking.
//!
//! Splits text into bounded chunks that share a fixed amount of trailing
//! context with their successor, so meaning survives chunk boundaries.
//! Chunks are verbatim substrings of the input; a boundary prefers the
//! nearest whitespace before the target size so words are not cut mid-way
//! when that can be avoided.

/// Chunking parameters.
#[derive(Debug, Clone, Copy)]
pub struct ChunkConfig {
    /// Target chunk size, in characters.
    pub chunk_size: usize,
    /// Characters of trailing context repeated at the start of the next chunk.
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 100,
        }
    }
}

/// How far back from the target boundary a whitespace break may be pulled,
/// as a fraction of the chunk size.
const BOUNDARY_WINDOW_DIVISOR: usize = 10;

/// Split `text` into overlapping chunks per `config`.
///
/// Every chunk after the first begins with the last `overlap` characters of
/// its predecessor. Concatenating the first chunk with each successor minus
/// its overlap reproduces the input exactly.
pub fn split_text(text: &str, config: &ChunkConfig) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let chunk_size = config.chunk_size.max(1);
    // The window must advance even when overlap >= chunk_size.
    let overlap = config.overlap.min(chunk_size - 1);
    let window = chunk_size / BOUNDARY_WINDOW_DIVISOR;

    let mut chunks = Vec::new();
    let mut start = 0;

    loop {
        let hard_end = (start + chunk_size).min(chars.len());
        let end = if hard_end == chars.len() {
            hard_end
        } else {
            break_point(&chars, start, hard_end, window)
        };

        chunks.push(chars[start..end].iter().collect());

        if end == chars.len() {
            break;
        }
        // Always advance, even when a pulled-in boundary leaves the chunk
        // shorter than the overlap.
        start = end.saturating_sub(overlap).max(start + 1);
    }

    chunks
}

/// Pick the actual chunk end: the position after the last whitespace within
/// `window` characters of `hard_end`, or `hard_end` itself when the window
/// holds no whitespace.
fn break_point(chars: &[char], start: usize, hard_end: usize, window: usize) -> usize {
    let floor = hard_end.saturating_sub(window).max(start + 1);
    (floor..hard_end)
        .rev()
        .find(|&i| chars[i].is_whitespace())
        .map(|i| i + 1)
        .unwrap_or(hard_end)
}
