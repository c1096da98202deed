use quizsmith_sampler::chunker::{ChunkConfig, split_text};
use quizsmith_sampler::{SAMPLE_CHUNK_LIMIT, assemble_sample};

fn config(chunk_size: usize, overlap: usize) -> ChunkConfig {
    ChunkConfig {
        chunk_size,
        overlap,
    }
}

/// Deterministic filler: repeated words so whitespace breaks are always
/// available near chunk boundaries.
fn filler(words: usize) -> String {
    (0..words)
        .map(|i| format!("word{i:04}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn empty_text_yields_no_chunks() {
    assert!(split_text("", &ChunkConfig::default()).is_empty());
}

#[test]
fn short_text_is_a_single_chunk() {
    let chunks = split_text("just a short note", &ChunkConfig::default());
    assert_eq!(chunks, vec!["just a short note".to_string()]);
}

#[test]
fn chunks_respect_the_size_bound() {
    let text = filler(400);
    let cfg = config(200, 20);
    for chunk in split_text(&text, &cfg) {
        assert!(chunk.chars().count() <= 200);
    }
}

#[test]
fn successive_chunks_share_the_overlap() {
    let text = filler(400);
    let cfg = config(200, 20);
    let chunks = split_text(&text, &cfg);
    assert!(chunks.len() > 2);

    for pair in chunks.windows(2) {
        let prev: Vec<char> = pair[0].chars().collect();
        let tail: String = prev[prev.len() - 20..].iter().collect();
        assert!(
            pair[1].starts_with(&tail),
            "chunk does not start with its predecessor's tail"
        );
    }
}

#[test]
fn dropping_overlaps_reconstructs_the_input() {
    let text = filler(300);
    let cfg = config(150, 30);
    let chunks = split_text(&text, &cfg);

    let mut rebuilt = chunks[0].clone();
    for chunk in &chunks[1..] {
        let rest: String = chunk.chars().skip(30).collect();
        rebuilt.push_str(&rest);
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn boundaries_prefer_whitespace() {
    let text = filler(400);
    let cfg = config(200, 20);
    let chunks = split_text(&text, &cfg);

    // Every chunk except the last should end right after a space.
    for chunk in &chunks[..chunks.len() - 1] {
        assert!(chunk.ends_with(' '), "chunk ends mid-word: {chunk:?}");
    }
}

#[test]
fn overlap_near_chunk_size_still_advances() {
    // A whitespace break early in the window can leave a chunk shorter
    // than the overlap; the splitter must keep moving forward regardless.
    let text = format!("{} {}", "x".repeat(27), "y".repeat(100));
    let cfg = config(30, 29);
    let chunks = split_text(&text, &cfg);

    assert!(!chunks.is_empty());
    let total: usize = chunks.iter().map(|c| c.chars().count()).sum();
    assert!(total >= text.chars().count());
    assert!(chunks.last().unwrap().ends_with('y'));
}

#[test]
fn text_without_whitespace_still_chunks() {
    let text = "x".repeat(500);
    let cfg = config(100, 10);
    let chunks = split_text(&text, &cfg);
    assert!(!chunks.is_empty());
    assert!(chunks.iter().all(|c| c.chars().count() <= 100));
}

#[test]
fn sample_takes_exactly_the_first_five_of_eight_chunks() {
    let chunks: Vec<String> = (0..8).map(|i| format!("<chunk {i}>")).collect();
    let sample = assemble_sample(&chunks);

    for i in 0..SAMPLE_CHUNK_LIMIT {
        assert!(sample.contains(&format!("<chunk {i}>")));
    }
    for i in SAMPLE_CHUNK_LIMIT..8 {
        assert!(!sample.contains(&format!("<chunk {i}>")));
    }
    // Original order is preserved.
    let positions: Vec<usize> = (0..SAMPLE_CHUNK_LIMIT)
        .map(|i| sample.find(&format!("<chunk {i}>")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn sample_of_fewer_chunks_takes_them_all() {
    let chunks: Vec<String> = (0..3).map(|i| format!("part{i} ")).collect();
    assert_eq!(assemble_sample(&chunks), "part0 part1 part2 ");
}
