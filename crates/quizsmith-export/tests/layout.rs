use quizsmith_export::layout::{text_width_mm, wrap_text};

#[test]
fn short_text_stays_on_one_line() {
    let lines = wrap_text("a short line", 12.0, 180.0);
    assert_eq!(lines, vec!["a short line".to_string()]);
}

#[test]
fn long_text_wraps_and_loses_nothing() {
    let text = "lorem ipsum dolor sit amet ".repeat(20);
    let lines = wrap_text(&text, 12.0, 60.0);
    assert!(lines.len() > 1);

    let rejoined = lines.join(" ");
    let normalized: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(rejoined.split_whitespace().collect::<Vec<_>>(), normalized);
}

#[test]
fn wrapped_lines_fit_the_budget() {
    let text = "lorem ipsum dolor sit amet consectetur ".repeat(10);
    let lines = wrap_text(&text, 11.0, 80.0);
    for line in &lines {
        assert!(
            text_width_mm(line, 11.0) <= 80.0 + f32::EPSILON,
            "line exceeds budget: {line:?}"
        );
    }
}

#[test]
fn oversized_word_gets_its_own_line() {
    let word = "x".repeat(300);
    let text = format!("start {word} end");
    let lines = wrap_text(&text, 12.0, 60.0);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], word);
}

#[test]
fn empty_text_is_one_empty_line() {
    assert_eq!(wrap_text("", 12.0, 100.0), vec![String::new()]);
}
