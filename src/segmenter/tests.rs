use super::*;

/// All whitespace removed, for coverage comparisons.
fn squash(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_basic_sentences() {
    let sentences = segment("Hello world. This is great! Bye.");
    assert_eq!(sentences, vec!["Hello world.", "This is great!", "Bye."]);
}

#[test]
fn test_question_marks_and_runs() {
    let sentences = segment("Really?! Yes... done.");
    assert_eq!(sentences, vec!["Really?!", "Yes...", "done."]);
}

#[test]
fn test_cjk_terminators() {
    let sentences = segment("你好世界。今天天气不错！出门吗？");
    assert_eq!(sentences, vec!["你好世界。", "今天天气不错！", "出门吗？"]);
}

#[test]
fn test_heading_is_its_own_sentence() {
    let sentences = segment("# Intro\nSome text here.");
    assert_eq!(sentences, vec!["# Intro", "Some text here."]);
}

#[test]
fn test_heading_flushes_pending_content() {
    let sentences = segment("lead-in text ## Section\nBody.");
    assert_eq!(sentences, vec!["lead-in text", "## Section", "Body."]);
}

#[test]
fn test_punctuation_after_heading_attaches_to_it() {
    // The terminator run right after the heading has no content of its
    // own, so its glyphs land on the heading.
    let sentences = segment("# 标题\n。Body.");
    assert_eq!(sentences, vec!["# 标题。", "Body."]);
}

#[test]
fn test_leading_terminators_survive() {
    let sentences = segment("!!! Hello.");
    assert_eq!(sentences, vec!["!!!", "Hello."]);
}

#[test]
fn test_newlines_split_without_adding_glyphs() {
    let sentences = segment("first line\nsecond line\n");
    assert_eq!(sentences, vec!["first line", "second line"]);
}

#[test]
fn test_no_terminator_yields_whole_text() {
    let sentences = segment("just a fragment with no ending");
    assert_eq!(sentences, vec!["just a fragment with no ending"]);
}

#[test]
fn test_empty_and_whitespace_input() {
    assert!(segment("").is_empty());
    assert!(segment("  \n\t \r\n ").is_empty());
}

#[test]
fn test_no_sentence_is_empty() {
    let text = "...\n\n# A\n!!\nplain tail";
    for sentence in segment(text) {
        assert!(!sentence.is_empty());
    }
}

#[test]
fn test_coverage_of_input() {
    // Concatenating all sentences reproduces the input's visible
    // characters in order.
    let text = "# Notes\nFirst point. 中文句子！\tTabbed text?\nno ending yet";
    let joined: String = segment(text).concat();
    assert_eq!(squash(&joined), squash(text));
}

#[test]
fn test_clean_text_collapses_whitespace() {
    assert_eq!(clean_text("  a \t b\u{2028}c  "), "a bc");
    assert_eq!(clean_text("one\x0btwo"), "onetwo");
    assert_eq!(clean_text("   "), "");
}
