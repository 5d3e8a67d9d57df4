use std::sync::OnceLock;

use regex::Regex;

/// Characters removed outright during cleaning: line and page breaks,
/// tabs, the invisible Unicode line/paragraph separators, and NUL.
const STRIPPED_CHARS: &[char] = &[
    '\n', '\r', '\t', '\x0b', '\x0c', '\u{0085}', '\u{2028}', '\u{2029}', '\0',
];

/// Delimiter spans, in precedence order: a Markdown heading (one to six
/// `#` up to the next terminator or line end), or a run of sentence
/// terminators (Latin and CJK) and/or line breaks with any trailing
/// whitespace.
fn delimiter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"#{1,6}[^.!?。！？\n\r]*|[.!?。！？\n\r]+\s*")
            .expect("delimiter pattern is valid")
    })
}

/// Split raw text into ordered sentence-like units.
///
/// Ordinary prose is cut at terminator runs, keeping the punctuation
/// glyphs attached to the preceding content. Markdown headings are
/// emitted as their own units and never merge with adjacent body text.
/// Empty input yields no units; input without any recognizable
/// terminator yields a single cleaned unit.
pub fn segment(text: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut cursor = 0;

    for mat in delimiter_pattern().find_iter(text) {
        let content = clean_text(&text[cursor..mat.start()]);
        let span = mat.as_str();
        cursor = mat.end();

        if span.starts_with('#') {
            // Flush pending body text, then the heading stands alone.
            if !content.is_empty() {
                sentences.push(content);
            }
            let heading = span.trim_end();
            if !heading.is_empty() {
                sentences.push(heading.to_string());
            }
            continue;
        }

        let glyphs: String = span.chars().filter(|c| !c.is_whitespace()).collect();
        if content.is_empty() {
            if glyphs.is_empty() {
                continue;
            }
            // A terminator run with no content of its own attaches to
            // the previous unit instead of standing alone.
            match sentences.last_mut() {
                Some(prev) => prev.push_str(&glyphs),
                None => sentences.push(glyphs),
            }
            continue;
        }

        let mut sentence = content;
        sentence.push_str(&glyphs);
        sentences.push(sentence);
    }

    // Trailing text after the last delimiter
    let tail = clean_text(&text[cursor..]);
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Normalize a content span: drop line breaks, tabs, and invisible
/// separator characters, collapse remaining whitespace runs to a single
/// space, and trim the ends. Visible characters are never reordered or
/// dropped.
pub fn clean_text(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
