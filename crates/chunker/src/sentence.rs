use once_cell::sync::Lazy;
use regex::Regex;

// A sentence ends at `.`, `?` or `!` followed by whitespace. The terminator
// stays with the sentence; the whitespace run is consumed.
static SENTENCE_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.?!]\s+").expect("valid regex"));

/// Split a section body into sentences.
///
/// A line is never split mid-sentence; newlines count as ordinary whitespace
/// after a terminator. Abbreviations are split like any other terminator,
/// which is acceptable noise for retrieval purposes.
#[must_use]
pub fn split_sentences(body: &str) -> Vec<&str> {
    let body = body.trim();
    if body.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY_RE.find_iter(body) {
        // The matched terminator is a single ASCII byte.
        let end = boundary.start() + 1;
        push_trimmed(&mut sentences, &body[start..end]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &body[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}
