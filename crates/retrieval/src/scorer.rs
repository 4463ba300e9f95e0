use crate::error::Result;
use async_trait::async_trait;

/// A cross-encoder relevance model consumed as an opaque scoring service.
///
/// Implementations score every `(query, text)` pair and return one float per
/// pair, in input order. Scores are only compared against each other within
/// one call, so no particular scale is required.
#[async_trait]
pub trait CrossEncoderScorer: Send + Sync {
    async fn score(&self, pairs: &[(&str, &str)]) -> Result<Vec<f32>>;
}

/// Deterministic lexical relevance scorer for tests and offline runs.
///
/// Scores by damped query-term frequency in the candidate text. A toy stand-in
/// for a real cross-encoder, but monotone in term overlap, which is enough to
/// exercise the reranking contract end-to-end.
#[derive(Debug, Clone, Default)]
pub struct LexicalOverlapScorer;

#[async_trait]
impl CrossEncoderScorer for LexicalOverlapScorer {
    async fn score(&self, pairs: &[(&str, &str)]) -> Result<Vec<f32>> {
        Ok(pairs
            .iter()
            .map(|(query, text)| lexical_overlap(query, text))
            .collect())
    }
}

fn lexical_overlap(query: &str, text: &str) -> f32 {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return 0.0;
    }
    let text_tokens = tokenize(text);
    if text_tokens.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;
    for token in &query_tokens {
        let freq = text_tokens.iter().filter(|t| t == &token).count() as f32;
        if freq > 0.0 {
            score += freq / (1.0 + freq);
        }
    }
    score / query_tokens.len() as f32
}

fn tokenize(content: &str) -> Vec<String> {
    content
        .split(|c: char| !c.is_ascii_alphanumeric())
        .map(str::to_ascii_lowercase)
        .filter(|token| token.len() >= 3)
        .collect()
}
