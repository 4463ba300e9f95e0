use crate::error::{Result, RetrievalError};
use crate::scorer::CrossEncoderScorer;
use crate::types::RetrievalCandidate;
use std::cmp::Ordering;
use std::sync::Arc;

/// Second retrieval stage: rescore the shortlist with a cross-encoder.
pub struct Reranker {
    scorer: Arc<dyn CrossEncoderScorer>,
}

impl Reranker {
    pub fn new(scorer: Arc<dyn CrossEncoderScorer>) -> Self {
        Self { scorer }
    }

    /// Rescore and reorder `candidates`, keeping the best `top_n`.
    ///
    /// The rerank order fully supersedes the similarity order; similarity
    /// only chose the shortlist. Ties keep the incoming (similarity-ordered)
    /// relative order via a stable sort. Empty input returns empty without
    /// invoking the scoring model, avoiding a zero-sized batch call.
    pub async fn rerank(
        &self,
        query: &str,
        candidates: Vec<RetrievalCandidate>,
        top_n: usize,
    ) -> Result<Vec<RetrievalCandidate>> {
        if top_n == 0 {
            return Err(RetrievalError::InvalidLimit(
                "top_n must be at least 1".to_string(),
            ));
        }
        if candidates.is_empty() {
            return Ok(candidates);
        }

        let pairs: Vec<(&str, &str)> = candidates
            .iter()
            .map(|candidate| (query, candidate.chunk.text.as_str()))
            .collect();
        let scores = self.scorer.score(&pairs).await?;

        if scores.len() != candidates.len() {
            return Err(RetrievalError::Scorer(format!(
                "scorer returned {} scores for {} pairs",
                scores.len(),
                candidates.len()
            )));
        }

        let mut reranked = candidates;
        for (candidate, score) in reranked.iter_mut().zip(scores) {
            candidate.rerank_score = Some(score);
        }

        reranked.sort_by(|a, b| {
            b.rerank_score
                .partial_cmp(&a.rerank_score)
                .unwrap_or(Ordering::Equal)
        });
        reranked.truncate(top_n);

        log::debug!("Reranked down to {} candidates", reranked.len());
        Ok(reranked)
    }
}
