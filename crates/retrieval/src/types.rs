use serde::{Deserialize, Serialize};
use statute_chunker::Chunk;
use statute_vector_store::SearchResult;

/// One candidate evidence chunk, scoped to a single query's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievalCandidate {
    pub chunk: Chunk,

    /// Cosine similarity reported by the index (higher = closer)
    pub similarity: f32,

    /// Cross-encoder relevance, attached by the reranker
    pub rerank_score: Option<f32>,
}

impl From<SearchResult> for RetrievalCandidate {
    fn from(hit: SearchResult) -> Self {
        Self {
            chunk: hit.chunk,
            similarity: hit.score,
            rerank_score: None,
        }
    }
}
