use crate::error::{Result, RetrievalError};
use serde::{Deserialize, Serialize};

/// Limits for the two-stage query path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetrievalConfig {
    /// Shortlist size fetched from the vector index (recall stage)
    pub top_k: usize,

    /// Final evidence count after reranking (precision stage)
    pub rerank_top_n: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 20,
            rerank_top_n: 5,
        }
    }
}

impl RetrievalConfig {
    /// Validate configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(RetrievalError::InvalidLimit(
                "top_k must be at least 1".to_string(),
            ));
        }
        if self.rerank_top_n == 0 {
            return Err(RetrievalError::InvalidLimit(
                "rerank_top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
