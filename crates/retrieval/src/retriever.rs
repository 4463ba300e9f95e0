use crate::error::{Result, RetrievalError};
use crate::types::RetrievalCandidate;
use statute_vector_store::{Embedder, VectorIndex};
use std::sync::Arc;

/// First retrieval stage: embed the query and shortlist the nearest chunks.
pub struct Retriever {
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn VectorIndex>,
}

impl Retriever {
    /// Create a retriever over injected embedding and index services. The
    /// query-time embedder must be the model used at index time; a dimension
    /// mismatch is a configuration error caught here.
    pub fn new(embedder: Arc<dyn Embedder>, index: Arc<dyn VectorIndex>) -> Result<Self> {
        if embedder.dimension() != index.dimension() {
            return Err(statute_vector_store::VectorStoreError::InvalidDimension {
                expected: index.dimension(),
                actual: embedder.dimension(),
            }
            .into());
        }

        Ok(Self { embedder, index })
    }

    /// Shortlist the `top_k` chunks nearest to `query`.
    ///
    /// Candidates come back in the index's similarity order; the index is
    /// the source of truth for nearest-neighbor order and nothing is
    /// re-sorted client-side. Zero hits is a valid outcome (`Ok` with an
    /// empty list), distinct from a failing embedding service or index,
    /// which propagate as errors.
    pub async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<RetrievalCandidate>> {
        if query.trim().is_empty() {
            return Err(RetrievalError::EmptyQuery);
        }
        if top_k == 0 {
            return Err(RetrievalError::InvalidLimit(
                "top_k must be at least 1".to_string(),
            ));
        }

        log::debug!("Retrieving top {top_k} candidates for query '{query}'");
        let vector = self.embedder.embed(query).await?;
        let hits = self.index.query(&vector, top_k).await?;
        log::debug!("Index returned {} hits", hits.len());

        Ok(hits.into_iter().map(RetrievalCandidate::from).collect())
    }
}
