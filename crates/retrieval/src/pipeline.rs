use crate::citation::{dedupe_citations, Citation};
use crate::config::RetrievalConfig;
use crate::error::Result;
use crate::rerank::Reranker;
use crate::retriever::Retriever;
use crate::types::RetrievalCandidate;

/// Final output of the query path, ready for answer composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    /// Reranked candidates, best first
    pub candidates: Vec<RetrievalCandidate>,

    /// One citation per distinct section, following candidate order
    pub citations: Vec<Citation>,
}

impl Evidence {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// The full two-stage query path: shortlist by similarity, rerank by
/// relevance, dedupe citations.
pub struct RetrievalPipeline {
    retriever: Retriever,
    reranker: Reranker,
    config: RetrievalConfig,
}

impl RetrievalPipeline {
    pub fn new(retriever: Retriever, reranker: Reranker, config: RetrievalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            retriever,
            reranker,
            config,
        })
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Answer a query with ranked, deduplicated evidence.
    ///
    /// An empty shortlist short-circuits before the reranking stage, so "no
    /// evidence found" never touches the cross-encoder; service failures in
    /// either stage propagate as errors instead.
    pub async fn query(&self, query: &str) -> Result<Evidence> {
        let shortlist = self.retriever.retrieve(query, self.config.top_k).await?;
        if shortlist.is_empty() {
            log::debug!("No evidence found for query '{query}'");
            return Ok(Evidence {
                candidates: Vec::new(),
                citations: Vec::new(),
            });
        }

        let candidates = self
            .reranker
            .rerank(query, shortlist, self.config.rerank_top_n)
            .await?;
        let citations = dedupe_citations(&candidates);

        Ok(Evidence {
            candidates,
            citations,
        })
    }
}
