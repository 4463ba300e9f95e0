//! # Statute Retrieval
//!
//! The two-stage query path: cheap, recall-oriented vector similarity over
//! the whole index shortlists candidates; an expensive, precision-oriented
//! cross-encoder reorders the shortlist. Similarity only shortlists;
//! relevance ranking is the final order.
//!
//! ## Architecture
//!
//! ```text
//! query text
//!     │
//!     ├──> Retriever
//!     │    ├─> Embedder.embed(query)
//!     │    └─> VectorIndex.query(vector, top_k)   → candidates by similarity
//!     │
//!     ├──> Reranker
//!     │    ├─> CrossEncoderScorer.score((query, text) pairs)
//!     │    └─> stable sort by rerank score, truncate to top_n
//!     │
//!     └──> Citations (dedup by doc/section/page span)
//! ```
//!
//! "No evidence found" (`Ok` with an empty list) and "evidence service
//! unavailable" (`Err`) are distinct outcomes by construction.

mod citation;
mod config;
mod error;
mod pipeline;
mod rerank;
mod retriever;
mod scorer;
mod types;

pub use citation::{dedupe_citations, Citation};
pub use config::RetrievalConfig;
pub use error::{Result, RetrievalError};
pub use pipeline::{Evidence, RetrievalPipeline};
pub use rerank::Reranker;
pub use retriever::Retriever;
pub use scorer::{CrossEncoderScorer, LexicalOverlapScorer};
pub use types::RetrievalCandidate;
