use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetrievalError>;

#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Embedding or index failure, propagated untouched so callers can tell
    /// a dead service apart from an empty result
    #[error("Vector store error: {0}")]
    VectorStore(#[from] statute_vector_store::VectorStoreError),

    /// The cross-encoder service failed or misbehaved
    #[error("Scorer error: {0}")]
    Scorer(String),

    /// Blank query
    #[error("Empty query")]
    EmptyQuery,

    /// A zero result limit was requested
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}
