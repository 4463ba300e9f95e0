use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexerError>;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Chunker configuration error
    #[error("Chunker error: {0}")]
    Chunker(#[from] statute_chunker::ChunkerError),

    /// Embedding or index failure
    #[error("Vector store error: {0}")]
    VectorStore(#[from] statute_vector_store::VectorStoreError),

    /// Embedder and index were configured with different dimensions
    #[error("Dimension mismatch: embedder produces {embedder}, index expects {index}")]
    DimensionMismatch { embedder: usize, index: usize },

    /// Generic error
    #[error("{0}")]
    Other(String),
}
