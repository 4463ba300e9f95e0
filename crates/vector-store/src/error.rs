use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorStoreError>;

#[derive(Error, Debug)]
pub enum VectorStoreError {
    /// The embedding service failed or is unreachable
    #[error("Embedding error: {0}")]
    EmbeddingError(String),

    /// The nearest-neighbor index failed or is unreachable
    #[error("Index error: {0}")]
    IndexError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A vector's dimension does not match the index configuration. This is
    /// a deployment error; vectors are never truncated or padded to fit.
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    /// Generic error
    #[error("{0}")]
    Other(String),
}
