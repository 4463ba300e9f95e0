use thiserror::Error;

/// Result type for sectionizer operations
pub type Result<T> = std::result::Result<T, SectionizerError>;

/// Errors that can occur while loading extracted documents.
///
/// Sectionizing itself is total: malformed text degrades to body lines and
/// never produces an error.
#[derive(Error, Debug)]
pub enum SectionizerError {
    /// IO error while reading parsed text files
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
