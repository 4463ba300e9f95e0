use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Character budget for one chunk, matching the embedding model's practical
/// input size.
pub const MAX_CHARS_PER_CHUNK: usize = 1200;

/// Trailing characters of a flushed chunk repeated at the start of the next
/// one, so a sentence near a boundary stays retrievable from either side.
pub const OVERLAP_CHARS: usize = 200;

/// Configuration for the sliding-window chunker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Maximum characters per chunk (single oversized sentences excepted)
    pub max_chars: usize,

    /// Overlap carried between consecutive chunks of one section
    pub overlap_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS_PER_CHUNK,
            overlap_chars: OVERLAP_CHARS,
        }
    }
}

impl ChunkerConfig {
    /// Validate configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            return Err(ChunkerError::invalid_config("max_chars must be positive"));
        }
        if self.overlap_chars >= self.max_chars {
            return Err(ChunkerError::invalid_config(format!(
                "overlap_chars ({}) must be smaller than max_chars ({})",
                self.overlap_chars, self.max_chars
            )));
        }
        Ok(())
    }
}
