use serde::{Deserialize, Serialize};
use statute_chunker::Chunk;

/// A chunk together with its embedding, as held by the index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredChunk {
    pub chunk: Chunk,
    pub vector: Vec<f32>,
}

/// One nearest-neighbor hit: the chunk's full metadata projection and its
/// cosine similarity to the query (higher = closer).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub chunk: Chunk,
    pub score: f32,
}
