//! # Statute Vector Store
//!
//! Embedding and nearest-neighbor services for statute chunks.
//!
//! ## Architecture
//!
//! ```text
//! Chunk[]
//!     │
//!     ├──> Embedder (injected model service)
//!     │      └─> fixed-dimension unit vector per chunk
//!     │
//!     ├──> VectorIndex (injected nearest-neighbor service)
//!     │      ├─> upsert by chunk_id (idempotent)
//!     │      ├─> cosine top-k query with full metadata projection
//!     │      └─> per-document delete for reindexing
//!     │
//!     └──> Persistent storage (JSON) for the in-memory reference index
//! ```
//!
//! Both model-facing seams are traits so deployments can plug in real
//! inference backends; the crate ships a deterministic hash-seeded stub
//! embedder and a brute-force in-memory index that preserve every contract
//! (cosine direction, dimension checks, idempotent upsert) for tests and
//! offline runs.
//!
//! ## Example
//!
//! ```rust
//! use statute_vector_store::{Embedder, MemoryIndex, StubEmbedder, VectorIndex};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let embedder = StubEmbedder::new(384);
//!     let vector = embedder.embed("powers of the police establishment").await?;
//!     assert_eq!(vector.len(), 384);
//!
//!     let index = MemoryIndex::new(384);
//!     let hits = index.query(&vector, 5).await?;
//!     assert!(hits.is_empty());
//!     Ok(())
//! }
//! ```

mod embeddings;
mod error;
mod handle;
mod index;
mod types;

pub use embeddings::{cosine_similarity, Embedder, StubEmbedder, DEFAULT_DIMENSION};
pub use error::{Result, VectorStoreError};
pub use handle::ServiceHandle;
pub use index::{MemoryIndex, VectorIndex};
pub use types::{SearchResult, StoredChunk};

// Re-export chunk types for convenience
pub use statute_chunker::{Chunk, PREAMBLE_TOKEN};
