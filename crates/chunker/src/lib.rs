//! # Statute Chunker
//!
//! Splits section bodies into bounded, overlapping, sentence-aligned
//! retrieval units sized for embedding-model input limits.
//!
//! ## Architecture
//!
//! ```text
//! LegalSection
//!     │
//!     ├──> Sentence split (terminator + whitespace boundaries)
//!     │
//!     ├──> Greedy sliding window
//!     │    ├─> Pack sentences up to the character budget
//!     │    ├─> Flush on overflow, carry trailing overlap forward
//!     │    └─> Keep oversized single sentences whole
//!     │
//!     └──> Emit Chunk[] with stable, per-section-contiguous ids
//! ```
//!
//! ## Example
//!
//! ```rust
//! use statute_chunker::{Chunker, ChunkerConfig};
//! use statute_sectionizer::{sectionize, ExtractedTextData};
//!
//! let mut doc = ExtractedTextData::new("test-act");
//! doc.insert_page(0, "1. Short title\nThis Act may be called the Test Act.");
//!
//! let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
//! let chunks = chunker.chunk_sections(&sectionize(&doc));
//! assert_eq!(chunks[0].chunk_id, "test-act-1-0");
//! ```

mod chunker;
mod config;
mod error;
mod sentence;
mod types;

pub use chunker::{Chunker, ChunkingStats};
pub use config::{ChunkerConfig, MAX_CHARS_PER_CHUNK, OVERLAP_CHARS};
pub use error::{ChunkerError, Result};
pub use sentence::split_sentences;
pub use types::{Chunk, PREAMBLE_TOKEN};
