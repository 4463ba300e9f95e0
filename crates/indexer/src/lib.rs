//! # Statute Indexer
//!
//! The offline batch flow that populates the vector index: sectionize each
//! document, chunk every section, embed the chunks in bounded batches, and
//! upsert the rows. Reindexing a document is idempotent: rows are deleted by
//! document first, and chunk ids are stable, so re-running over unchanged
//! input converges to the same index.
//!
//! ## Example
//!
//! ```rust
//! use statute_indexer::DocumentIndexer;
//! use statute_sectionizer::ExtractedTextData;
//! use statute_vector_store::{MemoryIndex, StubEmbedder};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let embedder = Arc::new(StubEmbedder::new(384));
//!     let index = Arc::new(MemoryIndex::new(384));
//!     let indexer = DocumentIndexer::new(embedder, index)?;
//!
//!     let mut doc = ExtractedTextData::new("test-act");
//!     doc.insert_page(0, "1. Short title\nThis Act may be called the Test Act.");
//!
//!     let report = indexer.index_document(&doc, true).await?;
//!     assert_eq!(report.inserted, report.chunks);
//!     Ok(())
//! }
//! ```

mod error;
mod indexer;
mod report;

pub use error::{IndexerError, Result};
pub use indexer::{DocumentIndexer, EMBED_BATCH_SIZE};
pub use report::IndexReport;
