use crate::error::{IndexerError, Result};
use crate::report::IndexReport;
use statute_chunker::{Chunker, ChunkerConfig};
use statute_sectionizer::{sectionize, ExtractedTextData};
use statute_vector_store::{Embedder, StoredChunk, VectorIndex};
use std::sync::Arc;

/// Embedding batch bound; amortizes model inference overhead without holding
/// arbitrarily large batches in flight. Batch boundaries never affect output
/// correctness, only throughput.
pub const EMBED_BATCH_SIZE: usize = 32;

/// Sectionizes, chunks, embeds and upserts documents into a vector index.
pub struct DocumentIndexer {
    chunker: Chunker,
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn VectorIndex>,
    batch_size: usize,
}

impl std::fmt::Debug for DocumentIndexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentIndexer")
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}

impl DocumentIndexer {
    /// Create an indexer over injected embedding and index services.
    ///
    /// The embedder and index must agree on vector dimension; a mismatch is
    /// a configuration error caught here rather than at first upsert.
    pub fn new(embedder: Arc<dyn Embedder>, index: Arc<dyn VectorIndex>) -> Result<Self> {
        if embedder.dimension() != index.dimension() {
            return Err(IndexerError::DimensionMismatch {
                embedder: embedder.dimension(),
                index: index.dimension(),
            });
        }

        Ok(Self {
            chunker: Chunker::new(ChunkerConfig::default())?,
            embedder,
            index,
            batch_size: EMBED_BATCH_SIZE,
        })
    }

    /// Builder: replace the default chunker.
    #[must_use]
    pub fn with_chunker(mut self, chunker: Chunker) -> Self {
        self.chunker = chunker;
        self
    }

    /// Builder: override the embedding batch bound.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Index one document. With `reindex`, any rows previously written for
    /// the document are deleted first, making the operation idempotent.
    pub async fn index_document(
        &self,
        doc: &ExtractedTextData,
        reindex: bool,
    ) -> Result<IndexReport> {
        let deleted = if reindex {
            self.index.delete_doc(&doc.doc_id).await?
        } else {
            0
        };

        let sections = sectionize(doc);
        let chunks = self.chunker.chunk_sections(&sections);

        let mut inserted = 0;
        for batch in chunks.chunks(self.batch_size) {
            let texts: Vec<&str> = batch.iter().map(|c| c.text.as_str()).collect();
            let vectors = self.embedder.embed_batch(&texts).await?;

            let rows: Vec<StoredChunk> = batch
                .iter()
                .cloned()
                .zip(vectors)
                .map(|(chunk, vector)| StoredChunk { chunk, vector })
                .collect();
            inserted += self.index.upsert(rows).await?;
        }

        let report = IndexReport {
            doc_id: doc.doc_id.clone(),
            sections: sections.len(),
            chunks: chunks.len(),
            inserted,
            deleted,
        };
        log::info!("Indexed {report}");
        Ok(report)
    }

    /// Index a corpus of documents in order. Documents are independent, so a
    /// failure aborts at the failing document with earlier documents already
    /// committed.
    pub async fn index_documents(
        &self,
        docs: &[ExtractedTextData],
        reindex: bool,
    ) -> Result<Vec<IndexReport>> {
        let mut reports = Vec::with_capacity(docs.len());
        for doc in docs {
            reports.push(self.index_document(doc, reindex).await?);
        }

        let total: usize = reports.iter().map(|r| r.inserted).sum();
        log::info!("Indexed {} documents, {total} chunks total", reports.len());
        Ok(reports)
    }
}
