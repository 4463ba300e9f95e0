use crate::embeddings::cosine_similarity;
use crate::error::{Result, VectorStoreError};
use crate::types::{SearchResult, StoredChunk};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

/// A nearest-neighbor index consumed as an opaque service.
///
/// Cosine similarity direction (higher = more similar) is part of the
/// contract and must be preserved end-to-end by every implementation, as
/// must the dimension check: a mismatched vector is a configuration error,
/// never something to truncate or pad around.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Fixed vector dimension this index was created with.
    fn dimension(&self) -> usize;

    /// Insert rows, replacing any existing row with the same `chunk_id`.
    /// Returns the number of rows written.
    async fn upsert(&self, rows: Vec<StoredChunk>) -> Result<usize>;

    /// Top-`k` rows nearest to `vector` under cosine similarity, descending,
    /// with the full chunk metadata projection attached to each hit.
    async fn query(&self, vector: &[f32], k: usize) -> Result<Vec<SearchResult>>;

    /// Remove every row belonging to `doc_id`; returns the number removed.
    async fn delete_doc(&self, doc_id: &str) -> Result<usize>;
}

/// Brute-force in-memory reference index.
///
/// O(n) per query, which is plenty for a corpus of act chunks and keeps the
/// scoring exact; deployments needing ANN plug a service implementation into
/// the same trait.
pub struct MemoryIndex {
    dimension: usize,
    rows: RwLock<HashMap<String, StoredChunk>>,
}

impl MemoryIndex {
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        log::info!("Initializing in-memory vector index (dim {dimension})");
        Self {
            dimension,
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Number of rows currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_dimension(&self, vector: &[f32]) -> Result<()> {
        if vector.len() != self.dimension {
            return Err(VectorStoreError::InvalidDimension {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    /// Save all rows to disk as JSON.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let rows: Vec<StoredChunk> = {
            let guard = self.rows.read().unwrap_or_else(PoisonError::into_inner);
            guard.values().cloned().collect()
        };
        log::info!("Saving {} index rows to {:?}", rows.len(), path.as_ref());
        let data = serde_json::to_string(&rows)?;
        tokio::fs::write(path.as_ref(), data).await?;
        Ok(())
    }

    /// Load an index from disk, validating every stored vector against the
    /// expected dimension.
    pub async fn load(path: impl AsRef<Path>, dimension: usize) -> Result<Self> {
        let data = tokio::fs::read_to_string(path.as_ref()).await?;
        let rows: Vec<StoredChunk> = serde_json::from_str(&data)?;

        let index = Self::new(dimension);
        let count = rows.len();
        index.upsert_blocking(rows)?;
        log::info!("Loaded {count} index rows from {:?}", path.as_ref());
        Ok(index)
    }

    fn upsert_blocking(&self, rows: Vec<StoredChunk>) -> Result<usize> {
        for row in &rows {
            self.check_dimension(&row.vector)?;
        }

        let count = rows.len();
        let mut guard = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        for row in rows {
            guard.insert(row.chunk.chunk_id.clone(), row);
        }
        Ok(count)
    }
}

#[async_trait]
impl VectorIndex for MemoryIndex {
    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn upsert(&self, rows: Vec<StoredChunk>) -> Result<usize> {
        let count = self.upsert_blocking(rows)?;
        log::debug!("Upserted {count} rows; index now holds {}", self.len());
        Ok(count)
    }

    async fn query(&self, vector: &[f32], k: usize) -> Result<Vec<SearchResult>> {
        self.check_dimension(vector)?;

        let mut hits: Vec<SearchResult> = {
            let guard = self.rows.read().unwrap_or_else(PoisonError::into_inner);
            guard
                .values()
                .map(|row| SearchResult {
                    chunk: row.chunk.clone(),
                    score: cosine_similarity(vector, &row.vector),
                })
                .collect()
        };

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(k);
        Ok(hits)
    }

    async fn delete_doc(&self, doc_id: &str) -> Result<usize> {
        let mut guard = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|_, row| row.chunk.doc_id != doc_id);
        let removed = before - guard.len();
        drop(guard);

        if removed > 0 {
            log::info!("Deleted {removed} rows for doc_id={doc_id}");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use statute_chunker::Chunk;

    fn chunk(doc_id: &str, section_id: &str, index: usize, text: &str) -> Chunk {
        Chunk {
            doc_id: doc_id.to_string(),
            section_id: Some(section_id.to_string()),
            chunk_id: Chunk::derive_id(doc_id, Some(section_id), index),
            chunk_index: index,
            text: text.to_string(),
            part: None,
            chapter: None,
            section_heading: None,
            page_start: 0,
            page_end: 0,
        }
    }

    fn row(doc_id: &str, section_id: &str, index: usize, vector: Vec<f32>) -> StoredChunk {
        StoredChunk {
            chunk: chunk(doc_id, section_id, index, "body text"),
            vector,
        }
    }

    #[tokio::test]
    async fn query_orders_by_descending_cosine_similarity() {
        let index = MemoryIndex::new(3);
        index
            .upsert(vec![
                row("act", "1", 0, vec![1.0, 0.0, 0.0]),
                row("act", "2", 0, vec![0.9, 0.1, 0.0]),
                row("act", "3", 0, vec![0.0, 1.0, 0.0]),
            ])
            .await
            .unwrap();

        let hits = index.query(&[1.0, 0.0, 0.0], 2).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].chunk.chunk_id, "act-1-0");
        assert!((hits[0].score - 1.0).abs() < 1e-6);
        assert_eq!(hits[1].chunk.chunk_id, "act-2-0");
        assert!(hits[0].score >= hits[1].score);
    }

    #[tokio::test]
    async fn query_on_empty_index_returns_no_hits() {
        let index = MemoryIndex::new(3);
        let hits = index.query(&[1.0, 0.0, 0.0], 5).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn dimension_mismatch_is_a_hard_error() {
        let index = MemoryIndex::new(3);

        let upsert_err = index
            .upsert(vec![row("act", "1", 0, vec![1.0, 0.0])])
            .await
            .unwrap_err();
        assert!(matches!(
            upsert_err,
            VectorStoreError::InvalidDimension { expected: 3, actual: 2 }
        ));

        let query_err = index.query(&[1.0, 0.0], 1).await.unwrap_err();
        assert!(matches!(
            query_err,
            VectorStoreError::InvalidDimension { expected: 3, actual: 2 }
        ));
    }

    #[tokio::test]
    async fn upsert_replaces_rows_with_the_same_chunk_id() {
        let index = MemoryIndex::new(2);
        index
            .upsert(vec![row("act", "1", 0, vec![1.0, 0.0])])
            .await
            .unwrap();
        index
            .upsert(vec![row("act", "1", 0, vec![0.0, 1.0])])
            .await
            .unwrap();

        assert_eq!(index.len(), 1);
        let hits = index.query(&[0.0, 1.0], 1).await.unwrap();
        assert!((hits[0].score - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn delete_doc_removes_only_that_document() {
        let index = MemoryIndex::new(2);
        index
            .upsert(vec![
                row("act-a", "1", 0, vec![1.0, 0.0]),
                row("act-a", "2", 0, vec![0.0, 1.0]),
                row("act-b", "1", 0, vec![1.0, 0.0]),
            ])
            .await
            .unwrap();

        let removed = index.delete_doc("act-a").await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(index.len(), 1);
        assert_eq!(index.delete_doc("act-a").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("index.json");

        let index = MemoryIndex::new(2);
        index
            .upsert(vec![
                row("act", "1", 0, vec![1.0, 0.0]),
                row("act", "2", 0, vec![0.0, 1.0]),
            ])
            .await
            .unwrap();
        index.save(&path).await.unwrap();

        let loaded = MemoryIndex::load(&path, 2).await.unwrap();
        assert_eq!(loaded.len(), 2);

        let hits = loaded.query(&[1.0, 0.0], 1).await.unwrap();
        assert_eq!(hits[0].chunk.chunk_id, "act-1-0");

        // Loading under the wrong dimension must fail loudly.
        assert!(MemoryIndex::load(&path, 3).await.is_err());
    }
}
