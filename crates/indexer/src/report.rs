use serde::{Deserialize, Serialize};

/// Outcome of indexing one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexReport {
    pub doc_id: String,

    /// Structural units recovered by the sectionizer
    pub sections: usize,

    /// Retrieval units produced by the chunker
    pub chunks: usize,

    /// Rows written to the index
    pub inserted: usize,

    /// Rows removed by the reindex pre-delete
    pub deleted: usize,
}

impl std::fmt::Display for IndexReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "doc_id={}: sections={}, chunks={}, inserted={}, deleted={}",
            self.doc_id, self.sections, self.chunks, self.inserted, self.deleted
        )
    }
}
