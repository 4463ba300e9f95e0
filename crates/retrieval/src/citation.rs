use crate::types::RetrievalCandidate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A deduplicated pointer to one statutory section, for evidence lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    pub doc_id: String,
    pub section_id: Option<String>,
    pub heading: Option<String>,
    pub page_start: u32,
    pub page_end: u32,
}

impl Citation {
    fn from_candidate(candidate: &RetrievalCandidate) -> Self {
        let chunk = &candidate.chunk;
        Self {
            doc_id: chunk.doc_id.clone(),
            section_id: chunk.section_id.clone(),
            heading: chunk.section_heading.clone(),
            page_start: chunk.page_start,
            page_end: chunk.page_end,
        }
    }

    fn key(&self) -> (String, Option<String>, u32, u32) {
        (
            self.doc_id.clone(),
            self.section_id.clone(),
            self.page_start,
            self.page_end,
        )
    }
}

/// Collapse candidates down to one citation per section.
///
/// Several chunks of the same section should cite it once, not once per
/// chunk. The first candidate for each `(doc_id, section_id, page span)` is
/// the representative, and output order follows input order, so citations
/// track the evidence ranking.
#[must_use]
pub fn dedupe_citations(candidates: &[RetrievalCandidate]) -> Vec<Citation> {
    let mut seen = HashSet::new();
    let mut citations = Vec::new();

    for candidate in candidates {
        let citation = Citation::from_candidate(candidate);
        if seen.insert(citation.key()) {
            citations.push(citation);
        }
    }

    citations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use statute_chunker::Chunk;

    fn candidate(doc_id: &str, section_id: &str, chunk_index: usize) -> RetrievalCandidate {
        RetrievalCandidate {
            chunk: Chunk {
                doc_id: doc_id.to_string(),
                section_id: Some(section_id.to_string()),
                chunk_id: Chunk::derive_id(doc_id, Some(section_id), chunk_index),
                chunk_index,
                text: "body".to_string(),
                part: None,
                chapter: None,
                section_heading: Some(format!("Heading {section_id}")),
                page_start: 1,
                page_end: 2,
            },
            similarity: 0.5,
            rerank_score: None,
        }
    }

    #[test]
    fn chunks_of_the_same_section_cite_it_once() {
        let candidates = vec![
            candidate("act", "4", 0),
            candidate("act", "4", 1),
            candidate("act", "7", 0),
        ];

        let citations = dedupe_citations(&candidates);
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].section_id.as_deref(), Some("4"));
        assert_eq!(citations[1].section_id.as_deref(), Some("7"));
    }

    #[test]
    fn first_candidate_is_the_representative_and_order_is_preserved() {
        let candidates = vec![
            candidate("act-b", "2", 0),
            candidate("act-a", "1", 0),
            candidate("act-b", "2", 3),
        ];

        let citations = dedupe_citations(&candidates);
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].doc_id, "act-b");
        assert_eq!(citations[1].doc_id, "act-a");
        assert_eq!(citations[0].heading.as_deref(), Some("Heading 2"));
    }

    #[test]
    fn same_section_across_documents_is_not_merged() {
        let candidates = vec![candidate("act-a", "1", 0), candidate("act-b", "1", 0)];
        assert_eq!(dedupe_citations(&candidates).len(), 2);
    }

    #[test]
    fn empty_input_yields_no_citations() {
        assert!(dedupe_citations(&[]).is_empty());
    }
}
