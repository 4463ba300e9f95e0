use statute_indexer::DocumentIndexer;
use statute_retrieval::{
    dedupe_citations, LexicalOverlapScorer, Reranker, RetrievalConfig, RetrievalPipeline,
    Retriever,
};
use statute_sectionizer::ExtractedTextData;
use statute_vector_store::{Embedder, MemoryIndex, StubEmbedder, VectorIndex};
use std::sync::Arc;

const DIMENSION: usize = 32;

fn corpus() -> Vec<ExtractedTextData> {
    let mut police_act = ExtractedTextData::new("police-act");
    police_act.insert_page(
        0,
        "1. Short title\n\
         This Act may be called the Special Police Establishment Act.\n\
         2. Powers and jurisdiction\n\
         Members of the establishment may exercise the powers of police officers. \
         The jurisdiction of members may be extended to other areas by order.",
    );

    let mut stamp_act = ExtractedTextData::new("stamp-act");
    stamp_act.insert_page(
        0,
        "1. Short title\n\
         This Act may be called the Stamp Act.\n\
         3. Instruments chargeable with duty\n\
         Every instrument mentioned in the schedule shall be chargeable with duty.",
    );

    vec![police_act, stamp_act]
}

async fn indexed_services() -> (Arc<StubEmbedder>, Arc<MemoryIndex>) {
    let embedder = Arc::new(StubEmbedder::new(DIMENSION));
    let index = Arc::new(MemoryIndex::new(DIMENSION));

    let indexer =
        DocumentIndexer::new(embedder.clone(), index.clone()).expect("indexer");
    indexer
        .index_documents(&corpus(), true)
        .await
        .expect("index corpus");

    (embedder, index)
}

#[tokio::test]
async fn retrieve_returns_index_hits_in_similarity_order() {
    let (embedder, index) = indexed_services().await;
    let retriever = Retriever::new(embedder.clone(), index.clone()).expect("retriever");

    let candidates = retriever
        .retrieve("powers and jurisdiction of the police establishment", 3)
        .await
        .expect("retrieve");

    assert_eq!(candidates.len(), 3);
    for pair in candidates.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }

    // The shortlist mirrors the index's own top-k for the same vector.
    let vector = embedder
        .embed("powers and jurisdiction of the police establishment")
        .await
        .expect("embed");
    let hits = index.query(&vector, 3).await.expect("query");
    let hit_ids: Vec<&str> = hits.iter().map(|h| h.chunk.chunk_id.as_str()).collect();
    let candidate_ids: Vec<&str> = candidates
        .iter()
        .map(|c| c.chunk.chunk_id.as_str())
        .collect();
    assert_eq!(candidate_ids, hit_ids);
}

#[tokio::test]
async fn reranking_surfaces_the_lexically_relevant_section() {
    let (embedder, index) = indexed_services().await;
    let retriever = Retriever::new(embedder, index).expect("retriever");
    let reranker = Reranker::new(Arc::new(LexicalOverlapScorer));

    let query = "powers and jurisdiction of police officers";
    let shortlist = retriever.retrieve(query, 5).await.expect("retrieve");
    let reranked = reranker
        .rerank(query, shortlist.clone(), 2)
        .await
        .expect("rerank");

    assert_eq!(reranked.len(), 2);
    assert_eq!(
        reranked[0].chunk.section_id.as_deref(),
        Some("2"),
        "the powers-and-jurisdiction section should outrank the rest"
    );
    assert_eq!(reranked[0].chunk.doc_id, "police-act");
    assert!(reranked[0].rerank_score.is_some());

    // Reranked output is a subset of the shortlist.
    let shortlist_ids: Vec<&str> = shortlist
        .iter()
        .map(|c| c.chunk.chunk_id.as_str())
        .collect();
    for candidate in &reranked {
        assert!(shortlist_ids.contains(&candidate.chunk.chunk_id.as_str()));
    }
}

#[tokio::test]
async fn citations_dedupe_sections_across_the_final_ranking() {
    let (embedder, index) = indexed_services().await;
    let retriever = Retriever::new(embedder, index).expect("retriever");
    let reranker = Reranker::new(Arc::new(LexicalOverlapScorer));

    let query = "which instruments are chargeable with stamp duty";
    let shortlist = retriever.retrieve(query, 10).await.expect("retrieve");
    let reranked = reranker.rerank(query, shortlist, 5).await.expect("rerank");

    let citations = dedupe_citations(&reranked);
    assert!(!citations.is_empty());
    assert!(citations.len() <= reranked.len());

    // One citation per (doc, section, page span).
    let mut keys: Vec<String> = citations
        .iter()
        .map(|c| {
            format!(
                "{}/{}/{}-{}",
                c.doc_id,
                c.section_id.as_deref().unwrap_or("PREAMBLE"),
                c.page_start,
                c.page_end
            )
        })
        .collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before);
}

#[tokio::test]
async fn pipeline_runs_both_stages_and_cites_the_winning_section() {
    let (embedder, index) = indexed_services().await;
    let pipeline = RetrievalPipeline::new(
        Retriever::new(embedder, index).expect("retriever"),
        Reranker::new(Arc::new(LexicalOverlapScorer)),
        RetrievalConfig {
            top_k: 10,
            rerank_top_n: 3,
        },
    )
    .expect("pipeline");

    let evidence = pipeline
        .query("powers and jurisdiction of police officers")
        .await
        .expect("query");

    assert!(!evidence.is_empty());
    assert!(evidence.candidates.len() <= 3);
    assert_eq!(evidence.candidates[0].chunk.section_id.as_deref(), Some("2"));
    assert_eq!(evidence.citations[0].doc_id, "police-act");
    assert_eq!(evidence.citations[0].section_id.as_deref(), Some("2"));
    assert!(evidence.citations.len() <= evidence.candidates.len());
}

#[tokio::test]
async fn evidence_outcomes_are_distinguishable() {
    // Empty index: valid, empty evidence.
    let embedder: Arc<StubEmbedder> = Arc::new(StubEmbedder::new(DIMENSION));
    let empty_index = Arc::new(MemoryIndex::new(DIMENSION));
    let retriever = Retriever::new(embedder, empty_index).expect("retriever");
    let candidates = retriever.retrieve("x", 5).await.expect("retrieve");
    assert!(candidates.is_empty());

    // Misconfigured services: an error, never silently empty.
    let mismatched = Retriever::new(
        Arc::new(StubEmbedder::new(DIMENSION)),
        Arc::new(MemoryIndex::new(DIMENSION * 2)),
    );
    assert!(mismatched.is_err());
}
