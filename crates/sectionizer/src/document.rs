use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Marker emitted by the PDF extraction stage between pages of a document.
pub const PAGE_BREAK_MARKER: &str = "\n\n===== PAGE BREAK =====\n\n";

static MULTISPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex"));
static MULTINEWLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static ISOLATED_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[^\w\s]{1,3}$").expect("valid regex"));

/// Per-page cleaned text of one extracted document.
///
/// Produced once per source document and immutable afterwards. Page numbers
/// are 0-based extractor page indices; iteration is always in page order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedTextData {
    /// Stable document identifier (act id)
    pub doc_id: String,

    /// Cleaned page text keyed by page number; empty pages are omitted
    pub text_by_page: BTreeMap<u32, String>,

    /// Path of the extracted text file, when loaded from disk
    pub source_path: Option<PathBuf>,
}

impl ExtractedTextData {
    /// Create an empty document
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            text_by_page: BTreeMap::new(),
            source_path: None,
        }
    }

    /// Parse raw extractor output: pages separated by [`PAGE_BREAK_MARKER`],
    /// each cleaned before storage. Pages that clean down to nothing are
    /// dropped, keeping their page number gap intact.
    pub fn from_raw_text(doc_id: impl Into<String>, raw: &str) -> Self {
        let mut doc = Self::new(doc_id);
        for (idx, raw_page) in raw.split(PAGE_BREAK_MARKER).enumerate() {
            let cleaned = clean_text(raw_page);
            if !cleaned.is_empty() {
                doc.text_by_page.insert(idx as u32, cleaned);
            }
        }
        doc
    }

    /// Insert a page, cleaning it first. Empty pages are ignored.
    pub fn insert_page(&mut self, page: u32, text: &str) {
        let cleaned = clean_text(text);
        if !cleaned.is_empty() {
            self.text_by_page.insert(page, cleaned);
        }
    }

    /// Whole-document text in page order.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.text_by_page
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// All lines of the document in page order, trimmed, with the page
    /// number each line came from.
    pub fn lines_with_pages(&self) -> impl Iterator<Item = (u32, &str)> {
        self.text_by_page
            .iter()
            .flat_map(|(page, text)| text.lines().map(move |line| (*page, line.trim())))
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.text_by_page.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_by_page.is_empty()
    }
}

/// Normalize one page of extracted text.
///
/// Collapses horizontal whitespace runs, caps blank-line runs at one, and
/// drops 1-3 character punctuation-only lines left behind by page furniture
/// (rules, dashes, pilcrows).
#[must_use]
pub fn clean_text(text: &str) -> String {
    let text = text.replace('\u{0}', " ");
    let text = MULTISPACE_RE.replace_all(&text, " ");
    let text = MULTINEWLINE_RE.replace_all(&text, "\n\n");
    let text = ISOLATED_PUNCT_RE.replace_all(&text, "");
    text.trim().to_string()
}

/// Load one extracted `.txt` file. The document id defaults to the file stem.
pub fn load_parsed_txt(path: impl AsRef<Path>, doc_id: Option<&str>) -> Result<ExtractedTextData> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;

    let doc_id = doc_id
        .map(ToString::to_string)
        .or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string());

    let mut doc = ExtractedTextData::from_raw_text(doc_id, &raw);
    doc.source_path = Some(path.to_path_buf());
    Ok(doc)
}

/// Load every extracted `.txt` document under `root`, one document per file
/// stem, first occurrence winning on duplicate stems. Traversal order is
/// sorted for determinism.
pub fn load_parsed_dir(root: impl AsRef<Path>) -> Result<Vec<ExtractedTextData>> {
    let mut docs = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "txt") {
            continue;
        }
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        if !seen.insert(stem.clone()) {
            continue;
        }
        docs.push(load_parsed_txt(path, Some(&stem))?);
    }

    log::debug!("Loaded {} parsed documents", docs.len());
    Ok(docs)
}
