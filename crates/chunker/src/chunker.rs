use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::sentence::split_sentences;
use crate::types::Chunk;
use statute_sectionizer::LegalSection;

/// Sentence-aligned sliding-window chunker.
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with a validated configuration.
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk one section body into bounded, overlapping retrieval units.
    ///
    /// Deterministic and total: an empty or whitespace-only body yields zero
    /// chunks. A single sentence longer than the budget is kept whole rather
    /// than truncated.
    #[must_use]
    pub fn chunk_section(&self, section: &LegalSection) -> Vec<Chunk> {
        let sentences = split_sentences(&section.body);
        if sentences.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut window: Vec<String> = Vec::new();
        let mut window_len = 0usize;
        let mut index = 0usize;

        for sentence in sentences {
            // +1 accounts for the joining space.
            let sentence_len = char_len(sentence) + 1;

            if !window.is_empty() && window_len + sentence_len > self.config.max_chars {
                if let Some(chunk) = self.build_chunk(section, &window, index) {
                    chunks.push(chunk);
                    index += 1;
                }

                let joined = window.join(" ");
                let overlap = tail_chars(&joined, self.config.overlap_chars);
                if overlap.is_empty() {
                    window_len = sentence_len;
                    window = vec![sentence.to_string()];
                } else {
                    window_len = char_len(overlap) + 1 + sentence_len;
                    window = vec![overlap.to_string(), sentence.to_string()];
                }
            } else {
                window.push(sentence.to_string());
                window_len += sentence_len;
            }
        }

        if let Some(chunk) = self.build_chunk(section, &window, index) {
            chunks.push(chunk);
        }

        chunks
    }

    /// Chunk an ordered list of sections, preserving section order.
    #[must_use]
    pub fn chunk_sections(&self, sections: &[LegalSection]) -> Vec<Chunk> {
        sections
            .iter()
            .flat_map(|section| self.chunk_section(section))
            .collect()
    }

    fn build_chunk(&self, section: &LegalSection, window: &[String], index: usize) -> Option<Chunk> {
        if window.is_empty() {
            return None;
        }
        let text = window.join(" ").trim().to_string();
        if text.is_empty() {
            return None;
        }

        Some(Chunk {
            doc_id: section.act_id.clone(),
            section_id: section.section_id.clone(),
            chunk_id: Chunk::derive_id(&section.act_id, section.section_id.as_deref(), index),
            chunk_index: index,
            text,
            part: section.part.clone(),
            chapter: section.chapter.clone(),
            section_heading: section.heading.clone(),
            page_start: section.page_start,
            page_end: section.page_end,
        })
    }

    /// Get statistics about chunking
    #[must_use]
    pub fn get_stats(chunks: &[Chunk]) -> ChunkingStats {
        let lengths: Vec<usize> = chunks.iter().map(Chunk::char_len).collect();
        let total_chars: usize = lengths.iter().sum();
        ChunkingStats {
            total_chunks: chunks.len(),
            total_chars,
            avg_chars_per_chunk: if chunks.is_empty() {
                0
            } else {
                total_chars / chunks.len()
            },
            min_chars: lengths.iter().copied().min().unwrap_or(0),
            max_chars: lengths.iter().copied().max().unwrap_or(0),
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            config: ChunkerConfig::default(),
        }
    }
}

/// Statistics about chunking results
#[derive(Debug, Clone)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_chars: usize,
    pub avg_chars_per_chunk: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Chars: {} | Avg: {} | Range: {}-{}",
            self.total_chunks, self.total_chars, self.avg_chars_per_chunk, self.min_chars, self.max_chars
        )
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Last `n` characters of `s`, on a character boundary.
fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    let total = s.chars().count();
    if total <= n {
        return s;
    }
    match s.char_indices().nth(total - n) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
