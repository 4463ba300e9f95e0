use serde::{Deserialize, Serialize};

/// Token used in chunk ids for sections without a section number.
pub const PREAMBLE_TOKEN: &str = "PREAMBLE";

/// The smallest retrievable unit: a bounded span of one section's body plus
/// the metadata needed to cite it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Act the chunk came from
    pub doc_id: String,

    /// Section number of the owning section, when it has one
    pub section_id: Option<String>,

    /// Stable id: `{doc_id}-{section_id|PREAMBLE}-{chunk_index}`
    pub chunk_id: String,

    /// 0-based, contiguous within the owning section
    pub chunk_index: usize,

    /// Chunk text, non-empty after trimming
    pub text: String,

    /// PART context inherited from the owning section
    pub part: Option<String>,

    /// CHAPTER context inherited from the owning section
    pub chapter: Option<String>,

    /// Heading of the owning section
    pub section_heading: Option<String>,

    /// Page span of the owning section, inherited verbatim
    pub page_start: u32,
    pub page_end: u32,
}

impl Chunk {
    /// Derive the stable chunk id for a section and position.
    ///
    /// Identical input always produces the identical id, which is what makes
    /// reindexing the same section content idempotent.
    #[must_use]
    pub fn derive_id(doc_id: &str, section_id: Option<&str>, index: usize) -> String {
        format!("{doc_id}-{}-{index}", section_id.unwrap_or(PREAMBLE_TOKEN))
    }

    /// Number of characters in the chunk text.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_id_uses_preamble_token_when_section_id_absent() {
        assert_eq!(Chunk::derive_id("act", Some("12A"), 3), "act-12A-3");
        assert_eq!(Chunk::derive_id("act", None, 0), "act-PREAMBLE-0");
    }
}
