//! # Statute Sectionizer
//!
//! Recovers the structure of an enacted statute (Parts, Chapters, Sections,
//! Schedules, Preamble) from flat per-page text.
//!
//! ## Architecture
//!
//! ```text
//! Extracted page text
//!     │
//!     ├──> Page cleanup (whitespace collapse, artifact removal)
//!     │
//!     ├──> Line classification (ordered matchers)
//!     │    ├─> PART / CHAPTER markers  → persistent context
//!     │    ├─> SCHEDULE markers        → new schedule unit
//!     │    ├─> Section headers         → new numbered unit
//!     │    └─> everything else         → body text
//!     │
//!     └──> Single forward pass
//!          └─> Emit LegalSection[] with part/chapter context and page spans
//! ```
//!
//! Classification is deliberately forgiving: a line the matchers cannot place
//! is body text, never an error, so OCR noise degrades output quality instead
//! of failing the document.
//!
//! ## Example
//!
//! ```rust
//! use statute_sectionizer::{sectionize, ExtractedTextData};
//!
//! let mut doc = ExtractedTextData::new("test-act");
//! doc.insert_page(0, "PART I - PRELIMINARY\n1. Short title\nThis Act may be called the Test Act.");
//!
//! let sections = sectionize(&doc);
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].section_id.as_deref(), Some("1"));
//! assert_eq!(sections[0].part.as_deref(), Some("PART I - PRELIMINARY"));
//! ```

mod document;
mod error;
mod matchers;
mod sectionizer;

pub use document::{load_parsed_dir, load_parsed_txt, ExtractedTextData, PAGE_BREAK_MARKER};
pub use error::{Result, SectionizerError};
pub use matchers::{classify_line, LineClass};
pub use sectionizer::{sectionize, LegalSection, SectionType};
