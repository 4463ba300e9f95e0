use crate::document::ExtractedTextData;
use crate::matchers::{classify_line, LineClass};
use serde::{Deserialize, Serialize};

/// Kind of structural unit a [`LegalSection`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionType {
    Section,
    Schedule,
    Other,
}

/// One structural unit of an act: a numbered section, a schedule, or the
/// synthetic preamble that collects text before the first recognized marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalSection {
    /// Identifier of the act this section belongs to
    pub act_id: String,

    /// Section number ("12A", "3(1)") or schedule heading; absent for the preamble
    pub section_id: Option<String>,

    /// Section heading; "PREAMBLE" for the synthetic preamble, absent for schedules
    pub heading: Option<String>,

    /// Body lines joined by newline
    pub body: String,

    /// Innermost enclosing PART marker, carried across sections
    pub part: Option<String>,

    /// Innermost enclosing CHAPTER marker, carried across sections
    pub chapter: Option<String>,

    /// First page this unit touched
    pub page_start: u32,

    /// Last page this unit touched; always >= page_start
    pub page_end: u32,

    pub section_type: SectionType,
}

/// Accumulation state for the unit currently being built.
struct OpenSection {
    section_id: Option<String>,
    heading: Option<String>,
    section_type: SectionType,
    body_lines: Vec<String>,
    page_start: u32,
    page_end: u32,
}

impl OpenSection {
    fn schedule(id: String, page: u32) -> Self {
        Self {
            section_id: Some(id),
            heading: None,
            section_type: SectionType::Schedule,
            body_lines: Vec::new(),
            page_start: page,
            page_end: page,
        }
    }

    fn section(id: String, heading: String, rest: Option<String>, page: u32) -> Self {
        Self {
            section_id: Some(id),
            heading: Some(heading),
            section_type: SectionType::Section,
            body_lines: rest.into_iter().collect(),
            page_start: page,
            page_end: page,
        }
    }

    fn preamble(page: u32) -> Self {
        Self {
            section_id: None,
            heading: Some("PREAMBLE".to_string()),
            section_type: SectionType::Other,
            body_lines: Vec::new(),
            page_start: page,
            page_end: page,
        }
    }

    fn push_body_line(&mut self, line: &str, page: u32) {
        self.body_lines.push(line.to_string());
        self.page_end = page;
    }

    /// Finalize into a section, or `None` for ghost units (no body, no
    /// heading) left behind by isolated markers.
    fn into_section(
        self,
        act_id: &str,
        part: Option<&String>,
        chapter: Option<&String>,
    ) -> Option<LegalSection> {
        let body = self.body_lines.join("\n");
        if body.is_empty() && self.heading.is_none() {
            return None;
        }

        Some(LegalSection {
            act_id: act_id.to_string(),
            section_id: self.section_id,
            heading: self.heading,
            body,
            part: part.cloned(),
            chapter: chapter.cloned(),
            page_start: self.page_start,
            page_end: self.page_end,
            section_type: self.section_type,
        })
    }
}

/// Recover the ordered list of structural units from a document.
///
/// Deterministic and total: a document with no recognizable markers yields a
/// single preamble section spanning every non-empty page, and a fully empty
/// document yields no sections at all. Part and Chapter markers are
/// persistent context, not section boundaries, so consecutive sections under
/// the same Part all carry it.
#[must_use]
pub fn sectionize(doc: &ExtractedTextData) -> Vec<LegalSection> {
    let mut sections: Vec<LegalSection> = Vec::new();
    let mut part: Option<String> = None;
    let mut chapter: Option<String> = None;
    let mut open: Option<OpenSection> = None;

    for (page, line) in doc.lines_with_pages() {
        match classify_line(line) {
            LineClass::Part(marker) => part = Some(marker),
            LineClass::Chapter(marker) => chapter = Some(marker),
            LineClass::Schedule(id) => {
                flush(&mut sections, doc, part.as_ref(), chapter.as_ref(), open.take());
                open = Some(OpenSection::schedule(id, page));
            }
            LineClass::SectionHeader { id, heading, rest } => {
                flush(&mut sections, doc, part.as_ref(), chapter.as_ref(), open.take());
                open = Some(OpenSection::section(id, heading, rest, page));
            }
            LineClass::Body => match open.as_mut() {
                Some(section) => section.push_body_line(line, page),
                None => {
                    let mut preamble = OpenSection::preamble(page);
                    preamble.push_body_line(line, page);
                    open = Some(preamble);
                }
            },
        }
    }

    flush(&mut sections, doc, part.as_ref(), chapter.as_ref(), open);
    sections
}

fn flush(
    sections: &mut Vec<LegalSection>,
    doc: &ExtractedTextData,
    part: Option<&String>,
    chapter: Option<&String>,
    open: Option<OpenSection>,
) {
    if let Some(section) = open.and_then(|o| o.into_section(&doc.doc_id, part, chapter)) {
        sections.push(section);
    }
}
