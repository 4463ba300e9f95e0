use once_cell::sync::Lazy;
use regex::Regex;

static PART_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(PART\s+[IVXLC]+(?:\s*[-–]\s*.+)?)\s*$").expect("valid regex"));

static CHAPTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(CHAPTER\s+[IVXLC]+(?:\s*[-–]\s*.+)?)\s*$").expect("valid regex")
});

static SCHEDULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(SCHEDULE\s+[A-Z0-9]+|FIRST SCHEDULE|SECOND SCHEDULE|THIRD SCHEDULE)\b.*$")
        .expect("valid regex")
});

// Example: "Section 2. Short title..."
static SECTION_WORD_NUM_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Section\s+(\d+[A-Z]?(?:\(\d+[A-Z]?\))?)\s*\.\s*(.+)$").expect("valid regex")
});

// Example: "12A. Power to make rules"
static SECTION_NUM_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+[A-Z]?(?:\(\d+[A-Z]?\))?)\s*\.\s*(.+)$").expect("valid regex"));

/// Classification of one normalized line of statute text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A `PART <roman>` marker; updates context without closing a section
    Part(String),

    /// A `CHAPTER <roman>` marker; updates context without closing a section
    Chapter(String),

    /// A schedule heading; the matched heading text doubles as section id
    Schedule(String),

    /// A numbered section header
    SectionHeader {
        id: String,
        heading: String,
        /// Body text jammed onto the header line after the heading's first
        /// sentence terminator, if any
        rest: Option<String>,
    },

    /// Anything the matchers could not place; always recoverable as body text
    Body,
}

/// Ordered matcher table. Precedence is fixed: the first match wins, and a
/// line matching nothing is body text.
const MATCHERS: &[(&str, fn(&str) -> Option<LineClass>)] = &[
    ("part", match_part),
    ("chapter", match_chapter),
    ("schedule", match_schedule),
    ("section", match_section_header),
];

/// Classify one trimmed line.
#[must_use]
pub fn classify_line(line: &str) -> LineClass {
    for (_, matcher) in MATCHERS {
        if let Some(class) = matcher(line) {
            return class;
        }
    }
    LineClass::Body
}

fn match_part(line: &str) -> Option<LineClass> {
    PART_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| LineClass::Part(m.as_str().trim().to_string()))
}

fn match_chapter(line: &str) -> Option<LineClass> {
    CHAPTER_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| LineClass::Chapter(m.as_str().trim().to_string()))
}

fn match_schedule(line: &str) -> Option<LineClass> {
    SCHEDULE_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| LineClass::Schedule(m.as_str().trim().to_string()))
}

fn match_section_header(line: &str) -> Option<LineClass> {
    let captures = SECTION_WORD_NUM_TITLE_RE
        .captures(line)
        .or_else(|| SECTION_NUM_TITLE_RE.captures(line))?;

    let id = captures.get(1)?.as_str().trim().to_string();
    let (heading, rest) = split_heading(captures.get(2)?.as_str());
    Some(LineClass::SectionHeader { id, heading, rest })
}

/// Split a header remainder into the heading proper and any body text jammed
/// after it. Extraction frequently glues the first body sentence onto the
/// header line with no separating whitespace, so the heading ends at the
/// first sentence terminator and the remainder is carried into the body.
fn split_heading(raw: &str) -> (String, Option<String>) {
    let raw = raw.trim();
    match raw.find(&['.', '?', '!'][..]) {
        Some(pos) => {
            let (head, rest) = raw.split_at(pos + 1);
            let rest = rest.trim();
            if rest.is_empty() {
                (head.trim().to_string(), None)
            } else {
                (head.trim().to_string(), Some(rest.to_string()))
            }
        }
        None => (raw.to_string(), None),
    }
}
