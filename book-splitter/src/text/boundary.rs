//! Detection of where narrative content begins in a raw book.
//!
//! Structural markers are tried first, in priority order; the long-line
//! heuristic only runs when none of them is present.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Trimmed length (in characters) a line must exceed to count as prose.
pub const LONG_LINE_THRESHOLD: usize = 100;

/// Maximum characters of matched evidence kept for diagnostics.
const EVIDENCE_MAX_CHARS: usize = 80;

const CHAPTER_HEADING: &str = r"(?i)cap[íi]tulo\s+[i1]|chapter\s+[i1]|introdu[çc][ãa]o|introduction|pr[óo]logo|prologue";
const NARRATIVE_MARKER: &str = r"(?i)come[çc]o\s+da\s+narrativa|in[íi]cio\s+da\s+hist[óo]ria";
const LAYOUT_BREAK: &str = r"\n(?:[ \t]*\n){3,}";

static CHAPTER_HEADING_RE: OnceLock<Regex> = OnceLock::new();
static NARRATIVE_MARKER_RE: OnceLock<Regex> = OnceLock::new();
static LAYOUT_BREAK_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("boundary pattern should compile"))
}

/// A single front-matter/body transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    /// Chapter one, introduction, or prologue heading.
    ChapterHeading,
    /// Explicit "beginning of the narrative" phrase.
    NarrativeMarker,
    /// Three or more consecutive blank lines.
    LayoutBreak,
    /// First line long enough to be continuous prose.
    LongLine,
}

impl BoundaryRule {
    /// Rules in evaluation order; the first one that locates a start wins.
    pub const PRIORITY: [BoundaryRule; 4] = [
        BoundaryRule::ChapterHeading,
        BoundaryRule::NarrativeMarker,
        BoundaryRule::LayoutBreak,
        BoundaryRule::LongLine,
    ];

    /// Find the offset this rule would start content at, with the text it matched.
    pub fn locate<'t>(&self, text: &'t str) -> Option<(usize, &'t str)> {
        let regex = match self {
            BoundaryRule::ChapterHeading => compiled(&CHAPTER_HEADING_RE, CHAPTER_HEADING),
            BoundaryRule::NarrativeMarker => compiled(&NARRATIVE_MARKER_RE, NARRATIVE_MARKER),
            BoundaryRule::LayoutBreak => compiled(&LAYOUT_BREAK_RE, LAYOUT_BREAK),
            BoundaryRule::LongLine => return locate_long_line(text),
        };

        regex.find(text).map(|m| (m.start(), m.as_str()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoundaryRule::ChapterHeading => "chapter heading",
            BoundaryRule::NarrativeMarker => "narrative marker",
            BoundaryRule::LayoutBreak => "layout break",
            BoundaryRule::LongLine => "long line",
        }
    }
}

impl fmt::Display for BoundaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What caused a boundary to be placed where it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Matched { rule: BoundaryRule, text: String },
    None,
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evidence::Matched { rule, text } => write!(f, "{} {:?}", rule, text),
            Evidence::None => f.write_str("no marker"),
        }
    }
}

/// Start of narrative content within a raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// Byte offset into the raw text; 0 means nothing is trimmed.
    pub offset: usize,
    pub evidence: Evidence,
}

impl Boundary {
    /// The rule that placed this boundary, if any fired.
    pub fn rule(&self) -> Option<BoundaryRule> {
        match &self.evidence {
            Evidence::Matched { rule, .. } => Some(*rule),
            Evidence::None => None,
        }
    }
}

/// Locate the start of narrative content in `text`.
pub fn detect_boundary(text: &str) -> Boundary {
    for rule in BoundaryRule::PRIORITY {
        if let Some((offset, matched)) = rule.locate(text) {
            let line = text[..offset].matches('\n').count() + 1;
            log::info!(
                "Content start found by {} at line {}: {:?}",
                rule,
                line,
                shorten(matched)
            );
            return Boundary {
                offset,
                evidence: Evidence::Matched {
                    rule,
                    text: shorten(matched),
                },
            };
        }
    }

    log::warn!("No content start marker found, processing the full text");
    Boundary {
        offset: 0,
        evidence: Evidence::None,
    }
}

fn locate_long_line(text: &str) -> Option<(usize, &str)> {
    let mut offset = 0;
    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.chars().count() > LONG_LINE_THRESHOLD {
            return Some((offset, trimmed));
        }
        offset += line.len() + 1;
    }
    None
}

fn shorten(matched: &str) -> String {
    if matched.chars().count() <= EVIDENCE_MAX_CHARS {
        matched.to_string()
    } else {
        let mut cut: String = matched.chars().take(EVIDENCE_MAX_CHARS).collect();
        cut.push_str("...");
        cut
    }
}
