//! Paragraph splitting and block-header classification.
//!
//! The inline pipeline renders one logical unit at a time; this module
//! cuts a document into blank-line-delimited paragraphs and decides
//! which block-level wrapper each one gets.

/// Block-level wrapper for one paragraph of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// ATX-style header, level 1-6.
    Heading(u8),
}

impl BlockKind {
    /// Wrapper tag pair for this block.
    pub fn wrapper(&self) -> (&'static str, &'static str) {
        match self {
            BlockKind::Paragraph => ("<p>", "</p>"),
            BlockKind::Heading(1) => ("<h1>", "</h1>"),
            BlockKind::Heading(2) => ("<h2>", "</h2>"),
            BlockKind::Heading(3) => ("<h3>", "</h3>"),
            BlockKind::Heading(4) => ("<h4>", "</h4>"),
            BlockKind::Heading(5) => ("<h5>", "</h5>"),
            BlockKind::Heading(_) => ("<h6>", "</h6>"),
        }
    }
}

/// Split input into blank-line-delimited paragraphs. Blank lines are
/// empty or whitespace-only; `\r\n` endings are tolerated. Paragraphs
/// keep their interior line breaks.
pub fn paragraphs(input: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start: Option<usize> = None;
    let mut offset = 0;

    for line in input.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if line.trim().is_empty() {
            if let Some(from) = start.take() {
                result.push(input[from..line_start].trim_end_matches(['\n', '\r']));
            }
        } else if start.is_none() {
            start = Some(line_start);
        }
    }
    if let Some(from) = start {
        result.push(input[from..].trim_end_matches(['\n', '\r']));
    }

    result
}

/// Classify a paragraph: 1-6 leading `#` followed by a space makes a
/// heading, with the marker stripped from the content.
pub fn classify(paragraph: &str) -> (BlockKind, &str) {
    let hashes = paragraph.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&hashes) {
        if let Some(content) = paragraph[hashes..].strip_prefix(' ') {
            return (BlockKind::Heading(hashes as u8), content);
        }
    }
    (BlockKind::Paragraph, paragraph)
}
