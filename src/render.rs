//! Position-stable rewriting of resolved spans into HTML.
//!
//! Spans and escape marks flatten into a position-ordered event list;
//! a fresh output buffer is built by copying source slices between
//! events and interleaving replacement text, so substitutions of
//! different lengths never require offset arithmetic over the source
//! text. Escape runs contract to half their length; lone escape
//! characters left inside copied segments are stripped.

use crate::resolver::Span;
use crate::rule::FormattingRule;
use crate::scanner::{EscapeMark, ESCAPE_CHAR};

/// Growable HTML output buffer.
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create with capacity sized for the expected input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write replacement text verbatim.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Copy a source segment, dropping residual lone escape characters.
    /// Runs of two or more escapes inside a segment pass through
    /// verbatim: only a single unconsumed escape marker is stripped.
    pub fn write_segment(&mut self, segment: &str) {
        let mut rest = segment;
        while let Some(at) = rest.find(ESCAPE_CHAR) {
            self.out.push_str(&rest[..at]);
            let run = rest[at..].chars().take_while(|&c| c == ESCAPE_CHAR).count();
            if run >= 2 {
                self.out.push_str(&rest[at..at + run]);
            }
            rest = &rest[at + run..];
        }
        self.out.push_str(rest);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

#[derive(Clone, Copy)]
enum EventKind<'a> {
    Open(&'a FormattingRule),
    Close(&'a FormattingRule),
    Escape { run: u32 },
}

struct Event<'a> {
    pos: u32,
    kind: EventKind<'a>,
}

/// Rewrite `text` by substituting every resolved delimiter and escape
/// run with its HTML counterpart.
pub fn rewrite(
    text: &str,
    rules: &[FormattingRule],
    spans_by_rule: &[Vec<Span>],
    escapes: &[EscapeMark],
) -> String {
    let span_count: usize = spans_by_rule.iter().map(Vec::len).sum();
    let mut events: Vec<Event<'_>> = Vec::with_capacity(span_count * 2 + escapes.len());

    for (rule, spans) in rules.iter().zip(spans_by_rule) {
        for span in spans {
            events.push(Event {
                pos: span.open,
                kind: EventKind::Open(rule),
            });
            events.push(Event {
                pos: span.close,
                kind: EventKind::Close(rule),
            });
        }
    }
    for mark in escapes {
        events.push(Event {
            pos: mark.pos,
            kind: EventKind::Escape { run: mark.run },
        });
    }
    // Positions never collide: escape runs end before the token they
    // prefix, and masking keeps span boundaries disjoint across rules.
    events.sort_by_key(|event| event.pos);

    let mut writer = HtmlWriter::with_capacity_for(text.len());
    let mut cursor = 0usize;
    for event in &events {
        let pos = event.pos as usize;
        writer.write_segment(&text[cursor..pos]);
        cursor = match event.kind {
            EventKind::Open(rule) => {
                writer.write_str(rule.html_open());
                pos + rule.delimiter().len()
            }
            EventKind::Close(rule) => {
                writer.write_str(rule.html_close());
                pos + rule.delimiter().len()
            }
            EventKind::Escape { run } => {
                for _ in 0..run / 2 {
                    writer.write_char(ESCAPE_CHAR);
                }
                pos + run as usize
            }
        };
    }
    writer.write_segment(&text[cursor..]);

    writer.into_string()
}
