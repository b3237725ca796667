//! Priority-ordered scope resolution.
//!
//! Rules are processed in list order. Before a rule is paired, any of
//! its candidates inside a span already claimed by an earlier rule is
//! masked (boundary offsets inclusive), keeping a higher-priority
//! construct's interior opaque to lower-priority delimiters. Pairing
//! itself is delegated to [`crate::pairs::find_pairs`].

use smallvec::SmallVec;

use crate::pairs;
use crate::scanner::Candidate;

/// A resolved (open, close) delimiter pair for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub open: u32,
    pub close: u32,
}

impl Span {
    #[inline]
    pub fn new(open: u32, close: u32) -> Self {
        debug_assert!(open < close);
        Self { open, close }
    }

    /// Masking test: boundary offsets count as inside.
    #[inline]
    pub fn covers(&self, pos: u32) -> bool {
        pos >= self.open && pos <= self.close
    }
}

/// Resolve spans rule by rule in priority order. Output is indexed
/// like the candidate input.
pub fn resolve(candidates_by_rule: &[Vec<Candidate>]) -> Vec<Vec<Span>> {
    let mut spans_by_rule: Vec<Vec<Span>> = Vec::with_capacity(candidates_by_rule.len());

    for candidates in candidates_by_rule {
        let mut openings: SmallVec<[u32; 16]> = SmallVec::new();
        let mut closings: SmallVec<[u32; 16]> = SmallVec::new();
        for candidate in candidates {
            if masked(&spans_by_rule, candidate.pos) {
                continue;
            }
            if candidate.can_open() {
                openings.push(candidate.pos);
            }
            if candidate.can_close() {
                closings.push(candidate.pos);
            }
        }
        let resolved = pairs::find_pairs(&openings, &closings)
            .into_iter()
            .map(|(open, close)| Span::new(open, close))
            .collect();
        spans_by_rule.push(resolved);
    }

    spans_by_rule
}

fn masked(resolved: &[Vec<Span>], pos: u32) -> bool {
    resolved
        .iter()
        .flatten()
        .any(|span| span.covers(pos))
}
