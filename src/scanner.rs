//! Candidate-delimiter scanning.
//!
//! A single left-to-right pass buffers maximal runs of
//! delimiter-alphabet characters into tokens. At each token boundary
//! the leading escape run is recorded, the remainder is matched against
//! the rule delimiter texts, and the characters on either side of the
//! token decide whether the occurrence can open a span, close one,
//! both, or neither. Everything that fails a check stays literal text.

use crate::limits;
use crate::rule::FormattingRule;

/// The escape character. A run of length n contributes n/2 (rounded
/// down) literal copies to the output; an odd run suppresses the
/// delimiter token immediately following it.
pub const ESCAPE_CHAR: char = '\\';

/// Candidate state flags.
pub mod flags {
    pub const CAN_OPEN: u8 = 0b01;
    pub const CAN_CLOSE: u8 = 0b10;
}

/// A delimiter occurrence that passed adjacency-legality checks.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Byte offset of the first delimiter character, past any consumed
    /// escape prefix.
    pub pos: u32,
    /// CAN_OPEN / CAN_CLOSE flags.
    pub flags: u8,
}

impl Candidate {
    #[inline]
    pub fn new(pos: u32, flags: u8) -> Self {
        Self { pos, flags }
    }

    #[inline]
    pub fn can_open(&self) -> bool {
        self.flags & flags::CAN_OPEN != 0
    }

    #[inline]
    pub fn can_close(&self) -> bool {
        self.flags & flags::CAN_CLOSE != 0
    }
}

/// A maximal run of escape characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeMark {
    /// Byte offset of the first escape character.
    pub pos: u32,
    /// Number of escape characters in the run.
    pub run: u32,
}

/// The set of characters that can start or extend a token.
struct Alphabet {
    ascii: [bool; 128],
    other: Vec<char>,
}

impl Alphabet {
    fn build(rules: &[FormattingRule]) -> Self {
        let mut ascii = [false; 128];
        let mut other = Vec::new();
        ascii[ESCAPE_CHAR as usize] = true;
        for rule in rules {
            for ch in rule.delimiter().chars() {
                if ch.is_ascii() {
                    ascii[ch as usize] = true;
                } else if !other.contains(&ch) {
                    other.push(ch);
                }
            }
        }
        Self { ascii, other }
    }

    #[inline]
    fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            self.other.contains(&ch)
        }
    }
}

/// Walk `text` once, producing candidate lists indexed like `rules`
/// plus all escape marks, each list in ascending source order.
pub fn scan(text: &str, rules: &[FormattingRule]) -> (Vec<Vec<Candidate>>, Vec<EscapeMark>) {
    let alphabet = Alphabet::build(rules);
    let mut candidates: Vec<Vec<Candidate>> = vec![Vec::new(); rules.len()];
    let mut escapes: Vec<EscapeMark> = Vec::new();

    let mut token_start: Option<usize> = None;
    // Character immediately before the current token.
    let mut before_token: Option<char> = None;
    let mut prev_char: Option<char> = None;

    for (offset, ch) in text.char_indices() {
        if alphabet.contains(ch) {
            if token_start.is_none() {
                token_start = Some(offset);
                before_token = prev_char;
            }
        } else if let Some(start) = token_start.take() {
            evaluate_token(
                text,
                start,
                offset,
                before_token,
                Some(ch),
                rules,
                &mut candidates,
                &mut escapes,
            );
        }
        prev_char = Some(ch);
    }
    if let Some(start) = token_start {
        evaluate_token(
            text,
            start,
            text.len(),
            before_token,
            None,
            rules,
            &mut candidates,
            &mut escapes,
        );
    }

    (candidates, escapes)
}

#[allow(clippy::too_many_arguments)]
fn evaluate_token(
    text: &str,
    start: usize,
    end: usize,
    before: Option<char>,
    after: Option<char>,
    rules: &[FormattingRule],
    candidates: &mut [Vec<Candidate>],
    escapes: &mut Vec<EscapeMark>,
) {
    let token = &text[start..end];

    // ESCAPE_CHAR is ASCII, so the run length doubles as a byte count.
    let run = token.chars().take_while(|&c| c == ESCAPE_CHAR).count();
    if run > 0 && escapes.len() < limits::MAX_ESCAPE_MARKS {
        escapes.push(EscapeMark {
            pos: start as u32,
            run: run as u32,
        });
    }

    let rest = &token[run..];
    if rest.is_empty() || run % 2 == 1 {
        // Pure escape run, or an odd run suppressing the delimiter
        // after it: the remainder stays literal.
        return;
    }

    for (idx, rule) in rules.iter().enumerate() {
        if rule.delimiter() != rest {
            continue;
        }
        // An occurrence can close only when a preceding character
        // exists and is legal, and open only when a following one does;
        // at the text edges the missing side can never pair anyway.
        let mut state = 0u8;
        if matches!(after, Some(c) if rule.is_legal_following(c)) {
            state |= flags::CAN_OPEN;
        }
        if matches!(before, Some(c) if rule.is_legal_preceding(c)) {
            state |= flags::CAN_CLOSE;
        }
        if state != 0 && candidates[idx].len() < limits::MAX_CANDIDATES_PER_RULE {
            candidates[idx].push(Candidate::new((start + run) as u32, state));
        }
    }
}
