//! Greedy interval pairing.
//!
//! Matches ascending opening and closing candidate positions into
//! non-overlapping pairs: leftmost-valid, preferring the later opening
//! when several openings precede one closing. Unmatched positions are
//! dropped silently; their delimiters render as literal text.

/// Pair openings with closings.
///
/// Both inputs must be ascending and duplicate-free. A position may
/// appear in both lists (a delimiter that could open or close); when
/// an emitted pair's closing coincides with the next opening, that
/// opening is skipped so one delimiter is never counted twice.
pub fn find_pairs(openings: &[u32], closings: &[u32]) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < openings.len() && j < closings.len() {
        if closings[j] <= openings[i] {
            // A closing cannot close at or before its own opening.
            j += 1;
            continue;
        }
        if let Some(&next) = openings.get(i + 1) {
            if next < closings[j] {
                // Another opening starts before this closing: prefer it.
                i += 1;
                continue;
            }
            pairs.push((openings[i], closings[j]));
            i += if next == closings[j] { 2 } else { 1 };
            j += 1;
        } else {
            pairs.push((openings[i], closings[j]));
            i += 1;
            j += 1;
        }
    }

    pairs
}
