//! Angle-bracket pre-escaping.
//!
//! The resolution pipeline expects text whose `<` and `>` are already
//! HTML entities; this pass applies that escaping as the first step of
//! a render. `&` is left untouched so already-escaped input passes
//! through unchanged. Fast path: locate escapes with memchr and
//! bulk-copy the segments between them.

use std::borrow::Cow;

use memchr::memchr2;

/// Replace `<` and `>` with their HTML entities, borrowing the input
/// when nothing needs escaping.
pub fn pre_escape(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let Some(first) = memchr2(b'<', b'>', bytes) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 8);
    out.push_str(&input[..first]);
    let mut pos = first;
    while pos < bytes.len() {
        match bytes[pos] {
            b'<' => out.push_str("&lt;"),
            b'>' => out.push_str("&gt;"),
            _ => unreachable!(),
        }
        pos += 1;
        let next = memchr2(b'<', b'>', &bytes[pos..]).map_or(bytes.len(), |i| pos + i);
        out.push_str(&input[pos..next]);
        pos = next;
    }

    Cow::Owned(out)
}
