//! Inline formatting rules.
//!
//! A rule describes one inline construct: its markdown delimiter text,
//! the character sets that disqualify a delimiter occurrence as an
//! opening or closing boundary, and the HTML tags it becomes. All rules
//! share identical matching behavior, so a single concrete record
//! parameterized by its sets and tag text suffices; priority is the
//! rule's index in the configured list (index 0 resolves first and
//! masks later rules inside its spans).

use rustc_hash::FxHashSet;

use crate::error::Error;
use crate::tag;

/// Characters that may not sit directly next to an emphasis delimiter.
const DIGITS_AND_SPACE: &str = "0123456789 ";

/// Characters that may not sit directly next to a code delimiter.
const WHITESPACE: &str = " \t\r\n";

/// One inline formatting construct. Immutable after construction and
/// shared read-only across render calls.
#[derive(Debug, Clone)]
pub struct FormattingRule {
    delimiter: String,
    html_open: String,
    html_close: String,
    illegal_preceding: FxHashSet<char>,
    illegal_following: FxHashSet<char>,
}

impl FormattingRule {
    /// Build a rule from a delimiter, an HTML element name, and the
    /// illegal-neighbor character sets. Fails with
    /// [`Error::InvalidName`] for an empty element name.
    pub fn new(
        delimiter: &str,
        html_name: &str,
        illegal_preceding: &str,
        illegal_following: &str,
    ) -> Result<Self, Error> {
        debug_assert!(!delimiter.is_empty());
        let (html_open, html_close) = tag::name_to_tag(html_name)?;
        Ok(Self {
            delimiter: delimiter.to_string(),
            html_open,
            html_close,
            illegal_preceding: illegal_preceding.chars().collect(),
            illegal_following: illegal_following.chars().collect(),
        })
    }

    fn with_tags(
        delimiter: &str,
        html_open: &str,
        html_close: &str,
        illegal_preceding: &str,
        illegal_following: &str,
    ) -> Self {
        Self {
            delimiter: delimiter.to_string(),
            html_open: html_open.to_string(),
            html_close: html_close.to_string(),
            illegal_preceding: illegal_preceding.chars().collect(),
            illegal_following: illegal_following.chars().collect(),
        }
    }

    /// Emphasis: `_` becomes `<em>`. Delimiters touching digits or
    /// spaces on the relevant side stay literal.
    pub fn italic() -> Self {
        Self::with_tags("_", "<em>", "</em>", DIGITS_AND_SPACE, DIGITS_AND_SPACE)
    }

    /// Strong emphasis: `__` becomes `<strong>`.
    pub fn strong() -> Self {
        Self::with_tags("__", "<strong>", "</strong>", DIGITS_AND_SPACE, DIGITS_AND_SPACE)
    }

    /// Inline code: a backtick becomes `<code>`. Delimiters touching
    /// whitespace on the relevant side stay literal.
    pub fn code() -> Self {
        Self::with_tags("`", "<code>", "</code>", WHITESPACE, WHITESPACE)
    }

    /// The literal markdown delimiter text.
    #[inline]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// HTML text substituted for an opening delimiter.
    #[inline]
    pub fn html_open(&self) -> &str {
        &self.html_open
    }

    /// HTML text substituted for a closing delimiter.
    #[inline]
    pub fn html_close(&self) -> &str {
        &self.html_close
    }

    /// Whether `ch` may appear directly before a closing delimiter.
    #[inline]
    pub fn is_legal_preceding(&self, ch: char) -> bool {
        !self.illegal_preceding.contains(&ch)
    }

    /// Whether `ch` may appear directly after an opening delimiter.
    #[inline]
    pub fn is_legal_following(&self, ch: char) -> bool {
        !self.illegal_following.contains(&ch)
    }
}

/// The default dialect, in priority order: italic, strong, code.
pub fn default_rules() -> Vec<FormattingRule> {
    vec![
        FormattingRule::italic(),
        FormattingRule::strong(),
        FormattingRule::code(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italic_defaults() {
        let rule = FormattingRule::italic();
        assert_eq!(rule.delimiter(), "_");
        assert_eq!(rule.html_open(), "<em>");
        assert_eq!(rule.html_close(), "</em>");
    }

    #[test]
    fn test_emphasis_legality() {
        let rule = FormattingRule::italic();
        assert!(rule.is_legal_preceding('a'));
        assert!(!rule.is_legal_preceding('1'));
        assert!(!rule.is_legal_following(' '));
        assert!(rule.is_legal_following('.'));
    }

    #[test]
    fn test_code_legality() {
        let rule = FormattingRule::code();
        assert!(rule.is_legal_following('1'));
        assert!(!rule.is_legal_following(' '));
        assert!(!rule.is_legal_preceding('\t'));
    }

    #[test]
    fn test_custom_rule() {
        let rule = FormattingRule::new("~", "del", " ", " ").unwrap();
        assert_eq!(rule.delimiter(), "~");
        assert_eq!(rule.html_open(), "<del>");
    }

    #[test]
    fn test_custom_rule_empty_name() {
        assert!(FormattingRule::new("~", "", " ", " ").is_err());
    }

    #[test]
    fn test_default_rule_order() {
        let rules = default_rules();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].delimiter(), "_");
        assert_eq!(rules[1].delimiter(), "__");
        assert_eq!(rules[2].delimiter(), "`");
    }
}
