//! litemark: restricted Markdown dialect to HTML renderer
//!
//! Converts a small inline dialect (`_emphasis_`, `__strong__`,
//! `` `code` ``, backslash escapes) plus ATX-style headers into HTML.
//!
//! # Design Principles
//! - No regex: single-pass character scanning with explicit legality
//!   checks at delimiter boundaries
//! - No AST: resolved spans are rewritten straight into the output
//! - Malformed markup is never an error: unmatched or illegally placed
//!   delimiters render as literal text
//!
//! # Example
//! ```
//! let html = litemark::to_html("# Title\n\nsome _emphasized_ text");
//! assert!(html.contains("<h1>Title</h1>"));
//! assert!(html.contains("<em>emphasized</em>"));
//! ```

pub mod block;
pub mod error;
pub mod escape;
pub mod limits;
pub mod pairs;
pub mod render;
pub mod resolver;
pub mod rule;
pub mod scanner;
pub mod tag;

// Re-export primary types
pub use error::Error;
pub use resolver::Span;
pub use rule::{default_rules, FormattingRule};
pub use scanner::{Candidate, EscapeMark};

/// A configured rendering pipeline: an ordered rule list plus the
/// wrapper tag applied around each rendered fragment.
///
/// Rule order is priority order: the rule at index 0 resolves first
/// and masks delimiters of later rules inside its spans. Construction
/// is the only fallible step; a built `Md` renders any input and is
/// safe to share across threads.
pub struct Md {
    rules: Vec<FormattingRule>,
    wrapper: (String, String),
}

impl Md {
    /// Build a pipeline from a rule list and a wrapper element name.
    /// Fails with [`Error::InvalidName`] for an empty name.
    pub fn new(rules: Vec<FormattingRule>, wrapper_name: &str) -> Result<Self, Error> {
        let wrapper = tag::name_to_tag(wrapper_name)?;
        Ok(Self { rules, wrapper })
    }

    /// The default dialect (italic, strong, code) wrapped in `<p>`.
    pub fn with_defaults() -> Self {
        Self {
            rules: default_rules(),
            wrapper: ("<p>".to_string(), "</p>".to_string()),
        }
    }

    /// Render one logical unit of text, wrapped in the configured tag.
    ///
    /// Absent input fails with [`Error::NullInput`]; no other
    /// validation is performed. Arbitrary content is accepted,
    /// including already-escaped `<`/`>` entities.
    pub fn render(&self, source: Option<&str>) -> Result<String, Error> {
        let source = source.ok_or(Error::NullInput)?;
        let fragment = self.render_fragment(source);
        let mut out =
            String::with_capacity(fragment.len() + self.wrapper.0.len() + self.wrapper.1.len());
        out.push_str(&self.wrapper.0);
        out.push_str(&fragment);
        out.push_str(&self.wrapper.1);
        Ok(out)
    }

    /// The core pipeline without the wrapper: pre-escape, scan,
    /// resolve, rewrite.
    pub fn render_fragment(&self, source: &str) -> String {
        let text = escape::pre_escape(source);
        let (candidates, escapes) = scanner::scan(&text, &self.rules);
        let spans = resolver::resolve(&candidates);
        render::rewrite(&text, &self.rules, &spans, &escapes)
    }

    /// The configured rules, in priority order.
    pub fn rules(&self) -> &[FormattingRule] {
        &self.rules
    }
}

impl Default for Md {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Convert a whole document: split into blank-line paragraphs,
/// classify headers, render each fragment with the default dialect,
/// one wrapped block per line.
///
/// # Example
/// ```
/// let html = litemark::to_html("plain _and em_");
/// assert_eq!(html, "<p>plain <em>and em</em></p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    let md = Md::with_defaults();
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for paragraph in block::paragraphs(input) {
        let (kind, content) = block::classify(paragraph);
        let (open, close) = kind.wrapper();
        out.push_str(open);
        out.push_str(&md.render_fragment(content));
        out.push_str(close);
        out.push('\n');
    }
    out
}
