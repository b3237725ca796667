use litemark::{to_html, Error, Md};

// Core dialect tests: emphasis, strong, code, and their interactions.

#[test]
fn simple_string_gets_paragraph_tags() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("abcd")).unwrap(), "<p>abcd</p>");
}

#[test]
fn absent_input_is_an_error() {
    let md = Md::with_defaults();
    assert_eq!(md.render(None), Err(Error::NullInput));
}

#[test]
fn one_word_surrounded_by_underscores() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("_abcd_")).unwrap(), "<p><em>abcd</em></p>");
}

#[test]
fn opening_underscore_before_whitespace_stays_literal() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("_ abcd_")).unwrap(), "<p>_ abcd_</p>");
}

#[test]
fn adjacent_scopes_separated_by_letter() {
    let md = Md::with_defaults();
    assert_eq!(
        md.render(Some("_a_b_d_")).unwrap(),
        "<p><em>a</em>b<em>d</em></p>"
    );
}

#[test]
fn underscores_next_to_digits_stay_literal() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("a_1_2")).unwrap(), "<p>a_1_2</p>");
}

#[test]
fn one_word_surrounded_by_double_underscores() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("__ad__")).unwrap(), "<p><strong>ad</strong></p>");
}

#[test]
fn opening_double_underscore_before_whitespace_stays_literal() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("__ abcd__")).unwrap(), "<p>__ abcd__</p>");
}

#[test]
fn adjacent_strong_scopes_separated_by_letter() {
    let md = Md::with_defaults();
    assert_eq!(
        md.render(Some("__a__b__d__")).unwrap(),
        "<p><strong>a</strong>b<strong>d</strong></p>"
    );
}

#[test]
fn strong_inside_emphasis_stays_literal() {
    let md = Md::with_defaults();
    assert_eq!(
        md.render(Some("_ab __cd__ ef_")).unwrap(),
        "<p><em>ab __cd__ ef</em></p>"
    );
}

#[test]
fn emphasis_inside_strong_nests() {
    let md = Md::with_defaults();
    assert_eq!(
        md.render(Some("__ab _cd_ ef__")).unwrap(),
        "<p><strong>ab <em>cd</em> ef</strong></p>"
    );
}

#[test]
fn impaired_underscores_stay_literal() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("__ab_")).unwrap(), "<p>__ab_</p>");
}

#[test]
fn word_surrounded_by_backticks() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("`ab`")).unwrap(), "<p><code>ab</code></p>");
}

#[test]
fn code_inside_emphasis_is_masked() {
    // Code is lower priority than emphasis; its delimiters inside an
    // emphasis span stay literal.
    let md = Md::with_defaults();
    assert_eq!(
        md.render(Some("_a `b` c_")).unwrap(),
        "<p><em>a `b` c</em></p>"
    );
}

#[test]
fn emphasis_inside_code_span_still_resolves() {
    // Priority is list order: emphasis resolves before code sees its
    // own delimiters, so it nests inside the code span.
    let md = Md::with_defaults();
    assert_eq!(
        md.render(Some("`a _b_ c`")).unwrap(),
        "<p><code>a <em>b</em> c</code></p>"
    );
}

#[test]
fn triple_underscores_match_no_rule() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("___ab___")).unwrap(), "<p>___ab___</p>");
}

#[test]
fn delimiter_free_text_round_trips() {
    let md = Md::with_defaults();
    assert_eq!(
        md.render(Some("just plain text.")).unwrap(),
        "<p>just plain text.</p>"
    );
}

#[test]
fn emphasis_spans_a_line_break() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("_a\nb_")).unwrap(), "<p><em>a\nb</em></p>");
}

// Angle-bracket pre-escaping.

#[test]
fn angle_brackets_are_escaped() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("a < b")).unwrap(), "<p>a &lt; b</p>");
    assert_eq!(md.render(Some("1 > 0")).unwrap(), "<p>1 &gt; 0</p>");
}

#[test]
fn already_escaped_input_passes_through() {
    let md = Md::with_defaults();
    assert_eq!(md.render(Some("&lt;x&gt;")).unwrap(), "<p>&lt;x&gt;</p>");
}

#[test]
fn escaped_brackets_inside_emphasis() {
    let md = Md::with_defaults();
    assert_eq!(
        md.render(Some("_a < b_")).unwrap(),
        "<p><em>a &lt; b</em></p>"
    );
}

// Document-level conversion.

#[test]
fn document_with_multiple_paragraphs() {
    assert_eq!(to_html("First\n\nSecond"), "<p>First</p>\n<p>Second</p>\n");
}

#[test]
fn formatted_document() {
    let html = to_html("a _b_ c\n\n__d__ e `f`");
    assert_eq!(
        html,
        "<p>a <em>b</em> c</p>\n<p><strong>d</strong> e <code>f</code></p>\n"
    );
}

#[test]
fn crlf_document_splits_on_blank_lines() {
    assert_eq!(to_html("a\r\n\r\nb"), "<p>a</p>\n<p>b</p>\n");
}
