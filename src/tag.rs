//! Tag-name-to-HTML-wrapper mapping.

use crate::error::Error;

/// Map an HTML element name to its bracketed open/close tag pair.
///
/// # Example
/// ```
/// let (open, close) = litemark::tag::name_to_tag("em").unwrap();
/// assert_eq!(open, "<em>");
/// assert_eq!(close, "</em>");
/// ```
pub fn name_to_tag(name: &str) -> Result<(String, String), Error> {
    if name.is_empty() {
        return Err(Error::InvalidName);
    }
    Ok((format!("<{name}>"), format!("</{name}>")))
}
