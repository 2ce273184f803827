//! Scan-and-rewrite passes from custom tags to native MiniJinja syntax.
//!
//! [`replace`] is the reusable single-pass rewriter: it scans `text` with an
//! arbitrary matcher source and emits each matched tag in native syntax,
//! either live or neutralized. [`escape`] specializes it to the engine's own
//! double-marker pattern, turning pre-existing native tags into raw blocks
//! the engine emits verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

use redelim_scanner::{cached_matcher, scan, Segment, TagKind};

use crate::error::RenderError;

/// Matcher source for the engine's own double-marker tags.
pub(crate) const NATIVE_SOURCE: &str = r"\{\{([\s\S]+?)\}\}";

static NATIVE_MATCHER: Lazy<Regex> =
    Lazy::new(|| cached_matcher(NATIVE_SOURCE).expect("native matcher source is valid"));

/// The native wrapped form of one tag.
pub(crate) fn native_form(kind: TagKind, inner: &str) -> String {
    match kind {
        TagKind::Escaped => ["{{", inner, "}}"].concat(),
        TagKind::Safe => ["{{", inner, " | safe}}"].concat(),
    }
}

fn rewrite(text: &str, matcher: &Regex, escape: bool) -> String {
    let mut output = String::with_capacity(text.len());
    for segment in scan(text, matcher, TagKind::Escaped) {
        match segment {
            Segment::Literal(literal) => output.push_str(&literal),
            Segment::Tag { inner, kind } => {
                let native = native_form(kind, &inner);
                if escape {
                    output.push_str("{% raw %}");
                    output.push_str(&native);
                    output.push_str("{% endraw %}");
                } else {
                    output.push_str(&native);
                }
            }
        }
    }
    output
}

/// Applies one scan-and-rewrite pass over `text`.
///
/// `source` is a matcher source string, typically built with
/// [`DelimiterPair::matcher_source`](redelim_scanner::DelimiterPair::matcher_source).
/// Each match is rewritten to the native double-marker form; with `escape`
/// set, the rewritten tag is wrapped in a raw block so the engine emits it
/// verbatim instead of interpreting it.
///
/// ```rust
/// use redelim::{replace, DelimiterPair};
///
/// let source = DelimiterPair::new("<%=", "%>").matcher_source();
/// assert_eq!(replace("<%= name %>", &source, false).unwrap(), "{{ name }}");
/// ```
pub fn replace(text: &str, source: &str, escape: bool) -> Result<String, RenderError> {
    let matcher = cached_matcher(source)?;
    Ok(rewrite(text, &matcher, escape))
}

/// Neutralizes pre-existing native double-marker tags in `text` so the
/// engine emits them verbatim.
///
/// ```rust
/// use redelim::escape;
///
/// assert_eq!(escape("{{ name }}"), "{% raw %}{{ name }}{% endraw %}");
/// ```
pub fn escape(text: &str) -> String {
    rewrite(text, &NATIVE_MATCHER, true)
}
