//! Delimiter tokens and their normalization into matcher fragments.
//!
//! A [`Delimiter`] is either literal marker text (`<%`, `>>`, `%{`) or a
//! regex fragment supplied by the caller. Both normalize to a string that is
//! safe to embed inside a larger matcher: literals are metacharacter-escaped,
//! patterns keep their source but lose position anchors that are meaningless
//! once embedded.

use regex::Regex;

use crate::cache::cached_matcher;
use crate::error::{Result, ScanError};

/// One marker token of a delimiter pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delimiter {
    /// Marker text matched verbatim.
    Literal(String),
    /// Regex source matched as written. Anchors are stripped during
    /// normalization; flags go inline (`(?i)…`) as usual for regex sources.
    Pattern(String),
}

impl Delimiter {
    /// Creates a literal delimiter.
    pub fn literal(text: impl Into<String>) -> Self {
        Delimiter::Literal(text.into())
    }

    /// Creates a pattern delimiter from regex source text.
    pub fn pattern(source: impl Into<String>) -> Self {
        Delimiter::Pattern(source.into())
    }

    /// Whether this delimiter was supplied as a pattern.
    pub fn is_pattern(&self) -> bool {
        matches!(self, Delimiter::Pattern(_))
    }

    /// The regex-safe fragment for this delimiter.
    ///
    /// Literal text has every metacharacter escaped. Pattern source is kept
    /// as written, minus a leading `^` and an unescaped trailing `$`: those
    /// are position anchors, irrelevant once the fragment is embedded as a
    /// sub-expression of a larger matcher.
    ///
    /// ```rust
    /// use redelim_scanner::Delimiter;
    ///
    /// assert_eq!(Delimiter::literal("{{").fragment(), r"\{\{");
    /// assert_eq!(Delimiter::pattern(r"^<~").fragment(), "<~");
    /// ```
    pub fn fragment(&self) -> String {
        match self {
            Delimiter::Literal(text) => regex::escape(text),
            Delimiter::Pattern(source) => strip_anchors(source).to_string(),
        }
    }
}

impl From<&str> for Delimiter {
    fn from(text: &str) -> Self {
        Delimiter::Literal(text.to_string())
    }
}

impl From<String> for Delimiter {
    fn from(text: String) -> Self {
        Delimiter::Literal(text)
    }
}

fn strip_anchors(source: &str) -> &str {
    let source = source.strip_prefix('^').unwrap_or(source);
    if let Some(trimmed) = source.strip_suffix('$') {
        // A `$` preceded by an odd number of backslashes is an escaped
        // dollar character, not an anchor.
        let backslashes = trimmed.chars().rev().take_while(|&c| c == '\\').count();
        if backslashes % 2 == 0 {
            return trimmed;
        }
    }
    source
}

/// An open/close marker pair for one tag tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    pub open: Delimiter,
    pub close: Delimiter,
}

impl DelimiterPair {
    pub fn new(open: impl Into<Delimiter>, close: impl Into<Delimiter>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// The matcher source for this pair: open fragment, non-greedy inner
    /// capture, close fragment.
    ///
    /// When the open marker is a literal that does not already end in `=`,
    /// the capture is required to start with a character other than `=`.
    /// Calling conventions often pair two open markers that differ only by a
    /// trailing `=` (`<%` and `<%=`); without the restriction the shorter
    /// marker's matcher would consume the longer marker's leading characters
    /// and misclassify the tag. Pattern-sourced open markers are assumed to
    /// encode any such restriction themselves.
    ///
    /// ```rust
    /// use redelim_scanner::DelimiterPair;
    ///
    /// assert_eq!(
    ///     DelimiterPair::new("<%", "%>").matcher_source(),
    ///     r"<%([^=][\s\S]*?)%>",
    /// );
    /// assert_eq!(
    ///     DelimiterPair::new("<%=", "%>").matcher_source(),
    ///     r"<%=([\s\S]+?)%>",
    /// );
    /// ```
    pub fn matcher_source(&self) -> String {
        let inner = match &self.open {
            Delimiter::Literal(text) if !text.ends_with('=') => r"([^=][\s\S]*?)",
            _ => r"([\s\S]+?)",
        };
        let mut source = self.open.fragment();
        source.push_str(inner);
        source.push_str(&self.close.fragment());
        source
    }

    /// The compiled matcher for this pair, shared through the process-wide
    /// cache.
    pub fn matcher(&self) -> Result<Regex> {
        cached_matcher(&self.matcher_source())
    }
}

/// A complete delimiter configuration: one pair for escaped-output tags and,
/// in two-tier configurations, a second pair for safe (unescaped) tags.
///
/// For correct matching the safe markers must wrap the escaped markers
/// symmetrically at use sites; configurations that reuse marker characters
/// across tiers so that spans partially overlap are undefined and not
/// validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    /// Markers for tags whose output the engine escapes.
    pub escaped: DelimiterPair,
    /// Markers for tags whose output the engine emits unescaped.
    pub safe: Option<DelimiterPair>,
}

impl DelimiterSet {
    /// A single-tier configuration: every tag is an escaped-output tag.
    pub fn single(open: impl Into<Delimiter>, close: impl Into<Delimiter>) -> Self {
        Self {
            escaped: DelimiterPair::new(open, close),
            safe: None,
        }
    }

    /// A two-tier configuration with independent escaped and safe pairs.
    pub fn two_tier(
        open: impl Into<Delimiter>,
        close: impl Into<Delimiter>,
        open_safe: impl Into<Delimiter>,
        close_safe: impl Into<Delimiter>,
    ) -> Self {
        Self {
            escaped: DelimiterPair::new(open, close),
            safe: Some(DelimiterPair::new(open_safe, close_safe)),
        }
    }

    /// Builds a set from an ordered token list: `[open, close]` or
    /// `[open, close, open_safe, close_safe]`. Any other length is an error.
    pub fn from_slice(tokens: &[Delimiter]) -> Result<Self> {
        match tokens {
            [open, close] => Ok(Self::single(open.clone(), close.clone())),
            [open, close, open_safe, close_safe] => Ok(Self::two_tier(
                open.clone(),
                close.clone(),
                open_safe.clone(),
                close_safe.clone(),
            )),
            other => Err(ScanError::DelimiterCount(other.len())),
        }
    }

    /// Whether this configuration carries a safe-tag pair.
    pub fn is_two_tier(&self) -> bool {
        self.safe.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_fragment_escapes_metacharacters() {
        assert_eq!(Delimiter::literal("{{").fragment(), r"\{\{");
        assert_eq!(Delimiter::literal("%{").fragment(), r"%\{");
        assert_eq!(Delimiter::literal("<%").fragment(), "<%");
    }

    #[test]
    fn pattern_fragment_strips_anchors() {
        assert_eq!(Delimiter::pattern("^<~").fragment(), "<~");
        assert_eq!(Delimiter::pattern("~>$").fragment(), "~>");
        assert_eq!(Delimiter::pattern("^<~$").fragment(), "<~");
        assert_eq!(Delimiter::pattern("<~").fragment(), "<~");
    }

    #[test]
    fn escaped_trailing_dollar_is_kept() {
        assert_eq!(Delimiter::pattern(r"x\$").fragment(), r"x\$");
        // `\\$` is an escaped backslash followed by an anchor.
        assert_eq!(Delimiter::pattern(r"x\\$").fragment(), r"x\\");
    }

    #[test]
    fn short_open_marker_does_not_consume_assignment_variant() {
        let matcher = DelimiterPair::new("<%", "%>").matcher().unwrap();
        assert!(matcher.is_match("<% name %>"));
        assert!(!matcher.is_match("<%= name %>"));
    }

    #[test]
    fn open_marker_ending_in_equals_skips_restriction() {
        let matcher = DelimiterPair::new("<%=", "%>").matcher().unwrap();
        let caps = matcher.captures("<%= name %>").unwrap();
        assert_eq!(&caps[1], " name ");
    }

    #[test]
    fn pattern_open_marker_skips_restriction() {
        let pair = DelimiterPair {
            open: Delimiter::pattern("<%"),
            close: Delimiter::pattern("%>"),
        };
        assert_eq!(pair.matcher_source(), r"<%([\s\S]+?)%>");
    }

    #[test]
    fn inner_capture_stops_at_nearest_close() {
        let matcher = DelimiterPair::new("<<", ">>").matcher().unwrap();
        let caps = matcher.captures("<< a >> b >>").unwrap();
        assert_eq!(&caps[1], " a ");
    }

    #[test]
    fn from_slice_accepts_two_or_four_tokens() {
        let two = DelimiterSet::from_slice(&["<%".into(), "%>".into()]).unwrap();
        assert!(!two.is_two_tier());

        let four = DelimiterSet::from_slice(&[
            "<%".into(),
            "%>".into(),
            "<<%".into(),
            "%>>".into(),
        ])
        .unwrap();
        assert!(four.is_two_tier());

        let err = DelimiterSet::from_slice(&["<%".into(), "%>".into(), "<<%".into()]);
        assert!(matches!(err, Err(ScanError::DelimiterCount(3))));
    }

    #[test]
    fn identical_configurations_share_matcher_source() {
        let a = DelimiterPair::new("%{", "}");
        let b = DelimiterPair::new("%{", "}");
        assert_eq!(a.matcher_source(), b.matcher_source());
    }
}
