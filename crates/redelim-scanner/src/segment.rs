//! Template decomposition into literal and tag segments.
//!
//! Scanning walks the source text left to right, splitting it into an
//! ordered sequence of [`Segment`]s. Concatenating the segments (with tags
//! rendered in whatever syntax the consumer targets) reproduces a complete
//! template; the scanner itself never fails.

use regex::Regex;

/// Which native form a tag maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Output is escaped by the host engine.
    Escaped,
    /// Output is emitted unescaped.
    Safe,
}

/// One piece of a decomposed template.
///
/// `Tag` is a deferred value: it carries the captured inner expression and
/// its kind, and the native wrapped form is produced only when the consumer
/// assembles the final template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any tag, kept verbatim.
    Literal(String),
    /// A matched tag with its inner expression, untrimmed.
    Tag {
        inner: String,
        kind: TagKind,
    },
}

/// Splits `text` into literal and tag segments using one compiled matcher.
///
/// Matches are found left to right, non-overlapping; the matcher's
/// non-greedy inner capture means a tag ends at its nearest close marker.
/// The captured inner text is preserved verbatim, whitespace included.
/// Text with no match at all comes back as a single literal segment — an
/// open marker with no later close never matches and is therefore left
/// inside literal text untouched.
pub fn scan(text: &str, matcher: &Regex, kind: TagKind) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in matcher.captures_iter(text) {
        let whole = caps.get(0).expect("capture group 0 is the whole match");
        if whole.start() > last {
            segments.push(Segment::Literal(text[last..whole.start()].to_string()));
        }
        let inner = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        segments.push(Segment::Tag {
            inner: inner.to_string(),
            kind,
        });
        last = whole.end();
    }
    if last < text.len() {
        segments.push(Segment::Literal(text[last..].to_string()));
    }
    segments
}

/// Two-tier scan: safe pair over the whole text first, escaped pair over the
/// remaining literal segments only.
///
/// Safe markers typically wrap the escaped markers' characters (`<<%` around
/// `<%`), so the safe pass must run first: an escaped-first scan would
/// terminate prematurely at a safe marker's inner boundary. Tag segments
/// extracted by the first pass are opaque and are never re-scanned.
pub fn scan_two_tier(text: &str, safe_matcher: &Regex, escaped_matcher: &Regex) -> Vec<Segment> {
    let mut segments = Vec::new();
    for segment in scan(text, safe_matcher, TagKind::Safe) {
        match segment {
            Segment::Literal(literal) => {
                segments.extend(scan(&literal, escaped_matcher, TagKind::Escaped));
            }
            tag => segments.push(tag),
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiter::DelimiterPair;

    fn tag(inner: &str, kind: TagKind) -> Segment {
        Segment::Tag {
            inner: inner.to_string(),
            kind,
        }
    }

    fn literal(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    #[test]
    fn no_match_is_one_literal() {
        let matcher = DelimiterPair::new("<<", ">>").matcher().unwrap();
        let segments = scan("plain text", &matcher, TagKind::Escaped);
        assert_eq!(segments, vec![literal("plain text")]);
    }

    #[test]
    fn splits_around_single_tag() {
        let matcher = DelimiterPair::new("<<", ">>").matcher().unwrap();
        let segments = scan("a << b >> c", &matcher, TagKind::Escaped);
        assert_eq!(
            segments,
            vec![
                literal("a "),
                tag(" b ", TagKind::Escaped),
                literal(" c"),
            ]
        );
    }

    #[test]
    fn adjacent_tags_produce_no_empty_literal() {
        let matcher = DelimiterPair::new("<<&", "&>>").matcher().unwrap();
        let segments = scan("<<& a &>><<& b &>>", &matcher, TagKind::Escaped);
        assert_eq!(
            segments,
            vec![tag(" a ", TagKind::Escaped), tag(" b ", TagKind::Escaped)]
        );
    }

    #[test]
    fn inner_whitespace_is_preserved_verbatim() {
        let matcher = DelimiterPair::new("%{", "}").matcher().unwrap();
        let segments = scan("%{ name }", &matcher, TagKind::Escaped);
        assert_eq!(segments, vec![tag(" name ", TagKind::Escaped)]);
    }

    #[test]
    fn unterminated_open_marker_stays_literal() {
        let matcher = DelimiterPair::new("<<", ">>").matcher().unwrap();
        let segments = scan("start << name", &matcher, TagKind::Escaped);
        assert_eq!(segments, vec![literal("start << name")]);
    }

    #[test]
    fn tag_ends_at_nearest_close_marker() {
        let matcher = DelimiterPair::new("<<", ">>").matcher().unwrap();
        let segments = scan("<< a >> b >>", &matcher, TagKind::Escaped);
        assert_eq!(
            segments,
            vec![tag(" a ", TagKind::Escaped), literal(" b >>")]
        );
    }

    #[test]
    fn newlines_inside_tags_match() {
        let matcher = DelimiterPair::new("<<", ">>").matcher().unwrap();
        let segments = scan("<< a\nb >>", &matcher, TagKind::Escaped);
        assert_eq!(segments, vec![tag(" a\nb ", TagKind::Escaped)]);
    }

    #[test]
    fn empty_input_yields_no_segments() {
        let matcher = DelimiterPair::new("<<", ">>").matcher().unwrap();
        assert!(scan("", &matcher, TagKind::Escaped).is_empty());
    }

    #[test]
    fn two_tier_extracts_both_kinds() {
        let safe = DelimiterPair::new("<<%", "%>>").matcher().unwrap();
        let escaped = DelimiterPair::new("<%", "%>").matcher().unwrap();
        let segments = scan_two_tier("<% a %> and <<% b %>>", &safe, &escaped);
        assert_eq!(
            segments,
            vec![
                tag(" a ", TagKind::Escaped),
                literal(" and "),
                tag(" b ", TagKind::Safe),
            ]
        );
    }

    #[test]
    fn safe_pass_wins_over_escaped_pass_inside_its_span() {
        // Scanning escaped-first would stop at the `%>` inside `%>>` and
        // misread the safe tag. Safe-first extracts it whole.
        let safe = DelimiterPair::new("<<%", "%>>").matcher().unwrap();
        let escaped = DelimiterPair::new("<%", "%>").matcher().unwrap();
        let segments = scan_two_tier("<<% b %>>", &safe, &escaped);
        assert_eq!(segments, vec![tag(" b ", TagKind::Safe)]);
    }

    #[test]
    fn safe_tags_are_not_rescanned_for_escaped_markers() {
        let safe = DelimiterPair::new("<<%", "%>>").matcher().unwrap();
        let escaped = DelimiterPair::new("<%", "%>").matcher().unwrap();
        // The inner expression contains the escaped open marker; it must
        // come through opaque.
        let segments = scan_two_tier("<<% a <% b %>>", &safe, &escaped);
        assert_eq!(segments, vec![tag(" a <% b ", TagKind::Safe)]);
    }
}
