//! Native-syntax protection for literal template text.
//!
//! MiniJinja assigns meaning to brace characters (`{{`, `{%`, `{#`). Literal
//! text that happens to contain braces must not be re-interpreted after
//! custom tags have been rewritten into native syntax, so every brace in a
//! literal segment is swapped for a sentinel token before the native tags
//! are emitted, and swapped back on the rendered output. Protection runs
//! before tag assembly so it only ever touches pre-existing literal content;
//! restoration runs on the final rendered string and undoes nothing but the
//! protection.
//!
//! The sentinels exist solely to survive the engine pass, so restoration is
//! to the original character. NUL framing keeps them inert to the engine and
//! outside any character sequence plausibly present in user content.

pub(crate) const LBRACE_SENTINEL: &str = "\x00LBRACE\x00";
pub(crate) const RBRACE_SENTINEL: &str = "\x00RBRACE\x00";

/// Replaces every brace in `text` with its sentinel token.
pub(crate) fn protect(text: &str) -> String {
    if !text.contains('{') && !text.contains('}') {
        return text.to_string();
    }
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '{' => output.push_str(LBRACE_SENTINEL),
            '}' => output.push_str(RBRACE_SENTINEL),
            _ => output.push(ch),
        }
    }
    output
}

/// Restores sentinel tokens in rendered output back to brace characters.
pub(crate) fn restore(text: &str) -> String {
    text.replace(LBRACE_SENTINEL, "{").replace(RBRACE_SENTINEL, "}")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn protect_restore_round_trips(text in "[a-zA-Z0-9{}<>%=# \n]{0,80}") {
            prop_assert_eq!(restore(&protect(&text)), text);
        }

        #[test]
        fn protected_text_has_no_braces(text in "[a-zA-Z0-9{}<>%=# \n]{0,80}") {
            let protected = protect(&text);
            prop_assert!(!protected.contains('{'), "protected text must not contain an open brace");
            prop_assert!(!protected.contains('}'), "protected text must not contain a close brace");
        }
    }
}
