//! Process-wide compiled matcher cache.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

static MATCHERS: Lazy<Mutex<HashMap<String, Regex>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Returns the memoized compiled matcher for a fragment source string,
/// compiling and storing it on first use.
///
/// The cache is keyed by the source text, not by configuration identity, so
/// two independently constructed but textually identical configurations share
/// one compiled matcher. Lookup and insertion happen under a single lock
/// hold. `Regex` is internally reference-counted, so the returned clone
/// shares the compiled program with the cached entry.
///
/// Entries are never evicted; the cache grows with the number of distinct
/// delimiter configurations used in a process lifetime.
pub fn cached_matcher(source: &str) -> Result<Regex> {
    let mut matchers = MATCHERS.lock().unwrap();
    if let Some(matcher) = matchers.get(source) {
        return Ok(matcher.clone());
    }
    let matcher = Regex::new(source)?;
    matchers.insert(source.to_string(), matcher.clone());
    Ok(matcher)
}
