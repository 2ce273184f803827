//! Scanner - delimiter normalization and tag extraction for custom template
//! syntax.
//!
//! This crate is the engine-agnostic half of the `redelim` workspace. It
//! turns configured marker tokens into compiled matchers and decomposes
//! template text into an ordered sequence of literal and tag segments:
//!
//! - [`Delimiter`]: one marker token, literal text or a regex fragment
//! - [`DelimiterPair`] / [`DelimiterSet`]: one- and two-tier configurations
//! - [`cached_matcher`]: process-wide memoization of compiled matchers
//! - [`scan`] / [`scan_two_tier`]: the left-to-right tag scanner
//!
//! Nothing here knows what the tags mean; rewriting segments into a host
//! engine's native syntax is the consumer's job (the `redelim` crate does
//! this for MiniJinja).
//!
//! # Quick Start
//!
//! ```rust
//! use redelim_scanner::{scan, DelimiterPair, Segment, TagKind};
//!
//! let pair = DelimiterPair::new("<%", "%>");
//! let matcher = pair.matcher().unwrap();
//!
//! let segments = scan("Hello <% name %>!", &matcher, TagKind::Escaped);
//! assert_eq!(
//!     segments,
//!     vec![
//!         Segment::Literal("Hello ".to_string()),
//!         Segment::Tag { inner: " name ".to_string(), kind: TagKind::Escaped },
//!         Segment::Literal("!".to_string()),
//!     ],
//! );
//! ```
//!
//! # Scanning Semantics
//!
//! Scanning never fails: text without any complete tag — including an open
//! marker with no later close — comes back as literal segments, untouched.
//! Inner expressions are captured verbatim, whitespace included; their
//! content is opaque to this crate.

pub mod cache;
pub mod delimiter;
pub mod error;
pub mod segment;

pub use cache::cached_matcher;
pub use delimiter::{Delimiter, DelimiterPair, DelimiterSet};
pub use error::{Result, ScanError};
pub use segment::{scan, scan_two_tier, Segment, TagKind};
