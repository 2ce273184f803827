//! # Redelim - Custom Tag Delimiters for MiniJinja
//!
//! `redelim` lets template authors write interpolation tags with their own
//! open/close markers (`<% %>`, `<<& &>>`, `%{ }`, or a pattern-defined
//! pair) and have them transparently rewritten into native MiniJinja
//! `{{ … }}` syntax before compilation. Tag contents are opaque: whatever
//! sits between the markers is handed unchanged to MiniJinja, so filters,
//! whitespace, and expression syntax all keep their usual meaning.
//!
//! Native-syntax characters that appear incidentally in literal text are
//! protected during the engine pass and restored afterwards, so text like
//! `{<<name>>}` renders as `{value}` with the surrounding braces intact,
//! and unmatched marker text passes through verbatim.
//!
//! ## Quick Start
//!
//! ```rust
//! use redelim::{DelimiterSet, Engine};
//! use serde_json::json;
//!
//! let engine = Engine::new(DelimiterSet::single("<%", "%>")).unwrap();
//!
//! let output = engine
//!     .render_template("Hello, <% name %>!", &json!({"name": "World"}))
//!     .unwrap();
//! assert_eq!(output, "Hello, World!");
//!
//! // Text in any *other* syntax is left exactly as written.
//! let output = engine
//!     .render_template("{{ name }} and <% name %>", &json!({"name": "W"}))
//!     .unwrap();
//! assert_eq!(output, "{{ name }} and W");
//! ```
//!
//! ## Two-Tier Configurations
//!
//! A four-marker configuration distinguishes escaped-output tags from
//! safe (unescaped) tags, each with its own independent pair:
//!
//! ```rust
//! use redelim::{DelimiterSet, Engine};
//! use serde_json::json;
//!
//! let engine = Engine::new(DelimiterSet::two_tier("<%", "%>", "<<%", "%>>")).unwrap();
//! let data = json!({"html": "<b>"});
//!
//! assert_eq!(engine.render_template("<% html %>", &data).unwrap(), "&lt;b&gt;");
//! assert_eq!(engine.render_template("<<% html %>>", &data).unwrap(), "<b>");
//! ```
//!
//! ## Scope
//!
//! Expression evaluation, control flow, includes, and escaping policy all
//! belong to MiniJinja; this crate only remaps marker syntax. Configuring
//! the native pair itself (`{{`, `}}`) makes the whole pipeline a no-op and
//! templates reach the engine untouched.

pub mod engine;
pub mod error;
mod guard;
pub mod rewrite;

pub use engine::{render, Engine};
pub use error::RenderError;
pub use rewrite::{escape, replace};

pub use redelim_scanner::{
    Delimiter, DelimiterPair, DelimiterSet, ScanError, Segment, TagKind,
};
