//! Custom-delimiter wrapper around a MiniJinja environment.
//!
//! [`Engine`] owns an [`Environment`] plus one [`DelimiterSet`]. Template
//! source given to it is written in the configured custom syntax; the engine
//! remaps it to native `{{ … }}` syntax, protects stray native characters in
//! literal text, hands the result to MiniJinja, and strips the protection
//! from the rendered output. When the configured delimiters *are* the native
//! pair, remapping is skipped entirely and source passes straight through.
//!
//! The wrapped environment HTML-escapes interpolated values, so escaped tags
//! behave like the host engine's double-marker convention; safe tags map to
//! the `safe` filter and come through unescaped.

use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;

use redelim_scanner::{scan, scan_two_tier, Delimiter, DelimiterSet, Segment, TagKind};

use crate::error::RenderError;
use crate::guard;
use crate::rewrite::native_form;

const NATIVE_OPEN: &str = "{{";
const NATIVE_CLOSE: &str = "}}";

/// A MiniJinja environment with a custom delimiter configuration.
///
/// # Example
///
/// ```rust
/// use redelim::{DelimiterSet, Engine};
/// use serde_json::json;
///
/// let engine = Engine::new(DelimiterSet::single("<%", "%>")).unwrap();
/// let output = engine
///     .render_template("Hello, <% name %>!", &json!({"name": "World"}))
///     .unwrap();
/// assert_eq!(output, "Hello, World!");
/// ```
pub struct Engine {
    env: Environment<'static>,
    delimiters: DelimiterSet,
    native: bool,
}

impl Engine {
    /// Creates an engine with a fresh HTML-autoescaping environment.
    ///
    /// The configuration's matchers are compiled (and cached) here, so an
    /// invalid pattern delimiter fails at install time rather than at the
    /// first compile.
    pub fn new(delimiters: DelimiterSet) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        Self::with_environment(delimiters, env)
    }

    /// Creates an engine around a caller-configured environment.
    ///
    /// The environment's auto-escape setting is left as the caller made it;
    /// with escaping disabled, the two tag tiers render identically.
    pub fn with_environment(
        delimiters: DelimiterSet,
        env: Environment<'static>,
    ) -> Result<Self, RenderError> {
        validate(&delimiters)?;
        let native = is_native(&delimiters);
        Ok(Self {
            env,
            delimiters,
            native,
        })
    }

    /// Replaces the delimiter configuration in place.
    ///
    /// Re-installing a configuration never stacks: each call swaps the whole
    /// configuration, so installing the same delimiters twice renders
    /// exactly like installing them once. Templates already registered keep
    /// the syntax they were compiled with.
    pub fn set_delimiters(&mut self, delimiters: DelimiterSet) -> Result<(), RenderError> {
        validate(&delimiters)?;
        self.native = is_native(&delimiters);
        self.delimiters = delimiters;
        Ok(())
    }

    /// The active delimiter configuration.
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// This allows registering custom filters, functions, or configuring the
    /// environment directly.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    /// Rewrites custom-delimiter source into native-syntax template text.
    ///
    /// Literal segments have their brace characters protected; tag segments
    /// are assembled into their native form. With the native configuration
    /// the source is returned unchanged.
    pub fn remap(&self, source: &str) -> Result<String, RenderError> {
        if self.native {
            return Ok(source.to_string());
        }
        let escaped_matcher = self.delimiters.escaped.matcher()?;
        let segments = match &self.delimiters.safe {
            Some(safe) => scan_two_tier(source, &safe.matcher()?, &escaped_matcher),
            None => scan(source, &escaped_matcher, TagKind::Escaped),
        };

        let mut native = String::with_capacity(source.len());
        for segment in segments {
            match segment {
                Segment::Literal(literal) => native.push_str(&guard::protect(&literal)),
                Segment::Tag { inner, kind } => native.push_str(&native_form(kind, &inner)),
            }
        }
        Ok(native)
    }

    /// Compiles and renders a template in one step.
    pub fn render_template<S: Serialize>(
        &self,
        source: &str,
        data: &S,
    ) -> Result<String, RenderError> {
        let native = self.remap(source)?;
        let rendered = self.env.render_str(&native, Value::from_serialize(data))?;
        Ok(self.finish(rendered))
    }

    /// Registers a named template written in the custom syntax.
    ///
    /// The source is remapped once at registration; later renders reuse the
    /// stored native text without re-scanning.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        let native = self.remap(source)?;
        self.env.add_template_owned(name.to_string(), native)?;
        Ok(())
    }

    /// Renders a previously registered template.
    pub fn render_named<S: Serialize>(&self, name: &str, data: &S) -> Result<String, RenderError> {
        let template = self.env.get_template(name)?;
        let rendered = template.render(Value::from_serialize(data))?;
        Ok(self.finish(rendered))
    }

    /// Checks whether a template with the given name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    fn finish(&self, rendered: String) -> String {
        if self.native {
            rendered
        } else {
            guard::restore(&rendered)
        }
    }
}

/// Compiles and renders `template` with a one-off engine.
///
/// ```rust
/// use redelim::{render, DelimiterSet};
/// use serde_json::json;
///
/// let output = render(
///     "<<& name &>> is here",
///     DelimiterSet::single("<<&", "&>>"),
///     &json!({"name": "Ada"}),
/// )
/// .unwrap();
/// assert_eq!(output, "Ada is here");
/// ```
pub fn render<S: Serialize>(
    template: &str,
    delimiters: DelimiterSet,
    data: &S,
) -> Result<String, RenderError> {
    Engine::new(delimiters)?.render_template(template, data)
}

fn validate(delimiters: &DelimiterSet) -> Result<(), RenderError> {
    delimiters.escaped.matcher()?;
    if let Some(safe) = &delimiters.safe {
        safe.matcher()?;
    }
    Ok(())
}

fn is_native(delimiters: &DelimiterSet) -> bool {
    delimiters.safe.is_none()
        && delimiters.escaped.open == Delimiter::Literal(NATIVE_OPEN.to_string())
        && delimiters.escaped.close == Delimiter::Literal(NATIVE_CLOSE.to_string())
}
