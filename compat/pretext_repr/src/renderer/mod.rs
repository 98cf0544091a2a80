//! The recursive renderer.

use pretext_value::{canon, Value};

use crate::config::{ReprConfig, ReprLimit};
use crate::errors::ReprResult;
use crate::policy::PrefixPolicy;

/// Marker appended (or substituted) when a limit was actually exceeded.
const ELLIPSIS: &str = "...";

/// Recursive, depth- and container-aware value-to-text renderer.
///
/// A `Renderer` is a pure function of its `ReprConfig` and the input
/// value: no side effects, no interior state, safe to call from any
/// number of threads.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    config: ReprConfig,
}

impl Renderer {
    /// Build a renderer from an explicit configuration.
    pub fn new(config: ReprConfig) -> Self {
        Renderer { config }
    }

    /// Canonical rendering for both string-like kinds, no truncation.
    pub fn unprefixed() -> Self {
        Self::new(PrefixPolicy::Unprefixed.config())
    }

    /// `b`-prefixed bytes and `u`-prefixed text, no truncation.
    pub fn dual_prefix() -> Self {
        Self::new(PrefixPolicy::DualPrefix.config())
    }

    /// `b`-prefixed bytes, bare text, no truncation. The default policy.
    pub fn byte_prefix() -> Self {
        Self::new(PrefixPolicy::BytePrefix.config())
    }

    /// `u`-prefixed text, bare bytes, no truncation.
    pub fn char_prefix() -> Self {
        Self::new(PrefixPolicy::CharPrefix.config())
    }

    /// The active configuration.
    pub fn config(&self) -> &ReprConfig {
        &self.config
    }

    /// Render a value to text.
    ///
    /// The only error is the prefix-contract violation, and only
    /// configurations that strip a marker can raise it.
    pub fn render(&self, value: &Value) -> ReprResult<String> {
        self.render_at(value, 0)
    }

    fn render_at(&self, value: &Value, level: usize) -> ReprResult<String> {
        match value {
            Value::Bool(b) => Ok(match self.config.overrides.boolean {
                Some(f) => f(*b),
                None => canon::repr(value),
            }),
            Value::Bytes(data) => {
                let text = match self.config.overrides.bytes {
                    Some(f) => f(data)?,
                    None => canon::repr(value),
                };
                Ok(clip(text, self.config.max_string))
            }
            Value::Str(s) => {
                let text = match self.config.overrides.chars {
                    Some(f) => f(s)?,
                    None => canon::repr(value),
                };
                Ok(clip(text, self.config.max_string))
            }
            Value::List(items) => self.render_items(items, level, "[", "]", self.config.max_list),
            Value::Tuple(items) => {
                if items.len() == 1 && !self.level_exceeded(level) {
                    Ok(format!("({},)", self.render_at(&items[0], level + 1)?))
                } else {
                    self.render_items(items, level, "(", ")", self.config.max_tuple)
                }
            }
            Value::Set(items) => {
                if items.is_empty() {
                    Ok("set()".to_string())
                } else {
                    self.render_items(items, level, "{", "}", self.config.max_set)
                }
            }
            Value::Dict(entries) => self.render_entries(entries, level),
            Value::Other(_) => Ok(clip(canon::repr(value), self.config.max_other)),
            // Scalars: canonical, no limit.
            Value::None | Value::Int(_) | Value::Float(_) | Value::Complex { .. } => {
                Ok(canon::repr(value))
            }
        }
    }

    fn render_items(
        &self,
        items: &[Value],
        level: usize,
        open: &str,
        close: &str,
        limit: ReprLimit,
    ) -> ReprResult<String> {
        if self.level_exceeded(level) {
            return Ok(ELLIPSIS.to_string());
        }
        let shown = limit.cap().map_or(items.len(), |max| items.len().min(max));
        let mut out = String::from(open);
        for (i, item) in items.iter().take(shown).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.render_at(item, level + 1)?);
        }
        if shown < items.len() {
            if shown > 0 {
                out.push_str(", ");
            }
            out.push_str(ELLIPSIS);
        }
        out.push_str(close);
        Ok(out)
    }

    fn render_entries(&self, entries: &[(Value, Value)], level: usize) -> ReprResult<String> {
        if self.level_exceeded(level) {
            return Ok(ELLIPSIS.to_string());
        }
        let shown = self
            .config
            .max_dict
            .cap()
            .map_or(entries.len(), |max| entries.len().min(max));
        let mut out = String::from("{");
        for (i, (k, v)) in entries.iter().take(shown).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.render_at(k, level + 1)?);
            out.push_str(": ");
            out.push_str(&self.render_at(v, level + 1)?);
        }
        if shown < entries.len() {
            if shown > 0 {
                out.push_str(", ");
            }
            out.push_str(ELLIPSIS);
        }
        out.push('}');
        Ok(out)
    }

    fn level_exceeded(&self, level: usize) -> bool {
        matches!(self.config.max_level, ReprLimit::Max(max) if level >= max)
    }
}

impl Default for Renderer {
    /// The default renderer is the byte-only-prefix configuration, the
    /// behavior of the most widely deployed host generation.
    fn default() -> Self {
        Self::byte_prefix()
    }
}

/// Render with the dual-prefix configuration (`b` bytes, `u` text).
pub fn prepr(value: &Value) -> ReprResult<String> {
    Renderer::dual_prefix().render(value)
}

/// Render with the byte-only-prefix configuration (the default).
pub fn brepr(value: &Value) -> ReprResult<String> {
    Renderer::byte_prefix().render(value)
}

/// Render with the character-only-prefix configuration.
pub fn urepr(value: &Value) -> ReprResult<String> {
    Renderer::char_prefix().render(value)
}

fn clip(text: String, limit: ReprLimit) -> String {
    match limit.cap() {
        Some(max) if text.chars().count() > max => {
            let mut out: String = text.chars().take(max).collect();
            out.push_str(ELLIPSIS);
            out
        }
        _ => text,
    }
}
