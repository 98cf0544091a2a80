//! Rendering configuration: per-kind limits and per-kind overrides.

use crate::errors::ReprResult;

/// Output limit for one value kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReprLimit {
    /// No cap; output grows with the input.
    Unlimited,
    /// Cap at this many elements (containers) or characters (strings).
    Max(usize),
}

impl ReprLimit {
    /// The cap, or `None` when unlimited.
    #[inline]
    pub fn cap(self) -> Option<usize> {
        match self {
            ReprLimit::Unlimited => None,
            ReprLimit::Max(n) => Some(n),
        }
    }
}

/// Byte-sequence formatter override.
pub type BytesOverride = fn(&[u8]) -> ReprResult<String>;
/// Character-sequence formatter override.
pub type StrOverride = fn(&str) -> ReprResult<String>;
/// Boolean formatter override.
pub type BoolOverride = fn(bool) -> String;

/// Per-kind override table. A `None` entry falls through to the canonical
/// rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    /// Byte-sequence override.
    pub bytes: Option<BytesOverride>,
    /// Character-sequence override.
    pub chars: Option<StrOverride>,
    /// Boolean override.
    pub boolean: Option<BoolOverride>,
}

/// Rendering configuration.
///
/// One limit per container/sequence kind plus the override table. The
/// config space is closed: any combination of limits and fn-pointer
/// overrides is well-formed, so there is nothing to validate at
/// construction time.
#[derive(Clone, Copy, Debug)]
pub struct ReprConfig {
    /// Nesting depth beyond which containers collapse to `...`.
    pub max_level: ReprLimit,
    /// Element cap for lists.
    pub max_list: ReprLimit,
    /// Element cap for tuples.
    pub max_tuple: ReprLimit,
    /// Element cap for sets.
    pub max_set: ReprLimit,
    /// Entry cap for mappings.
    pub max_dict: ReprLimit,
    /// Character cap for string-like reprs.
    pub max_string: ReprLimit,
    /// Character cap for opaque (`Other`) reprs.
    pub max_other: ReprLimit,
    /// Per-kind overrides.
    pub overrides: Overrides,
}

impl ReprConfig {
    /// Every limit disabled. The shim's named configurations all start
    /// here: output is never truncated, regardless of size.
    pub fn unlimited() -> Self {
        ReprConfig {
            max_level: ReprLimit::Unlimited,
            max_list: ReprLimit::Unlimited,
            max_tuple: ReprLimit::Unlimited,
            max_set: ReprLimit::Unlimited,
            max_dict: ReprLimit::Unlimited,
            max_string: ReprLimit::Unlimited,
            max_other: ReprLimit::Unlimited,
            overrides: Overrides::default(),
        }
    }

    /// Replace the override table.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }
}

impl Default for ReprConfig {
    fn default() -> Self {
        Self::unlimited()
    }
}
