//! Prefix-decoration policies.
//!
//! Which of the two string-like kinds receive a leading kind-marker
//! character before their quoted form. Four named configurations:
//!
//! - `Unprefixed`: both kinds render canonically.
//! - `DualPrefix`: bytes get `b`, text gets `u`. Both kinds stay visually
//!   distinguishable regardless of host generation.
//! - `BytePrefix`: bytes get `b`, text is bare. Matches the modern host
//!   generation; the shim's default.
//! - `CharPrefix`: text gets `u`, bytes are bare. Matches the legacy host
//!   generation, achieved by stripping the `b` the canonical form carries.
//!
//! The stripping path checks that the character it removes really is the
//! expected marker. A mismatch means the canonical rendering contract
//! changed underneath the shim and rendering fails loudly.

use pretext_value::canon;

use crate::config::{Overrides, ReprConfig};
use crate::errors::{prefix_contract, ReprResult};

/// The four prefix-decoration configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixPolicy {
    /// Canonical rendering for both string-like kinds.
    Unprefixed,
    /// `b` on byte-sequences and `u` on character-sequences.
    DualPrefix,
    /// `b` on byte-sequences only (the default).
    BytePrefix,
    /// `u` on character-sequences only.
    CharPrefix,
}

impl PrefixPolicy {
    /// The full rendering configuration for this policy: all limits
    /// disabled plus the policy's override table.
    pub fn config(self) -> ReprConfig {
        ReprConfig::unlimited().with_overrides(self.overrides())
    }

    fn overrides(self) -> Overrides {
        match self {
            // Only the unprefixed configuration pins the textual boolean
            // form explicitly; the other configurations fall through to
            // the identical canonical form. The historical shim carried
            // exactly this asymmetry.
            PrefixPolicy::Unprefixed => Overrides {
                boolean: Some(bool_text),
                ..Overrides::default()
            },
            PrefixPolicy::DualPrefix => Overrides {
                bytes: Some(prefixed_bytes),
                chars: Some(prefixed_str),
                ..Overrides::default()
            },
            PrefixPolicy::BytePrefix => Overrides {
                bytes: Some(prefixed_bytes),
                ..Overrides::default()
            },
            PrefixPolicy::CharPrefix => Overrides {
                bytes: Some(stripped_bytes),
                chars: Some(prefixed_str),
                ..Overrides::default()
            },
        }
    }
}

fn bool_text(b: bool) -> String {
    canon::bool_text(b).to_string()
}

fn prefixed_bytes(data: &[u8]) -> ReprResult<String> {
    Ok(format!("b{}", canon::quote_bytes(data)))
}

fn prefixed_str(text: &str) -> ReprResult<String> {
    Ok(format!("u{}", canon::quote_str(text)))
}

fn stripped_bytes(data: &[u8]) -> ReprResult<String> {
    let mut canonical = String::from("b");
    canonical.push_str(&canon::quote_bytes(data));
    strip_expected_prefix(&canonical, 'b')
}

/// Remove a marker character the canonical form is expected to carry,
/// failing when it is absent.
pub(crate) fn strip_expected_prefix(rendered: &str, expected: char) -> ReprResult<String> {
    match rendered.strip_prefix(expected) {
        Some(rest) => Ok(rest.to_string()),
        None => Err(prefix_contract(expected, rendered)),
    }
}
