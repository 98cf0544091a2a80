//! Error types for rendering.
//!
//! Rendering has exactly one failure mode: a configuration that strips a
//! marker character found that the canonical form did not carry it. That
//! means the baseline rendering contract changed underneath the shim, and
//! the render must fail rather than silently emit wrong output.

use std::fmt;

/// Result of rendering.
pub type ReprResult<T> = Result<T, ReprError>;

/// Rendering error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReprError {
    /// The canonical rendering did not start with the marker character a
    /// configuration expected to strip.
    PrefixContract {
        /// The marker the configuration expected to find and remove.
        expected: char,
        /// The canonical rendering that violated the contract.
        rendered: String,
    },
}

impl fmt::Display for ReprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrefixContract { expected, rendered } => {
                write!(
                    f,
                    "canonical rendering {rendered:?} does not start with expected prefix `{expected}`"
                )
            }
        }
    }
}

impl std::error::Error for ReprError {}

/// Build a prefix-contract violation.
pub fn prefix_contract(expected: char, rendered: impl Into<String>) -> ReprError {
    ReprError::PrefixContract {
        expected,
        rendered: rendered.into(),
    }
}
