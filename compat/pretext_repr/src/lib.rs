//! Pretext Repr - the configurable rendering engine of the pretext shim.
//!
//! This crate provides:
//! - `ReprConfig`: per-kind limits plus a per-kind override table
//! - `PrefixPolicy`: the four named prefix-decoration configurations
//! - `Renderer`: the recursive value-to-text renderer
//! - `prepr` / `brepr` / `urepr`: the commonly exported entry points
//!
//! # Architecture
//!
//! Rendering dispatches on the closed `Value` variant set from
//! `pretext_value`. Containers recurse one level deeper per element and
//! honor the configured element limits; the shim's own configurations
//! disable every limit, so their output is never truncated. The two
//! string-like kinds route through overridable formatters, which is where
//! the prefix policies differ.
//!
//! `render` is a pure function of the config and the input value. A
//! `Renderer` holds no other state and may be shared freely across
//! threads.

mod config;
mod errors;
mod policy;
mod renderer;

pub use config::{BoolOverride, BytesOverride, Overrides, ReprConfig, ReprLimit, StrOverride};
pub use errors::{prefix_contract, ReprError, ReprResult};
pub use policy::PrefixPolicy;
pub use renderer::{brepr, prepr, urepr, Renderer};
