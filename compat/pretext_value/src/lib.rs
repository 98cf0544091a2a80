//! Pretext Value - runtime value model for the pretext repr shim.
//!
//! This crate provides:
//! - `Value`: the closed set of value kinds the shim can render
//! - `canon`: the host canonical rendering every configuration builds on
//!
//! # Architecture
//!
//! `Value` is a tagged variant over the kinds the shim distinguishes.
//! Rendering policy lives in `pretext_repr`; this crate only defines the
//! data model and the baseline (un-decorated) textual form of each kind.
//! The canonical form is fixed to the modern host generation's output:
//! byte-sequences carry a `b` prefix, textual strings are bare, booleans
//! spell `True`/`False`.
//!
//! The canonical form is a contract other crates infer structure from
//! (for example "a byte-sequence repr starts with `b`"). Changes here must
//! keep that contract or the prefix checks downstream will fail loudly.

pub mod canon;
mod value;

pub use value::Value;
