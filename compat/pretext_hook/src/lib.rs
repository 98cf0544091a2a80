//! Pretext Hook - echoing top-level results through a configured renderer.
//!
//! This crate provides:
//! - `OutputSink`: where echoed text goes (stdout or a capture buffer),
//!   with an escaping fallback for characters the sink's declared
//!   encoding cannot represent
//! - `DisplayHook`: render a result, write it plus a newline, and record
//!   it in the process-wide last-result slot
//! - `activate` / `deactivate`: the process-wide repr context
//!
//! # Global state
//!
//! The last-result slot and the active repr context are process-wide.
//! Installation is last-writer-wins with no lock ordering between
//! competing writers: concurrent activation from multiple threads is a
//! race whose outcome is whichever write lands last. Callers that need a
//! predictable configuration should activate once, early, from a single
//! owner, and tear down with `deactivate`.

mod context;
mod hook;
mod sink;

pub use context::{
    activate, activate_default, activate_with, active_repr, deactivate, echo_active,
};
pub use hook::{bdisplay_hook, last_result, pdisplay_hook, udisplay_hook, DisplayHook};
pub use sink::{
    ascii_buffer_sink, ascii_stdout_sink, buffer_sink, stdout_sink, BufferSink, OutputSink,
    SharedSink, SinkEncoding, StdoutSink,
};

#[cfg(test)]
pub(crate) mod test_support;
