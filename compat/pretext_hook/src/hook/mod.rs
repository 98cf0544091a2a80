//! The display hook: echo a top-level evaluation result.
//!
//! Mirrors the host convention for interactive sessions: a non-null
//! result is rendered, written with a trailing newline, and recorded in
//! the process-wide last-result slot. The slot holds the sentinel (no
//! value) while rendering is in flight so a re-entrant render cannot
//! observe a stale value.

use parking_lot::Mutex;
use pretext_repr::{Renderer, ReprResult};
use pretext_value::Value;

use crate::sink::{stdout_sink, SharedSink};

/// Process-wide "last echoed result" slot.
static LAST_RESULT: Mutex<Option<Value>> = Mutex::new(None);

/// The last value successfully echoed, if any.
pub fn last_result() -> Option<Value> {
    LAST_RESULT.lock().clone()
}

/// Echoes top-level results through a renderer into a sink.
#[derive(Clone, Debug)]
pub struct DisplayHook {
    renderer: Renderer,
    sink: SharedSink,
}

impl DisplayHook {
    /// Hook over the process output stream.
    pub fn new(renderer: Renderer) -> Self {
        Self::with_sink(renderer, stdout_sink())
    }

    /// Hook over an explicit sink.
    pub fn with_sink(renderer: Renderer, sink: SharedSink) -> Self {
        DisplayHook { renderer, sink }
    }

    /// The renderer this hook echoes through.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Echo a top-level result.
    ///
    /// Null results produce no output and leave the slot untouched. For
    /// everything else: clear the slot, render, write text plus newline,
    /// then store the value in the slot.
    pub fn echo(&self, value: &Value) -> ReprResult<()> {
        if value.is_none() {
            return Ok(());
        }
        *LAST_RESULT.lock() = None;
        let text = self.renderer.render(value)?;
        self.sink.write_line(&text);
        *LAST_RESULT.lock() = Some(value.clone());
        Ok(())
    }
}

/// Display hook with the dual-prefix renderer.
pub fn pdisplay_hook() -> DisplayHook {
    DisplayHook::new(Renderer::dual_prefix())
}

/// Display hook with the byte-only-prefix renderer (the default).
pub fn bdisplay_hook() -> DisplayHook {
    DisplayHook::new(Renderer::byte_prefix())
}

/// Display hook with the character-only-prefix renderer.
pub fn udisplay_hook() -> DisplayHook {
    DisplayHook::new(Renderer::char_prefix())
}
