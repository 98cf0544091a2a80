//! The process-wide repr context.
//!
//! A single slot holds the active renderer and display hook. `activate`
//! installs both at once; `deactivate` is the matching teardown. With
//! nothing installed, rendering falls back to the canonical form and
//! echoing to an unprefixed hook over stdout.
//!
//! Installation is last-writer-wins; see the crate docs for the
//! concurrent-activation hazard.

use parking_lot::RwLock;
use pretext_repr::{PrefixPolicy, Renderer, ReprResult};
use pretext_value::{canon, Value};

use crate::hook::DisplayHook;

struct ActiveRepr {
    renderer: Renderer,
    hook: DisplayHook,
}

static ACTIVE: RwLock<Option<ActiveRepr>> = RwLock::new(None);

/// Install the renderer and stdout hook for a prefix policy.
pub fn activate(policy: PrefixPolicy) {
    let renderer = Renderer::new(policy.config());
    activate_with(renderer, DisplayHook::new(renderer));
}

/// Install the byte-only-prefix configuration, the behavior of the most
/// widely deployed host generation.
pub fn activate_default() {
    activate(PrefixPolicy::BytePrefix);
}

/// Install an explicit renderer and hook pair.
pub fn activate_with(renderer: Renderer, hook: DisplayHook) {
    tracing::debug!(config = ?renderer.config(), "installing process-wide repr");
    *ACTIVE.write() = Some(ActiveRepr { renderer, hook });
}

/// Remove the installed configuration, restoring canonical behavior.
pub fn deactivate() {
    tracing::debug!("removing process-wide repr");
    *ACTIVE.write() = None;
}

/// Render through the installed renderer, or canonically when nothing is
/// installed.
pub fn active_repr(value: &Value) -> ReprResult<String> {
    match &*ACTIVE.read() {
        Some(active) => active.renderer.render(value),
        None => Ok(canon::repr(value)),
    }
}

/// Echo through the installed hook, or through an unprefixed stdout hook
/// when nothing is installed.
pub fn echo_active(value: &Value) -> ReprResult<()> {
    match &*ACTIVE.read() {
        Some(active) => active.hook.echo(value),
        None => DisplayHook::new(Renderer::unprefixed()).echo(value),
    }
}

#[cfg(test)]
mod tests;
