//! Shared serialization for tests that touch process-wide slots.

use parking_lot::Mutex;

/// Tests that read or write the last-result slot or the active repr
/// context take this lock so they don't interleave.
pub static GLOBAL_STATE: Mutex<()> = Mutex::new(());
