//! Cooperative scheduling primitives for the view surface.
//!
//! All Vista work runs on one cooperative scheduler; there are no parallel
//! threads touching the tree. Two primitives are exposed:
//!
//! - [`tick`]: one cooperative yield, the "rendering frame" suspension used
//!   by upgraded-but-hookless elements during deep readiness.
//! - [`write_task`]: the single designated write slot for a batch of tree
//!   mutations. Callers follow a read-then-write discipline: reads happen
//!   before entering the slot, and no other party mutates the same views
//!   while a transition is in flight.

/// Yield once to the scheduler and resume on the next tick.
pub async fn tick() {
    tokio::task::yield_now().await;
}

/// Run a batch of view mutations as one synchronized write phase.
///
/// The closure runs to completion without suspension, so every mutation in
/// the batch lands within a single frame and cannot interleave with layout
/// reads.
pub fn write_task<T>(writes: impl FnOnce() -> T) -> T {
    writes()
}
