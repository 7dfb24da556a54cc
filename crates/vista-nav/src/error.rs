//! Error taxonomy for the transition core.
//!
//! Fatal errors are the two the runner can hit before playback: builder
//! resolution and the caller's readiness hook. Both propagate to the caller
//! only after the orchestrator's visual-state revert has run. Everything
//! else (absent leaving view, unrecognized focus categories) is a no-op or
//! a warning, never an error. No retries happen anywhere in this core.

use vista_anim::BuilderError;

/// Errors a transition can settle with.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    /// Deferred load of a platform animation builder failed.
    #[error("animation builder resolution failed: {0}")]
    Builder(#[from] BuilderError),

    /// The caller-supplied `view_is_ready` hook raised.
    #[error("view readiness hook failed: {0}")]
    ViewReady(#[source] anyhow::Error),
}
