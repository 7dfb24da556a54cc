//! Readiness waiter: gate a transition on its views being mountable.
//!
//! Deep readiness waits for both views' subtrees concurrently (see
//! `vista_view::ready`); afterwards the caller's own `view_is_ready` hook,
//! if supplied, is awaited with the entering view and the transition does
//! not proceed until it resolves.

use vista_view::deep_ready;

use crate::error::TransitionError;
use crate::request::TransitionRequest;

/// Wait until the transition may proceed.
///
/// The effective deep flag is the request's explicit override when present,
/// otherwise `default_deep` (the calling path's default: forced true on the
/// animated path, the focus-manager flag on the no-animation path).
pub async fn wait_ready(
    request: &TransitionRequest,
    default_deep: bool,
) -> Result<(), TransitionError> {
    let deep = request.deep_wait.unwrap_or(default_deep);
    if deep {
        match &request.leaving {
            Some(leaving) => {
                futures::join!(deep_ready(&request.entering), deep_ready(leaving));
            }
            None => deep_ready(&request.entering).await,
        }
    }

    if let Some(hook) = &request.view_is_ready {
        hook(request.entering.clone())
            .await
            .map_err(TransitionError::ViewReady)?;
    }
    Ok(())
}
