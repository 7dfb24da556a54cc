//! Lifecycle notifications fired on view elements around a transition.
//!
//! Ordering is asymmetric by contract: on the "will" phase the leaving
//! view is notified before the entering view; on the "did" phase the
//! entering view is notified before the leaving view. Listeners
//! coordinating shared state between the two views rely on this; do not
//! normalize it.

use vista_view::ViewHandle;

pub const WILL_ENTER: &str = "view-will-enter";
pub const DID_ENTER: &str = "view-did-enter";
pub const WILL_LEAVE: &str = "view-will-leave";
pub const DID_LEAVE: &str = "view-did-leave";

/// Dispatch a non-bubbling, non-cancelable lifecycle signal on `el`.
/// Absent elements are silently skipped.
pub fn lifecycle(el: Option<&ViewHandle>, event: &str) {
    if let Some(el) = el {
        el.dispatch(event);
    }
}

/// Fire the "will" phase: leaving will-leave strictly before entering
/// will-enter.
pub fn fire_will_events(entering: &ViewHandle, leaving: Option<&ViewHandle>) {
    lifecycle(leaving, WILL_LEAVE);
    lifecycle(Some(entering), WILL_ENTER);
}

/// Fire the "did" phase: entering did-enter strictly before leaving
/// did-leave.
pub fn fire_did_events(entering: &ViewHandle, leaving: Option<&ViewHandle>) {
    lifecycle(Some(entering), DID_ENTER);
    lifecycle(leaving, DID_LEAVE);
}
