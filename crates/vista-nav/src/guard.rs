//! Visual state guard: enter/leave bookkeeping around the animation window.
//!
//! `apply` runs synchronously inside one batched write phase before the
//! transition, `revert` runs unconditionally once it settles: success,
//! failure or abort. Revert is idempotent; calling it twice changes
//! nothing further.

use vista_anim::Direction;
use vista_view::{Stage, ViewHandle};

use crate::config::NavConfig;
use crate::request::TransitionRequest;

/// Marker class hiding a mounted-but-not-yet-shown page.
pub const CLASS_PAGE_INVISIBLE: &str = "page-invisible";
/// Affordance class signaling that a back gesture/button applies.
pub const CLASS_CAN_GO_BACK: &str = "can-go-back";
/// Attribute recording which element held focus when its view was left.
pub const ATTR_LAST_FOCUS: &str = "data-last-focus";

const STYLE_Z_INDEX: &str = "z-index";
const STYLE_POINTER_EVENTS: &str = "pointer-events";

/// Applied pre-transition visual state, reverted after settling.
pub struct StateGuard {
    entering: ViewHandle,
    leaving: Option<ViewHandle>,
    reverted: bool,
}

impl StateGuard {
    /// Apply pre-transition state: last-focus marking, z-index layering,
    /// the go-back affordance, unhiding, and pointer-interaction blocking.
    ///
    /// All leaving-view operations are no-ops when the request has no
    /// leaving view.
    pub fn apply(stage: &Stage, request: &TransitionRequest, config: &NavConfig) -> Self {
        let entering = &request.entering;
        let leaving = request.leaving.as_ref();

        if config.focus_enabled() {
            mark_last_focus(stage, leaving);
        }

        set_layering(entering, leaving, request.effective_direction());

        if request.show_go_back {
            entering.add_class(CLASS_CAN_GO_BACK);
        } else {
            entering.remove_class(CLASS_CAN_GO_BACK);
        }

        // Unhide both views and block pointer interaction for the whole
        // transition window so controls cannot be double-activated.
        for el in [Some(entering), leaving].into_iter().flatten() {
            el.remove_class(CLASS_PAGE_INVISIBLE);
            el.set_style(STYLE_POINTER_EVENTS, "none");
        }

        Self {
            entering: entering.clone(),
            leaving: leaving.cloned(),
            reverted: false,
        }
    }

    /// Revert post-transition state: clear any invisibility marker and
    /// re-enable pointer interaction on both views. Idempotent.
    pub fn revert(&mut self) {
        if self.reverted {
            return;
        }
        self.reverted = true;

        for el in [Some(&self.entering), self.leaving.as_ref()].into_iter().flatten() {
            el.remove_class(CLASS_PAGE_INVISIBLE);
            el.remove_style(STYLE_POINTER_EVENTS);
        }
    }
}

/// Record the focused element inside the leaving view so focus can be
/// restored when that view re-enters. The marker is consumed by the focus
/// resolver; it is never cleared here.
fn mark_last_focus(stage: &Stage, leaving: Option<&ViewHandle>) {
    let Some(leaving) = leaving else { return };
    let Some(focused) = stage.focused() else { return };
    if leaving.contains(&focused) {
        focused.set_attribute(ATTR_LAST_FOCUS, "true");
    }
}

/// Stack the entering view above the leaving view. Back navigation places
/// the entering view on layer 99, beneath the leaving view's 100, so a
/// back-navigated view also sits beneath a subsequently pushed forward
/// view (layer 101). Intentional layering contract, not a defect.
fn set_layering(entering: &ViewHandle, leaving: Option<&ViewHandle>, direction: Direction) {
    let layer = match direction {
        Direction::Back => "99",
        Direction::Forward => "101",
    };
    entering.set_style(STYLE_Z_INDEX, layer);
    if let Some(leaving) = leaving {
        leaving.set_style(STYLE_Z_INDEX, "100");
    }
}
