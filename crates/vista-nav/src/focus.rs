//! Focus resolution after a transition settles.
//!
//! Runs only when a focus priority list is configured and focus is not
//! already inside the entering view. Precedence, first visible match wins:
//!
//! 1. a descendant carrying the last-focus marker
//! 2. the configured priority categories, in order
//! 3. the entering view element itself (guaranteed fallback)
//!
//! Candidates hidden via display suppression are skipped even when they
//! match. Unrecognized category names are warned about and skipped without
//! stopping the walk.

use tracing::warn;
use vista_view::{Selector, Stage, ViewHandle};

use crate::config::NavConfig;
use crate::guard::ATTR_LAST_FOCUS;

/// Structural/role query for a symbolic focus category.
fn selector_for(category: &str) -> Option<&'static str> {
    match category {
        "content" => Some("main, [role=main]"),
        "heading" => Some("h1, [role=heading][aria-level=1]"),
        "banner" => Some("header, [role=banner]"),
        _ => None,
    }
}

/// Decide which element receives input focus inside the entering view.
pub fn resolve_focus(stage: &Stage, entering: &ViewHandle, config: &NavConfig) {
    let Some(priorities) = &config.focus.priorities else {
        return;
    };
    if stage.focus_within(entering) {
        return;
    }

    // The marker is read, never cleared: the element keeps it for the next
    // time its view re-enters.
    if let Some(marked) = query_visible(entering, &format!("[{ATTR_LAST_FOCUS}]")) {
        focus_element(stage, &marked);
        return;
    }

    for category in priorities {
        let Some(source) = selector_for(category) else {
            warn!("unrecognized focus priority category: {category}");
            continue;
        };
        if let Some(target) = query_visible(entering, source) {
            focus_element(stage, &target);
            return;
        }
    }

    focus_element(stage, entering);
}

fn query_visible(root: &ViewHandle, source: &str) -> Option<ViewHandle> {
    let selector = Selector::parse(source).ok()?;
    root.query_all(&selector).into_iter().find(ViewHandle::is_visible)
}

/// Make the target programmatically focusable without joining the natural
/// tab order, then move input focus to it.
fn focus_element(stage: &Stage, el: &ViewHandle) {
    el.set_attribute("tabindex", "-1");
    stage.set_focus(el);
}
