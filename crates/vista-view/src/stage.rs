//! Stage: the navigable container holding view trees and input focus.
//!
//! A `Stage` plays the role of the document around a transition: it owns the
//! container element views are mounted into (the element handed to animation
//! builders) and tracks which element currently holds input focus.

use std::cell::RefCell;
use std::rc::Rc;

use crate::element::ViewHandle;

/// Cheaply clonable handle to one navigable container.
#[derive(Clone)]
pub struct Stage {
    inner: Rc<StageInner>,
}

struct StageInner {
    root: ViewHandle,
    focused: RefCell<Option<ViewHandle>>,
}

impl Stage {
    /// Stage with a fresh container element.
    pub fn new() -> Self {
        Self::with_root(ViewHandle::new("app"))
    }

    /// Stage wrapping an existing container element.
    pub fn with_root(root: ViewHandle) -> Self {
        Self {
            inner: Rc::new(StageInner {
                root,
                focused: RefCell::new(None),
            }),
        }
    }

    /// The container element; views are mounted as its children.
    pub fn root(&self) -> ViewHandle {
        self.inner.root.clone()
    }

    /// Move input focus to `el`.
    pub fn set_focus(&self, el: &ViewHandle) {
        *self.inner.focused.borrow_mut() = Some(el.clone());
    }

    /// Drop input focus entirely.
    pub fn clear_focus(&self) {
        *self.inner.focused.borrow_mut() = None;
    }

    /// Element currently holding input focus, if any.
    pub fn focused(&self) -> Option<ViewHandle> {
        self.inner.focused.borrow().clone()
    }

    /// Whether focus currently sits on `el` or inside its subtree.
    pub fn focus_within(&self, el: &ViewHandle) -> bool {
        self.focused().is_some_and(|focused| el.contains(&focused))
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
