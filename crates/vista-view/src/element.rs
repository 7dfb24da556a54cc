//! Shared element handles for the view tree.
//!
//! A `ViewHandle` is a cheap clone of a reference-counted element node.
//! Identity is pointer identity (`Rc::ptr_eq`), matching how a DOM element
//! reference behaves: two handles are equal iff they name the same node.
//!
//! Event dispatch is non-bubbling and non-cancelable: an event delivered to
//! an element reaches that element's own listeners only.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;

use crate::selector::Selector;

/// Async hook an element can expose to vouch for its own subtree being
/// mounted and measurable. Once the hook resolves, descendants are not
/// traversed further during deep readiness.
pub type ReadyHook = Rc<dyn Fn() -> LocalBoxFuture<'static, ()>>;

/// How an element participates in deep-readiness traversal.
#[derive(Clone, Default)]
pub enum Readiness {
    /// Ready immediately; children are still checked recursively.
    #[default]
    Immediate,
    /// Registered/upgraded component without a ready hook: ready after one
    /// cooperative scheduling tick, subtree vouched for.
    Upgraded,
    /// Component exposing an async ready hook; awaited, subtree vouched for.
    Hook(ReadyHook),
}

impl fmt::Debug for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate => write!(f, "Immediate"),
            Self::Upgraded => write!(f, "Upgraded"),
            Self::Hook(_) => write!(f, "Hook(..)"),
        }
    }
}

type Listener = Rc<dyn Fn(&str)>;

struct ElementNode {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    children: Vec<ViewHandle>,
    parent: Weak<RefCell<ElementNode>>,
    readiness: Readiness,
    listeners: Vec<Listener>,
}

/// Handle to one element in a view tree.
#[derive(Clone)]
pub struct ViewHandle {
    inner: Rc<RefCell<ElementNode>>,
}

impl PartialEq for ViewHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ViewHandle {}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.inner.borrow();
        f.debug_struct("ViewHandle")
            .field("tag", &node.tag)
            .field("classes", &node.classes)
            .field("children", &node.children.len())
            .finish()
    }
}

impl ViewHandle {
    /// Create a detached element with the given tag name.
    pub fn new(tag: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementNode {
                tag: tag.to_string(),
                classes: Vec::new(),
                attributes: BTreeMap::new(),
                styles: BTreeMap::new(),
                children: Vec::new(),
                parent: Weak::new(),
                readiness: Readiness::Immediate,
                listeners: Vec::new(),
            })),
        }
    }

    /// Tag name this element was created with.
    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    /// Replace this element's readiness capability.
    pub fn set_readiness(&self, readiness: Readiness) {
        self.inner.borrow_mut().readiness = readiness;
    }

    pub(crate) fn readiness(&self) -> Readiness {
        self.inner.borrow().readiness.clone()
    }

    // ========================================================================
    // Tree structure
    // ========================================================================

    /// Append a child element. A child keeps a weak link back to its parent.
    pub fn append_child(&self, child: &ViewHandle) {
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Snapshot of the current children.
    pub fn children(&self) -> Vec<ViewHandle> {
        self.inner.borrow().children.clone()
    }

    /// Parent element, if attached.
    pub fn parent(&self) -> Option<ViewHandle> {
        self.inner.borrow().parent.upgrade().map(|inner| ViewHandle { inner })
    }

    /// DOM-style containment: true if `other` is this element or one of its
    /// descendants.
    pub fn contains(&self, other: &ViewHandle) -> bool {
        let mut current = Some(other.clone());
        while let Some(el) = current {
            if el == *self {
                return true;
            }
            current = el.parent();
        }
        false
    }

    // ========================================================================
    // Classes
    // ========================================================================

    pub fn add_class(&self, class: &str) {
        let mut node = self.inner.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.inner.borrow_mut().classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(name).cloned()
    }

    pub fn remove_attribute(&self, name: &str) {
        self.inner.borrow_mut().attributes.remove(name);
    }

    // ========================================================================
    // Inline styles
    // ========================================================================

    pub fn set_style(&self, property: &str, value: &str) {
        self.inner
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.inner.borrow().styles.get(property).cloned()
    }

    pub fn remove_style(&self, property: &str) {
        self.inner.borrow_mut().styles.remove(property);
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Register a listener invoked with the event name on every dispatch to
    /// this element.
    pub fn on(&self, listener: impl Fn(&str) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Dispatch a named, non-bubbling, non-cancelable event on this element.
    ///
    /// Listeners are snapshotted before invocation, so a listener may mutate
    /// the element (or register further listeners) without re-entrancy
    /// hazards.
    pub fn dispatch(&self, name: &str) {
        tracing::trace!(event = name, tag = %self.tag(), "dispatch");
        let listeners: Vec<Listener> = self.inner.borrow().listeners.clone();
        for listener in listeners {
            listener(name);
        }
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    /// Offset-parent equivalence: an element hidden via inline
    /// `display: none` on itself or any ancestor is not visible.
    pub fn is_visible(&self) -> bool {
        let mut current = Some(self.clone());
        while let Some(el) = current {
            if el.style("display").as_deref() == Some("none") {
                return false;
            }
            current = el.parent();
        }
        true
    }

    // ========================================================================
    // Querying
    // ========================================================================

    /// First descendant (pre-order) matching the selector. The element
    /// itself is not a candidate.
    pub fn query(&self, selector: &Selector) -> Option<ViewHandle> {
        self.descendants_preorder()
            .into_iter()
            .find(|el| selector.matches(el))
    }

    /// All descendants (pre-order) matching the selector.
    pub fn query_all(&self, selector: &Selector) -> Vec<ViewHandle> {
        self.descendants_preorder()
            .into_iter()
            .filter(|el| selector.matches(el))
            .collect()
    }

    fn descendants_preorder(&self) -> Vec<ViewHandle> {
        let mut out = Vec::new();
        let mut stack: Vec<ViewHandle> = self.children();
        stack.reverse();
        while let Some(el) = stack.pop() {
            out.push(el.clone());
            let mut children = el.children();
            children.reverse();
            stack.extend(children);
        }
        out
    }
}
