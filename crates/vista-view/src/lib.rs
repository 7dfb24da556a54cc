//! View surface for the Vista transition core.
//!
//! This crate provides:
//! - **Element handles**: a shared, single-threaded element tree with class,
//!   attribute and inline-style mutation plus non-bubbling event dispatch
//! - **Selectors**: a minimal CSS-like structural/role query language
//! - **Deep readiness**: worklist traversal awaiting subtree mount
//! - **Frame scheduling**: cooperative ticks and batched write phases
//!
//! The transition orchestration in `vista-nav` talks to views exclusively
//! through this surface, so it can be exercised against in-memory trees.

pub mod element;
pub mod frame;
pub mod ready;
pub mod selector;
pub mod stage;

pub use element::{Readiness, ReadyHook, ViewHandle};
pub use ready::deep_ready;
pub use selector::{Selector, SelectorError};
pub use stage::Stage;
