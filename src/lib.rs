//! Vista: view-transition core for navigable containers.
//!
//! This facade re-exports the public API of `vista-nav`. See the member
//! crates for details:
//! - `vista-view`: element-tree surface (handles, selectors, readiness)
//! - `vista-anim`: animation contract and mode-keyed builder registry
//! - `vista-nav`: the transition orchestrator itself

pub use vista_nav::*;
