//! Vista navigation core: one view transition, executed deterministically.
//!
//! The [`Orchestrator`] swaps a leaving view for an entering view inside a
//! navigable container [`Stage`], reconciling three independently timed
//! async processes (animation playback, deep content readiness and focus
//! resolution) into a single always-settling operation:
//!
//! ```text
//! Orchestrator::execute
//!   ├── StateGuard::apply          (one batched write phase)
//!   ├── runner::run
//!   │     ├── builder resolution   (explicit → registry by mode → none)
//!   │     ├── ready::wait_ready    (deep readiness + caller hook)
//!   │     ├── lifecycle will/did   (leave-before-enter, enter-before-leave)
//!   │     └── play / progress-hold (single completion notification)
//!   ├── StateGuard::revert         (unconditional, also on failure)
//!   ├── animation destroy          (success only)
//!   └── focus::resolve_focus
//! ```
//!
//! Navigation policy (which view enters, history, geometry) lives with the
//! caller; this crate only executes one transition given two view handles.

pub mod config;
pub mod error;
pub mod focus;
pub mod guard;
pub mod lifecycle;
pub mod orchestrator;
pub mod ready;
pub mod request;
pub mod runner;

pub use config::{FocusConfig, NavConfig};
pub use error::TransitionError;
pub use guard::StateGuard;
pub use orchestrator::Orchestrator;
pub use request::{ProgressHandler, TransitionRequest, TransitionResult, ViewReadyHook};

// Collaborator surface, re-exported so callers depend on one crate.
pub use vista_anim::{
    Animation, AnimationBuilder, AnimationHandle, AnimationPlan, BuilderError, BuilderLoader,
    BuilderRegistry, COMPLETE_STEP, Direction, ManualAnimation, Mode,
};
pub use vista_view::{Readiness, ReadyHook, Selector, Stage, ViewHandle};
