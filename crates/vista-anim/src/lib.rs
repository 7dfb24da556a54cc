//! Animation contract for Vista transitions.
//!
//! This crate specifies the boundary to the animation engine, which is an
//! external collaborator:
//!
//! - **Handle contract**: [`Animation`], started immediately (`play`) or in
//!   held progressive mode (`progress_start`), exactly one completion
//!   notification carrying a normalized step in `[0, 1]`
//! - **Builders**: pure constructors from a container element plus an
//!   [`AnimationPlan`] to a handle, with no side effects until played
//! - **Registry**: mode-keyed deferred builder loading ([`BuilderRegistry`]),
//!   standing in for on-demand platform-module loading
//!
//! [`ManualAnimation`] is a concrete handle driven externally; it backs
//! gesture-driven transitions and the default mode builders.

pub mod handle;
pub mod registry;
pub mod types;

pub use handle::{Animation, AnimationHandle, COMPLETE_STEP, ManualAnimation};
pub use registry::{AnimationBuilder, BuilderError, BuilderLoader, BuilderRegistry};
pub use types::{AnimationPlan, Direction, Mode};
