//! Mode-keyed registry of animation builders.
//!
//! Platform transition styles are loaded on demand in the original system;
//! here that deferred load is a pluggable async strategy resolved by
//! [`Mode`]. A loader runs at most the moment a transition first needs its
//! builder, and a load failure surfaces as [`BuilderError`] so the caller
//! can treat the transition as failed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use vista_view::ViewHandle;

use crate::handle::{AnimationHandle, ManualAnimation};
use crate::types::{AnimationPlan, Mode};

/// Pure animation constructor: container element plus plan in, handle out.
/// No side effects until the handle is played.
pub type AnimationBuilder = Rc<dyn Fn(&ViewHandle, &AnimationPlan) -> AnimationHandle>;

/// Deferred builder load; awaited before the animated path proceeds.
pub type BuilderLoader = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<AnimationBuilder, BuilderError>>>;

/// Errors raised while resolving an animation builder.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BuilderError {
    #[error("no animation builder registered for mode `{0}`")]
    Unregistered(Mode),
    #[error("animation builder for mode `{mode}` failed to load: {message}")]
    Load { mode: Mode, message: String },
}

/// Registry mapping platform modes to deferred builder loaders.
#[derive(Clone, Default)]
pub struct BuilderRegistry {
    loaders: Rc<RefCell<HashMap<Mode, BuilderLoader>>>,
}

impl BuilderRegistry {
    /// Empty registry; every resolution fails with `Unregistered`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with stand-in builders for both platform modes. The
    /// stand-ins construct animations that complete forward as soon as they
    /// are played, which keeps animated transitions settling even without a
    /// real animation engine attached.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for mode in [Mode::Ios, Mode::Md] {
            registry.register_builder(
                mode,
                Rc::new(|_container: &ViewHandle, _plan: &AnimationPlan| {
                    ManualAnimation::auto_completing() as AnimationHandle
                }),
            );
        }
        registry
    }

    /// Register a deferred loader for `mode`, replacing any previous one.
    pub fn register(&self, mode: Mode, loader: BuilderLoader) {
        self.loaders.borrow_mut().insert(mode, loader);
    }

    /// Register an already-loaded builder for `mode`.
    pub fn register_builder(&self, mode: Mode, builder: AnimationBuilder) {
        let loader: BuilderLoader = Rc::new(move || {
            let builder = builder.clone();
            Box::pin(async move { Ok(builder) })
        });
        self.register(mode, loader);
    }

    /// Await the loader registered for `mode`.
    pub async fn resolve(&self, mode: Mode) -> Result<AnimationBuilder, BuilderError> {
        // Clone the loader out so no borrow is held across the await.
        let loader = self
            .loaders
            .borrow()
            .get(&mode)
            .cloned()
            .ok_or(BuilderError::Unregistered(mode))?;
        loader().await
    }
}
