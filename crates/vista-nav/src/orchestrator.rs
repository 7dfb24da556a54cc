//! Transition orchestrator: the public entry point.
//!
//! `execute` always settles. Whether the runner completes, aborts, or
//! fails while loading a builder or waiting for readiness, the visual
//! state applied before the transition is reverted before the caller sees
//! the outcome, and any animation handle is destroyed before the result is
//! returned. The pre and post mutations each run in one batched write
//! phase so neither side of the transition window can flicker.
//!
//! Overlapping transitions against the same view pair are the caller's to
//! serialize; each call's animation-handle lifetime is self-contained.

use tracing::debug;
use vista_anim::BuilderRegistry;
use vista_view::{Stage, frame};

use crate::config::NavConfig;
use crate::error::TransitionError;
use crate::focus::resolve_focus;
use crate::guard::StateGuard;
use crate::request::{TransitionRequest, TransitionResult};
use crate::runner;

/// Executes view transitions against one stage.
pub struct Orchestrator {
    stage: Stage,
    registry: BuilderRegistry,
    config: NavConfig,
}

impl Orchestrator {
    /// Orchestrator with stand-in platform builders and focus management
    /// disabled.
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            registry: BuilderRegistry::with_defaults(),
            config: NavConfig::default(),
        }
    }

    pub fn with_config(mut self, config: NavConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: BuilderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Execute one transition.
    ///
    /// In practice this settles with `Ok` even for aborted animations (the
    /// result's `has_completed` is false); `Err` is reserved for builder
    /// load failures and caller readiness-hook failures, both surfaced
    /// only after cleanup has run.
    pub async fn execute(
        &self,
        request: TransitionRequest,
    ) -> Result<TransitionResult, TransitionError> {
        debug!(
            direction = %request.effective_direction(),
            mode = %request.mode,
            animated = request.animated,
            has_leaving = request.leaving.is_some(),
            "transition start"
        );

        let mut guard =
            frame::write_task(|| StateGuard::apply(&self.stage, &request, &self.config));

        let outcome = runner::run(&self.stage, &request, &self.registry, &self.config).await;

        // Cleanup is unconditional: errors bypass lifecycle and playback,
        // never the revert.
        frame::write_task(|| guard.revert());

        match outcome {
            Ok(result) => {
                if let Some(animation) = &result.animation {
                    animation.destroy();
                }
                resolve_focus(&self.stage, &request.entering, &self.config);
                Ok(result)
            }
            Err(err) => {
                resolve_focus(&self.stage, &request.entering, &self.config);
                debug!("transition failed: {err}");
                Err(err)
            }
        }
    }
}
