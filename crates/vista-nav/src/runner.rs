//! Animation runner: the animated and no-animation transition paths.
//!
//! Builder resolution picks the path: no leaving view, `animated == false`
//! or an explicit zero duration short-circuit to the fast no-animation
//! path without ever touching a builder. Otherwise the request's explicit
//! builder wins, with the mode-keyed registry as the deferred fallback.

use tracing::debug;
use vista_anim::{AnimationBuilder, BuilderRegistry, COMPLETE_STEP};
use vista_view::Stage;

use crate::config::NavConfig;
use crate::error::TransitionError;
use crate::lifecycle::{fire_did_events, fire_will_events};
use crate::ready::wait_ready;
use crate::request::{TransitionRequest, TransitionResult};

/// Run the transition body and settle with a result.
pub async fn run(
    stage: &Stage,
    request: &TransitionRequest,
    registry: &BuilderRegistry,
    config: &NavConfig,
) -> Result<TransitionResult, TransitionError> {
    match resolve_builder(request, registry).await? {
        Some(builder) => animated(stage, request, builder).await,
        None => no_animation(request, config).await,
    }
}

async fn resolve_builder(
    request: &TransitionRequest,
    registry: &BuilderRegistry,
) -> Result<Option<AnimationBuilder>, TransitionError> {
    if !request.wants_animation() {
        return Ok(None);
    }
    if let Some(builder) = &request.animation_builder {
        return Ok(Some(builder.clone()));
    }
    Ok(Some(registry.resolve(request.mode).await?))
}

/// Fast path: no animation object at all. Readiness still applies (deep
/// only when the focus manager asks for it), then "will" and "did" events
/// fire back to back.
async fn no_animation(
    request: &TransitionRequest,
    config: &NavConfig,
) -> Result<TransitionResult, TransitionError> {
    wait_ready(request, config.focus_enabled()).await?;

    let leaving = request.leaving.as_ref();
    fire_will_events(&request.entering, leaving);
    fire_did_events(&request.entering, leaving);

    debug!("transition settled without animation");
    Ok(TransitionResult {
        has_completed: true,
        animation: None,
    })
}

/// Animated path. Deep readiness is forced: the builder measures both
/// subtrees to compute geometry, so every descendant must be mounted.
async fn animated(
    stage: &Stage,
    request: &TransitionRequest,
    builder: AnimationBuilder,
) -> Result<TransitionResult, TransitionError> {
    wait_ready(request, true).await?;

    let plan = request.animation_plan();
    let animation = builder(&stage.root(), &plan);

    let leaving = request.leaving.as_ref();
    fire_will_events(&request.entering, leaving);

    match &request.progress_handler {
        Some(handler) => {
            // Gesture-driven: hold the animation and hand the controller
            // over instead of auto-playing.
            animation.progress_start(true);
            handler(Some(animation.clone()));
        }
        None => animation.play(),
    }

    let step = animation.when_finished().await;
    let has_completed = step >= COMPLETE_STEP;

    if let Some(handler) = &request.progress_handler {
        // Signal that the progressive phase has concluded.
        handler(None);
    }

    if has_completed {
        fire_did_events(&request.entering, leaving);
    }

    debug!(
        step,
        has_completed,
        direction = %plan.direction,
        "animated transition settled"
    );
    Ok(TransitionResult {
        has_completed,
        animation: Some(animation),
    })
}
