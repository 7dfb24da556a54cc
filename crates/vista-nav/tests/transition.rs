//! End-to-end transition scenarios against an in-memory stage.

use std::cell::RefCell;
use std::rc::Rc;

use vista_nav::{
    AnimationBuilder, AnimationHandle, AnimationPlan, BuilderError, BuilderLoader, BuilderRegistry,
    Direction, ManualAnimation, Mode, NavConfig, Orchestrator, Stage, TransitionError,
    TransitionRequest, ViewHandle, ViewReadyHook,
};

fn stage_with_views() -> (Stage, ViewHandle, ViewHandle) {
    let stage = Stage::new();
    let entering = ViewHandle::new("div");
    let leaving = ViewHandle::new("div");
    stage.root().append_child(&entering);
    stage.root().append_child(&leaving);
    (stage, entering, leaving)
}

fn record(el: &ViewHandle, label: &'static str, log: &Rc<RefCell<Vec<String>>>) {
    let log = log.clone();
    el.on(move |name| log.borrow_mut().push(format!("{label}:{name}")));
}

fn builder_for(animation: &Rc<ManualAnimation>) -> AnimationBuilder {
    let animation = animation.clone();
    Rc::new(move |_: &ViewHandle, _: &AnimationPlan| animation.clone() as AnimationHandle)
}

#[tokio::test]
async fn forward_animated_transition_completes() {
    let (stage, entering, leaving) = stage_with_views();
    let log = Rc::new(RefCell::new(Vec::new()));
    record(&entering, "a", &log);
    record(&leaving, "b", &log);

    // Capture the layering the builder observes before playback starts.
    let layers = Rc::new(RefCell::new(None));
    let animation = ManualAnimation::auto_completing();
    let builder: AnimationBuilder = {
        let animation = animation.clone();
        let layers = layers.clone();
        Rc::new(move |_: &ViewHandle, plan: &AnimationPlan| {
            let leaving = plan.leaving.as_ref().and_then(|el| el.style("z-index"));
            *layers.borrow_mut() = Some((plan.entering.style("z-index"), leaving));
            animation.clone() as AnimationHandle
        })
    };

    let orchestrator = Orchestrator::new(stage);
    let request = TransitionRequest::new(entering.clone())
        .with_leaving(leaving.clone())
        .with_direction(Direction::Forward)
        .with_animation_builder(builder);
    let result = orchestrator.execute(request).await.unwrap();

    assert!(result.has_completed);
    assert!(result.animation.is_some());
    assert!(animation.was_played());

    assert_eq!(
        layers.borrow().clone().unwrap(),
        (Some("101".to_string()), Some("100".to_string()))
    );

    // Transition-window state is gone on both views.
    assert!(!entering.has_class("page-invisible"));
    assert!(!leaving.has_class("page-invisible"));
    assert_eq!(entering.style("pointer-events"), None);
    assert_eq!(leaving.style("pointer-events"), None);

    assert_eq!(
        log.borrow().as_slice(),
        [
            "b:view-will-leave",
            "a:view-will-enter",
            "a:view-did-enter",
            "b:view-did-leave",
        ]
    );
}

#[tokio::test]
async fn interrupted_animation_reports_incomplete() {
    let (stage, entering, leaving) = stage_with_views();
    let log = Rc::new(RefCell::new(Vec::new()));
    record(&entering, "a", &log);
    record(&leaving, "b", &log);

    let animation = ManualAnimation::completing_at(0.4);
    let orchestrator = Orchestrator::new(stage);
    let request = TransitionRequest::new(entering.clone())
        .with_leaving(leaving.clone())
        .with_animation_builder(builder_for(&animation));
    let result = orchestrator.execute(request).await.unwrap();

    assert!(!result.has_completed);
    assert!(result.animation.is_some());

    // No "did" events at all for an aborted transition, but cleanup ran.
    assert_eq!(
        log.borrow().as_slice(),
        ["b:view-will-leave", "a:view-will-enter"]
    );
    assert_eq!(entering.style("pointer-events"), None);
}

#[tokio::test]
async fn back_navigation_layers_entering_view_beneath_forward_default() {
    let (stage, entering, leaving) = stage_with_views();

    let layers = Rc::new(RefCell::new(None));
    let builder: AnimationBuilder = {
        let layers = layers.clone();
        Rc::new(move |_: &ViewHandle, plan: &AnimationPlan| {
            let leaving = plan.leaving.as_ref().and_then(|el| el.style("z-index"));
            *layers.borrow_mut() = Some((plan.entering.style("z-index"), leaving));
            ManualAnimation::auto_completing() as AnimationHandle
        })
    };

    let orchestrator = Orchestrator::new(stage);
    let request = TransitionRequest::new(entering)
        .with_leaving(leaving)
        .with_direction(Direction::Back)
        .with_animation_builder(builder);
    orchestrator.execute(request).await.unwrap();

    assert_eq!(
        layers.borrow().clone().unwrap(),
        (Some("99".to_string()), Some("100".to_string()))
    );
}

#[tokio::test]
async fn first_view_never_invokes_builder() {
    let stage = Stage::new();
    let entering = ViewHandle::new("div");
    stage.root().append_child(&entering);

    // A registry whose loaders fail loudly proves the builder is not used.
    let registry = BuilderRegistry::new();
    let loader: BuilderLoader = Rc::new(|| {
        Box::pin(async {
            Err(BuilderError::Load {
                mode: Mode::Md,
                message: "must not be loaded".into(),
            })
        })
    });
    registry.register(Mode::Md, loader);

    let orchestrator = Orchestrator::new(stage).with_registry(registry);
    let result = orchestrator
        .execute(TransitionRequest::new(entering))
        .await
        .unwrap();

    assert!(result.has_completed);
    assert!(result.animation.is_none());
}

#[tokio::test]
async fn gesture_driven_transition_is_held_and_driven_externally() {
    let (stage, entering, leaving) = stage_with_views();

    let animation = ManualAnimation::new();
    let controller: Rc<RefCell<Option<AnimationHandle>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(RefCell::new(Vec::new()));

    let orchestrator = Orchestrator::new(stage);
    let request = TransitionRequest::new(entering)
        .with_leaving(leaving)
        .with_animation_builder(builder_for(&animation))
        .on_progress({
            let controller = controller.clone();
            let calls = calls.clone();
            move |handle| {
                calls.borrow_mut().push(handle.is_some());
                if let Some(handle) = handle {
                    *controller.borrow_mut() = Some(handle);
                }
            }
        });

    // Drive the gesture concurrently: wait until the controller receives
    // the held animation, then cancel it partway through.
    let drive = {
        let controller = controller.clone();
        let animation = animation.clone();
        async move {
            while controller.borrow().is_none() {
                tokio::task::yield_now().await;
            }
            animation.finish(0.3);
        }
    };

    let (result, ()) = futures::join!(orchestrator.execute(request), drive);
    let result = result.unwrap();

    assert!(!result.has_completed);
    assert!(animation.was_held());
    assert!(!animation.was_played());
    assert_eq!(calls.borrow().as_slice(), [true, false]);
}

#[tokio::test]
async fn builder_load_failure_propagates_after_cleanup() {
    let (stage, entering, leaving) = stage_with_views();

    let registry = BuilderRegistry::new();
    let loader: BuilderLoader = Rc::new(|| {
        Box::pin(async {
            Err(BuilderError::Load {
                mode: Mode::Md,
                message: "platform module missing".into(),
            })
        })
    });
    registry.register(Mode::Md, loader);

    let orchestrator = Orchestrator::new(stage).with_registry(registry);
    let request = TransitionRequest::new(entering.clone()).with_leaving(leaving.clone());
    let err = orchestrator.execute(request).await.unwrap_err();

    assert!(matches!(err, TransitionError::Builder(_)));
    // Cleanup still ran: interaction is unblocked on both views.
    assert_eq!(entering.style("pointer-events"), None);
    assert_eq!(leaving.style("pointer-events"), None);
}

#[tokio::test]
async fn readiness_hook_failure_propagates_after_cleanup() {
    let (stage, entering, leaving) = stage_with_views();
    let log = Rc::new(RefCell::new(Vec::new()));
    record(&entering, "a", &log);
    record(&leaving, "b", &log);

    let hook: ViewReadyHook = Rc::new(|_view| Box::pin(async { Err(anyhow::anyhow!("load failed")) }));
    let orchestrator = Orchestrator::new(stage);
    let request = TransitionRequest::new(entering.clone())
        .with_leaving(leaving)
        .with_view_is_ready(hook);
    let err = orchestrator.execute(request).await.unwrap_err();

    assert!(matches!(err, TransitionError::ViewReady(_)));
    // The failure bypassed lifecycle events but not the revert.
    assert!(log.borrow().is_empty());
    assert_eq!(entering.style("pointer-events"), None);
}

#[tokio::test]
async fn focus_returns_to_last_focused_element_on_reenter() {
    let (stage, view_a, view_b) = stage_with_views();
    let input = ViewHandle::new("input");
    view_b.append_child(&input);
    stage.set_focus(&input);

    let orchestrator = Orchestrator::new(stage.clone()).with_config(NavConfig::with_default_focus());

    // Leave view B: the focused input gets marked.
    orchestrator
        .execute(
            TransitionRequest::new(view_a.clone())
                .with_leaving(view_b.clone())
                .with_animated(false),
        )
        .await
        .unwrap();
    assert_eq!(input.attribute("data-last-focus").as_deref(), Some("true"));

    // Re-enter view B: the marked element wins focus resolution.
    orchestrator
        .execute(
            TransitionRequest::new(view_b)
                .with_leaving(view_a)
                .with_direction(Direction::Back)
                .with_animated(false),
        )
        .await
        .unwrap();
    assert_eq!(stage.focused(), Some(input));
}

#[tokio::test]
async fn focus_falls_back_to_entering_view_without_candidates() {
    let (stage, entering, leaving) = stage_with_views();
    stage.set_focus(&leaving);

    let orchestrator = Orchestrator::new(stage.clone()).with_config(NavConfig::with_default_focus());
    orchestrator
        .execute(
            TransitionRequest::new(entering.clone())
                .with_leaving(leaving)
                .with_animated(false),
        )
        .await
        .unwrap();

    assert_eq!(stage.focused(), Some(entering.clone()));
    assert_eq!(entering.attribute("tabindex").as_deref(), Some("-1"));
}

#[tokio::test]
async fn no_animation_path_uses_zero_duration() {
    let (stage, entering, leaving) = stage_with_views();

    let registry = BuilderRegistry::new();
    let loader: BuilderLoader = Rc::new(|| {
        Box::pin(async {
            Err(BuilderError::Load {
                mode: Mode::Md,
                message: "must not be loaded".into(),
            })
        })
    });
    registry.register(Mode::Md, loader);

    let orchestrator = Orchestrator::new(stage).with_registry(registry);
    let request = TransitionRequest::new(entering)
        .with_leaving(leaving)
        .with_duration_ms(0);
    let result = orchestrator.execute(request).await.unwrap();

    assert!(result.has_completed);
    assert!(result.animation.is_none());
}

#[tokio::test]
async fn registry_resolution_is_keyed_by_mode() {
    let (stage, entering, leaving) = stage_with_views();

    let modes = Rc::new(RefCell::new(Vec::new()));
    let registry = BuilderRegistry::new();
    let builder: AnimationBuilder = {
        let modes = modes.clone();
        Rc::new(move |_: &ViewHandle, plan: &AnimationPlan| {
            modes.borrow_mut().push(plan.mode);
            ManualAnimation::auto_completing() as AnimationHandle
        })
    };
    registry.register_builder(Mode::Ios, builder);

    let orchestrator = Orchestrator::new(stage).with_registry(registry);
    let request = TransitionRequest::new(entering)
        .with_leaving(leaving)
        .with_mode(Mode::Ios);
    let result = orchestrator.execute(request).await.unwrap();

    assert!(result.has_completed);
    assert_eq!(modes.borrow().as_slice(), [Mode::Ios]);
}
