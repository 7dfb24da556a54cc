//! Transition request and result value objects.
//!
//! A request is built once, handed to the orchestrator and discarded; the
//! result is likewise single-use. Nothing here persists across transitions;
//! the only cross-invocation state the core owns is the `data-last-focus`
//! marker left on elements (see `guard` and `focus`).

use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use vista_anim::{AnimationBuilder, AnimationHandle, AnimationPlan, Direction, Mode};
use vista_view::ViewHandle;

/// Sink for a gesture-driven progress controller. Receives the animation
/// handle when the held animation is ready to be driven, then `None` once
/// the progressive phase has concluded.
pub type ProgressHandler = Rc<dyn Fn(Option<AnimationHandle>)>;

/// Caller-supplied readiness hook, awaited with the entering view before
/// the transition proceeds.
pub type ViewReadyHook = Rc<dyn Fn(ViewHandle) -> LocalBoxFuture<'static, anyhow::Result<()>>>;

/// Immutable input for one transition.
pub struct TransitionRequest {
    /// View becoming visible. Always present.
    pub entering: ViewHandle,
    /// View being hidden. Absent only for the very first view in a stack.
    pub leaving: Option<ViewHandle>,
    /// Navigation direction; `None` is treated as forward.
    pub direction: Option<Direction>,
    pub animated: bool,
    /// Duration override in milliseconds; `Some(0)` disables animation.
    pub duration_ms: Option<u64>,
    /// Explicit builder; when absent the registry resolves one by `mode`.
    pub animation_builder: Option<AnimationBuilder>,
    pub mode: Mode,
    /// Toggles the `can-go-back` affordance class on the entering view.
    pub show_go_back: bool,
    /// Explicit deep-wait override; otherwise the path picks its default.
    pub deep_wait: Option<bool>,
    pub progress_handler: Option<ProgressHandler>,
    pub view_is_ready: Option<ViewReadyHook>,
}

impl TransitionRequest {
    /// Request with defaults: animated, forward, `md` mode, no leaving view.
    pub fn new(entering: ViewHandle) -> Self {
        Self {
            entering,
            leaving: None,
            direction: None,
            animated: true,
            duration_ms: None,
            animation_builder: None,
            mode: Mode::default(),
            show_go_back: false,
            deep_wait: None,
            progress_handler: None,
            view_is_ready: None,
        }
    }

    pub fn with_leaving(mut self, leaving: ViewHandle) -> Self {
        self.leaving = Some(leaving);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_animation_builder(mut self, builder: AnimationBuilder) -> Self {
        self.animation_builder = Some(builder);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_show_go_back(mut self, show_go_back: bool) -> Self {
        self.show_go_back = show_go_back;
        self
    }

    pub fn with_deep_wait(mut self, deep_wait: bool) -> Self {
        self.deep_wait = Some(deep_wait);
        self
    }

    pub fn on_progress(mut self, handler: impl Fn(Option<AnimationHandle>) + 'static) -> Self {
        self.progress_handler = Some(Rc::new(handler));
        self
    }

    pub fn with_view_is_ready(mut self, hook: ViewReadyHook) -> Self {
        self.view_is_ready = Some(hook);
        self
    }

    /// Direction with the forward default applied.
    pub fn effective_direction(&self) -> Direction {
        self.direction.unwrap_or_default()
    }

    /// Whether the animated path applies at all: there must be a leaving
    /// view, animation must be requested, and the duration must not be an
    /// explicit zero.
    pub fn wants_animation(&self) -> bool {
        self.leaving.is_some() && self.animated && self.duration_ms != Some(0)
    }

    /// The animation-facing projection handed to builders.
    pub fn animation_plan(&self) -> AnimationPlan {
        AnimationPlan {
            entering: self.entering.clone(),
            leaving: self.leaving.clone(),
            direction: self.effective_direction(),
            duration_ms: self.duration_ms,
            mode: self.mode,
        }
    }
}

impl fmt::Debug for TransitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRequest")
            .field("entering", &self.entering)
            .field("leaving", &self.leaving)
            .field("direction", &self.direction)
            .field("animated", &self.animated)
            .field("duration_ms", &self.duration_ms)
            .field("mode", &self.mode)
            .field("show_go_back", &self.show_go_back)
            .field("deep_wait", &self.deep_wait)
            .field("has_builder", &self.animation_builder.is_some())
            .field("has_progress_handler", &self.progress_handler.is_some())
            .field("has_view_is_ready", &self.view_is_ready.is_some())
            .finish()
    }
}

/// Outcome of one transition.
///
/// By the time the caller receives a result, any animation handle inside it
/// has already been destroyed by the orchestrator; it may be inspected but
/// its lifecycle methods must not be called again.
pub struct TransitionResult {
    /// True unless an in-flight animation was interrupted or reversed.
    pub has_completed: bool,
    /// Handle to the played animation; present only on the animated path.
    pub animation: Option<AnimationHandle>,
}

impl fmt::Debug for TransitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionResult")
            .field("has_completed", &self.has_completed)
            .field("has_animation", &self.animation.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = TransitionRequest::new(ViewHandle::new("div"));
        assert!(request.animated);
        assert!(request.leaving.is_none());
        assert_eq!(request.effective_direction(), Direction::Forward);
        assert_eq!(request.mode, Mode::Md);
    }

    #[test]
    fn test_wants_animation() {
        let entering = ViewHandle::new("div");
        let leaving = ViewHandle::new("div");

        // No leaving view: never animated.
        let request = TransitionRequest::new(entering.clone());
        assert!(!request.wants_animation());

        let request = TransitionRequest::new(entering.clone()).with_leaving(leaving.clone());
        assert!(request.wants_animation());

        let request = TransitionRequest::new(entering.clone())
            .with_leaving(leaving.clone())
            .with_animated(false);
        assert!(!request.wants_animation());

        let request = TransitionRequest::new(entering.clone())
            .with_leaving(leaving.clone())
            .with_duration_ms(0);
        assert!(!request.wants_animation());

        // A nonzero duration keeps the animated path.
        let request = TransitionRequest::new(entering)
            .with_leaving(leaving)
            .with_duration_ms(250);
        assert!(request.wants_animation());
    }

    #[test]
    fn test_animation_plan_projection() {
        let entering = ViewHandle::new("div");
        let leaving = ViewHandle::new("div");
        let request = TransitionRequest::new(entering.clone())
            .with_leaving(leaving.clone())
            .with_direction(Direction::Back)
            .with_duration_ms(300)
            .with_mode(Mode::Ios);

        let plan = request.animation_plan();
        assert_eq!(plan.entering, entering);
        assert_eq!(plan.leaving, Some(leaving));
        assert_eq!(plan.direction, Direction::Back);
        assert_eq!(plan.duration_ms, Some(300));
        assert_eq!(plan.mode, Mode::Ios);
    }
}
