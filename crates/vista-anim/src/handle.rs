//! Animation handles.
//!
//! A handle is owned by the transition runner while it plays and destroyed
//! by the orchestrator once the transition settles. The contract relied on:
//! construction has no side effects, playback starts via [`Animation::play`]
//! or [`Animation::progress_start`], and exactly one completion notification
//! is delivered per transition.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use tokio::sync::oneshot;

/// Step value reported when an animation ran to completion forward.
/// Anything below it means the animation was reversed or aborted; steps
/// above it (an engine overshooting the normalized scale) also count as
/// complete, so consumers compare with `>=` rather than testing equality.
pub const COMPLETE_STEP: f64 = 1.0;

/// Controllable, playable animation object.
pub trait Animation {
    /// Start playback immediately.
    fn play(&self);

    /// Start in held, progressively-driven mode: the animation does not
    /// advance on its own, an external controller (typically a gesture)
    /// drives progress and eventual completion. `force_linear` asks the
    /// engine to drop easing so gesture position maps directly to progress.
    fn progress_start(&self, force_linear: bool);

    /// Await the single completion notification. Resolves with the final
    /// normalized step: [`COMPLETE_STEP`] for a full forward run, anything
    /// else for a reversed or aborted run.
    ///
    /// One await per transition is the contract; a later await resolves
    /// from the recorded final step.
    fn when_finished(&self) -> LocalBoxFuture<'static, f64>;

    /// Release engine resources. Lifecycle methods must not be called on a
    /// destroyed handle.
    fn destroy(&self);

    /// Whether [`Animation::destroy`] has run.
    fn is_destroyed(&self) -> bool;
}

/// Shared handle to a playable animation.
pub type AnimationHandle = Rc<dyn Animation>;

/// Externally driven animation.
///
/// `play` either completes at a preconfigured step (the default mode
/// builders use [`ManualAnimation::auto_completing`]) or leaves completion
/// to an explicit [`ManualAnimation::finish`] call, which is also how
/// gesture controllers conclude a held animation.
pub struct ManualAnimation {
    played: Cell<bool>,
    held: Cell<bool>,
    destroyed: Cell<bool>,
    step_on_play: Cell<Option<f64>>,
    sender: RefCell<Option<oneshot::Sender<f64>>>,
    receiver: RefCell<Option<oneshot::Receiver<f64>>>,
    final_step: Rc<Cell<Option<f64>>>,
}

impl ManualAnimation {
    /// Animation that only completes via [`ManualAnimation::finish`].
    pub fn new() -> Rc<Self> {
        let (sender, receiver) = oneshot::channel();
        Rc::new(Self {
            played: Cell::new(false),
            held: Cell::new(false),
            destroyed: Cell::new(false),
            step_on_play: Cell::new(None),
            sender: RefCell::new(Some(sender)),
            receiver: RefCell::new(Some(receiver)),
            final_step: Rc::new(Cell::new(None)),
        })
    }

    /// Animation that finishes at [`COMPLETE_STEP`] as soon as it is played.
    pub fn auto_completing() -> Rc<Self> {
        Self::completing_at(COMPLETE_STEP)
    }

    /// Animation that finishes at `step` as soon as it is played.
    pub fn completing_at(step: f64) -> Rc<Self> {
        let animation = Self::new();
        animation.step_on_play.set(Some(step));
        animation
    }

    /// Deliver the completion notification with the given final step.
    /// Later calls are ignored; the first notification wins.
    pub fn finish(&self, step: f64) {
        if let Some(sender) = self.sender.borrow_mut().take() {
            let _ = sender.send(step);
        }
    }

    /// Whether `play` was invoked.
    pub fn was_played(&self) -> bool {
        self.played.get()
    }

    /// Whether `progress_start` was invoked.
    pub fn was_held(&self) -> bool {
        self.held.get()
    }
}

impl Animation for ManualAnimation {
    fn play(&self) {
        self.played.set(true);
        if let Some(step) = self.step_on_play.get() {
            self.finish(step);
        }
    }

    fn progress_start(&self, _force_linear: bool) {
        self.held.set(true);
    }

    fn when_finished(&self) -> LocalBoxFuture<'static, f64> {
        match self.receiver.borrow_mut().take() {
            Some(receiver) => {
                let final_step = self.final_step.clone();
                Box::pin(async move {
                    // A dropped sender counts as an abort.
                    let step = receiver.await.unwrap_or(0.0);
                    final_step.set(Some(step));
                    step
                })
            }
            None => {
                tracing::warn!("animation completion awaited more than once");
                let step = self.final_step.get().unwrap_or(0.0);
                Box::pin(std::future::ready(step))
            }
        }
    }

    fn destroy(&self) {
        self.destroyed.set(true);
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_completing_finishes_on_play() {
        let animation = ManualAnimation::auto_completing();
        assert!(!animation.was_played());

        animation.play();
        assert!(animation.was_played());
        assert_eq!(animation.when_finished().await, COMPLETE_STEP);
    }

    #[tokio::test]
    async fn test_manual_finish_reports_partial_step() {
        let animation = ManualAnimation::new();
        animation.progress_start(true);
        assert!(animation.was_held());
        assert!(!animation.was_played());

        animation.finish(0.4);
        assert_eq!(animation.when_finished().await, 0.4);
    }

    #[tokio::test]
    async fn test_first_notification_wins() {
        let animation = ManualAnimation::new();
        animation.finish(0.25);
        animation.finish(1.0);
        assert_eq!(animation.when_finished().await, 0.25);
    }

    #[tokio::test]
    async fn test_second_await_resolves_from_cache() {
        let animation = ManualAnimation::completing_at(0.7);
        animation.play();
        assert_eq!(animation.when_finished().await, 0.7);
        assert_eq!(animation.when_finished().await, 0.7);
    }

    #[test]
    fn test_destroy_flag() {
        let animation = ManualAnimation::new();
        assert!(!animation.is_destroyed());
        animation.destroy();
        assert!(animation.is_destroyed());
    }
}
