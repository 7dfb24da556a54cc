//! Deep readiness: waiting for an element subtree to finish mounting.
//!
//! The traversal is an explicit worklist rather than recursion, so deep
//! trees cannot exhaust the stack. Per node, one capability check decides
//! what happens:
//!
//! - a ready hook is awaited and the node's subtree is not traversed (the
//!   element vouches for its descendants)
//! - an upgraded marker without a hook waits one scheduling tick, subtree
//!   likewise vouched for
//! - neither: the node is ready now and its children are enqueued
//!
//! Collected waits are awaited concurrently; an empty tree resolves
//! immediately.

use futures::future::{LocalBoxFuture, join_all};

use crate::element::{Readiness, ViewHandle};
use crate::frame;

/// Resolve once the subtree rooted at `root` is safe to measure and animate.
pub async fn deep_ready(root: &ViewHandle) {
    let mut queue = vec![root.clone()];
    let mut waits: Vec<LocalBoxFuture<'static, ()>> = Vec::new();

    while let Some(el) = queue.pop() {
        match el.readiness() {
            Readiness::Hook(hook) => waits.push(hook()),
            Readiness::Upgraded => waits.push(Box::pin(frame::tick())),
            Readiness::Immediate => queue.extend(el.children()),
        }
    }

    join_all(waits).await;
}
