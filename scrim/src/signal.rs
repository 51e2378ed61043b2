//! One-shot completion signals for layer exit animations.
//!
//! The render engine drives an [`AnimationEventHub`] by calling
//! [`AnimationEventHub::notify`] whenever an animation finishes on a node.
//! The lifecycle controller subscribes a [`CompletionSignal`] per awaited
//! layer; each signal fires exactly once, filtered to its node and
//! animation name so repeated or foreign firings (an element may run
//! nested animations) are ignored.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

/// An animation-finished event for a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationEnd<Id> {
    /// The node the animation ran on.
    pub node: Id,
    /// The finished animation's name.
    pub animation: String,
}

struct Subscriber<Id> {
    /// Expected animation name; `None` matches any animation on the node.
    filter: Option<String>,
    tx: oneshot::Sender<AnimationEnd<Id>>,
}

/// Clonable registry routing animation-finished events to subscribers.
pub struct AnimationEventHub<Id> {
    subscribers: Arc<Mutex<HashMap<Id, Vec<Subscriber<Id>>>>>,
}

impl<Id> Clone for AnimationEventHub<Id> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<Id: Copy + Eq + Hash + fmt::Debug> AnimationEventHub<Id> {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Deliver an animation-finished event for `node`.
    ///
    /// Consumes every matching subscription; repeated firings find no
    /// subscriber left and are ignored, and firings for a different node or
    /// animation name are never delivered.
    pub fn notify(&self, node: Id, animation: &str) {
        let mut map = self.subscribers.lock().unwrap();
        let Some(subs) = map.get_mut(&node) else {
            log::debug!("animation end for {node:?} with no subscribers; ignoring");
            return;
        };
        let mut kept = Vec::new();
        for sub in subs.drain(..) {
            let matches = sub.filter.as_deref().map_or(true, |name| name == animation);
            if matches {
                let _ = sub.tx.send(AnimationEnd {
                    node,
                    animation: animation.to_string(),
                });
            } else {
                kept.push(sub);
            }
        }
        *subs = kept;
        if subs.is_empty() {
            map.remove(&node);
        }
    }

    /// Drop all pending subscriptions for a node.
    ///
    /// For render engines that remove a node outside the overlay's control:
    /// pending waits on it resolve with [`SignalLost`] instead of hanging.
    pub fn clear(&self, node: Id) {
        self.subscribers.lock().unwrap().remove(&node);
    }

    pub(crate) fn subscribe(&self, node: Id, filter: Option<String>) -> CompletionSignal<Id> {
        let (tx, rx) = oneshot::channel();
        self.subscribers
            .lock()
            .unwrap()
            .entry(node)
            .or_default()
            .push(Subscriber { filter, tx });
        CompletionSignal { rx }
    }
}

impl<Id: Copy + Eq + Hash + fmt::Debug> Default for AnimationEventHub<Id> {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot notification that a layer's exit animation has finished.
pub struct CompletionSignal<Id> {
    rx: oneshot::Receiver<AnimationEnd<Id>>,
}

impl<Id> CompletionSignal<Id> {
    /// Wait for the signal to fire.
    pub async fn wait(self) -> Result<AnimationEnd<Id>, SignalLost> {
        self.rx.await.map_err(|_| SignalLost)
    }
}

/// The sender side of a completion signal was dropped before firing, e.g.
/// because the watched node was removed by external code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("completion signal dropped before the animation finished")]
pub struct SignalLost;

/// Barrier over a pair of completion signals: resolves only after both
/// have fired.
pub async fn join_signals<Id>(
    a: CompletionSignal<Id>,
    b: CompletionSignal<Id>,
) -> Result<(), SignalLost> {
    let (first, second) = futures::future::join(a.wait(), b.wait()).await;
    first.and(second).map(|_| ())
}
