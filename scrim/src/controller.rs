//! Overlay lifecycle controller.
//!
//! Owns the two visual layers of one overlay instance and guarantees
//! exactly-once, animation-aware teardown. Close splits into a synchronous
//! phase (apply leave directives, detach unanimated layers, compute the
//! wait policy) and a deferred phase resumed by animation-finished events.

use std::sync::{Arc, Mutex};

use crate::animation::{wait_policy, AnimationSpec, WaitPolicy};
use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::mount::{InstanceHandle, LayerKind, MountHost};
use crate::signal::{join_signals, AnimationEventHub, CompletionSignal};

/// Teardown progress for one overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Both layers attached; enter animations (if any) applied at mount.
    Mounted,
    /// Close invoked; waiting on exit-animation completion signal(s).
    Closing,
    /// Subtree removed. Terminal.
    Detached,
}

/// Result of the synchronous phase of close.
pub(crate) enum CloseAction<Id> {
    /// Already closing or fully detached; nothing to do.
    AlreadyClosing,
    /// Both layers were unanimated; the subtree is already gone.
    Immediate,
    /// The deferred phase must await these signal(s).
    Deferred(PendingTeardown<Id>),
}

/// The completion signal(s) the deferred teardown phase awaits.
pub(crate) enum PendingTeardown<Id> {
    One(CompletionSignal<Id>),
    Barrier(CompletionSignal<Id>, CompletionSignal<Id>),
}

impl<Id> PendingTeardown<Id> {
    /// Wait for the expected signal(s).
    ///
    /// A lost signal (sender dropped before firing) is logged and treated
    /// as completed, so teardown proceeds instead of hanging forever.
    pub(crate) async fn wait(self) {
        let outcome = match self {
            Self::One(signal) => signal.wait().await.map(|_| ()),
            Self::Barrier(a, b) => join_signals(a, b).await,
        };
        if outcome.is_err() {
            log::warn!("exit animation completion signal lost; forcing detach");
        }
    }
}

/// Drives one overlay instance from mount to detach.
pub struct LifecycleController<H: MountHost> {
    host: Arc<Mutex<H>>,
    hub: AnimationEventHub<H::NodeId>,
    handle: InstanceHandle<H::NodeId>,
    dialog_leave: AnimationSpec,
    backdrop_leave: AnimationSpec,
    phase: Phase,
}

impl<H: MountHost> LifecycleController<H> {
    /// Attach the overlay subtree and apply the configured size and
    /// enter-animation directives to the layer roots.
    pub(crate) fn mount(
        host: Arc<Mutex<H>>,
        hub: AnimationEventHub<H::NodeId>,
        content: H::Node,
        config: &OverlayConfig,
    ) -> Result<Self, OverlayError> {
        let handle = {
            let mut tree = host.lock().unwrap();
            let handle = tree.attach(content)?;

            let size = &config.size;
            let dialog = handle.dialog;
            tree.set_style(dialog, "min-width", size.min_width.as_deref().unwrap_or("auto"));
            tree.set_style(dialog, "width", size.width.as_deref().unwrap_or("auto"));
            tree.set_style(dialog, "max-width", size.max_width.as_deref().unwrap_or("auto"));
            tree.set_style(dialog, "min-height", size.min_height.as_deref().unwrap_or("auto"));
            tree.set_style(dialog, "height", size.height.as_deref().unwrap_or("auto"));
            tree.set_style(dialog, "max-height", size.max_height.as_deref().unwrap_or("auto"));

            // Enter animations play on the render engine's own clock; the
            // controller never waits on them.
            if let Some(enter) = config.animations.modal.enter.as_deref() {
                tree.set_style(dialog, "animation", enter);
            }
            if let Some(enter) = config.animations.overlay.enter.as_deref() {
                tree.set_style(handle.backdrop, "animation", enter);
            }
            handle
        };

        let dialog_leave = config
            .animations
            .modal
            .leave
            .as_deref()
            .map(AnimationSpec::parse)
            .unwrap_or_default();
        let backdrop_leave = config
            .animations
            .overlay
            .leave
            .as_deref()
            .map(AnimationSpec::parse)
            .unwrap_or_default();

        log::debug!("overlay mounted: {handle:?}");
        Ok(Self {
            host,
            hub,
            handle,
            dialog_leave,
            backdrop_leave,
            phase: Phase::Mounted,
        })
    }

    /// References to the mounted subtree.
    pub(crate) fn handle(&self) -> InstanceHandle<H::NodeId> {
        self.handle
    }

    /// Synchronous phase of close.
    ///
    /// Applies leave directives to animated layers, detaches unanimated
    /// ones immediately, and computes which completion signals the deferred
    /// phase must await. Idempotent: a second call while Closing or after
    /// detachment does nothing.
    pub(crate) fn begin_close(&mut self) -> CloseAction<H::NodeId> {
        if self.phase != Phase::Mounted {
            log::debug!("close() while already {:?}; ignoring", self.phase);
            return CloseAction::AlreadyClosing;
        }
        self.phase = Phase::Closing;

        {
            let mut tree = self.host.lock().unwrap();
            if self.dialog_leave.is_animated() {
                tree.set_style(self.handle.dialog, "animation", self.dialog_leave.declaration());
            }
            if self.backdrop_leave.is_animated() {
                tree.set_style(
                    self.handle.backdrop,
                    "animation",
                    self.backdrop_leave.declaration(),
                );
            }
            // A layer with no leave declaration goes straight to detached.
            match (self.dialog_leave.is_animated(), self.backdrop_leave.is_animated()) {
                (true, false) => tree.detach(self.handle.backdrop),
                (false, true) => tree.detach(self.handle.dialog),
                _ => {}
            }
        }

        match wait_policy(&self.dialog_leave, &self.backdrop_leave) {
            WaitPolicy::Immediate => {
                self.finish_close();
                CloseAction::Immediate
            }
            WaitPolicy::Dialog => {
                CloseAction::Deferred(PendingTeardown::One(self.subscribe(LayerKind::Dialog)))
            }
            WaitPolicy::Backdrop => {
                CloseAction::Deferred(PendingTeardown::One(self.subscribe(LayerKind::Backdrop)))
            }
            WaitPolicy::Both => CloseAction::Deferred(PendingTeardown::Barrier(
                self.subscribe(LayerKind::Dialog),
                self.subscribe(LayerKind::Backdrop),
            )),
        }
    }

    /// Remove the whole subtree and drop any remaining subscriptions.
    /// Exactly once: later calls are no-ops.
    pub(crate) fn finish_close(&mut self) {
        if self.phase == Phase::Detached {
            return;
        }
        self.host.lock().unwrap().detach(self.handle.root);
        self.hub.clear(self.handle.dialog);
        self.hub.clear(self.handle.backdrop);
        self.phase = Phase::Detached;
        log::debug!("overlay subtree detached");
    }

    fn subscribe(&self, layer: LayerKind) -> CompletionSignal<H::NodeId> {
        let (node, spec) = match layer {
            LayerKind::Dialog => (self.handle.dialog, &self.dialog_leave),
            LayerKind::Backdrop => (self.handle.backdrop, &self.backdrop_leave),
        };
        self.hub.subscribe(node, spec.name().map(str::to_string))
    }
}
