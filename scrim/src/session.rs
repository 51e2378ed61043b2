//! Overlay session manager.
//!
//! Single source of truth for "is an overlay currently open, and what are
//! its parameters". One slot: a second `open` is rejected until the first
//! overlay has fully closed, including a teardown still in flight.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;

use crate::config::OverlayConfig;
use crate::content::ContentSource;
use crate::controller::{CloseAction, LifecycleController};
use crate::error::OverlayError;
use crate::mount::{InstanceHandle, MountHost};
use crate::signal::AnimationEventHub;

struct Slot<H: MountHost> {
    config: Option<OverlayConfig>,
    active: Option<Arc<Mutex<LifecycleController<H>>>>,
}

/// Record of the currently open overlay, if any.
///
/// Explicitly owned and clonable rather than ambient global state, so
/// hosts and tests can instantiate isolated sessions. All clones share the
/// same slot.
pub struct OverlaySession<H: MountHost> {
    host: Arc<Mutex<H>>,
    hub: AnimationEventHub<H::NodeId>,
    slot: Arc<Mutex<Slot<H>>>,
    closed: Arc<Notify>,
    teardown_timeout: Option<Duration>,
}

impl<H: MountHost> Clone for OverlaySession<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            hub: self.hub.clone(),
            slot: Arc::clone(&self.slot),
            closed: Arc::clone(&self.closed),
            teardown_timeout: self.teardown_timeout,
        }
    }
}

impl<H: MountHost> OverlaySession<H> {
    /// Create a session over the given mount host.
    pub fn new(host: H) -> Self {
        Self {
            host: Arc::new(Mutex::new(host)),
            hub: AnimationEventHub::new(),
            slot: Arc::new(Mutex::new(Slot {
                config: None,
                active: None,
            })),
            closed: Arc::new(Notify::new()),
            teardown_timeout: None,
        }
    }

    /// Bound the deferred teardown phase: if the expected completion
    /// signal(s) have not fired within `limit`, detach anyway.
    pub fn with_teardown_timeout(mut self, limit: Duration) -> Self {
        self.teardown_timeout = Some(limit);
        self
    }

    /// The hub the render engine reports animation completion through.
    pub fn animation_events(&self) -> AnimationEventHub<H::NodeId> {
        self.hub.clone()
    }

    /// Shared handle to the mount host.
    pub fn host(&self) -> Arc<Mutex<H>> {
        Arc::clone(&self.host)
    }

    /// Whether an overlay is open, including one still closing.
    pub fn is_open(&self) -> bool {
        self.slot.lock().unwrap().active.is_some()
    }

    /// Snapshot of the active overlay's configuration.
    pub fn config(&self) -> Option<OverlayConfig> {
        self.slot.lock().unwrap().config.clone()
    }

    /// References to the mounted overlay subtree, for the render engine.
    pub fn instance(&self) -> Option<InstanceHandle<H::NodeId>> {
        self.slot
            .lock()
            .unwrap()
            .active
            .as_ref()
            .map(|controller| controller.lock().unwrap().handle())
    }

    /// Open an overlay: materialize `content`, attach the subtree, apply
    /// the configured size and enter-animation directives, store `config`.
    ///
    /// The overlay is visible in the host's visual tree as soon as this
    /// returns; entry animations (if declared) start playing immediately
    /// on the render engine's clock.
    pub fn open(
        &self,
        content: ContentSource<H::Node>,
        config: OverlayConfig,
    ) -> Result<(), OverlayError> {
        let mut slot = self.slot.lock().unwrap();
        if slot.active.is_some() {
            return Err(OverlayError::AlreadyOpen);
        }
        let controller = LifecycleController::mount(
            Arc::clone(&self.host),
            self.hub.clone(),
            content.materialize(),
            &config,
        )?;
        slot.config = Some(config);
        slot.active = Some(Arc::new(Mutex::new(controller)));
        log::debug!("overlay session opened");
        Ok(())
    }

    /// Initiate teardown of the active overlay.
    ///
    /// A no-op when nothing is open or a close is already in flight. When
    /// neither layer has a leave animation, both layers are detached and
    /// the session cleared before this returns; otherwise removal is
    /// deferred until the expected completion signal(s) fire, bounded by
    /// the optional teardown timeout.
    pub fn close(&self) {
        let controller = {
            let slot = self.slot.lock().unwrap();
            match &slot.active {
                Some(active) => Arc::clone(active),
                None => {
                    log::debug!("close() with no active overlay; ignoring");
                    return;
                }
            }
        };

        let action = controller.lock().unwrap().begin_close();
        match action {
            CloseAction::AlreadyClosing => {}
            CloseAction::Immediate => self.clear_slot(),
            CloseAction::Deferred(pending) => {
                let session = self.clone();
                let limit = self.teardown_timeout;
                tokio::spawn(async move {
                    match limit {
                        Some(limit) => {
                            if tokio::time::timeout(limit, pending.wait()).await.is_err() {
                                log::warn!(
                                    "exit animation incomplete after {limit:?}; forcing detach"
                                );
                            }
                        }
                        None => pending.wait().await,
                    }
                    controller.lock().unwrap().finish_close();
                    session.clear_slot();
                });
            }
        }
    }

    /// Resolve once no overlay is open (immediately if none is).
    pub async fn closed(&self) {
        loop {
            let notified = self.closed.notified();
            tokio::pin!(notified);
            // Register for `notify_waiters` before the open check, so a
            // teardown finishing on another worker in between is not missed.
            notified.as_mut().enable();
            if !self.is_open() {
                return;
            }
            notified.await;
        }
    }

    fn clear_slot(&self) {
        let mut slot = self.slot.lock().unwrap();
        slot.config = None;
        slot.active = None;
        drop(slot);
        self.closed.notify_waiters();
        log::debug!("overlay session cleared");
    }
}
