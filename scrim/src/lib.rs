pub mod animation;
pub mod config;
pub mod content;
pub mod controller;
pub mod dismiss;
pub mod error;
pub mod memory;
pub mod mount;
pub mod session;
pub mod signal;

pub use animation::{animation_name, leave_duration, wait_policy, AnimationSpec, WaitPolicy};
pub use config::{AnimationOptions, LayerAnimations, OverlayConfig, SizeHints};
pub use content::{ContentDefinition, ContentSource};
pub use dismiss::dismiss_on_escape;
pub use error::OverlayError;
pub use memory::MemoryHost;
pub use mount::{InstanceHandle, LayerKind, MountHost};
pub use session::OverlaySession;
pub use signal::{join_signals, AnimationEnd, AnimationEventHub, CompletionSignal, SignalLost};
