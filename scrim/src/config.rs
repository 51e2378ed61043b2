//! Overlay configuration types.
//!
//! An `OverlayConfig` is supplied per `open` call and is immutable for the
//! lifetime of that overlay. Absent fields mean "auto" for sizing and
//! "no animation" for transitions, so hosts only declare what they need.

use serde::{Deserialize, Serialize};

/// Per-invocation overlay configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Box-dimension hints for the dialog layer.
    pub size: SizeHints,
    /// Enter/leave animation declarations per layer.
    pub animations: AnimationOptions,
}

impl OverlayConfig {
    /// Create an empty config (auto sizing, no animations).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialog layer's size hints.
    pub fn size(mut self, size: SizeHints) -> Self {
        self.size = size;
        self
    }

    /// Set the dialog layer's enter animation declaration.
    pub fn modal_enter(mut self, declaration: impl Into<String>) -> Self {
        self.animations.modal.enter = Some(declaration.into());
        self
    }

    /// Set the dialog layer's leave animation declaration.
    pub fn modal_leave(mut self, declaration: impl Into<String>) -> Self {
        self.animations.modal.leave = Some(declaration.into());
        self
    }

    /// Set the backdrop layer's enter animation declaration.
    pub fn overlay_enter(mut self, declaration: impl Into<String>) -> Self {
        self.animations.overlay.enter = Some(declaration.into());
        self
    }

    /// Set the backdrop layer's leave animation declaration.
    pub fn overlay_leave(mut self, declaration: impl Into<String>) -> Self {
        self.animations.overlay.leave = Some(declaration.into());
        self
    }
}

/// Optional box-dimension hints for the dialog layer.
///
/// Values are free-form dimension strings understood by the mount host;
/// absent fields are written as `"auto"` (layout-determined).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeHints {
    pub min_width: Option<String>,
    pub width: Option<String>,
    pub max_width: Option<String>,
    pub min_height: Option<String>,
    pub height: Option<String>,
    pub max_height: Option<String>,
}

impl SizeHints {
    /// Create empty hints (everything "auto").
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_width(mut self, value: impl Into<String>) -> Self {
        self.min_width = Some(value.into());
        self
    }

    pub fn width(mut self, value: impl Into<String>) -> Self {
        self.width = Some(value.into());
        self
    }

    pub fn max_width(mut self, value: impl Into<String>) -> Self {
        self.max_width = Some(value.into());
        self
    }

    pub fn min_height(mut self, value: impl Into<String>) -> Self {
        self.min_height = Some(value.into());
        self
    }

    pub fn height(mut self, value: impl Into<String>) -> Self {
        self.height = Some(value.into());
        self
    }

    pub fn max_height(mut self, value: impl Into<String>) -> Self {
        self.max_height = Some(value.into());
        self
    }
}

/// Animation declarations for both layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// Dialog layer animations.
    pub modal: LayerAnimations,
    /// Backdrop layer animations.
    pub overlay: LayerAnimations,
}

/// Enter/leave animation declarations for one layer.
///
/// Declarations are free-form shorthand strings (name, duration, easing,
/// fill-mode). A missing field means that transition is instantaneous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerAnimations {
    pub enter: Option<String>,
    pub leave: Option<String>,
}
