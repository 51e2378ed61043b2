//! Overlay error types.

use thiserror::Error;

use crate::mount::LayerKind;

/// Errors surfaced by the overlay session and lifecycle controller.
///
/// The taxonomy is deliberately narrow: closing with no active overlay is
/// a benign no-op, not an error, and absent optional config fields silently
/// mean "auto"/"none".
#[derive(Debug, Clone, Error)]
pub enum OverlayError {
    /// A second `open` was attempted while an overlay is active (including
    /// one whose teardown is still in flight).
    #[error("an overlay is already open; close it before opening another")]
    AlreadyOpen,

    /// The mount host did not produce a root node for the given layer.
    #[error("missing {0} layer root node")]
    MissingLayer(LayerKind),

    /// The mount host rejected the overlay subtree.
    #[error("overlay mount failed: {0}")]
    Mount(String),
}
