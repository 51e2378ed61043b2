//! Visual mounting collaborator interface.
//!
//! The lifecycle controller never manages the visual tree itself; it calls
//! these primitives on whatever host the session was built over. Style and
//! animation directives are written as plain key/value properties onto the
//! layer root nodes, so no external stylesheet coupling is required.

use std::fmt;
use std::hash::Hash;

use crate::error::OverlayError;

/// One of the two independently animated elements composing an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// The dialog box holding the projected content.
    Dialog,
    /// The backdrop behind the dialog.
    Backdrop,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Dialog => write!(f, "dialog"),
            LayerKind::Backdrop => write!(f, "backdrop"),
        }
    }
}

/// References to a mounted overlay subtree.
///
/// Owned by the session manager; the lifecycle controller borrows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceHandle<Id> {
    /// Root of the whole overlay subtree.
    pub root: Id,
    /// Root node of the dialog layer.
    pub dialog: Id,
    /// Root node of the backdrop layer.
    pub backdrop: Id,
}

/// Visual mounting collaborator.
///
/// Implementations own a visual tree and expose attach/detach primitives
/// plus key/value style application. [`crate::memory::MemoryHost`] is an
/// in-memory reference implementation; real hosts adapt their own tree.
pub trait MountHost: Send + 'static {
    /// The root visual node type produced by a content source.
    type Node: Send + 'static;
    /// Opaque reference to an attached node.
    type NodeId: Copy + Eq + Hash + fmt::Debug + Send + 'static;

    /// Attach a fresh overlay subtree (backdrop layer plus dialog layer
    /// with `content` projected inside) and return its layer roots.
    ///
    /// A host that cannot produce one of the layer roots must return
    /// [`OverlayError::MissingLayer`] rather than a partial handle.
    fn attach(&mut self, content: Self::Node) -> Result<InstanceHandle<Self::NodeId>, OverlayError>;

    /// Remove a node (and its descendants) from the visual tree.
    fn detach(&mut self, node: Self::NodeId);

    /// Write a style property onto a node.
    fn set_style(&mut self, node: Self::NodeId, property: &str, value: &str);
}
