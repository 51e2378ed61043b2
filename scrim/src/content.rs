//! Content sources for the dialog layer.

/// An instantiable content definition.
///
/// Implemented automatically for closures returning a node, so hosts can
/// write `ContentSource::component(|| build_settings_panel())`.
pub trait ContentDefinition: Send {
    /// The visual node type this definition produces.
    type Node;

    /// Build a fresh root node for the overlay's dialog layer.
    fn instantiate(&self) -> Self::Node;
}

impl<N, F> ContentDefinition for F
where
    F: Fn() -> N + Send,
{
    type Node = N;

    fn instantiate(&self) -> N {
        self()
    }
}

/// Where the overlay's dialog content comes from.
///
/// A tagged variant instead of runtime type inspection: either a pre-built
/// view fragment, or a standalone definition instantiated fresh at open
/// time. Both shapes reduce to a single root node via [`materialize`].
///
/// [`materialize`]: ContentSource::materialize
pub enum ContentSource<N> {
    /// A pre-built view fragment projected as-is.
    Template {
        /// Root node of the fragment.
        fragment: N,
    },
    /// A standalone content definition instantiated at open time.
    Component(Box<dyn ContentDefinition<Node = N>>),
}

impl<N> ContentSource<N> {
    /// Content from an existing view fragment.
    pub fn template(fragment: N) -> Self {
        Self::Template { fragment }
    }

    /// Content from an instantiable definition.
    pub fn component(definition: impl ContentDefinition<Node = N> + 'static) -> Self {
        Self::Component(Box::new(definition))
    }

    /// Produce the root visual node to project inside the dialog layer.
    pub fn materialize(self) -> N {
        match self {
            Self::Template { fragment } => fragment,
            Self::Component(definition) => definition.instantiate(),
        }
    }
}
