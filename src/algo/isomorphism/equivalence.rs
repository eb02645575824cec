use super::*;

/// Decides whether a node of the host graph may be matched to a node of the pattern graph.
///
/// Implemented for every closure `Fn(Node, Node) -> bool` which receives
/// `(host node, pattern node)`.
pub trait NodeEquivalence {
    fn nodes_equivalent(&self, host: Node, pattern: Node) -> bool;
}

/// Decides whether an edge of the host graph may be matched to an edge of the pattern graph.
///
/// Implemented for every closure `Fn(Edge, Edge) -> bool` which receives
/// `(host edge, pattern edge)`. Both edges are oriented consistently, i.e. if the pattern edge is
/// `Edge(a, b)` then the host edge is `Edge(f(a), f(b))` for the mapping `f` under construction.
/// For undirected graphs the orientation itself is arbitrary.
pub trait EdgeEquivalence {
    fn edges_equivalent(&self, host: Edge, pattern: Edge) -> bool;
}

/// Treats all nodes and all edges as equivalent, i.e. matches purely on structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysEquivalent;

impl NodeEquivalence for AlwaysEquivalent {
    #[inline]
    fn nodes_equivalent(&self, _: Node, _: Node) -> bool {
        true
    }
}

impl EdgeEquivalence for AlwaysEquivalent {
    #[inline]
    fn edges_equivalent(&self, _: Edge, _: Edge) -> bool {
        true
    }
}

impl<F> NodeEquivalence for F
where
    F: Fn(Node, Node) -> bool,
{
    #[inline]
    fn nodes_equivalent(&self, host: Node, pattern: Node) -> bool {
        self(host, pattern)
    }
}

impl<F> EdgeEquivalence for F
where
    F: Fn(Edge, Edge) -> bool,
{
    #[inline]
    fn edges_equivalent(&self, host: Edge, pattern: Edge) -> bool {
        self(host, pattern)
    }
}
