/*!
# Graph Operations

Traits describing what a graph representation can do. The isomorphism search only ever talks to
graphs through these traits, so any representation implementing them (including user-provided ones)
can be matched against any other.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, node::*};

/// Type-level marker for the orientation of the edges of a graph
pub trait GraphDir {
    /// *true* if `Edge(u, v)` and `Edge(v, u)` are distinct
    const IS_DIRECTED: bool;
}

/// Edges have an orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;

/// Edges have no orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl GraphDir for Directed {
    const IS_DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const IS_DIRECTED: bool = false;
}

/// Associates a graph with its edge orientation
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::Dir::IS_DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all vertices.
    /// In contrast to `self.vertices()`, the range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// Parallel edges yield the same neighbor multiple times.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, this should be equivalent to `out_neighbors_of`
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of parallel edges `(u, v)`.
    /// ** Panics if `u >= n` **
    fn edge_multiplicity(&self, u: Node, v: Node) -> NumEdges {
        self.neighbors_of(u).filter(|&w| w == v).count() as NumEdges
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over outgoing edges of a given vertex in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn ordered_edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges_of(u, only_normalized).collect_vec();
        edges.sort();
        edges.into_iter()
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.ordered_edges_of(u, only_normalized))
    }
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

/// Adjacency getters that distinguish the direction of an edge.
///
/// Undirected graphs implement this trait as well: there, every neighbor is both an in- and an
/// out-neighbor, so `in_neighbors_of` and `out_neighbors_of` coincide.
pub trait DirectedAdjacencyList: AdjacencyList {
    propagate!(out_neighbors_of => neighbors_of(u : Node) -> impl Iterator<Item = Node> + '_);
    propagate!(out_degree_of => degree_of(u : Node) -> NumNodes);

    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the out-degree and in-degree of a given vertex
    /// ** Panics if `u >= n` **
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    /// Returns an iterator over incoming edges `(v, u)` of a given vertex.
    /// ** Panics if `u >= n` **
    fn in_edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.in_neighbors_of(u).map(move |v| Edge(v, u))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v), "edge ({u},{v}) is already present");
    }

    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes the directed edge *(u,v)* from the graph. I.e., the edge FROM u TO v.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v), "edge ({u},{v}) is not present");
    }

    /// Removes one copy of the edge *(u,v)* from the graph.
    /// If the edge was removed, returns *true* and *false* otherwise.
    /// ** Panics if u, v >= n **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;
}

/// Insertion of parallel edges, turning a representation into a multigraph.
pub trait GraphMultiEdgeEditing: GraphEdgeEditing {
    /// Adds the edge `(u, v)` without checking whether it already exists.
    /// ** Panics if `u >= n || v >= n` **
    fn add_multi_edge(&mut self, u: Node, v: Node);

    /// Adds all edges in the collection, keeping duplicates as parallel edges
    fn add_multi_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_multi_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and a collection of Edges.
    /// ** Panics if an edge is contained twice **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
