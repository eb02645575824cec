use std::{cell::OnceCell, cmp::Reverse};

use itertools::Itertools;

use super::*;

/// Graphs the isomorphism search can operate on.
///
/// Automatically implemented for every graph providing directed adjacency, adjacency tests and a
/// [`GraphType`]. Undirected graphs qualify as they report identical in- and out-neighborhoods.
pub trait MatchableGraph: DirectedAdjacencyList + AdjacencyTest + GraphType {}

impl<G> MatchableGraph for G where G: DirectedAdjacencyList + AdjacencyTest + GraphType {}

/// Order in which the nodes of a graph are assigned search indices.
///
/// The order only influences the running time of the search and the order in which mappings are
/// emitted, never the set of mappings itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VertexOrder {
    /// Index `i` is node `i`.
    #[default]
    Natural,
    /// Nodes with a higher total degree come first, ties are broken by node id.
    DegreeDescending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdjacencyView {
    Directed,
    Undirected,
}

/// A read-only view of a graph that numbers its nodes by search index.
///
/// Index `i` refers to node `vertex_of(i)`. Adjacency is exposed in index space through slices
/// that are computed on first access and cached afterwards. Parallel edges repeat their endpoint
/// once per edge.
pub struct OrderedGraph<'a, G> {
    graph: &'a G,
    view: AdjacencyView,
    order: Vec<Node>,
    rank: Vec<Node>,
    out_cache: Vec<OnceCell<Box<[Node]>>>,
    in_cache: Vec<OnceCell<Box<[Node]>>>,
}

impl<'a, G> OrderedGraph<'a, G>
where
    G: MatchableGraph,
{
    /// Builds the view of `graph` with indices assigned according to `order`.
    pub fn new(graph: &'a G, order: VertexOrder) -> Self {
        let n = graph.len();

        let order: Vec<Node> = match order {
            VertexOrder::Natural => graph.vertices_range().collect(),
            VertexOrder::DegreeDescending => graph
                .vertices_range()
                .sorted_by_key(|&u| (Reverse(graph.total_degree_of(u)), u))
                .collect(),
        };

        let mut rank = vec![INVALID_NODE; n];
        for (i, &u) in order.iter().enumerate() {
            rank[u as usize] = i as Node;
        }

        let view = if G::is_directed() {
            AdjacencyView::Directed
        } else {
            AdjacencyView::Undirected
        };

        let in_cache = match view {
            AdjacencyView::Directed => (0..n).map(|_| OnceCell::new()).collect(),
            AdjacencyView::Undirected => Vec::new(),
        };

        Self {
            graph,
            view,
            order,
            rank,
            out_cache: (0..n).map(|_| OnceCell::new()).collect(),
            in_cache,
        }
    }

    /// Returns the underlying graph
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.order.len() as NumNodes
    }

    pub fn is_directed(&self) -> bool {
        self.view == AdjacencyView::Directed
    }

    /// Returns the node with search index `i`.
    /// ** Panics if `i >= n` **
    #[inline]
    pub fn vertex_of(&self, i: Node) -> Node {
        self.order[i as usize]
    }

    /// Returns the search index of node `u`.
    /// ** Panics if `u >= n` **
    #[inline]
    pub fn index_of(&self, u: Node) -> Node {
        self.rank[u as usize]
    }

    /// Returns the indices `j` of all edges `(i, j)`.
    /// ** Panics if `i >= n` **
    pub fn out_neighbors(&self, i: Node) -> &[Node] {
        self.out_cache[i as usize].get_or_init(|| {
            self.graph
                .out_neighbors_of(self.vertex_of(i))
                .map(|v| self.index_of(v))
                .collect()
        })
    }

    /// Returns the indices `j` of all edges `(j, i)`.
    /// For undirected graphs this is the same slice as [`OrderedGraph::out_neighbors`].
    /// ** Panics if `i >= n` **
    pub fn in_neighbors(&self, i: Node) -> &[Node] {
        match self.view {
            AdjacencyView::Undirected => self.out_neighbors(i),
            AdjacencyView::Directed => self.in_cache[i as usize].get_or_init(|| {
                self.graph
                    .in_neighbors_of(self.vertex_of(i))
                    .map(|v| self.index_of(v))
                    .collect()
            }),
        }
    }

    /// Returns the number of parallel edges `(i, j)`.
    /// ** Panics if `i >= n` **
    pub fn edge_multiplicity(&self, i: Node, j: Node) -> NumEdges {
        self.out_neighbors(i).iter().filter(|&&x| x == j).count() as NumEdges
    }

    /// Returns *true* if the edge `(i, j)` exists.
    /// ** Panics if `i >= n || j >= n` **
    pub fn has_edge(&self, i: Node, j: Node) -> bool {
        self.graph.has_edge(self.vertex_of(i), self.vertex_of(j))
    }

    /// Translates the index pair `(i, j)` into an edge between the corresponding nodes.
    /// Existence of the edge is not checked.
    /// ** Panics if `i >= n || j >= n` **
    #[inline]
    pub fn edge(&self, i: Node, j: Node) -> Edge {
        Edge(self.vertex_of(i), self.vertex_of(j))
    }
}
