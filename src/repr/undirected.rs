use crate::{repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph representation.
///
/// Every edge `{u, v}` with `u != v` is stored in the neighborhoods of both endpoints, a self-loop
/// `{u, u}` is stored once in the neighborhood of `u`.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<nbs : Nbs> => nbs, Undirected);

impl<Nbs: Neighborhood> DirectedAdjacencyList for UndirectedGraph<Nbs> {
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u)
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            if u != v {
                assert!(self.nbs[v as usize].try_remove_neighbor(u));
            }
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl<Nbs: Neighborhood> GraphMultiEdgeEditing for UndirectedGraph<Nbs> {
    fn add_multi_edge(&mut self, u: Node, v: Node) {
        self.nbs[u as usize].add_neighbor(v);
        if u != v {
            self.nbs[v as usize].add_neighbor(u);
        }
        self.num_edges += 1;
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array_undir,
    AdjArrayUndir,
    true,
    (
        GraphNew,
        AdjacencyList,
        GraphEdgeEditing,
        GraphMultiEdgeEditing
    )
);

test_graph_ops!(
    test_sparse_adj_array_undir,
    SparseAdjArrayUndir,
    true,
    (
        GraphNew,
        AdjacencyList,
        GraphEdgeEditing,
        GraphMultiEdgeEditing
    )
);
