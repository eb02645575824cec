/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraphIn`] with two [`Neighborhood`]
types, one for outgoing and one for incoming adjacency.

## Provided Representations

- [`AdjArrayIn`]: adjacency arrays for outgoing and incoming neighbors.
- [`SparseAdjArrayIn`]: sparse adjacency arrays using inline small vectors.
*/

use crate::{
    repr::neighborhood::macros::{impl_common_graph_ops, impl_try_add_edge},
    testing::test_graph_ops,
};

use super::*;

/// A directed graph storing **both outgoing and incoming neighborhoods**.
///
/// - Outgoing adjacency is stored in `out_nbs`.
/// - Incoming adjacency is stored in `in_nbs`.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
/// - `InNbs`: [`Neighborhood`] implementation used for incoming adjacency.
#[derive(Clone)]
pub struct DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    in_nbs: Vec<InNbs>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays for both outgoing and incoming neighborhoods.
pub type AdjArrayIn = DirectedGraphIn<ArrNeighborhood, ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays for both outgoing and incoming neighborhoods.
pub type SparseAdjArrayIn = DirectedGraphIn<SparseNeighborhood, SparseNeighborhood>;

impl_common_graph_ops!(DirectedGraphIn<out_nbs : OutNbs, in_nbs: InNbs> => out_nbs, Directed);

impl<OutNbs, InNbs> DirectedAdjacencyList for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_nbs[u as usize].neighbors()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_nbs[u as usize].num_of_neighbors()
    }
}

impl<OutNbs, InNbs> AdjacencyTest for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn has_edge(&self, u: Node, v: Node) -> bool {
        // Scan the shorter of both lists
        if self.out_nbs[u as usize].num_of_neighbors() <= self.in_nbs[v as usize].num_of_neighbors()
        {
            self.out_nbs[u as usize].has_neighbor(v)
        } else {
            self.in_nbs[v as usize].has_neighbor(u)
        }
    }
}

impl<OutNbs, InNbs> GraphEdgeEditing for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    impl_try_add_edge!(self);

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_remove_neighbor(v) {
            assert!(self.in_nbs[v as usize].try_remove_neighbor(u));
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl<OutNbs, InNbs> GraphMultiEdgeEditing for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn add_multi_edge(&mut self, u: Node, v: Node) {
        self.out_nbs[u as usize].add_neighbor(v);
        self.in_nbs[v as usize].add_neighbor(u);
        self.num_edges += 1;
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array_in,
    AdjArrayIn,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        GraphMultiEdgeEditing
    )
);

test_graph_ops!(
    test_sparse_adj_array_in,
    SparseAdjArrayIn,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        GraphMultiEdgeEditing
    )
);
