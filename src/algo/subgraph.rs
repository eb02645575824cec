/*!
# Subgraph Extraction

Provides vertex-induced subgraphs. Extracting the subgraph induced by some node set of a host graph
yields a pattern that the induced subgraph isomorphism search is guaranteed to find again.
*/

use super::*;

/// A trait for creating vertex-induced subgraphs from a graph.
pub trait Subgraph: Sized {
    /// Creates a **vertex-induced subgraph** restricted to the nodes in `vertices`.
    /// The `i`-th node of `vertices` becomes node `i` of the new graph.
    ///
    /// Returns the new graph of type `GO` and the mapping of old node ids to new ones.
    /// Parallel edges between kept nodes are kept as well if `GO` supports them.
    /// ** Panics if `vertices` contains a node twice or a node `>= n` **
    fn vertex_induced_as<M, GO>(&self, vertices: &[Node]) -> (GO, M)
    where
        M: NodeMapGetter + NodeMapSetter,
        GO: GraphMultiEdgeEditing + GraphType;

    /// Creates a vertex-induced subgraph of the same type as `Self`.
    ///
    /// This is shorthand for [`Subgraph::vertex_induced_as`] where
    /// the output graph type matches the input.
    fn vertex_induced<M>(&self, vertices: &[Node]) -> (Self, M)
    where
        Self: GraphMultiEdgeEditing + GraphType,
        M: NodeMapGetter + NodeMapSetter,
    {
        self.vertex_induced_as(vertices)
    }
}

impl<G> Subgraph for G
where
    G: AdjacencyList + GraphType,
{
    fn vertex_induced_as<M, GO>(&self, vertices: &[Node]) -> (GO, M)
    where
        M: NodeMapGetter + NodeMapSetter,
        GO: GraphMultiEdgeEditing + GraphType,
    {
        let new_n = vertices.len() as NumNodes;
        let mut mapping = M::with_capacity(new_n);

        for (new, &old) in vertices.iter().enumerate() {
            assert!(old < self.number_of_nodes());
            mapping.map_node_to(old, new as Node);
        }

        let mut graph = GO::new(new_n);
        for &u in vertices {
            let Some(new_u) = mapping.new_id_of(u) else {
                continue;
            };

            for v in self.neighbors_of(u) {
                if let Some(new_v) = mapping.new_id_of(v) {
                    let e = Edge(new_u, new_v);
                    if GO::is_directed() || Self::is_directed() || e.is_normalized() {
                        graph.add_multi_edge(new_u, new_v);
                    }
                }
            }
        }

        (graph, mapping)
    }
}
