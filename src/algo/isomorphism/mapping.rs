use std::{fmt, rc::Rc};

use itertools::Itertools;

use super::*;

/// A mapping between the nodes of a host graph (`graph1`) and a pattern graph (`graph2`)
/// found by the isomorphism search.
///
/// Correspondences are queried in node space. `forward` queries go from `graph1` to `graph2`,
/// backward queries from `graph2` to `graph1`.
pub struct GraphMapping<'a, G1, G2> {
    graph1: Rc<OrderedGraph<'a, G1>>,
    graph2: Rc<OrderedGraph<'a, G2>>,
    core1: Box<[Node]>,
    core2: Box<[Node]>,
}

impl<'a, G1, G2> GraphMapping<'a, G1, G2>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
{
    /// `core1`/`core2` map search indices of one view to search indices of the other,
    /// with `INVALID_NODE` for unmapped indices.
    pub(crate) fn new(
        graph1: Rc<OrderedGraph<'a, G1>>,
        graph2: Rc<OrderedGraph<'a, G2>>,
        core1: Box<[Node]>,
        core2: Box<[Node]>,
    ) -> Self {
        debug_assert_eq!(core1.len(), graph1.number_of_nodes() as usize);
        debug_assert_eq!(core2.len(), graph2.number_of_nodes() as usize);
        Self {
            graph1,
            graph2,
            core1,
            core2,
        }
    }

    /// Returns the node `v` is mapped to, or `None` if `v` is unmapped.
    /// ** Panics if `v` is not a node of the source graph **
    pub fn vertex_correspondence(&self, v: Node, forward: bool) -> Option<Node> {
        let partner = if forward {
            self.core1[self.graph1.index_of(v) as usize]
        } else {
            self.core2[self.graph2.index_of(v) as usize]
        };

        if partner == INVALID_NODE {
            None
        } else if forward {
            Some(self.graph2.vertex_of(partner))
        } else {
            Some(self.graph1.vertex_of(partner))
        }
    }

    /// Returns *true* if `v` is mapped.
    /// ** Panics if `v` is not a node of the source graph **
    pub fn has_vertex_correspondence(&self, v: Node, forward: bool) -> bool {
        self.vertex_correspondence(v, forward).is_some()
    }

    /// Maps both endpoints of `e` and returns the mapped edge if it exists in the target graph.
    /// ** Panics if an endpoint is not a node of the source graph **
    pub fn edge_correspondence(&self, e: Edge, forward: bool) -> Option<Edge> {
        let mapped = e.try_map(|u| self.vertex_correspondence(u, forward))?;

        let exists = if forward {
            self.graph2.graph().has_edge(mapped.0, mapped.1)
        } else {
            self.graph1.graph().has_edge(mapped.0, mapped.1)
        };
        exists.then_some(mapped)
    }

    /// Returns *true* if `e` corresponds to an edge of the target graph.
    /// ** Panics if an endpoint is not a node of the source graph **
    pub fn has_edge_correspondence(&self, e: Edge, forward: bool) -> bool {
        self.edge_correspondence(e, forward).is_some()
    }

    /// Number of mapped pairs
    pub fn len(&self) -> NumNodes {
        self.core2.iter().filter(|&&i| i != INVALID_NODE).count() as NumNodes
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if every node of both graphs is mapped, i.e. the mapping is a bijection.
    pub fn is_complete(&self) -> bool {
        let len = self.len();
        len == self.graph1.number_of_nodes() && len == self.graph2.number_of_nodes()
    }

    /// Iterates over all mapped pairs `(node of graph1, node of graph2)` in increasing order
    /// of the `graph1` node.
    pub fn iter(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.graph1
            .graph()
            .vertices_range()
            .filter_map(|u| Some((u, self.vertex_correspondence(u, true)?)))
    }

    /// Stores the mapping `graph1 -> graph2` as an explicit [`NodeMapper`].
    pub fn to_node_mapper(&self) -> NodeMapper {
        NodeMapper::from_sequence(&self.iter().collect_vec())
    }
}

impl<G1, G2> NodeMapGetter for GraphMapping<'_, G1, G2>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
{
    fn new_id_of(&self, old: Node) -> Option<Node> {
        if old >= self.graph1.number_of_nodes() {
            return None;
        }
        self.vertex_correspondence(old, true)
    }

    fn old_id_of(&self, new: Node) -> Option<Node> {
        if new >= self.graph2.number_of_nodes() {
            return None;
        }
        self.vertex_correspondence(new, false)
    }

    fn len(&self) -> Node {
        GraphMapping::len(self)
    }
}

impl<G1, G2> Clone for GraphMapping<'_, G1, G2> {
    fn clone(&self) -> Self {
        Self {
            graph1: Rc::clone(&self.graph1),
            graph2: Rc::clone(&self.graph2),
            core1: self.core1.clone(),
            core2: self.core2.clone(),
        }
    }
}

impl<G1, G2> PartialEq for GraphMapping<'_, G1, G2>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
{
    fn eq(&self, other: &Self) -> bool {
        self.graph1.number_of_nodes() == other.graph1.number_of_nodes()
            && self.graph2.number_of_nodes() == other.graph2.number_of_nodes()
            && self.iter().eq(other.iter())
    }
}

impl<G1, G2> Eq for GraphMapping<'_, G1, G2>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
{
}

/// Formats as `[0=2 1=~~ 2=0]`: every node of `graph1` in increasing order together with its
/// partner, `~~` for unmapped nodes.
impl<G1, G2> fmt::Display for GraphMapping<'_, G1, G2>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.graph1.graph().vertices_range().map(|u| {
            match self.vertex_correspondence(u, true) {
                Some(v) => format!("{u}={v}"),
                None => format!("{u}=~~"),
            }
        });
        write!(f, "[{}]", pairs.format(" "))
    }
}

impl<G1, G2> fmt::Debug for GraphMapping<'_, G1, G2>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
