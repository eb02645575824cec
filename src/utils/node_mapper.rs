/*!
# Node Mapper

Provides functionality to map nodes between graphs.
Isomorphism results expose themselves through [`NodeMapGetter`], so a found embedding can directly be
used to relabel graphs or be stored as an explicit [`NodeMapper`].
*/
use crate::{edge::*, node::*, ops::*};

use fxhash::FxHashMap;
use itertools::Itertools;
use std::fmt;

/// A trait for constructing node mappings.
pub trait NodeMapSetter: Sized {
    /// Creates a mapper where the largest node that can be inserted is `n-1`.
    fn with_capacity(n: NumNodes) -> Self;

    /// Stores a mapping `old <-> new`.
    /// ** Panics if `old` or `new` are already mapped **
    fn map_node_to(&mut self, old: Node, new: Node);

    /// Constructs a mapper from a Node-slice `new_ids` where `new_ids[i]` stores the new id of the old node `i`.
    ///
    /// # Example
    /// ```
    /// use isographs::utils::*;
    ///
    /// let mapper = NodeMapper::from_rank(&[1, 0]);
    /// assert_eq!(mapper.new_id_of(0), Some(1));
    /// assert_eq!(mapper.new_id_of(1), Some(0));
    /// ```
    fn from_rank(new_ids: &[Node]) -> Self {
        let mut res = Self::with_capacity(new_ids.len() as NumNodes);
        for (old, &new) in new_ids.iter().enumerate() {
            res.map_node_to(old as Node, new);
        }
        res
    }

    /// Constructs a mapper from a sequence of tuples `(old, new)`.
    fn from_sequence(seq: &[(Node, Node)]) -> Self {
        let mut res = Self::with_capacity(seq.len() as NumNodes);
        for &(old, new) in seq {
            res.map_node_to(old, new);
        }
        res
    }
}

/// A trait for accessing node mappings.
pub trait NodeMapGetter {
    /// If the mapping `(old, new)` exists, returns `Some(new)`, otherwise `None`.
    fn new_id_of(&self, old: Node) -> Option<Node>;

    /// If the mapping `(old, new)` exists, returns `Some(old)`, otherwise `None`.
    fn old_id_of(&self, new: Node) -> Option<Node>;

    /// Returns the number of stored mappings
    fn len(&self) -> Node;

    /// Returns `true` if no mapping is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps all nodes of `old_ids` that have a mapping and drops the others
    fn get_filtered_new_ids<'a, I>(&'a self, old_ids: I) -> impl Iterator<Item = Node> + 'a
    where
        I: IntoIterator<Item = Node> + 'a,
    {
        old_ids.into_iter().filter_map(|u| self.new_id_of(u))
    }

    /// Create a 'copy' of type `GO` from the input graph where all nodes are relabelled according to this mapper.
    /// Any node `u` (and its incident edges) is dropped if there is no mapping.
    /// Parallel edges and self-loops are carried over with their multiplicity.
    ///
    /// # Example
    /// ```
    /// use isographs::{prelude::*, utils::*};
    ///
    /// let g = AdjArrayIn::from_edges(2, [(0, 1)]);
    /// let mapper = NodeMapper::from_rank(&[1, 0]);
    /// let gm: AdjArrayIn = mapper.relabelled_graph_as(&g);
    /// assert!(!gm.has_edge(0, 1));
    /// assert!(gm.has_edge(1, 0));
    /// ```
    fn relabelled_graph_as<GI, GO>(&self, input: &GI) -> GO
    where
        GI: AdjacencyList + GraphType,
        GO: GraphMultiEdgeEditing,
    {
        let n = input
            .vertices()
            .filter_map(|u| self.new_id_of(u).map(|x| x + 1))
            .max()
            .unwrap_or(0);

        let mut graph = GO::new(n);
        graph.add_multi_edges(
            input
                .vertices()
                .filter_map(|old_u| self.new_id_of(old_u).map(|new_u| (old_u, new_u)))
                .flat_map(|(old_u, new_u)| {
                    input
                        .edges_of(old_u, GI::is_undirected())
                        .filter_map(move |Edge(_, old_v)| {
                            self.new_id_of(old_v).map(|new_v| Edge(new_u, new_v))
                        })
                }),
        );
        graph
    }

    /// Short-hand for [`NodeMapGetter::relabelled_graph_as`] where the output type matches the input type.
    fn relabelled_graph<G>(&self, input: &G) -> G
    where
        G: AdjacencyList + GraphType + GraphMultiEdgeEditing,
    {
        self.relabelled_graph_as::<G, G>(input)
    }
}

/// A trait for inverting a node mapping.
pub trait NodeMapInverse {
    /// Returns a new mapper where for each mapping `(a, b)` of the original,
    /// there exists a mapping `(b, a)` in the new mapper.
    #[must_use]
    fn inverse(&self) -> Self;
}

/// A bidirectional node mapping between "old" and "new" nodes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NodeMapper {
    new_to_old: FxHashMap<Node, Node>,
    old_to_new: FxHashMap<Node, Node>,
}

impl NodeMapSetter for NodeMapper {
    fn with_capacity(n: Node) -> Self {
        Self {
            new_to_old: FxHashMap::with_capacity_and_hasher(n as usize, Default::default()),
            old_to_new: FxHashMap::with_capacity_and_hasher(n as usize, Default::default()),
        }
    }

    fn map_node_to(&mut self, old: Node, new: Node) {
        let success = self.old_to_new.insert(old, new).is_none()
            && self.new_to_old.insert(new, old).is_none();
        assert!(success, "mapping {old}<->{new} collides with an existing one");
    }
}

impl NodeMapGetter for NodeMapper {
    fn new_id_of(&self, old: Node) -> Option<Node> {
        self.old_to_new.get(&old).copied()
    }

    fn old_id_of(&self, new: Node) -> Option<Node> {
        self.new_to_old.get(&new).copied()
    }

    fn len(&self) -> Node {
        self.old_to_new.len() as Node
    }
}

impl NodeMapInverse for NodeMapper {
    fn inverse(&self) -> Self {
        Self {
            old_to_new: self.new_to_old.clone(),
            new_to_old: self.old_to_new.clone(),
        }
    }
}

impl fmt::Debug for NodeMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.old_to_new
                .iter()
                .sorted()
                .map(|(&o, &n)| format!("{o}<->{n}"))
                .join(", ")
        )
    }
}
