/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

These are the usual building blocks of hand-made pattern and host graphs.

# Example

```rust
use isographs::{prelude::*, gens::*};

let mut g = AdjArrayIn::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique(&[0, 2, 4], false);

assert_eq!(
    g.ordered_edges(false).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 0), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 0), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing and type queries.
/// Edges that are already present are skipped.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use isographs::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(4);
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(1, 0));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last node
    /// is connected back to the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    ///
    /// - If `with_loops` is `true`, each node also gets a self-loop.
    /// - For undirected graphs, edges are normalized so duplicates are avoided.
    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.try_add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.try_add_edge(prev, cur);
                prev = cur;
            }

            self.try_add_edge(prev, first);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool) {
        for &u in nodes {
            for &v in nodes {
                let e = Edge(u, v);
                if (!with_loops && e.is_loop()) || (Self::is_undirected() && !e.is_normalized()) {
                    continue;
                }

                self.try_add_edge(u, v);
            }
        }
    }
}
