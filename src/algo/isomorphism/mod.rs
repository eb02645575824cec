/*!
# Graph Isomorphism

A VF2 based search for

- **isomorphisms** between two graphs,
- **induced subgraph isomorphisms**, i.e. copies of a pattern graph as vertex-induced subgraph of a
  host graph,
- **monomorphisms**, i.e. copies of a pattern graph as (not necessarily induced) subgraph of a
  host graph.

The search works on directed and undirected multigraphs with self-loops; parallel edges have to be
matched with the same multiplicity (at least the same multiplicity for monomorphisms).
Nodes and edges can be restricted by arbitrary equivalence predicates.

The [`Vf2`] inspector exposes the full configuration and produces a lazy [`Vf2Mappings`] iterator
over [`GraphMapping`]s. For quick checks, [`IsomorphismSearch`] is implemented on all graphs:

```rust
use isographs::{prelude::*, algo::*, gens::*};

let mut host = AdjArrayUndir::new(5);
host.connect_cycle([0, 1, 2, 3, 4]);

let mut path = AdjArrayUndir::new(3);
path.connect_path([0, 1, 2]);

assert!(host.contains_induced_subgraph(&path));
assert!(!host.is_isomorphic_to(&path));
assert_eq!(host.count_isomorphisms_to(&host), 10);
```
*/

use super::*;

mod equivalence;
mod error;
mod inspector;
mod mapping;
mod ordering;
mod state;

pub use equivalence::*;
pub use error::*;
pub use inspector::*;
pub use mapping::*;
pub use ordering::*;
pub use state::*;

/// Isomorphism queries directly on graphs.
///
/// Both graphs have to agree in their [`GraphType::Dir`], so mixing directed and undirected
/// graphs is rejected at compile time.
pub trait IsomorphismSearch: MatchableGraph {
    /// Returns *true* if `self` and `other` are isomorphic.
    fn is_isomorphic_to<G>(&self, other: &G) -> bool
    where
        G: MatchableGraph + GraphType<Dir = Self::Dir>;

    /// Returns *true* if `pattern` is isomorphic to a vertex-induced subgraph of `self`.
    fn contains_induced_subgraph<G>(&self, pattern: &G) -> bool
    where
        G: MatchableGraph + GraphType<Dir = Self::Dir>;

    /// Returns *true* if `pattern` is isomorphic to some subgraph of `self`,
    /// i.e. a monomorphism from `pattern` into `self` exists.
    fn contains_subgraph<G>(&self, pattern: &G) -> bool
    where
        G: MatchableGraph + GraphType<Dir = Self::Dir>;

    /// Returns the number of distinct isomorphisms between `self` and `other`.
    fn count_isomorphisms_to<G>(&self, other: &G) -> usize
    where
        G: MatchableGraph + GraphType<Dir = Self::Dir>;
}

impl<G1> IsomorphismSearch for G1
where
    G1: MatchableGraph,
{
    fn is_isomorphic_to<G>(&self, other: &G) -> bool
    where
        G: MatchableGraph + GraphType<Dir = Self::Dir>,
    {
        Vf2::isomorphism(self, other).is_ok_and(|vf2| vf2.mappings().has_mapping())
    }

    fn contains_induced_subgraph<G>(&self, pattern: &G) -> bool
    where
        G: MatchableGraph + GraphType<Dir = Self::Dir>,
    {
        Vf2::subgraph(self, pattern).is_ok_and(|vf2| vf2.mappings().has_mapping())
    }

    fn contains_subgraph<G>(&self, pattern: &G) -> bool
    where
        G: MatchableGraph + GraphType<Dir = Self::Dir>,
    {
        Vf2::monomorphism(self, pattern).is_ok_and(|vf2| vf2.mappings().has_mapping())
    }

    fn count_isomorphisms_to<G>(&self, other: &G) -> usize
    where
        G: MatchableGraph + GraphType<Dir = Self::Dir>,
    {
        Vf2::isomorphism(self, other).map_or(0, |vf2| vf2.mappings().count())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn relabelled_copies_are_isomorphic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [1, 5, 10, 25] {
            let graph = AdjArrayIn::gnp(rng, n, 0.2);
            let (copy, mapper) = graph.randomly_relabelled(rng);

            assert!(graph.is_isomorphic_to(&copy));
            assert!(copy.is_isomorphic_to(&graph));

            for order in [VertexOrder::Natural, VertexOrder::DegreeDescending] {
                let vf2 = Vf2::isomorphism(&copy, &graph)
                    .unwrap()
                    .with_vertex_order(order);
                let mapping = vf2.mappings().next().unwrap();
                assert!(mapping.is_complete());

                for Edge(u, v) in graph.edges(false) {
                    assert!(mapping.has_edge_correspondence(Edge(u, v), false));
                    assert!(copy.has_edge(
                        mapper.new_id_of(u).unwrap(),
                        mapper.new_id_of(v).unwrap()
                    ));
                }
            }
        }
    }

    #[test]
    fn relabelled_multigraphs_are_isomorphic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);

        let mut graph = AdjArrayUndir::new(5);
        graph.add_multi_edges([(0, 1), (0, 1), (1, 2), (2, 3), (3, 3), (3, 4), (3, 4), (3, 4)]);
        let mut digraph = AdjArrayIn::new(4);
        digraph.add_multi_edges([(0, 1), (0, 1), (1, 0), (1, 2), (2, 2), (2, 3)]);

        for _ in 0..5 {
            let (copy, _) = graph.randomly_relabelled(rng);
            assert!(graph.is_isomorphic_to(&copy));
            assert_eq!(copy.number_of_edges(), graph.number_of_edges());

            let mapping = Vf2::isomorphism(&graph, &copy)
                .unwrap()
                .mappings()
                .next()
                .unwrap();
            let back = mapping.relabelled_graph(&graph);
            assert_eq!(
                back.ordered_edges(true).collect_vec(),
                copy.ordered_edges(true).collect_vec()
            );

            let (copy, _) = digraph.randomly_relabelled(rng);
            assert!(digraph.is_isomorphic_to(&copy));
            assert!(copy.is_isomorphic_to(&digraph));
        }
    }

    #[test]
    fn symmetry_and_counting() {
        let rng = &mut Pcg64Mcg::seed_from_u64(18);

        for _ in 0..10 {
            let a = AdjArrayUndir::gnp_no_loops(rng, 7, 0.4);
            let b = AdjArrayUndir::gnp_no_loops(rng, 7, 0.4);
            assert_eq!(a.is_isomorphic_to(&b), b.is_isomorphic_to(&a));

            let (copy, _) = a.randomly_relabelled(rng);
            assert_eq!(a.count_isomorphisms_to(&copy), a.count_isomorphisms_to(&a));
        }

        let mut cycle = AdjArrayUndir::new(6);
        cycle.connect_cycle(0..6);
        assert_eq!(cycle.count_isomorphisms_to(&cycle), 12);
        assert_eq!(cycle.count_isomorphisms_to(&AdjArrayUndir::new(5)), 0);
        assert!(!cycle.is_isomorphic_to(&AdjArrayUndir::new(5)));
    }

    #[test]
    fn subgraph_queries() {
        let mut host = SparseAdjArrayUndir::new(4);
        host.connect_clique(&[0, 1, 2, 3], false);

        let mut path = AdjArrayUndir::new(3);
        path.connect_path([0, 1, 2]);
        let mut triangle = AdjArrayUndir::new(3);
        triangle.connect_cycle([0, 1, 2]);

        assert!(!host.contains_induced_subgraph(&path));
        assert!(host.contains_subgraph(&path));
        assert!(host.contains_induced_subgraph(&triangle));
        assert!(!path.contains_subgraph(&triangle));
        assert!(host.contains_subgraph(&AdjArrayUndir::new(0)));
    }
}
