/*!
# Graph Generators

Random and deterministic graph constructions, mainly used to produce test instances for the
isomorphism search:

- [`Gnp`]: Erdős–Rényi `G(n,p)` edges with independent edge probability,
- [`GeneratorSubstructures`]: paths, cycles and cliques inside an existing graph,
- [`RandomRelabel`]: isomorphic copies of a graph under a uniformly random node permutation.

All graph types implementing `GraphFromScratch` and `GraphType` can leverage the [`RandomGraph`]
trait for convenient random graph construction.
*/

use rand::{Rng, seq::SliceRandom};

use crate::{prelude::*, utils::*};

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphType,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|e| Self::is_directed() || e.is_normalized()),
        )
    }

    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|e| !e.is_loop() && (Self::is_directed() || e.is_normalized())),
        )
    }
}

/// Produces isomorphic copies of a graph by relabelling its nodes.
pub trait RandomRelabel: Sized {
    /// Returns a copy of the graph with nodes relabelled by a uniformly random permutation,
    /// together with the mapping `old -> new` that was applied.
    fn randomly_relabelled<R>(&self, rng: &mut R) -> (Self, NodeMapper)
    where
        R: Rng;
}

impl<G> RandomRelabel for G
where
    G: AdjacencyList + GraphType + GraphMultiEdgeEditing,
{
    fn randomly_relabelled<R>(&self, rng: &mut R) -> (Self, NodeMapper)
    where
        R: Rng,
    {
        let mut rank: Vec<Node> = self.vertices().collect();
        rank.shuffle(rng);

        let mapper = NodeMapper::from_rank(&rank);
        let graph = mapper.relabelled_graph(self);
        (graph, mapper)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn relabelled_copy_preserves_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let graph = AdjArrayIn::gnp(rng, 12, 0.3);
            let (copy, mapper) = graph.randomly_relabelled(rng);

            assert_eq!(copy.number_of_nodes(), graph.number_of_nodes());
            assert_eq!(copy.number_of_edges(), graph.number_of_edges());
            for Edge(u, v) in graph.edges(false) {
                let (nu, nv) = (mapper.new_id_of(u).unwrap(), mapper.new_id_of(v).unwrap());
                assert!(copy.has_edge(nu, nv));
            }
        }
    }

    #[test]
    fn gnp_no_loops_undirected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        let graph = AdjArrayUndir::gnp_no_loops(rng, 30, 0.5);

        assert!(graph.vertices().all(|u| !graph.has_self_loop(u)));
        assert!(graph.number_of_edges() > 0);
        assert_eq!(
            graph.edges(true).count(),
            graph.number_of_edges() as usize,
            "{:?}",
            graph.edges(true).collect_vec()
        );
    }
}
