use std::{iter::FusedIterator, rc::Rc};

use log::{debug, trace};

use super::*;

/// Configurable VF2 inspector searching for mappings of the pattern `graph2` into the host
/// `graph1`.
///
/// The inspector is created for one [`Problem`] and further configured with the builder methods
/// below. Every call to [`Vf2::mappings`] starts a fresh, lazy enumeration.
///
/// # Example
/// ```rust
/// use isographs::{prelude::*, algo::*};
///
/// let host = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let pattern = AdjArrayUndir::from_edges(2, [(0, 1)]);
///
/// let vf2 = Vf2::subgraph(&host, &pattern).unwrap();
/// assert_eq!(vf2.mappings().count(), 8);
/// assert_eq!(vf2.mappings().next().unwrap().to_string(), "[0=0 1=1 2=~~ 3=~~]");
/// ```
pub struct Vf2<'g, G1, G2, NE = AlwaysEquivalent, EE = AlwaysEquivalent> {
    graph1: &'g G1,
    graph2: &'g G2,
    problem: Problem,
    order: VertexOrder,
    call_limit: Option<usize>,
    node_eq: NE,
    edge_eq: EE,
}

impl<'g, G1, G2> Vf2<'g, G1, G2>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
{
    /// Creates an inspector for `problem` without any node or edge labels.
    ///
    /// Fails if exactly one of the graphs is directed, or if a full isomorphism is requested
    /// for graphs with a different number of nodes.
    pub fn new(graph1: &'g G1, graph2: &'g G2, problem: Problem) -> Result<Self, IsomorphismError> {
        if G1::is_directed() != G2::is_directed() {
            return Err(IsomorphismError::DirectednessMismatch {
                graph1_directed: G1::is_directed(),
                graph2_directed: G2::is_directed(),
            });
        }

        if problem == Problem::Isomorphism && graph1.number_of_nodes() != graph2.number_of_nodes()
        {
            return Err(IsomorphismError::VertexCountMismatch {
                graph1: graph1.number_of_nodes(),
                graph2: graph2.number_of_nodes(),
            });
        }

        Ok(Self {
            graph1,
            graph2,
            problem,
            order: VertexOrder::default(),
            call_limit: None,
            node_eq: AlwaysEquivalent,
            edge_eq: AlwaysEquivalent,
        })
    }

    /// Searches for isomorphisms between `graph2` and vertex-induced subgraphs of `graph1`.
    pub fn subgraph(graph1: &'g G1, graph2: &'g G2) -> Result<Self, IsomorphismError> {
        Self::new(graph1, graph2, Problem::InducedSubgraph)
    }

    /// Searches for isomorphisms between `graph1` and `graph2`.
    pub fn isomorphism(graph1: &'g G1, graph2: &'g G2) -> Result<Self, IsomorphismError> {
        Self::new(graph1, graph2, Problem::Isomorphism)
    }

    /// Searches for injections of `graph2` into `graph1` that preserve the edges of `graph2`.
    pub fn monomorphism(graph1: &'g G1, graph2: &'g G2) -> Result<Self, IsomorphismError> {
        Self::new(graph1, graph2, Problem::Monomorphism)
    }
}

impl<'g, G1, G2, NE, EE> Vf2<'g, G1, G2, NE, EE>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
    NE: NodeEquivalence,
    EE: EdgeEquivalence,
{
    /// Only matches host node `u` with pattern node `v` if `node_eq(u, v)` holds.
    pub fn with_node_equivalence<F>(self, node_eq: F) -> Vf2<'g, G1, G2, F, EE>
    where
        F: Fn(Node, Node) -> bool,
    {
        Vf2 {
            graph1: self.graph1,
            graph2: self.graph2,
            problem: self.problem,
            order: self.order,
            call_limit: self.call_limit,
            node_eq,
            edge_eq: self.edge_eq,
        }
    }

    /// Only matches host edge `e` with pattern edge `f` if `edge_eq(e, f)` holds.
    /// See [`EdgeEquivalence`] on how both edges are oriented.
    pub fn with_edge_equivalence<F>(self, edge_eq: F) -> Vf2<'g, G1, G2, NE, F>
    where
        F: Fn(Edge, Edge) -> bool,
    {
        Vf2 {
            graph1: self.graph1,
            graph2: self.graph2,
            problem: self.problem,
            order: self.order,
            call_limit: self.call_limit,
            node_eq: self.node_eq,
            edge_eq,
        }
    }

    /// Sets the order in which nodes are tried
    pub fn with_vertex_order(mut self, order: VertexOrder) -> Self {
        self.order = order;
        self
    }

    /// Bounds the number of pairs an enumeration may commit. `None` removes the bound.
    pub fn with_call_limit(mut self, call_limit: Option<usize>) -> Self {
        self.call_limit = call_limit;
        self
    }

    pub fn problem(&self) -> Problem {
        self.problem
    }

    /// Returns a lazy iterator over all mappings.
    pub fn mappings(&self) -> Vf2Mappings<'_, 'g, G1, G2, NE, EE> {
        let graph1 = Rc::new(OrderedGraph::new(self.graph1, self.order));
        let graph2 = Rc::new(OrderedGraph::new(self.graph2, self.order));

        Vf2Mappings {
            state: MatchState::new(graph1, graph2, self.problem),
            node_eq: &self.node_eq,
            edge_eq: &self.edge_eq,
            call_limit: self.call_limit,
            calls: 0,
            status: SearchStatus::Fresh,
            peeked: None,
        }
    }

    /// Returns *true* if at least one mapping exists.
    ///
    /// Fails with [`IsomorphismError::Undecidable`] if the call limit is reached before the first
    /// mapping is found.
    pub fn isomorphism_exists(&self) -> Result<bool, IsomorphismError> {
        let mut mappings = self.mappings();
        if mappings.has_mapping() {
            return Ok(true);
        }

        match self.call_limit {
            Some(call_limit) if mappings.limit_reached() => {
                Err(IsomorphismError::Undecidable { call_limit })
            }
            _ => Ok(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchStatus {
    Fresh,
    Running,
    AtGoal,
    Exhausted,
    LimitReached,
}

/// Lazy enumeration of all mappings found by a [`Vf2`] inspector.
///
/// The search runs on an explicit stack and only advances as far as needed to produce the next
/// mapping. Each mapping is produced exactly once.
pub struct Vf2Mappings<'s, 'g, G1, G2, NE, EE> {
    state: MatchState<'g, G1, G2>,
    node_eq: &'s NE,
    edge_eq: &'s EE,
    call_limit: Option<usize>,
    calls: usize,
    status: SearchStatus,
    peeked: Option<Option<GraphMapping<'g, G1, G2>>>,
}

impl<'g, G1, G2, NE, EE> Vf2Mappings<'_, 'g, G1, G2, NE, EE>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
    NE: NodeEquivalence,
    EE: EdgeEquivalence,
{
    /// Returns the next mapping without consuming it.
    pub fn peek(&mut self) -> Option<&GraphMapping<'g, G1, G2>> {
        if self.peeked.is_none() {
            let next = self.search();
            self.peeked = Some(next);
        }
        self.peeked.as_ref().and_then(Option::as_ref)
    }

    /// Returns *true* if there is another mapping.
    pub fn has_mapping(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Returns *true* if the enumeration was stopped by the call limit.
    pub fn limit_reached(&self) -> bool {
        self.status == SearchStatus::LimitReached
    }

    /// Number of pairs committed so far
    pub fn calls(&self) -> usize {
        self.calls
    }

    fn search(&mut self) -> Option<GraphMapping<'g, G1, G2>> {
        match self.status {
            SearchStatus::Exhausted | SearchStatus::LimitReached => return None,
            SearchStatus::Fresh => {
                self.status = SearchStatus::Running;
                let (n1, n2) = self.state.orders();
                debug!(
                    "starting {:?} search of a pattern with {n2} nodes in a host with {n1} nodes",
                    self.state.problem()
                );

                if self.state.is_goal() {
                    self.status = SearchStatus::Exhausted;
                    return Some(self.state.to_mapping());
                }

                if n2 > n1 {
                    debug!("pattern is larger than host");
                    self.status = SearchStatus::Exhausted;
                    return None;
                }
            }
            SearchStatus::AtGoal => {
                self.status = SearchStatus::Running;
                self.state.backtrack();
            }
            SearchStatus::Running => {}
        }

        loop {
            while self.state.propose_next_pair() {
                if !self.state.is_feasible_pair(self.node_eq, self.edge_eq) {
                    continue;
                }

                if self.call_limit.is_some_and(|limit| self.calls >= limit) {
                    debug!("search stopped after {} committed pairs", self.calls);
                    self.status = SearchStatus::LimitReached;
                    return None;
                }

                self.calls += 1;
                self.state.add_pair();

                if self.state.is_goal() {
                    trace!("mapping found after {} committed pairs", self.calls);
                    self.status = SearchStatus::AtGoal;
                    return Some(self.state.to_mapping());
                }
            }

            if self.state.backtrack().is_none() {
                debug!("search exhausted after {} committed pairs", self.calls);
                self.status = SearchStatus::Exhausted;
                return None;
            }
        }
    }
}

impl<'g, G1, G2, NE, EE> Iterator for Vf2Mappings<'_, 'g, G1, G2, NE, EE>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
    NE: NodeEquivalence,
    EE: EdgeEquivalence,
{
    type Item = GraphMapping<'g, G1, G2>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.search(),
        }
    }
}

impl<G1, G2, NE, EE> FusedIterator for Vf2Mappings<'_, '_, G1, G2, NE, EE>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
    NE: NodeEquivalence,
    EE: EdgeEquivalence,
{
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    /// All images `pattern node -> host node` satisfying `problem`, by trying every injection
    fn brute_force<G1, G2>(host: &G1, pattern: &G2, problem: Problem) -> Vec<Vec<Node>>
    where
        G1: MatchableGraph,
        G2: MatchableGraph,
    {
        let (n1, n2) = (host.number_of_nodes(), pattern.number_of_nodes());
        if problem == Problem::Isomorphism && n1 != n2 {
            return Vec::new();
        }

        (0..n1)
            .permutations(n2 as usize)
            .filter(|image| {
                pattern
                    .vertices_range()
                    .cartesian_product(pattern.vertices_range())
                    .all(|(a, b)| {
                        problem.multiplicity_fits(
                            host.edge_multiplicity(image[a as usize], image[b as usize]),
                            pattern.edge_multiplicity(a, b),
                        )
                    })
            })
            .sorted()
            .collect()
    }

    fn found<G1, G2, NE, EE>(vf2: &Vf2<G1, G2, NE, EE>) -> Vec<Vec<Node>>
    where
        G1: MatchableGraph,
        G2: MatchableGraph,
        NE: NodeEquivalence,
        EE: EdgeEquivalence,
    {
        vf2.mappings()
            .map(|m| {
                vf2.graph2
                    .vertices_range()
                    .map(|v| m.vertex_correspondence(v, false).unwrap())
                    .collect_vec()
            })
            .sorted()
            .collect()
    }

    fn check_against_brute_force<G1, G2>(host: &G1, pattern: &G2, problem: Problem)
    where
        G1: MatchableGraph,
        G2: MatchableGraph,
    {
        let expected = brute_force(host, pattern, problem);
        for order in [VertexOrder::Natural, VertexOrder::DegreeDescending] {
            let vf2 = Vf2::new(host, pattern, problem)
                .unwrap()
                .with_vertex_order(order);
            assert_eq!(found(&vf2), expected, "{problem:?} {order:?}");
            assert_eq!(vf2.isomorphism_exists(), Ok(!expected.is_empty()));
        }
    }

    fn strings<G1, G2, NE, EE>(vf2: &Vf2<G1, G2, NE, EE>) -> Vec<String>
    where
        G1: MatchableGraph,
        G2: MatchableGraph,
        NE: NodeEquivalence,
        EE: EdgeEquivalence,
    {
        vf2.mappings().map(|m| m.to_string()).collect()
    }

    #[test]
    fn undirected_edge_cases() {
        let empty = AdjArrayUndir::new(0);
        let path = AdjArrayUndir::from_edges(4, [(0, 1), (2, 1), (2, 3)]);
        let single = AdjArrayUndir::new(1);
        let three = AdjArrayUndir::new(3);
        let two = AdjArrayUndir::new(2);
        let edge = AdjArrayUndir::from_edges(2, [(0, 1)]);

        assert_eq!(strings(&Vf2::subgraph(&empty, &empty).unwrap()), ["[]"]);
        assert_eq!(
            strings(&Vf2::subgraph(&path, &empty).unwrap()),
            ["[0=~~ 1=~~ 2=~~ 3=~~]"]
        );
        assert_eq!(Vf2::subgraph(&empty, &path).unwrap().isomorphism_exists(), Ok(false));
        assert_eq!(
            strings(&Vf2::subgraph(&path, &single).unwrap()),
            [
                "[0=0 1=~~ 2=~~ 3=~~]",
                "[0=~~ 1=0 2=~~ 3=~~]",
                "[0=~~ 1=~~ 2=0 3=~~]",
                "[0=~~ 1=~~ 2=~~ 3=0]"
            ]
        );
        assert_eq!(Vf2::subgraph(&empty, &single).unwrap().isomorphism_exists(), Ok(false));
        assert_eq!(Vf2::subgraph(&path, &three).unwrap().isomorphism_exists(), Ok(false));
        assert_eq!(
            strings(&Vf2::subgraph(&three, &two).unwrap())
                .into_iter()
                .sorted()
                .collect_vec(),
            [
                "[0=0 1=1 2=~~]",
                "[0=0 1=~~ 2=1]",
                "[0=1 1=0 2=~~]",
                "[0=1 1=~~ 2=0]",
                "[0=~~ 1=0 2=1]",
                "[0=~~ 1=1 2=0]"
            ]
        );
        assert_eq!(Vf2::subgraph(&three, &edge).unwrap().isomorphism_exists(), Ok(false));
    }

    #[test]
    fn complete_graphs() {
        let mut k4 = AdjArrayUndir::new(4);
        k4.connect_clique(&[0, 1, 2, 3], false);
        let mut k5 = AdjArrayUndir::new(5);
        k5.connect_clique(&[0, 1, 2, 3, 4], false);

        assert_eq!(Vf2::subgraph(&k4, &k5).unwrap().isomorphism_exists(), Ok(false));

        let vf2 = Vf2::subgraph(&k5, &k4).unwrap();
        assert_eq!(
            vf2.mappings().next().unwrap().to_string(),
            "[0=0 1=1 2=2 3=3 4=~~]"
        );
        assert_eq!(vf2.mappings().count(), 120);
    }

    #[test]
    fn disconnected_graphs() {
        let host = AdjArrayUndir::from_edges(6, [(1, 2), (2, 3), (3, 1), (4, 5)]);
        let pattern = AdjArrayUndir::from_edges(5, [(1, 0), (3, 2), (4, 3), (2, 4)]);

        let vf2 = Vf2::subgraph(&host, &pattern).unwrap();
        assert_eq!(
            vf2.mappings().next().unwrap().to_string(),
            "[0=~~ 1=2 2=3 3=4 4=0 5=1]"
        );
        check_against_brute_force(&host, &pattern, Problem::InducedSubgraph);

        let host = AdjArrayIn::from_edges(6, [(1, 2), (2, 3), (3, 1), (4, 5)]);
        let pattern = AdjArrayIn::from_edges(5, [(1, 0), (3, 2), (4, 3), (2, 4)]);

        let vf2 = Vf2::subgraph(&host, &pattern).unwrap();
        assert_eq!(
            vf2.mappings().next().unwrap().to_string(),
            "[0=~~ 1=2 2=4 3=3 4=1 5=0]"
        );
        check_against_brute_force(&host, &pattern, Problem::InducedSubgraph);
    }

    #[test]
    fn directed_edge_cases() {
        let empty = AdjArrayIn::new(0);
        let graph = AdjArrayIn::from_edges(4, [(0, 1), (2, 1), (2, 3)]);

        assert_eq!(strings(&Vf2::subgraph(&empty, &empty).unwrap()), ["[]"]);
        assert_eq!(
            strings(&Vf2::isomorphism(&graph, &graph).unwrap())[0],
            "[0=0 1=1 2=2 3=3]"
        );

        let mut k4 = AdjArrayIn::new(4);
        let mut k5 = AdjArrayIn::new(5);
        for (u, v) in (0..5).tuple_combinations() {
            k5.add_edge(u, v);
            if v < 4 {
                k4.add_edge(u, v);
            }
        }
        assert_eq!(Vf2::subgraph(&k4, &k5).unwrap().isomorphism_exists(), Ok(false));
        assert_eq!(
            strings(&Vf2::subgraph(&k5, &k4).unwrap())[0],
            "[0=0 1=1 2=2 3=3 4=~~]"
        );
        check_against_brute_force(&k5, &k4, Problem::InducedSubgraph);
    }

    #[test]
    fn directed_exhaustive() {
        let host = AdjArrayIn::from_edges(
            6,
            [
                (0, 1),
                (0, 5),
                (1, 4),
                (2, 1),
                (2, 4),
                (3, 1),
                (4, 0),
                (5, 2),
                (5, 4),
            ],
        );
        let pattern = AdjArrayIn::from_edges(4, [(0, 3), (1, 2), (1, 3), (2, 3), (2, 0)]);

        for problem in [Problem::InducedSubgraph, Problem::Monomorphism] {
            check_against_brute_force(&host, &pattern, problem);
        }
    }

    #[test]
    fn isomorphism_of_in_star() {
        let graph = AdjArrayIn::from_edges(3, [(0, 1), (2, 1)]);
        let vf2 = Vf2::isomorphism(&graph, &graph).unwrap();

        assert_eq!(strings(&vf2), ["[0=0 1=1 2=2]", "[0=2 1=1 2=0]"]);
        assert!(vf2.mappings().all(|m| m.is_complete()));
    }

    #[test]
    fn cycle_contains_edges() {
        let cycle = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let edge = AdjArrayUndir::from_edges(2, [(0, 1)]);
        let triangle = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);

        let vf2 = Vf2::subgraph(&cycle, &edge).unwrap();
        let mappings = vf2.mappings().collect_vec();
        assert_eq!(mappings.len(), 8);
        for m in &mappings {
            assert!(m.has_edge_correspondence(Edge(0, 1), false));
            let (u, v) = (
                m.vertex_correspondence(0, false).unwrap(),
                m.vertex_correspondence(1, false).unwrap(),
            );
            assert_eq!(m.vertex_correspondence(u, true), Some(0));
            assert_eq!(m.vertex_correspondence(v, true), Some(1));
        }

        for problem in [Problem::InducedSubgraph, Problem::Monomorphism] {
            let vf2 = Vf2::new(&cycle, &triangle, problem).unwrap();
            assert_eq!(vf2.mappings().next(), None);
            assert_eq!(vf2.isomorphism_exists(), Ok(false));
        }
    }

    #[test]
    fn monomorphism_ignores_extra_edges() {
        let triangle = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let path = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);

        assert_eq!(Vf2::subgraph(&triangle, &path).unwrap().mappings().count(), 0);
        assert_eq!(Vf2::monomorphism(&triangle, &path).unwrap().mappings().count(), 6);
    }

    #[test]
    fn empty_pattern_yields_one_mapping() {
        let host = AdjArrayIn::from_edges(3, [(0, 1)]);
        let pattern = AdjArrayIn::new(0);

        for problem in [Problem::InducedSubgraph, Problem::Monomorphism] {
            let vf2 = Vf2::new(&host, &pattern, problem).unwrap();
            let mut mappings = vf2.mappings();
            assert!(mappings.has_mapping());
            assert!(mappings.next().unwrap().is_empty());
            assert!(mappings.next().is_none());
            assert!(mappings.next().is_none());
            assert_eq!(vf2.isomorphism_exists(), Ok(true));
        }
    }

    #[test]
    fn peek_does_not_consume() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        let vf2 = Vf2::isomorphism(&graph, &graph).unwrap();

        let mut mappings = vf2.mappings();
        let first = mappings.peek().cloned().unwrap();
        assert_eq!(mappings.peek(), Some(&first));
        assert_eq!(mappings.next(), Some(first));
        assert!(mappings.has_mapping());
        assert_eq!(mappings.next().unwrap().to_string(), "[0=2 1=1 2=0]");
        assert!(!mappings.has_mapping());
        assert_eq!(mappings.next(), None);
    }

    #[test]
    fn enumeration_is_deterministic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let host = AdjArrayUndir::gnp_no_loops(rng, 8, 0.4);
        let pattern = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);

        let vf2 = Vf2::monomorphism(&host, &pattern).unwrap();
        assert_eq!(strings(&vf2), strings(&vf2));
    }

    #[test]
    fn construction_errors() {
        let directed = AdjArrayIn::new(3);
        let undirected = AdjArrayUndir::new(3);
        let smaller = AdjArrayUndir::new(2);

        assert_eq!(
            Vf2::subgraph(&directed, &undirected).err(),
            Some(IsomorphismError::DirectednessMismatch {
                graph1_directed: true,
                graph2_directed: false
            })
        );
        assert_eq!(
            Vf2::isomorphism(&undirected, &smaller).err(),
            Some(IsomorphismError::VertexCountMismatch {
                graph1: 3,
                graph2: 2
            })
        );
        assert!(Vf2::subgraph(&undirected, &smaller).is_ok());
        assert!(Vf2::monomorphism(&smaller, &undirected).is_ok());
    }

    #[test]
    fn pattern_larger_than_host() {
        let host = AdjArrayUndir::new(2);
        let pattern = AdjArrayUndir::new(3);

        for problem in [Problem::InducedSubgraph, Problem::Monomorphism] {
            let vf2 = Vf2::new(&host, &pattern, problem).unwrap();
            let mut mappings = vf2.mappings();
            assert_eq!(mappings.next(), None);
            assert_eq!(mappings.calls(), 0);
        }
    }

    #[test]
    fn call_limit() {
        let mut k4 = AdjArrayUndir::new(4);
        k4.connect_clique(&[0, 1, 2, 3], false);

        let vf2 = Vf2::isomorphism(&k4, &k4)
            .unwrap()
            .with_call_limit(Some(2));
        assert_eq!(
            vf2.isomorphism_exists(),
            Err(IsomorphismError::Undecidable { call_limit: 2 })
        );

        {
            let mut mappings = vf2.mappings();
            assert_eq!(mappings.next(), None);
            assert!(mappings.limit_reached());
            assert_eq!(mappings.calls(), 2);
            assert_eq!(mappings.next(), None);
        }

        let vf2 = vf2.with_call_limit(Some(4));
        assert_eq!(vf2.isomorphism_exists(), Ok(true));
        {
            let mut mappings = vf2.mappings();
            assert!(mappings.next().is_some());
            assert!(mappings.next().is_none());
            assert!(mappings.limit_reached());
        }

        let vf2 = vf2.with_call_limit(None);
        assert_eq!(vf2.mappings().count(), 24);

        // a negative answer within the limit is still decided
        let empty = AdjArrayUndir::new(4);
        let vf2 = Vf2::isomorphism(&k4, &empty)
            .unwrap()
            .with_call_limit(Some(1));
        assert_eq!(vf2.isomorphism_exists(), Ok(false));
    }

    #[test]
    fn node_labels() {
        // path 0 - 1 - 2 - 3 with colors a b b a, pattern edge with colors a b
        let host = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let pattern = AdjArrayUndir::from_edges(2, [(0, 1)]);
        let host_colors = ['a', 'b', 'b', 'a'];
        let pattern_colors = ['a', 'b'];

        let vf2 = Vf2::subgraph(&host, &pattern)
            .unwrap()
            .with_node_equivalence(|u, v| host_colors[u as usize] == pattern_colors[v as usize]);

        assert_eq!(
            strings(&vf2),
            ["[0=0 1=1 2=~~ 3=~~]", "[0=~~ 1=~~ 2=1 3=0]"]
        );
        assert_eq!(
            Vf2::subgraph(&host, &pattern).unwrap().mappings().count(),
            6
        );
    }

    #[test]
    fn edge_labels() {
        // directed triangle with one heavy edge
        let host = AdjArrayIn::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let pattern = AdjArrayIn::from_edges(2, [(0, 1)]);
        let heavy = |e: Edge| e == Edge(1, 2);

        let vf2 = Vf2::subgraph(&host, &pattern)
            .unwrap()
            .with_edge_equivalence(|e, f| heavy(e) == (f == Edge(0, 1)));
        assert_eq!(strings(&vf2), ["[0=~~ 1=0 2=1]"]);

        let vf2 = vf2.with_node_equivalence(|u, _| u != 1);
        assert_eq!(vf2.isomorphism_exists(), Ok(false));
    }

    #[test]
    fn self_loops() {
        let looped = AdjArrayIn::from_edges(1, [(0, 0)]);
        let plain = AdjArrayIn::new(1);
        let host = AdjArrayIn::from_edges(3, [(0, 1), (2, 2)]);

        assert_eq!(strings(&Vf2::subgraph(&host, &looped).unwrap()), ["[0=~~ 1=~~ 2=0]"]);
        assert_eq!(Vf2::subgraph(&host, &plain).unwrap().mappings().count(), 2);
        assert_eq!(Vf2::monomorphism(&host, &plain).unwrap().mappings().count(), 3);
        assert_eq!(Vf2::isomorphism(&looped, &plain).unwrap().isomorphism_exists(), Ok(false));

        let undirected = AdjArrayUndir::from_edges(2, [(0, 0), (0, 1)]);
        let mut pattern = AdjArrayUndir::new(2);
        pattern.add_edges([(1, 1), (1, 0)]);
        assert_eq!(
            strings(&Vf2::isomorphism(&undirected, &pattern).unwrap()),
            ["[0=1 1=0]"]
        );
    }

    #[test]
    fn parallel_edges() {
        let mut host = AdjArrayUndir::new(3);
        host.add_multi_edges([(0, 1), (0, 1), (0, 1), (1, 2)]);
        let mut double = AdjArrayUndir::new(2);
        double.add_multi_edges([(0, 1), (0, 1)]);

        assert_eq!(Vf2::subgraph(&host, &double).unwrap().mappings().count(), 0);
        assert_eq!(Vf2::monomorphism(&host, &double).unwrap().mappings().count(), 2);

        let mut triple = AdjArrayUndir::new(2);
        triple.add_multi_edges([(1, 0), (1, 0), (0, 1)]);
        assert_eq!(Vf2::subgraph(&host, &triple).unwrap().mappings().count(), 2);

        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        for _ in 0..20 {
            let mut host = AdjArrayIn::new(5);
            let mut pattern = AdjArrayIn::new(3);
            for _ in 0..12 {
                host.add_multi_edge(rng.random_range(0..5), rng.random_range(0..5));
            }
            for _ in 0..4 {
                pattern.add_multi_edge(rng.random_range(0..3), rng.random_range(0..3));
            }

            for problem in [Problem::InducedSubgraph, Problem::Monomorphism] {
                check_against_brute_force(&host, &pattern, problem);
            }
        }
    }

    #[test]
    fn random_subgraphs_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for _ in 0..40 {
            let n1 = rng.random_range(0..8);
            let n2 = rng.random_range(0..5);
            let p = rng.random_range(0.1..0.6);

            let host = AdjArrayIn::gnp(rng, n1, p);
            let pattern = AdjArrayIn::gnp(rng, n2, p);
            for problem in [Problem::InducedSubgraph, Problem::Monomorphism] {
                check_against_brute_force(&host, &pattern, problem);
            }

            let host = AdjArrayUndir::gnp(rng, n1, p);
            let pattern = AdjArrayUndir::gnp_no_loops(rng, n2, p);
            for problem in [Problem::InducedSubgraph, Problem::Monomorphism] {
                check_against_brute_force(&host, &pattern, problem);
            }
        }
    }

    #[test]
    fn random_isomorphisms_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4321);

        for _ in 0..30 {
            let n = rng.random_range(1..7);

            let graph = AdjArrayIn::gnp(rng, n, 0.4);
            let (copy, _) = graph.randomly_relabelled(rng);
            let other = AdjArrayIn::gnp(rng, n, 0.4);
            check_against_brute_force(&graph, &copy, Problem::Isomorphism);
            check_against_brute_force(&graph, &other, Problem::Isomorphism);

            let graph = AdjArrayUndir::gnp_no_loops(rng, n, 0.5);
            let (copy, _) = graph.randomly_relabelled(rng);
            check_against_brute_force(&graph, &copy, Problem::Isomorphism);
        }
    }

    #[test]
    fn induced_subgraphs_are_found() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);

        for _ in 0..20 {
            let host = SparseAdjArrayIn::gnp_no_loops(rng, 20, 0.2);
            let mut nodes = host.vertices().collect_vec();
            nodes.shuffle(rng);
            nodes.truncate(6);

            let (pattern, mapper): (SparseAdjArrayIn, NodeMapper) = host.vertex_induced(&nodes);
            for order in [VertexOrder::Natural, VertexOrder::DegreeDescending] {
                let vf2 = Vf2::subgraph(&host, &pattern)
                    .unwrap()
                    .with_vertex_order(order);
                let mut mappings = vf2.mappings();
                assert!(mappings.has_mapping());

                // the extracted copy itself is one of the mappings
                assert!(vf2.mappings().any(|m| {
                    nodes
                        .iter()
                        .all(|&u| m.vertex_correspondence(u, true) == mapper.new_id_of(u))
                }));

                for m in mappings.take(10) {
                    for e in pattern.edges(false) {
                        assert!(m.has_edge_correspondence(e, false));
                    }
                }
            }
        }
    }
}
