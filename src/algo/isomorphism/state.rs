/*!
# Search State

The mutable state of a single VF2 search. Both graphs are tracked by a [`Side`] holding

- the partial mapping `core` (`INVALID_NODE` for unmatched indices),
- the depth at which an index entered the incoming/outgoing terminal set (`0` if it never did),
- the sizes of the terminal sets.

Terminal sets include matched indices. Every matched index is a member of both terminal sets, so an
unmatched terminal index exists iff the size of a set exceeds the current depth.
Since every mark records its depth, undoing a pair only has to clear the marks of exactly that depth.
*/

use std::rc::Rc;

use log::trace;

use super::*;

/// The kind of mapping the search looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Problem {
    /// Bijection preserving edges and non-edges.
    Isomorphism,
    /// Injection from the pattern into the host preserving edges and non-edges,
    /// i.e. the pattern is isomorphic to a vertex-induced subgraph of the host.
    InducedSubgraph,
    /// Injection from the pattern into the host preserving edges only.
    Monomorphism,
}

impl Problem {
    /// Can `pattern` parallel edges be mapped onto `host` parallel edges?
    #[inline]
    pub(crate) fn multiplicity_fits(self, host: NumEdges, pattern: NumEdges) -> bool {
        match self {
            Problem::Monomorphism => host >= pattern,
            Problem::Isomorphism | Problem::InducedSubgraph => host == pattern,
        }
    }

    #[inline]
    fn count_fits(self, host: NumNodes, pattern: NumNodes) -> bool {
        match self {
            Problem::Isomorphism => host == pattern,
            Problem::InducedSubgraph | Problem::Monomorphism => host >= pattern,
        }
    }
}

/// Terminal category candidate pairs are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Both,
    Out,
    In,
    Unmatched,
}

/// Incidence counts of an unmatched index towards other unmatched indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LookAhead {
    term_in: NumNodes,
    term_out: NumNodes,
    new: NumNodes,
    unmatched: NumNodes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Side {
    core: Vec<Node>,
    ins: Vec<NumNodes>,
    outs: Vec<NumNodes>,
    t_in: NumNodes,
    t_out: NumNodes,
    t_both: NumNodes,
}

impl Side {
    fn new(n: NumNodes) -> Self {
        Self {
            core: vec![INVALID_NODE; n as usize],
            ins: vec![0; n as usize],
            outs: vec![0; n as usize],
            t_in: 0,
            t_out: 0,
            t_both: 0,
        }
    }

    #[inline]
    fn is_matched(&self, i: Node) -> bool {
        self.core[i as usize] != INVALID_NODE
    }

    fn is_candidate(&self, i: Node, category: Category) -> bool {
        let (ins, outs) = (self.ins[i as usize], self.outs[i as usize]);
        !self.is_matched(i)
            && match category {
                Category::Both => ins > 0 && outs > 0,
                Category::Out => outs > 0,
                Category::In => ins > 0,
                Category::Unmatched => true,
            }
    }

    fn mark_in(&mut self, i: Node, depth: NumNodes) {
        if self.ins[i as usize] == 0 {
            self.ins[i as usize] = depth;
            self.t_in += 1;
            if self.outs[i as usize] > 0 {
                self.t_both += 1;
            }
        }
    }

    fn mark_out(&mut self, i: Node, depth: NumNodes) {
        if self.outs[i as usize] == 0 {
            self.outs[i as usize] = depth;
            self.t_out += 1;
            if self.ins[i as usize] > 0 {
                self.t_both += 1;
            }
        }
    }

    /// Clears all marks of `i` that were set at `depth`.
    fn unmark(&mut self, i: Node, depth: NumNodes) {
        if self.ins[i as usize] == depth {
            self.ins[i as usize] = 0;
            self.t_in -= 1;
            if self.outs[i as usize] > 0 {
                self.t_both -= 1;
            }
        }

        if self.outs[i as usize] == depth {
            self.outs[i as usize] = 0;
            self.t_out -= 1;
            if self.ins[i as usize] > 0 {
                self.t_both -= 1;
            }
        }
    }

    fn extend<G: MatchableGraph>(
        &mut self,
        graph: &OrderedGraph<G>,
        i: Node,
        partner: Node,
        depth: NumNodes,
    ) {
        self.core[i as usize] = partner;
        self.mark_in(i, depth);
        self.mark_out(i, depth);

        for &x in graph.in_neighbors(i) {
            self.mark_in(x, depth);
        }
        for &x in graph.out_neighbors(i) {
            self.mark_out(x, depth);
        }
    }

    fn retract<G: MatchableGraph>(&mut self, graph: &OrderedGraph<G>, i: Node, depth: NumNodes) {
        for &x in graph.in_neighbors(i).iter().chain(graph.out_neighbors(i)) {
            self.unmark(x, depth);
        }
        self.unmark(i, depth);
        self.core[i as usize] = INVALID_NODE;
    }

    fn look_ahead<G: MatchableGraph>(&self, graph: &OrderedGraph<G>, i: Node) -> LookAhead {
        let incoming: &[Node] = if graph.is_directed() {
            graph.in_neighbors(i)
        } else {
            &[]
        };

        let mut counts = LookAhead::default();
        for &x in graph.out_neighbors(i).iter().chain(incoming) {
            if x == i || self.is_matched(x) {
                continue;
            }

            let (ins, outs) = (self.ins[x as usize], self.outs[x as usize]);
            counts.unmatched += 1;
            if ins > 0 {
                counts.term_in += 1;
            }
            if outs > 0 {
                counts.term_out += 1;
            }
            if ins == 0 && outs == 0 {
                counts.new += 1;
            }
        }
        counts
    }
}

/// State of a depth-first VF2 search mapping the pattern `graph2` into the host `graph1`.
///
/// The search is driven from outside by repeatedly calling
/// [`MatchState::propose_next_pair`], [`MatchState::is_feasible_pair`], [`MatchState::add_pair`]
/// and [`MatchState::backtrack`]. All nodes are given as search indices of the respective
/// [`OrderedGraph`].
pub struct MatchState<'a, G1, G2> {
    graph1: Rc<OrderedGraph<'a, G1>>,
    graph2: Rc<OrderedGraph<'a, G2>>,
    problem: Problem,
    side1: Side,
    side2: Side,
    core_len: NumNodes,
    candidate: Option<(Node, Node)>,
    history: Vec<(Node, Node)>,
}

impl<'a, G1, G2> MatchState<'a, G1, G2>
where
    G1: MatchableGraph,
    G2: MatchableGraph,
{
    /// Creates the empty state for mapping `graph2` into `graph1`.
    pub fn new(
        graph1: Rc<OrderedGraph<'a, G1>>,
        graph2: Rc<OrderedGraph<'a, G2>>,
        problem: Problem,
    ) -> Self {
        let (n1, n2) = (graph1.number_of_nodes(), graph2.number_of_nodes());
        Self {
            graph1,
            graph2,
            problem,
            side1: Side::new(n1),
            side2: Side::new(n2),
            core_len: 0,
            candidate: None,
            history: Vec::with_capacity(n2 as usize),
        }
    }

    pub fn problem(&self) -> Problem {
        self.problem
    }

    /// Returns the number of nodes of the host and the pattern
    pub fn orders(&self) -> (NumNodes, NumNodes) {
        (self.graph1.number_of_nodes(), self.graph2.number_of_nodes())
    }

    /// Number of currently matched pairs
    pub fn depth(&self) -> NumNodes {
        self.core_len
    }

    /// The pair proposed last, if any
    pub fn candidate(&self) -> Option<(Node, Node)> {
        self.candidate
    }

    fn category(&self) -> Category {
        let d = self.core_len;
        let (s1, s2) = (&self.side1, &self.side2);
        if s1.t_both > d && s2.t_both > d {
            Category::Both
        } else if s1.t_out > d && s2.t_out > d {
            Category::Out
        } else if s1.t_in > d && s2.t_in > d {
            Category::In
        } else {
            Category::Unmatched
        }
    }

    /// Advances to the next candidate pair at the current depth and returns *true* if one exists.
    ///
    /// The pattern index of all candidates at a depth is fixed to the smallest eligible index,
    /// the host index runs in increasing index order. Once *false* is returned, the next call
    /// restarts the enumeration.
    pub fn propose_next_pair(&mut self) -> bool {
        let category = self.category();
        let n1 = self.graph1.number_of_nodes();
        let n2 = self.graph2.number_of_nodes();

        let (start1, v2) = match self.candidate {
            Some((v1, v2)) => (v1 + 1, v2),
            None => match (0..n2).find(|&i| self.side2.is_candidate(i, category)) {
                Some(v2) => (0, v2),
                None => return false,
            },
        };

        self.candidate = (start1..n1)
            .find(|&i| self.side1.is_candidate(i, category))
            .map(|v1| (v1, v2));
        self.candidate.is_some()
    }

    /// Checks whether the proposed pair can extend the current partial mapping.
    /// Returns *false* if no pair is proposed.
    pub fn is_feasible_pair<NE, EE>(&self, node_eq: &NE, edge_eq: &EE) -> bool
    where
        NE: NodeEquivalence,
        EE: EdgeEquivalence,
    {
        let Some((v1, v2)) = self.candidate else {
            return false;
        };
        let (g1, g2) = (&*self.graph1, &*self.graph2);

        if !node_eq.nodes_equivalent(g1.vertex_of(v1), g2.vertex_of(v2)) {
            return false;
        }

        let pattern_loops = g2.edge_multiplicity(v2, v2);
        if !self
            .problem
            .multiplicity_fits(g1.edge_multiplicity(v1, v1), pattern_loops)
            || (pattern_loops > 0
                && !edge_eq.edges_equivalent(g1.edge(v1, v1), g2.edge(v2, v2)))
        {
            return false;
        }

        // every pattern edge towards a matched node needs an equivalent host edge
        let edge_fits = |(a1, b1): (Node, Node), (a2, b2): (Node, Node)| {
            self.problem.multiplicity_fits(
                g1.edge_multiplicity(a1, b1),
                g2.edge_multiplicity(a2, b2),
            ) && edge_eq.edges_equivalent(g1.edge(a1, b1), g2.edge(a2, b2))
        };

        for &o2 in g2.out_neighbors(v2) {
            let o1 = self.side2.core[o2 as usize];
            if o2 != v2 && o1 != INVALID_NODE && !edge_fits((v1, o1), (v2, o2)) {
                return false;
            }
        }

        if g2.is_directed() {
            for &o2 in g2.in_neighbors(v2) {
                let o1 = self.side2.core[o2 as usize];
                if o2 != v2 && o1 != INVALID_NODE && !edge_fits((o1, v1), (o2, v2)) {
                    return false;
                }
            }
        }

        // host edges towards matched nodes must exist in the pattern as well
        if self.problem != Problem::Monomorphism {
            for &o1 in g1.out_neighbors(v1) {
                let o2 = self.side1.core[o1 as usize];
                if o1 != v1 && o2 != INVALID_NODE && !g2.has_edge(v2, o2) {
                    return false;
                }
            }

            if g1.is_directed() {
                for &o1 in g1.in_neighbors(v1) {
                    let o2 = self.side1.core[o1 as usize];
                    if o1 != v1 && o2 != INVALID_NODE && !g2.has_edge(o2, v2) {
                        return false;
                    }
                }
            }
        }

        let host = self.side1.look_ahead(g1, v1);
        let pattern = self.side2.look_ahead(g2, v2);

        self.problem.count_fits(host.term_in, pattern.term_in)
            && self.problem.count_fits(host.term_out, pattern.term_out)
            && match self.problem {
                Problem::Monomorphism => host.unmatched >= pattern.unmatched,
                Problem::Isomorphism | Problem::InducedSubgraph => {
                    self.problem.count_fits(host.new, pattern.new)
                }
            }
    }

    /// Commits the proposed pair.
    /// ** Panics if no pair is proposed **
    pub fn add_pair(&mut self) {
        let (v1, v2) = self
            .candidate
            .take()
            .expect("add_pair requires a proposed pair");

        self.core_len += 1;
        let depth = self.core_len;
        self.side1.extend(&self.graph1, v1, v2, depth);
        self.side2.extend(&self.graph2, v2, v1, depth);
        self.history.push((v1, v2));

        trace!("depth {depth}: matched host {v1} with pattern {v2}");
        debug_assert!(self.is_consistent());
    }

    /// Returns *true* if every pattern index is matched.
    pub fn is_goal(&self) -> bool {
        self.core_len == self.graph2.number_of_nodes()
    }

    /// Undoes the most recently committed pair and returns it. The undone pair becomes the
    /// proposed pair again, so the next proposal continues right after it.
    /// Returns `None` if no pair is committed.
    pub fn backtrack(&mut self) -> Option<(Node, Node)> {
        let (v1, v2) = self.history.pop()?;

        let depth = self.core_len;
        self.side1.retract(&self.graph1, v1, depth);
        self.side2.retract(&self.graph2, v2, depth);
        self.core_len -= 1;
        self.candidate = Some((v1, v2));

        trace!("depth {depth}: released host {v1} and pattern {v2}");
        debug_assert!(self.is_consistent());
        Some((v1, v2))
    }

    /// Snapshot of the current partial mapping.
    pub fn to_mapping(&self) -> GraphMapping<'a, G1, G2> {
        GraphMapping::new(
            Rc::clone(&self.graph1),
            Rc::clone(&self.graph2),
            self.side1.core.clone().into_boxed_slice(),
            self.side2.core.clone().into_boxed_slice(),
        )
    }

    fn is_consistent(&self) -> bool {
        let matched = self
            .side1
            .core
            .iter()
            .enumerate()
            .filter(|(_, j)| **j != INVALID_NODE)
            .map(|(i, &j)| (self.side2.core[j as usize] == i as Node) as NumNodes)
            .sum::<NumNodes>();

        matched == self.core_len
            && self.history.len() == self.core_len as usize
            && self.side2.core.iter().filter(|&&i| i != INVALID_NODE).count()
                == self.core_len as usize
    }
}
