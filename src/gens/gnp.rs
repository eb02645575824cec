use crate::gens::*;

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// Every ordered pair `(u, v)` (including loops) is considered once, so normalized-checks for
/// undirected graphs and self-loop checks are up to the caller.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not a probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let p = self.p.expect("Probability of Gnp was not set!");
        let n = self.n;

        (0..n)
            .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}
