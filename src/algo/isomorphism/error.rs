use thiserror::Error;

use crate::node::NumNodes;

/// Errors reported by the [`Vf2`](super::Vf2) inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IsomorphismError {
    /// A directed graph cannot be matched against an undirected one.
    #[error(
        "cannot match {} graph against {} graph",
        orientation(.graph1_directed),
        orientation(.graph2_directed)
    )]
    DirectednessMismatch {
        graph1_directed: bool,
        graph2_directed: bool,
    },

    /// Full isomorphism was requested for graphs of different order.
    #[error("graphs with {graph1} and {graph2} nodes cannot be isomorphic")]
    VertexCountMismatch { graph1: NumNodes, graph2: NumNodes },

    /// The search ran into its call limit before finding a mapping.
    #[error("no mapping found within the limit of {call_limit} committed pairs")]
    Undecidable { call_limit: usize },
}

fn orientation(directed: &bool) -> &'static str {
    if *directed { "a directed" } else { "an undirected" }
}
