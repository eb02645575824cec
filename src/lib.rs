/*!
`isographs` is a graph library centered around the **VF2** algorithm for finding
- **isomorphisms** between two graphs,
- **induced subgraph isomorphisms**: copies of a pattern as vertex-induced subgraph of a host,
- **monomorphisms**: copies of a pattern as (not necessarily induced) subgraph of a host.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

### Directed vs Undirected

We support both **directed** and **undirected** graphs:

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)` (although we normalize edges often).
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are considered distinct.

Both may contain self-loops and parallel edges. The isomorphism search respects the multiplicity of edges.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir) / [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir) (undirected)
- [`AdjArrayIn`](crate::repr::AdjArrayIn) / [`SparseAdjArrayIn`](crate::repr::SparseAdjArrayIn) (directed, storing in- and out-neighbors)

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
Alternatively, the most commonly used queries are implemented via traits on the graph itself, making them usable without configuring the algorithm beforehand.

```rust
use isographs::{prelude::*, algo::*};

let host = AdjArrayIn::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
let pattern = AdjArrayIn::from_edges(3, [(0, 1), (1, 2), (2, 0)]);

// trait on the graph
assert!(host.contains_induced_subgraph(&pattern));

// configurable inspector
let vf2 = Vf2::subgraph(&host, &pattern)
    .unwrap()
    .with_node_equivalence(|host_node, _| host_node != 0);
assert_eq!(vf2.isomorphism_exists(), Ok(false));
```

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all standard graph representations,
- [`algo`] includes the isomorphism search ([`Vf2`](crate::algo::Vf2), [`IsomorphismSearch`](crate::algo::IsomorphismSearch)) and subgraph extraction,
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles/cliques,
- [`utils`] includes the `NodeMapper` framework to map (sub-)graphs to other (sub-)graphs.

In most use-cases, `use isographs::{prelude::*, algo::*};` suffices for your needs.

# Logging

The search reports its progress through the [`log`](https://crates.io/crates/log) facade
(`debug` per search, `trace` per committed pair). No logger is installed by this crate.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `isographs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
