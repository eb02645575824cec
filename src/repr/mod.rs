/*!
# Graph Representations

Adjacency-array based storage backends for directed and undirected (multi-)graphs.

- [`UndirectedGraph`] stores a single neighborhood per node, see [`AdjArrayUndir`] and
  [`SparseAdjArrayUndir`].
- [`DirectedGraphIn`] stores outgoing **and** incoming neighborhoods, see [`AdjArrayIn`] and
  [`SparseAdjArrayIn`]. Incoming neighborhoods are required by the isomorphism search which
  inspects both directions of every node.

Both representations are parameterized by a [`Neighborhood`] which controls how the neighbors of a
single node are stored. Parallel edges are kept as repeated neighbors.
*/

use crate::{edge::*, node::*, ops::*};

mod directed;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;
