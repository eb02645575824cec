/*!
# Graph Algorithms

This module provides the **graph matching** algorithms built on top of the graph representations
in this crate. All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use isographs::algo::*;
```
and gain access to the VF2 isomorphism, induced subgraph isomorphism and monomorphism search as
well as vertex-induced subgraph extraction.
If possible, results are provided as **iterators**, making it easy to consume them lazily.
*/

mod isomorphism;
mod subgraph;

use crate::{prelude::*, utils::*};

pub use isomorphism::*;
pub use subgraph::*;
