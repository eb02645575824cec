/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly use node values
as indices into the dense per-node arrays of the isomorphism search.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
///
/// Used as the *unmatched* sentinel in the core arrays of the isomorphism search.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
