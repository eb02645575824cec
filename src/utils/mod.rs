/*!
# Utilities

Provides the `NodeMapper`-framework for mapping one graph to another (see [`NodeMapSetter`] /
[`NodeMapGetter`]). Isomorphism results implement [`NodeMapGetter`] as well.
*/

pub mod node_mapper;

pub use node_mapper::{NodeMapGetter, NodeMapInverse, NodeMapSetter, NodeMapper};
