//! Graph — the route network contract.
//!
//! A graph owns a set of nodes and the connections between them. Every
//! connection is undirected: connecting `a` to `b` makes an edge visible from
//! both ends with the same name and weight, and at most one connection exists
//! per pair of nodes. Connection weights are never negative.

use std::collections::HashSet;

use crate::edge::{Edge, Weight};
use crate::error::Result;

/// A weighted, undirected graph over node identities of type `T`.
///
/// This is a trait rather than a concrete type so that different storage
/// backends can sit behind the same contract.
///
/// Operations that reference a missing node fail with
/// [`GraphError::NodeNotFound`](crate::error::GraphError::NodeNotFound). The two
/// search operations are lenient instead: a missing endpoint simply means
/// "unreachable".
pub trait Graph<T> {
    /// Insert a node with no connections. Adding a present node is a no-op.
    fn add(&mut self, node: T);

    /// Remove a node together with every connection touching it.
    fn remove(&mut self, node: &T) -> Result<()>;

    /// Connect two distinct, present nodes with a named, weighted edge.
    ///
    /// Fails if either node is missing, the weight is negative, `a == b`, or
    /// the pair is already connected.
    fn connect(&mut self, a: &T, b: &T, name: &str, weight: Weight) -> Result<()>;

    /// Remove the connection between two nodes.
    fn disconnect(&mut self, a: &T, b: &T) -> Result<()>;

    /// Change the weight of an existing connection, seen from both ends at once.
    fn set_connection_weight(&mut self, a: &T, b: &T, weight: Weight) -> Result<()>;

    /// Snapshot of all nodes. Changing the returned set does not touch the graph.
    fn nodes(&self) -> HashSet<T>;

    /// All edges leaving `node`.
    fn edges_from(&self, node: &T) -> Result<Vec<Edge<T>>>;

    /// The edge from `a` to `b`, or `None` when the two are not connected.
    fn edge_between(&self, a: &T, b: &T) -> Result<Option<Edge<T>>>;

    /// True if `to` can be reached from `from`. Missing nodes are unreachable.
    fn path_exists(&self, from: &T, to: &T) -> bool;

    /// Cheapest path from `from` to `to`, as edges in travel order.
    ///
    /// `None` when `to` cannot be reached (including missing endpoints).
    /// A path from a node to itself is empty.
    fn path(&self, from: &T, to: &T) -> Option<Vec<Edge<T>>>;

    /// True if the node is part of the graph.
    fn contains(&self, node: &T) -> bool;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of undirected connections.
    fn edge_count(&self) -> usize;
}

/// Total weight of a path.
///
/// Edge weights are capped at [`MAX_WEIGHT`](crate::edge::MAX_WEIGHT), so the
/// sum of any simple path fits in a [`Weight`].
pub fn path_weight<T>(path: &[Edge<T>]) -> Weight {
    path.iter().map(Edge::weight).sum()
}
