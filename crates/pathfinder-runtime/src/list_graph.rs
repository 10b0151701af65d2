//! Concrete implementation of the Graph trait using petgraph.
//!
//! Nodes live in a petgraph `StableGraph` with a HashMap index for O(1)
//! lookup by identity. Each undirected connection is a single edge record in
//! the backing store; the two directions `a -> b` and `b -> a` are views of
//! that record, so they can never disagree on name or weight.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::{Dfs, EdgeRef};
use pathfinder_core::edge::{validate_weight, Edge, Weight};
use pathfinder_core::error::{GraphError, Result};
use pathfinder_core::graph::Graph;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

/// The stored half of a connection: name and weight without a destination.
type Connection = Edge<()>;

/// Petgraph-backed adjacency-list graph.
#[derive(Debug, Clone)]
pub struct ListGraph<T> {
    graph: StableUnGraph<T, Connection>,
    /// Map from node identity to petgraph's internal index.
    node_index: HashMap<T, NodeIndex>,
}

impl<T> ListGraph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            graph: StableUnGraph::default(),
            node_index: HashMap::new(),
        }
    }

    /// The stored node equal to `node`, if present.
    ///
    /// Useful when identity covers only part of `T` and the caller holds a
    /// lookup key rather than the full value.
    pub fn node(&self, node: &T) -> Option<&T> {
        self.node_index.get(node).map(|&idx| &self.graph[idx])
    }

    fn index_of(&self, node: &T) -> Result<NodeIndex> {
        self.node_index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::node_not_found(format!("{node:?}")))
    }

    fn index_pair(&self, a: &T, b: &T) -> Result<(NodeIndex, NodeIndex)> {
        Ok((self.index_of(a)?, self.index_of(b)?))
    }

    /// The connection record as seen travelling towards `destination`.
    fn edge_towards(&self, edge: EdgeIndex, destination: NodeIndex) -> Edge<T> {
        self.graph[edge].with_destination(self.graph[destination].clone())
    }

    fn other_end(node: NodeIndex, source: NodeIndex, target: NodeIndex) -> NodeIndex {
        if source == node {
            target
        } else {
            source
        }
    }
}

impl<T> Default for ListGraph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> for ListGraph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn add(&mut self, node: T) {
        if self.node_index.contains_key(&node) {
            return;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_index.insert(node, idx);
    }

    fn remove(&mut self, node: &T) -> Result<()> {
        let idx = self.index_of(node)?;
        // StableGraph drops every incident edge along with the node.
        self.graph.remove_node(idx);
        self.node_index.remove(node);
        Ok(())
    }

    fn connect(&mut self, a: &T, b: &T, name: &str, weight: Weight) -> Result<()> {
        let (a_idx, b_idx) = self.index_pair(a, b)?;
        let record = Edge::new((), weight, name)?;
        if a_idx == b_idx {
            return Err(GraphError::self_loop(format!("{a:?}")));
        }
        if self.graph.find_edge(a_idx, b_idx).is_some() {
            return Err(GraphError::already_connected(
                format!("{a:?}"),
                format!("{b:?}"),
            ));
        }

        self.graph.add_edge(a_idx, b_idx, record);
        Ok(())
    }

    fn disconnect(&mut self, a: &T, b: &T) -> Result<()> {
        let (a_idx, b_idx) = self.index_pair(a, b)?;
        let edge_idx = self
            .graph
            .find_edge(a_idx, b_idx)
            .ok_or_else(|| GraphError::edge_not_found(format!("{a:?}"), format!("{b:?}")))?;
        self.graph.remove_edge(edge_idx);
        Ok(())
    }

    fn set_connection_weight(&mut self, a: &T, b: &T, weight: Weight) -> Result<()> {
        let (a_idx, b_idx) = self.index_pair(a, b)?;
        validate_weight(weight)?;
        let record = self
            .graph
            .find_edge(a_idx, b_idx)
            .and_then(|edge_idx| self.graph.edge_weight_mut(edge_idx))
            .ok_or_else(|| GraphError::edge_not_found(format!("{a:?}"), format!("{b:?}")))?;
        // One record backs both directions, so both ends see the change together.
        record.set_weight(weight)
    }

    fn nodes(&self) -> HashSet<T> {
        self.node_index.keys().cloned().collect()
    }

    fn edges_from(&self, node: &T) -> Result<Vec<Edge<T>>> {
        let idx = self.index_of(node)?;
        Ok(self
            .graph
            .edges(idx)
            .map(|edge| {
                let other = Self::other_end(idx, edge.source(), edge.target());
                self.edge_towards(edge.id(), other)
            })
            .collect())
    }

    fn edge_between(&self, a: &T, b: &T) -> Result<Option<Edge<T>>> {
        let (a_idx, b_idx) = self.index_pair(a, b)?;
        Ok(self
            .graph
            .find_edge(a_idx, b_idx)
            .map(|edge_idx| self.edge_towards(edge_idx, b_idx)))
    }

    fn path_exists(&self, from: &T, to: &T) -> bool {
        let (Some(&from_idx), Some(&to_idx)) = (self.node_index.get(from), self.node_index.get(to))
        else {
            return false;
        };

        let mut dfs = Dfs::new(&self.graph, from_idx);
        while let Some(visited) = dfs.next(&self.graph) {
            if visited == to_idx {
                return true;
            }
        }
        false
    }

    /// Label-correcting relaxation over a FIFO queue.
    ///
    /// A node is queued again every time its distance strictly improves, so
    /// late improvements still propagate. With non-negative weights the queue
    /// always drains; a negative cycle would keep it busy forever. Among paths
    /// of equal cost the first one discovered is kept.
    fn path(&self, from: &T, to: &T) -> Option<Vec<Edge<T>>> {
        let from_idx = *self.node_index.get(from)?;
        let to_idx = *self.node_index.get(to)?;

        // node -> (predecessor, edge used to arrive); the start has none
        let mut previous: HashMap<NodeIndex, Option<(NodeIndex, EdgeIndex)>> = HashMap::new();
        let mut distance: HashMap<NodeIndex, Weight> = HashMap::new();
        let mut queue = VecDeque::new();

        previous.insert(from_idx, None);
        distance.insert(from_idx, 0);
        queue.push_back(from_idx);

        while let Some(current) = queue.pop_front() {
            let Some(&base) = distance.get(&current) else {
                continue;
            };
            for edge in self.graph.edges(current) {
                let next = Self::other_end(current, edge.source(), edge.target());
                // weights are capped, so a simple path's total cannot overflow
                let candidate = base + edge.weight().weight();
                let improves = distance
                    .get(&next)
                    .map_or(true, |&known| candidate < known);
                if improves {
                    distance.insert(next, candidate);
                    previous.insert(next, Some((current, edge.id())));
                    queue.push_back(next);
                }
            }
        }

        previous.get(&to_idx)?;

        let mut path = Vec::new();
        let mut current = to_idx;
        while let Some(&Some((prev, edge_idx))) = previous.get(&current) {
            path.push(self.edge_towards(edge_idx, current));
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    fn contains(&self, node: &T) -> bool {
        self.node_index.contains_key(node)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// One line per node: `node:[edge, edge]`.
impl<T> fmt::Display for ListGraph<T>
where
    T: Clone + Eq + Hash + fmt::Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for idx in self.graph.node_indices() {
            write!(f, "{}:[", self.graph[idx])?;
            for (i, edge) in self.graph.edges(idx).enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                let other = Self::other_end(idx, edge.source(), edge.target());
                write!(f, "{}", self.edge_towards(edge.id(), other))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
