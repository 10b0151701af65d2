//! Error types for graph operations.
//!
//! Every contract violation is reported to the caller as a [`GraphError`];
//! nothing is retried or recovered internally. Outcomes that are a normal part
//! of the contract (no edge between two nodes, no path) are values, not errors.

use thiserror::Error;

use crate::edge::{Weight, MAX_WEIGHT};

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur during graph operations.
///
/// Nodes are carried in their `Debug` rendering so the error stays independent
/// of the node type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A referenced node is not part of the graph.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// A weight outside `0..=MAX_WEIGHT` was supplied.
    #[error("Invalid weight: {0} (must be between 0 and {max})", max = MAX_WEIGHT)]
    InvalidWeight(Weight),

    /// The two nodes already share an edge.
    #[error("Edge already exists: {0} -- {1}")]
    AlreadyConnected(String, String),

    /// The two nodes share no edge.
    #[error("Edge not found: {0} -- {1}")]
    EdgeNotFound(String, String),

    /// A node cannot be connected to itself.
    #[error("Cannot connect a node to itself: {0}")]
    SelfLoop(String),
}

// Convenience constructors
impl GraphError {
    pub fn node_not_found(node: impl Into<String>) -> Self {
        GraphError::NodeNotFound(node.into())
    }

    pub fn already_connected(a: impl Into<String>, b: impl Into<String>) -> Self {
        GraphError::AlreadyConnected(a.into(), b.into())
    }

    pub fn edge_not_found(a: impl Into<String>, b: impl Into<String>) -> Self {
        GraphError::EdgeNotFound(a.into(), b.into())
    }

    pub fn self_loop(node: impl Into<String>) -> Self {
        GraphError::SelfLoop(node.into())
    }

    /// True for the "referenced node is absent" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NodeNotFound(_))
    }
}
