//! # Pathfinder Core
//!
//! Core traits and types for weighted, undirected route graphs.
//!
//! This crate defines the graph contract and the values that cross it:
//!
//! - [`Edge`] - One direction of a named, weighted connection
//! - [`Graph`] - Mutation, query, reachability and shortest-path operations
//! - [`GraphError`] - Contract violations raised by the operations
//!
//! Concrete graph storage lives in `pathfinder-runtime`.
//!
//! ## Quick Start
//!
//! ```rust
//! use pathfinder_core::prelude::*;
//!
//! let edge = Edge::new("Oslo", 5, "E6").unwrap();
//! assert_eq!(edge.to_string(), "to Oslo by E6 takes 5");
//!
//! // Negative weights never make it into an edge
//! assert!(Edge::new("Oslo", -1, "E6").is_err());
//! ```

pub mod edge;
pub mod error;
pub mod graph;
pub mod prelude;
