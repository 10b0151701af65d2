//! # Pathfinder Runtime
//!
//! Concrete graph storage and the map layer built on it.
//!
//! - [`ListGraph`](list_graph::ListGraph) implements the core `Graph` trait on
//!   top of petgraph
//! - [`City`](city::City) is the node type of a map
//! - [`map_file`] reads and writes the flat `.graph` map format

pub mod city;
pub mod list_graph;
pub mod map_file;
pub mod prelude;
