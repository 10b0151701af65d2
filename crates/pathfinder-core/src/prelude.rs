//! Pathfinder Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use pathfinder_core::prelude::*;
//! ```

pub use crate::edge::{validate_weight, Edge, Weight, MAX_WEIGHT};
pub use crate::error::{GraphError, Result};
pub use crate::graph::{path_weight, Graph};
