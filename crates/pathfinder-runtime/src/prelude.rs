//! Pathfinder Runtime Prelude — the core prelude plus the runtime types.
//!
//! ```rust
//! use pathfinder_runtime::prelude::*;
//! ```

pub use pathfinder_core::prelude::*;

pub use crate::city::City;
pub use crate::list_graph::ListGraph;
pub use crate::map_file::{MapFile, MapFileError};
