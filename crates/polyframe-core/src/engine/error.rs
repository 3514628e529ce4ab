use thiserror::Error;

use crate::core::models::graph::GraphError;
use crate::core::models::unit::UnitTopologyError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Graph operation failed: {source}")]
    Graph {
        #[from]
        source: GraphError,
    },

    #[error("Invalid polymer unit topology: {source}")]
    UnitTopology {
        #[from]
        source: UnitTopologyError,
    },

    #[error("Edit cannot be satisfied against current graph state: {detail}")]
    EditInconsistency { detail: String },

    #[error("Traversal output needs {needed} slots but only {capacity} are available")]
    CapacityExceeded { needed: usize, capacity: usize },
}
