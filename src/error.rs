//! Error types for antenna graph operations.

use thiserror::Error;

/// Errors reported by graph construction and queries.
///
/// A coordinate lookup that matches nothing is not an error; those APIs return
/// `Option::None` instead.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The vertex store is full.
    #[error("vertex capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// Configured soft capacity of the store.
        capacity: usize,
    },

    /// A vertex index outside `[0, vertex_count)` was supplied.
    #[error("vertex index {index} out of range for graph with {vertex_count} vertices")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Number of vertices at the time of the call.
        vertex_count: usize,
    },

    /// The grid source could not be read.
    #[error("failed to read grid source: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
