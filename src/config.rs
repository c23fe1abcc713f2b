//! Graph configuration.
//!
//! Every field has a default, so a configuration document only needs to name
//! what it changes:
//!
//! ```rust
//! use nefasto::config::{EdgeOrder, GraphConfig, IndexBase};
//!
//! let config = GraphConfig::from_json_str(r#"{ "index_base": "one", "capacity": 64 }"#).unwrap();
//! assert_eq!(config.capacity, 64);
//! assert_eq!(config.index_base, IndexBase::One);
//! assert_eq!(config.edge_order, EdgeOrder::Sorted);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default soft limit on the number of vertices in a graph.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Character marking an empty grid cell.
pub const EMPTY_MARKER: char = '.';

/// First row/column number assigned by the grid loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBase {
    /// The first row and column are numbered `0`.
    #[default]
    Zero,
    /// The first row and column are numbered `1`.
    One,
}

impl IndexBase {
    /// Offset added to a zero-based scan position.
    #[inline]
    pub fn offset(self) -> i32 {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

/// Placement policy for new adjacency entries.
///
/// Traversal visit order follows adjacency order, so this choice fixes the
/// output of DFS, BFS and path enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeOrder {
    /// Keep each adjacency list ascending by destination index.
    #[default]
    Sorted,
    /// Put the newest entry first.
    Prepend,
}

/// Tunables for an [`AntennaGraph`](crate::graph::AntennaGraph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Maximum number of vertices the store accepts.
    pub capacity: usize,
    /// Numbering of grid rows and columns.
    pub index_base: IndexBase,
    /// Adjacency insertion policy.
    pub edge_order: EdgeOrder,
    /// Grid character that denotes "no antenna".
    pub empty_marker: char,
    /// Whether proximity queries report a vertex paired with itself.
    pub include_self_pairs: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            index_base: IndexBase::Zero,
            edge_order: EdgeOrder::Sorted,
            empty_marker: EMPTY_MARKER,
            include_self_pairs: false,
        }
    }
}

impl GraphConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    /// [`GraphError::Config`](crate::GraphError::Config) on malformed JSON or
    /// unknown enum values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    /// [`GraphError::Io`](crate::GraphError::Io) if the file cannot be read,
    /// otherwise as [`from_json_str`](Self::from_json_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Sets the vertex capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the grid index base.
    #[must_use]
    pub fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    /// Sets the adjacency insertion policy.
    #[must_use]
    pub fn with_edge_order(mut self, edge_order: EdgeOrder) -> Self {
        self.edge_order = edge_order;
        self
    }

    /// Sets whether proximity queries include self-pairs.
    #[must_use]
    pub fn with_self_pairs(mut self, include: bool) -> Self {
        self.include_self_pairs = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn test_defaults_match_documented_contract() {
        let config = GraphConfig::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.index_base, IndexBase::Zero);
        assert_eq!(config.edge_order, EdgeOrder::Sorted);
        assert_eq!(config.empty_marker, '.');
        assert!(!config.include_self_pairs);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = GraphConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GraphConfig::default());
    }

    #[test]
    fn test_partial_document_overrides_named_fields() {
        let config = GraphConfig::from_json_str(
            r#"{ "edge_order": "prepend", "empty_marker": "_", "include_self_pairs": true }"#,
        )
        .unwrap();
        assert_eq!(config.edge_order, EdgeOrder::Prepend);
        assert_eq!(config.empty_marker, '_');
        assert!(config.include_self_pairs);
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_malformed_document_is_a_config_error() {
        let err = GraphConfig::from_json_str(r#"{ "edge_order": "sideways" }"#).unwrap_err();
        assert!(matches!(err, GraphError::Config(_)));
    }

    #[test]
    fn test_builder_methods_chain() {
        let config = GraphConfig::default()
            .with_capacity(5)
            .with_index_base(IndexBase::One)
            .with_edge_order(EdgeOrder::Prepend)
            .with_self_pairs(true);
        assert_eq!(config.capacity, 5);
        assert_eq!(config.index_base.offset(), 1);
        assert_eq!(config.edge_order, EdgeOrder::Prepend);
        assert!(config.include_self_pairs);
    }
}
