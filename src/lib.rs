//! # `nefasto` - Antenna Network Graphs
//!
//! Models a 2D grid of radio antennas, derives the "nefasto" (harmful)
//! interference points produced by pairs of same-frequency antennas, and
//! represents the network as a graph for adjacency queries, traversal, path
//! enumeration and proximity search.
//!
//! ## Architecture
//!
//! Leaf to root:
//!
//! 1. **Grid loading** ([`grid`]): text map -> `(symbol, row, col)` placements.
//! 2. **Antennas** ([`antenna`]): antenna list and interference derivation;
//!    [`grid::InterferenceMap`] draws both as a character matrix.
//! 3. **Graph store and builder** ([`graph::AntennaGraph`]): one vertex per
//!    antenna, a symmetric edge pair between every two antennas that share a
//!    frequency.
//! 4. **Queries**: depth-first and breadth-first traversal, simple-path
//!    enumeration, and frequency-pair proximity search.
//!
//! ### Invariants
//!
//! - An edge `i -> j` exists iff `i != j` and both vertices carry the same
//!   symbol; every edge has its reverse.
//! - `vertex_count <= capacity`; a rejected insert leaves the graph unchanged.
//! - Visit order is fully determined by adjacency order, which
//!   [`config::EdgeOrder`] fixes.
//!
//! ## Example
//!
//! ```rust
//! use nefasto::{AntennaGraph, GraphConfig};
//!
//! let graph = AntennaGraph::from_grid("A.B\n.A.\nB.A", GraphConfig::default()).unwrap();
//! assert_eq!(graph.vertex_count(), 5);
//! assert_eq!(graph.edge_count(), 8);
//!
//! assert_eq!(graph.bfs(0).unwrap(), vec![0, 2, 4]);
//! assert_eq!(graph.find_index_by_coordinates(2, 0), Some(3));
//! assert_eq!(graph.all_paths(1, 3).unwrap().count(), 1);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod antenna;
pub mod config;
pub mod error;
pub mod graph;
pub mod grid;

pub use antenna::{Antenna, AntennaList, Position};
pub use config::{EdgeOrder, GraphConfig, IndexBase};
pub use error::{GraphError, Result};
pub use graph::{AllPaths, AntennaGraph, Bfs, ClosePair, Dfs, GraphStatistics, Vertex};
pub use grid::{InterferenceMap, Placement};

// Compile-time layout checks for the hot per-vertex types.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Position>() == 2 * mem::size_of::<i32>());
    assert!(mem::size_of::<Antenna>() <= 3 * mem::size_of::<i32>());
};
