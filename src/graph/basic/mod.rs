//! Antenna graph store and algorithms.
//!
//! The store and builder live in `antenna_graph`; each query family adds an
//! `impl AntennaGraph` block in its own module.

pub mod algorithms;
pub mod antenna_graph;
pub mod paths;
pub mod proximity;

pub use algorithms::{Bfs, Dfs};
pub use antenna_graph::{AntennaGraph, GraphStatistics, Vertex};
pub use paths::AllPaths;
pub use proximity::ClosePair;
