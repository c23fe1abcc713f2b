//! The antenna network as a graph.
//!
//! - `basic`: vertex/edge store, builder and the query algorithms
//! - `report`: text renderings of vertices, edges, traversals, paths and pairs

pub mod basic;
pub mod report;
pub(crate) mod access;

pub use basic::{AllPaths, AntennaGraph, Bfs, ClosePair, Dfs, GraphStatistics, Vertex};
