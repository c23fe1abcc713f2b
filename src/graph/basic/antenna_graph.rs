//! Vertex/edge store for the antenna network, plus the builder that connects
//! same-frequency antennas.
//!
//! Vertices are identified by their insertion index, which stays stable for
//! the graph's lifetime (there is no removal). Adjacency is a `Vec<usize>` per
//! vertex whose order is fixed by [`EdgeOrder`]; all traversals follow it.

use std::path::Path;

use serde::Serialize;

use crate::antenna::{interference_points, Antenna, Position};
use crate::config::{EdgeOrder, GraphConfig};
use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;
use crate::grid;

/// A graph vertex: one antenna and its outgoing adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    antenna: Antenna,
    adjacency: Vec<usize>,
}

impl Vertex {
    fn new(antenna: Antenna) -> Self {
        Self {
            antenna,
            adjacency: Vec::new(),
        }
    }

    /// Frequency symbol.
    #[inline]
    pub fn symbol(&self) -> char {
        self.antenna.symbol
    }

    /// Grid position.
    #[inline]
    pub fn position(&self) -> Position {
        self.antenna.position
    }

    /// Row number.
    #[inline]
    pub fn row(&self) -> i32 {
        self.antenna.position.row
    }

    /// Column number.
    #[inline]
    pub fn col(&self) -> i32 {
        self.antenna.position.col
    }

    /// The antenna this vertex stands for.
    #[inline]
    pub fn antenna(&self) -> &Antenna {
        &self.antenna
    }

    /// Neighbor indices in adjacency order.
    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        &self.adjacency
    }
}

/// An antenna network graph.
///
/// Built once (vertices in row-major order, then edges in a single pass) and
/// then queried read-only.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert_vertex` | \(O(1)\) amortized | Fails at the soft capacity |
/// | `insert_edge` | \(O(\text{out-degree})\) | Skips existing edges |
/// | `build_edges_by_symbol` | \(O(n^2)\) | Compares every vertex pair |
/// | `find_index_by_coordinates` | \(O(n)\) | Linear scan |
/// | `dfs` / `bfs` | \(O(n + m)\) | Explicit stack / queue |
/// | `all_paths` | exponential | Lazy backtracking |
/// | `close_pairs` | \(O(n^2)\) | Brute force |
#[derive(Debug, Clone)]
pub struct AntennaGraph {
    vertices: Vec<Vertex>,
    config: GraphConfig,
}

impl Default for AntennaGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl AntennaGraph {
    /// Creates an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: Vec::new(),
            config,
        }
    }

    /// Creates a graph and loads a text map into it.
    pub fn from_grid(text: &str, config: GraphConfig) -> Result<Self> {
        let mut graph = Self::with_config(config);
        graph.load_from_grid(text)?;
        Ok(graph)
    }

    /// Creates a graph from a map file.
    pub fn from_path(path: impl AsRef<Path>, config: GraphConfig) -> Result<Self> {
        let mut graph = Self::with_config(config);
        graph.load_from_path(path)?;
        Ok(graph)
    }

    /// The active configuration.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Maximum number of vertices accepted.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `index`, if any.
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterates the antennas in vertex order.
    pub fn antennas(&self) -> impl Iterator<Item = &Antenna> + '_ {
        self.vertices.iter().map(Vertex::antenna)
    }

    /// Appends a vertex with empty adjacency and returns its index.
    ///
    /// Duplicate coordinates are accepted as distinct vertices.
    ///
    /// # Errors
    /// [`GraphError::CapacityExceeded`] when the graph already holds
    /// `capacity` vertices; the graph is not modified.
    pub fn insert_vertex(&mut self, symbol: char, row: i32, col: i32) -> Result<usize> {
        if self.vertices.len() >= self.config.capacity {
            tracing::warn!(capacity = self.config.capacity, symbol = %symbol, row, col, "vertex rejected");
            return Err(GraphError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(Antenna::new(symbol, row, col)));
        Ok(idx)
    }

    /// Adds a directed edge `source -> dest` if it is not already present.
    ///
    /// Returns `true` if the edge was added. Placement in the adjacency list
    /// follows the configured [`EdgeOrder`].
    ///
    /// # Errors
    /// [`GraphError::InvalidIndex`] if either endpoint is out of range.
    pub fn insert_edge(&mut self, source: usize, dest: usize) -> Result<bool> {
        self.check_index(source)?;
        self.check_index(dest)?;
        Ok(self.link(source, dest))
    }

    fn link(&mut self, source: usize, dest: usize) -> bool {
        let nbrs = &mut self.vertices[source].adjacency;
        match self.config.edge_order {
            EdgeOrder::Sorted => match nbrs.binary_search(&dest) {
                Ok(_) => false,
                Err(pos) => {
                    nbrs.insert(pos, dest);
                    true
                }
            },
            EdgeOrder::Prepend => {
                if nbrs.contains(&dest) {
                    false
                } else {
                    nbrs.insert(0, dest);
                    true
                }
            }
        }
    }

    /// Connects every pair of distinct vertices that share a symbol with a
    /// pair of directed edges.
    ///
    /// Existing adjacency is discarded first, so the result depends only on
    /// the vertices. Pairs are visited in ascending `(i, j)` order, which makes
    /// [`EdgeOrder::Prepend`] adjacency descending.
    pub fn build_edges_by_symbol(&mut self) {
        for vertex in &mut self.vertices {
            vertex.adjacency.clear();
        }

        let n = self.vertices.len();
        let mut pairs = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.vertices[i].symbol() == self.vertices[j].symbol() {
                    self.link(i, j);
                    self.link(j, i);
                    pairs += 1;
                }
            }
        }
        tracing::debug!(vertices = n, pairs, "built same-symbol edges");
    }

    /// Loads a text map: inserts a vertex per placement, then builds edges.
    ///
    /// Returns the number of vertices added.
    ///
    /// # Errors
    /// [`GraphError::CapacityExceeded`] if the map does not fit. Vertices
    /// added by this call are removed again, leaving the graph as it was.
    pub fn load_from_grid(&mut self, text: &str) -> Result<usize> {
        let before = self.vertices.len();
        let placements = grid::parse_grid(text, self.config.empty_marker, self.config.index_base);
        for placement in placements {
            if let Err(err) = self.insert_vertex(placement.symbol, placement.row, placement.col) {
                self.vertices.truncate(before);
                tracing::warn!(kept = before, "grid load rolled back");
                return Err(err);
            }
        }

        self.build_edges_by_symbol();
        let added = self.vertices.len() - before;
        tracing::info!(added, vertices = self.vertices.len(), "loaded grid");
        Ok(added)
    }

    /// Reads a map file and loads it with [`load_from_grid`](Self::load_from_grid).
    ///
    /// # Errors
    /// [`GraphError::Io`] if the file cannot be read (the graph is untouched),
    /// or any error of `load_from_grid`.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let text = grid::read_grid(path)?;
        self.load_from_grid(&text)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            tracing::warn!(index, vertex_count = self.vertices.len(), "vertex index out of range");
            Err(GraphError::InvalidIndex {
                index,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Adjacency of a vertex known to be in range.
    #[inline]
    pub(crate) fn adjacency(&self, index: usize) -> &[usize] {
        &self.vertices[index].adjacency
    }

    /// Returns the neighbors of `vertex` in adjacency order.
    ///
    /// # Errors
    /// [`GraphError::InvalidIndex`] if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> Result<&[usize]> {
        self.check_index(vertex)?;
        Ok(self.adjacency(vertex))
    }

    /// Returns the out-degree of `vertex`.
    ///
    /// # Errors
    /// [`GraphError::InvalidIndex`] if `vertex` is out of range.
    pub fn out_degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.neighbors(vertex)?.len())
    }

    /// Checks if the edge `from -> to` exists. Out-of-range indices have no edges.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|v| v.adjacency.contains(&to))
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.adjacency.len()).sum()
    }

    /// Index of the first vertex at `(row, col)`, if any.
    pub fn find_index_by_coordinates(&self, row: i32, col: i32) -> Option<usize> {
        let target = Position::new(row, col);
        self.vertices.iter().position(|v| v.position() == target)
    }

    /// Labels every vertex with the smallest vertex index of its connected
    /// component.
    pub fn connected_components(&self) -> Vec<usize> {
        let n = self.vertices.len();
        let mut component = vec![usize::MAX; n];
        let mut visited = VisitedFlags::new(n);
        let mut queue = std::collections::VecDeque::new();

        for start in 0..n {
            if !visited.try_visit(start) {
                continue;
            }
            component[start] = start;
            queue.push_back(start);
            while let Some(u) = queue.pop_front() {
                for &v in self.adjacency(u) {
                    if visited.try_visit(v) {
                        component[v] = start;
                        queue.push_back(v);
                    }
                }
            }
        }

        component
    }

    /// Interference points of the graph's antennas, in vertex order.
    pub fn interference_points(&self) -> Vec<Position> {
        interference_points(self.antennas())
    }

    /// Computes basic graph statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();

        let mut degrees: Vec<usize> = self.vertices.iter().map(|v| v.adjacency.len()).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (0, 0),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };

        let mut components = self.connected_components();
        components.sort_unstable();
        components.dedup();

        #[allow(clippy::cast_precision_loss)]
        let average_degree = if vertex_count == 0 {
            0.0
        } else {
            edge_count as f64 / vertex_count as f64
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            component_count: components.len(),
            min_degree,
            max_degree,
            median_degree,
            average_degree,
        }
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree \(= m/n\).
    pub average_degree: f64,
}
