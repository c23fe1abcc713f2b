//! Depth-first and breadth-first traversal.
//!
//! Both are iterators yielding vertex indices; per-run visited state lives in
//! the iterator, so nothing persists across traversals.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::access::visited::VisitedFlags;
use crate::graph::basic::antenna_graph::AntennaGraph;

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertices in recursive pre-order: a vertex, then the subtree of each
/// unvisited neighbor in adjacency order. An explicit stack of
/// `(vertex, adjacency cursor)` frames replaces recursion.
pub struct Dfs<'a> {
    graph: &'a AntennaGraph,
    visited: VisitedFlags,
    stack: Vec<(usize, usize)>,
    pending: Option<usize>,
}

impl<'a> Dfs<'a> {
    /// `start` must be a valid vertex index.
    pub(crate) fn new(graph: &'a AntennaGraph, start: usize) -> Self {
        let mut visited = VisitedFlags::new(graph.vertex_count());
        visited.try_visit(start);
        Self {
            graph,
            visited,
            stack: vec![(start, 0)],
            pending: Some(start),
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            return Some(start);
        }

        let graph = self.graph;
        loop {
            let (u, cursor) = self.stack.last_mut()?;
            let nbrs = graph.adjacency(*u);
            if let Some(&v) = nbrs.get(*cursor) {
                *cursor += 1;
                if self.visited.try_visit(v) {
                    self.stack.push((v, 0));
                    return Some(v);
                }
            } else {
                self.stack.pop();
            }
        }
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Vertices are marked when enqueued and yielded when dequeued.
pub struct Bfs<'a> {
    graph: &'a AntennaGraph,
    visited: VisitedFlags,
    queue: VecDeque<usize>,
}

impl<'a> Bfs<'a> {
    /// `start` must be a valid vertex index.
    pub(crate) fn new(graph: &'a AntennaGraph, start: usize) -> Self {
        let mut visited = VisitedFlags::new(graph.vertex_count());
        let mut queue = VecDeque::new();
        visited.try_visit(start);
        queue.push_back(start);
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for &v in self.graph.adjacency(u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

impl AntennaGraph {
    /// Lazy depth-first traversal from `start`.
    ///
    /// # Errors
    /// [`GraphError::InvalidIndex`](crate::GraphError::InvalidIndex) if
    /// `start` is out of range.
    pub fn dfs_iter(&self, start: usize) -> Result<Dfs<'_>> {
        self.check_index(start)?;
        Ok(Dfs::new(self, start))
    }

    /// Lazy breadth-first traversal from `start`.
    ///
    /// # Errors
    /// [`GraphError::InvalidIndex`](crate::GraphError::InvalidIndex) if
    /// `start` is out of range.
    pub fn bfs_iter(&self, start: usize) -> Result<Bfs<'_>> {
        self.check_index(start)?;
        Ok(Bfs::new(self, start))
    }

    /// Depth-first visit order from `start`.
    ///
    /// ```rust
    /// use nefasto::{AntennaGraph, GraphConfig};
    ///
    /// let graph = AntennaGraph::from_grid("A.B\n.A.\nB.A", GraphConfig::default()).unwrap();
    /// assert_eq!(graph.dfs(2).unwrap(), vec![2, 0, 4]);
    /// ```
    ///
    /// # Errors
    /// [`GraphError::InvalidIndex`](crate::GraphError::InvalidIndex) if
    /// `start` is out of range.
    pub fn dfs(&self, start: usize) -> Result<Vec<usize>> {
        Ok(self.dfs_iter(start)?.collect())
    }

    /// Breadth-first visit order from `start`.
    ///
    /// # Errors
    /// [`GraphError::InvalidIndex`](crate::GraphError::InvalidIndex) if
    /// `start` is out of range.
    pub fn bfs(&self, start: usize) -> Result<Vec<usize>> {
        Ok(self.bfs_iter(start)?.collect())
    }

    /// Depth-first visit order from the vertex at `(row, col)`, or `None` if
    /// no vertex sits there.
    pub fn dfs_at(&self, row: i32, col: i32) -> Option<Vec<usize>> {
        let start = self.find_index_by_coordinates(row, col)?;
        Some(Dfs::new(self, start).collect())
    }

    /// Breadth-first visit order from the vertex at `(row, col)`, or `None` if
    /// no vertex sits there.
    pub fn bfs_at(&self, row: i32, col: i32) -> Option<Vec<usize>> {
        let start = self.find_index_by_coordinates(row, col)?;
        Some(Bfs::new(self, start).collect())
    }
}
