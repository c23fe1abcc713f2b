//! Exhaustive simple-path enumeration.
//!
//! Backtracking search: a vertex is marked while it is on the current path and
//! unmarked when the search leaves it, so it can appear again on a later path
//! through a different branch. The number of paths can grow exponentially;
//! the iterator is lazy so callers can stop early (`take`, `find`, ...).

use crate::error::Result;
use crate::graph::access::visited::VisitedFlags;
use crate::graph::basic::antenna_graph::AntennaGraph;

/// Iterator over every simple path between two vertices.
///
/// Paths come out in the order a recursive search would find them: neighbors
/// are tried in adjacency order and the destination is never expanded.
pub struct AllPaths<'a> {
    graph: &'a AntennaGraph,
    destination: usize,
    visited: VisitedFlags,
    path: Vec<usize>,
    cursors: Vec<usize>,
    entered: bool,
}

impl<'a> AllPaths<'a> {
    /// `origin` and `destination` must be valid vertex indices.
    pub(crate) fn new(graph: &'a AntennaGraph, origin: usize, destination: usize) -> Self {
        let mut visited = VisitedFlags::new(graph.vertex_count());
        visited.try_visit(origin);
        Self {
            graph,
            destination,
            visited,
            path: vec![origin],
            cursors: vec![0],
            entered: true,
        }
    }

    fn backtrack(&mut self) {
        if let Some(v) = self.path.pop() {
            self.cursors.pop();
            self.visited.unmark(v);
        }
    }
}

impl Iterator for AllPaths<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let top = *self.path.last()?;

            if std::mem::take(&mut self.entered) && top == self.destination {
                let found = self.path.clone();
                self.backtrack();
                return Some(found);
            }

            let cursor = self.cursors.last_mut()?;
            match graph.adjacency(top).get(*cursor) {
                Some(&v) => {
                    *cursor += 1;
                    if self.visited.try_visit(v) {
                        self.path.push(v);
                        self.cursors.push(0);
                        self.entered = true;
                    }
                }
                None => self.backtrack(),
            }
        }
    }
}

impl AntennaGraph {
    /// Enumerates every simple path from `origin` to `destination`.
    ///
    /// `origin == destination` yields the single one-vertex path. Unreachable
    /// destinations yield nothing.
    ///
    /// ```rust
    /// use nefasto::{AntennaGraph, GraphConfig};
    ///
    /// let graph = AntennaGraph::from_grid("AAA", GraphConfig::default()).unwrap();
    /// let paths: Vec<_> = graph.all_paths(0, 2).unwrap().collect();
    /// assert_eq!(paths, vec![vec![0, 1, 2], vec![0, 2]]);
    /// ```
    ///
    /// # Errors
    /// [`GraphError::InvalidIndex`](crate::GraphError::InvalidIndex) if either
    /// endpoint is out of range.
    pub fn all_paths(&self, origin: usize, destination: usize) -> Result<AllPaths<'_>> {
        self.check_index(origin)?;
        self.check_index(destination)?;
        Ok(AllPaths::new(self, origin, destination))
    }
}
