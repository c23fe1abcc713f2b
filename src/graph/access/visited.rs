//! Per-call visited flags for graph traversals.
//!
//! Every traversal allocates its own flags sized to the graph's current vertex
//! count, so no visitation state survives between calls.

/// A dense per-vertex visited vector.
#[derive(Debug, Clone)]
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Returns `true` iff `idx` was not yet visited, marking it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        !std::mem::replace(&mut self.flags[idx], true)
    }

    /// Clears the mark on `idx` (used when backtracking).
    #[inline]
    pub(crate) fn unmark(&mut self, idx: usize) {
        self.flags[idx] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_visit_marks_once() {
        let mut visited = VisitedFlags::new(3);
        assert!(visited.try_visit(1));
        assert!(!visited.try_visit(1));
        assert!(visited.try_visit(2));
    }

    #[test]
    fn test_unmark_allows_revisit() {
        let mut visited = VisitedFlags::new(2);
        assert!(visited.try_visit(0));
        visited.unmark(0);
        assert!(visited.try_visit(0));
    }
}
