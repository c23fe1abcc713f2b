//! Proximity queries between two frequency classes.

use serde::Serialize;

use crate::graph::basic::antenna_graph::AntennaGraph;

/// Two vertices within a distance bound of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClosePair {
    /// Vertex carrying the first symbol.
    pub first: usize,
    /// Vertex carrying the second symbol.
    pub second: usize,
    /// Euclidean distance between their positions.
    pub distance: f64,
}

impl AntennaGraph {
    /// Finds every ordered pair `(a, b)` where `a` has `symbol_a`, `b` has
    /// `symbol_b` and their distance is at most `max_distance`.
    ///
    /// Brute force over all pairs. Pairs come out ordered by `a`, then by `b`.
    /// A vertex paired with itself (possible when the symbols are equal) is
    /// reported only if [`GraphConfig::include_self_pairs`] is set. A NaN bound
    /// matches nothing.
    ///
    /// [`GraphConfig::include_self_pairs`]: crate::GraphConfig::include_self_pairs
    pub fn close_pairs(&self, symbol_a: char, symbol_b: char, max_distance: f64) -> Vec<ClosePair> {
        let include_self = self.config().include_self_pairs;
        let vertices = self.vertices();
        let mut pairs = Vec::new();

        for (first, a) in vertices.iter().enumerate().filter(|(_, v)| v.symbol() == symbol_a) {
            for (second, b) in vertices.iter().enumerate().filter(|(_, v)| v.symbol() == symbol_b) {
                if first == second && !include_self {
                    continue;
                }
                let distance = a.position().distance(b.position());
                if distance <= max_distance {
                    pairs.push(ClosePair {
                        first,
                        second,
                        distance,
                    });
                }
            }
        }

        tracing::debug!(
            symbol_a = %symbol_a,
            symbol_b = %symbol_b,
            max_distance,
            found = pairs.len(),
            "proximity query"
        );
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphConfig;

    const MAP: &str = "A.B\n.A.\nB.A";

    #[test]
    fn test_self_pairs_excluded_by_default() {
        let graph = AntennaGraph::from_grid(MAP, GraphConfig::default()).unwrap();
        assert!(graph.close_pairs('A', 'A', 0.0).is_empty());
    }

    #[test]
    fn test_self_pairs_included_when_configured() {
        let graph = AntennaGraph::from_grid(MAP, GraphConfig::default().with_self_pairs(true)).unwrap();
        let pairs = graph.close_pairs('A', 'A', 0.0);
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|p| p.first == p.second && p.distance.abs() < f64::EPSILON));
    }

    #[test]
    fn test_cross_symbol_pairs_within_bound() {
        let graph = AntennaGraph::from_grid(MAP, GraphConfig::default()).unwrap();
        let pairs = graph.close_pairs('A', 'B', 1.5);
        // The centre A (index 2) is sqrt(2) from both Bs; corner As are 2 away.
        let found: Vec<(usize, usize)> = pairs.iter().map(|p| (p.first, p.second)).collect();
        assert_eq!(found, vec![(2, 1), (2, 3)]);
        assert!((pairs[0].distance - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_ordered_pairs_are_not_deduplicated() {
        let graph = AntennaGraph::from_grid(MAP, GraphConfig::default()).unwrap();
        let pairs = graph.close_pairs('A', 'A', 1.5);
        let found: Vec<(usize, usize)> = pairs.iter().map(|p| (p.first, p.second)).collect();
        assert_eq!(found, vec![(0, 2), (2, 0), (2, 4), (4, 2)]);
    }

    #[test]
    fn test_bound_is_inclusive() {
        let graph = AntennaGraph::from_grid("A.B", GraphConfig::default()).unwrap();
        assert_eq!(graph.close_pairs('A', 'B', 2.0).len(), 1);
        assert!(graph.close_pairs('A', 'B', 1.999).is_empty());
    }

    #[test]
    fn test_missing_symbols_or_nan_bound() {
        let graph = AntennaGraph::from_grid(MAP, GraphConfig::default()).unwrap();
        assert!(graph.close_pairs('A', 'Z', 100.0).is_empty());
        assert!(graph.close_pairs('A', 'B', f64::NAN).is_empty());
        assert!(graph.close_pairs('A', 'B', -1.0).is_empty());
    }
}
