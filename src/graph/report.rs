//! Human-readable listings.
//!
//! Each listing borrows the graph plus the query result and renders through
//! `Display`, one line per item:
//!
//! | Listing | Line format |
//! |---------|-------------|
//! | [`VertexListing`] | `[index] symbol (row, col)` |
//! | [`EdgeListing`] | `[i] S (r, c) is linked to:` then `   -> [j] S (r, c)` |
//! | [`TraversalListing`] | `(row, col) - symbol` |
//! | [`PathListing`] | `Path n:` then traversal lines indented |
//! | [`PairListing`] | `A (r, c) <-> B (r, c): d.dd` |

use std::fmt;

use crate::graph::basic::{AntennaGraph, ClosePair, Vertex};

fn vertex_line(f: &mut fmt::Formatter<'_>, index: usize, v: &Vertex) -> fmt::Result {
    write!(f, "[{index}] {} {}", v.symbol(), v.position())
}

fn visit_line(f: &mut fmt::Formatter<'_>, v: &Vertex) -> fmt::Result {
    write!(f, "{} - {}", v.position(), v.symbol())
}

/// Every vertex with its index.
pub struct VertexListing<'a>(pub &'a AntennaGraph);

impl fmt::Display for VertexListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, v) in self.0.vertices().iter().enumerate() {
            vertex_line(f, index, v)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Adjacency grouped by source vertex.
pub struct EdgeListing<'a>(pub &'a AntennaGraph);

impl fmt::Display for EdgeListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices = self.0.vertices();
        for (index, v) in vertices.iter().enumerate() {
            vertex_line(f, index, v)?;
            writeln!(f, " is linked to:")?;
            if v.neighbors().is_empty() {
                writeln!(f, "   (no links)")?;
            }
            for &dest in v.neighbors() {
                write!(f, "   -> ")?;
                vertex_line(f, dest, &vertices[dest])?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A traversal visit order.
pub struct TraversalListing<'a> {
    /// Graph the order was computed on.
    pub graph: &'a AntennaGraph,
    /// Visited vertex indices.
    pub order: &'a [usize],
}

impl fmt::Display for TraversalListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices = self.graph.vertices();
        for &index in self.order {
            visit_line(f, &vertices[index])?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Enumerated paths, one block each.
pub struct PathListing<'a> {
    /// Graph the paths were found in.
    pub graph: &'a AntennaGraph,
    /// Paths as vertex index sequences.
    pub paths: &'a [Vec<usize>],
}

impl fmt::Display for PathListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices = self.graph.vertices();
        for (n, path) in self.paths.iter().enumerate() {
            writeln!(f, "Path {}:", n + 1)?;
            for &index in path {
                write!(f, "  ")?;
                visit_line(f, &vertices[index])?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Proximity query results with distances to two decimal places.
pub struct PairListing<'a> {
    /// Graph the pairs were found in.
    pub graph: &'a AntennaGraph,
    /// Matching pairs.
    pub pairs: &'a [ClosePair],
}

impl fmt::Display for PairListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices = self.graph.vertices();
        for pair in self.pairs {
            let a = &vertices[pair.first];
            let b = &vertices[pair.second];
            writeln!(
                f,
                "{} {} <-> {} {}: {:.2}",
                a.symbol(),
                a.position(),
                b.symbol(),
                b.position(),
                pair.distance
            )?;
        }
        Ok(())
    }
}
