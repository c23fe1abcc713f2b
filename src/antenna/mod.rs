//! Antennas and the ordered antenna list.
//!
//! The list keeps the most recently inserted antenna first, which is also the
//! order interference points are derived in.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GraphConfig;
use crate::grid;

pub mod interference;

pub use interference::interference_points;

/// A grid coordinate.
///
/// Coordinates are signed so that interference points falling outside the
/// loaded map can still be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row number.
    pub row: i32,
    /// Column number.
    pub col: i32,
}

impl Position {
    /// Creates a position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Position) -> f64 {
        let dr = f64::from(self.row) - f64::from(other.row);
        let dc = f64::from(self.col) - f64::from(other.col);
        dr.hypot(dc)
    }

    /// Reflection of `self` through `pivot`, i.e. `2 * pivot - self`.
    ///
    /// Returns `None` if the reflected point falls outside the `i32` range.
    #[inline]
    pub fn reflect_through(self, pivot: Position) -> Option<Position> {
        let row = pivot.row.checked_mul(2)?.checked_sub(self.row)?;
        let col = pivot.col.checked_mul(2)?.checked_sub(self.col)?;
        Some(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An antenna: a frequency symbol placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Antenna {
    /// Frequency symbol.
    pub symbol: char,
    /// Grid position.
    pub position: Position,
}

impl Antenna {
    /// Creates an antenna.
    #[inline]
    pub const fn new(symbol: char, row: i32, col: i32) -> Self {
        Self {
            symbol,
            position: Position::new(row, col),
        }
    }
}

/// An ordered list of antennas, newest first.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(1)\) amortized | Pushes to the front |
/// | `remove` | \(O(n)\) | Linear scan by position |
/// | `iter` | \(O(n)\) | Newest to oldest |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AntennaList {
    antennas: VecDeque<Antenna>,
}

impl AntennaList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from a text map.
    ///
    /// Placements are inserted in scan order, so the last antenna of the map
    /// ends up first in the list.
    pub fn from_grid(text: &str, config: &GraphConfig) -> Self {
        let mut list = Self::new();
        for placement in grid::parse_grid(text, config.empty_marker, config.index_base) {
            list.insert(placement.symbol, placement.row, placement.col);
        }
        list
    }

    /// Inserts an antenna at the front of the list.
    pub fn insert(&mut self, symbol: char, row: i32, col: i32) {
        self.antennas.push_front(Antenna::new(symbol, row, col));
    }

    /// Removes the first antenna found at `(row, col)`.
    pub fn remove(&mut self, row: i32, col: i32) -> Option<Antenna> {
        let target = Position::new(row, col);
        let idx = self.antennas.iter().position(|a| a.position == target)?;
        self.antennas.remove(idx)
    }

    /// Number of antennas.
    pub fn len(&self) -> usize {
        self.antennas.len()
    }

    /// Returns `true` if the list holds no antennas.
    pub fn is_empty(&self) -> bool {
        self.antennas.is_empty()
    }

    /// Iterates newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Antenna> + '_ {
        self.antennas.iter()
    }

    /// Interference points derived from the antennas in list order.
    pub fn interference_points(&self) -> Vec<Position> {
        interference_points(self.iter())
    }
}

impl<'a> IntoIterator for &'a AntennaList {
    type Item = &'a Antenna;
    type IntoIter = std::collections::vec_deque::Iter<'a, Antenna>;

    fn into_iter(self) -> Self::IntoIter {
        self.antennas.iter()
    }
}

impl fmt::Display for AntennaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "antenna list is empty");
        }
        writeln!(f, "Frequency | Row | Col")?;
        writeln!(f, "---------------------")?;
        for antenna in self {
            writeln!(
                f,
                "    {}     | {} | {}",
                antenna.symbol, antenna.position.row, antenna.position.col
            )?;
        }
        Ok(())
    }
}
