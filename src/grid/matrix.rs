//! Character-matrix rendering of antennas and interference points.

use std::fmt;

use crate::antenna::{Antenna, Position};

/// Cell character used for an interference point.
pub const INTERFERENCE_MARKER: char = '#';

/// Cell character used for an empty cell.
pub const EMPTY_CELL: char = '.';

/// Largest matrix (in cells) [`InterferenceMap::render`] will allocate.
pub const MAX_CELLS: usize = 1 << 22;

/// A dense character matrix covering the bounding box of a set of antennas and
/// interference points.
///
/// Antennas are drawn with their symbol. Interference points are drawn as `#`,
/// but only on cells no antenna occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterferenceMap {
    origin: Position,
    cells: Vec<Vec<char>>,
}

impl InterferenceMap {
    /// Renders the map.
    ///
    /// Returns `None` when there is nothing to draw, or when the bounding box
    /// would exceed [`MAX_CELLS`].
    pub fn render<'a, A>(antennas: A, points: &[Position]) -> Option<Self>
    where
        A: IntoIterator<Item = &'a Antenna>,
    {
        let antennas: Vec<&Antenna> = antennas.into_iter().collect();
        let mut all = antennas
            .iter()
            .map(|a| a.position)
            .chain(points.iter().copied());

        let first = all.next()?;
        let (min, max) = all.fold((first, first), |(lo, hi), p| {
            (
                Position::new(lo.row.min(p.row), lo.col.min(p.col)),
                Position::new(hi.row.max(p.row), hi.col.max(p.col)),
            )
        });

        let rows = span(min.row, max.row)?;
        let cols = span(min.col, max.col)?;
        if !matches!(rows.checked_mul(cols), Some(cells) if cells <= MAX_CELLS) {
            tracing::warn!(rows, cols, max_cells = MAX_CELLS, "interference map too large to draw");
            return None;
        }
        let mut map = Self {
            origin: min,
            cells: vec![vec![EMPTY_CELL; cols]; rows],
        };

        for antenna in &antennas {
            if let Some(cell) = map.cell_mut(antenna.position) {
                *cell = antenna.symbol;
            }
        }
        for &point in points {
            if let Some(cell) = map.cell_mut(point) {
                if *cell == EMPTY_CELL {
                    *cell = INTERFERENCE_MARKER;
                }
            }
        }

        tracing::debug!(rows, cols, "rendered interference map");
        Some(map)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Grid position of the top-left cell.
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Character at a grid position, if inside the map.
    pub fn get(&self, position: Position) -> Option<char> {
        let (r, c) = self.local(position)?;
        self.cells.get(r)?.get(c).copied()
    }

    /// Iterates the rows as strings.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }

    fn local(&self, position: Position) -> Option<(usize, usize)> {
        let r = usize::try_from(i64::from(position.row) - i64::from(self.origin.row)).ok()?;
        let c = usize::try_from(i64::from(position.col) - i64::from(self.origin.col)).ok()?;
        Some((r, c))
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut char> {
        let (r, c) = self.local(position)?;
        self.cells.get_mut(r)?.get_mut(c)
    }
}

fn span(lo: i32, hi: i32) -> Option<usize> {
    usize::try_from(i64::from(hi) - i64::from(lo) + 1).ok()
}

impl fmt::Display for InterferenceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::antenna::interference_points;

    #[test]
    fn test_nothing_to_draw() {
        assert!(InterferenceMap::render(&Vec::<Antenna>::new(), &[]).is_none());
    }

    #[test]
    fn test_bounding_box_includes_interference_points() {
        let antennas = [Antenna::new('A', 3, 2), Antenna::new('A', 5, 4)];
        let points = interference_points(&antennas);
        let map = InterferenceMap::render(&antennas, &points).unwrap();

        assert_eq!(map.origin(), Position::new(1, 0));
        assert_eq!(map.rows(), 7);
        assert_eq!(map.cols(), 7);
        assert_eq!(map.get(Position::new(3, 2)), Some('A'));
        assert_eq!(map.get(Position::new(7, 6)), Some('#'));
        assert_eq!(map.get(Position::new(1, 0)), Some('#'));
        assert_eq!(map.get(Position::new(4, 4)), Some('.'));
        assert_eq!(map.get(Position::new(0, 0)), None);
    }

    #[test]
    fn test_oversized_bounding_box_is_refused() {
        let antennas = [Antenna::new('A', 0, -2_000_000_000)];
        let points = [Position::new(0, 2_000_000_000)];
        assert!(InterferenceMap::render(&antennas, &points).is_none());

        let corners = [Antenna::new('A', i32::MIN, i32::MIN), Antenna::new('A', i32::MAX, i32::MAX)];
        assert!(InterferenceMap::render(&corners, &[]).is_none());
    }

    #[test]
    fn test_far_positions_are_outside_a_small_map() {
        let antennas = [Antenna::new('A', i32::MAX, i32::MAX)];
        let map = InterferenceMap::render(&antennas, &[]).unwrap();
        assert_eq!(map.rows(), 1);
        assert_eq!(map.get(Position::new(i32::MAX, i32::MAX)), Some('A'));
        assert_eq!(map.get(Position::new(i32::MIN, i32::MIN)), None);
    }

    #[test]
    fn test_antennas_win_over_interference_points() {
        let antennas = [Antenna::new('B', 0, 0)];
        let map = InterferenceMap::render(&antennas, &[Position::new(0, 0), Position::new(0, 2)]).unwrap();
        assert_eq!(map.to_string(), "B.#\n");
    }
}
