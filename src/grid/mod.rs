//! Text map loading.
//!
//! A map is plain text: one line per row, one character per column. The
//! configured empty marker (`.` by default) means "no antenna"; every other
//! character places an antenna with that frequency symbol.

use std::path::Path;

use crate::config::IndexBase;
use crate::error::Result;

pub mod matrix;

pub use matrix::InterferenceMap;

/// A symbol placed at a grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Frequency symbol.
    pub symbol: char,
    /// Row number.
    pub row: i32,
    /// Column number.
    pub col: i32,
}

/// Splits text into rows on `\n`, `\r\n` or a lone `\r`.
///
/// A terminator at the very end does not start another row.
struct Rows<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(['\n', '\r']) {
            Some(end) => {
                let row = &self.rest[..end];
                let tail = &self.rest[end..];
                let skip = if tail.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &tail[skip..];
                Some(row)
            }
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}

/// Iterator over the placements of a text map in row-major order.
pub struct Placements<'a> {
    lines: Rows<'a>,
    current: Option<(i32, std::iter::Enumerate<std::str::Chars<'a>>)>,
    next_row: i32,
    empty_marker: char,
    offset: i32,
}

impl<'a> Iterator for Placements<'a> {
    type Item = Placement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((row, chars)) = self.current.as_mut() {
                for (col, symbol) in chars.by_ref() {
                    if symbol != self.empty_marker {
                        return Some(Placement {
                            symbol,
                            row: *row,
                            col: to_coordinate(col) + self.offset,
                        });
                    }
                }
            }

            let line = self.lines.next()?;
            self.current = Some((self.next_row + self.offset, line.chars().enumerate()));
            self.next_row += 1;
        }
    }
}

#[inline]
fn to_coordinate(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// Parses `text` into placements.
///
/// Line terminators (`\n`, `\r\n` or a lone `\r`) are stripped; rows advance per line and
/// columns per character, both starting at `index_base`.
///
/// ```rust
/// use nefasto::config::IndexBase;
/// use nefasto::grid::parse_grid;
///
/// let cells: Vec<_> = parse_grid("A.\n.B", '.', IndexBase::Zero)
///     .map(|p| (p.symbol, p.row, p.col))
///     .collect();
/// assert_eq!(cells, vec![('A', 0, 0), ('B', 1, 1)]);
/// ```
pub fn parse_grid(text: &str, empty_marker: char, index_base: IndexBase) -> Placements<'_> {
    Placements {
        lines: Rows { rest: text },
        current: None,
        next_row: 0,
        empty_marker,
        offset: index_base.offset(),
    }
}

/// Reads a map file into memory.
///
/// # Errors
/// [`GraphError::Io`](crate::GraphError::Io) if the file cannot be read.
pub fn read_grid(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not read grid file");
            Err(err.into())
        }
    }
}
