//! Nefasto (interference) point derivation.
//!
//! Two antennas sharing a frequency interfere at the reflection of each one
//! through the other.

use std::collections::HashSet;

use super::{Antenna, Position};

/// Derives the interference points of a sequence of antennas.
///
/// For each pair `(p, q)` with `p` before `q` and equal symbols, `2q - p` is
/// emitted and then `2p - q`. A position is reported once, at its first
/// occurrence. Points outside the `i32` coordinate range are skipped.
///
/// ```rust
/// use nefasto::antenna::{interference_points, Antenna, Position};
///
/// let antennas = [Antenna::new('A', 3, 2), Antenna::new('A', 5, 4)];
/// assert_eq!(
///     interference_points(&antennas),
///     vec![Position::new(7, 6), Position::new(1, 0)],
/// );
/// ```
pub fn interference_points<'a, I>(antennas: I) -> Vec<Position>
where
    I: IntoIterator<Item = &'a Antenna>,
{
    let antennas: Vec<&Antenna> = antennas.into_iter().collect();
    let mut seen = HashSet::new();
    let mut points = Vec::new();
    let mut skipped = 0usize;

    for (i, p) in antennas.iter().enumerate() {
        for q in &antennas[i + 1..] {
            if p.symbol != q.symbol {
                continue;
            }
            for point in [
                p.position.reflect_through(q.position),
                q.position.reflect_through(p.position),
            ] {
                match point {
                    Some(point) if seen.insert(point) => points.push(point),
                    Some(_) => {}
                    None => skipped += 1,
                }
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "interference points outside coordinate range");
    }
    tracing::debug!(antennas = antennas.len(), points = points.len(), "derived interference points");
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_different_frequencies_do_not_interfere() {
        let antennas = [Antenna::new('A', 0, 0), Antenna::new('B', 1, 1)];
        assert!(interference_points(&antennas).is_empty());
    }

    #[test]
    fn test_duplicate_points_are_reported_once() {
        // Both pairs reflect onto (0, 4).
        let antennas = [
            Antenna::new('A', 0, 0),
            Antenna::new('A', 0, 2),
            Antenna::new('B', 0, 2),
            Antenna::new('B', 0, 3),
        ];
        assert_eq!(
            interference_points(&antennas),
            vec![Position::new(0, 4), Position::new(0, -2), Position::new(0, 1)]
        );
    }

    #[test]
    fn test_out_of_range_points_are_skipped() {
        let antennas = [Antenna::new('A', 0, 0), Antenna::new('A', 2_000_000_000, 0)];
        // 2q - p overflows; 2p - q = (-2e9, 0) still fits.
        assert_eq!(
            interference_points(&antennas),
            vec![Position::new(-2_000_000_000, 0)]
        );

        let extremes = [Antenna::new('Z', i32::MIN, i32::MAX), Antenna::new('Z', i32::MAX, i32::MIN)];
        assert!(interference_points(&extremes).is_empty());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(interference_points(&Vec::<Antenna>::new()).is_empty());
    }
}
