//! Grid coordinates.

use super::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell at `row` and `col` in an unbounded 2D plane.
///
/// Negative coordinates are valid; they simply lie outside any drawn diagram.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The neighbouring position in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        direction.apply(self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell() {
        let position = Position::new(3, 4);
        assert_eq!(position.step(Direction::Down), Position::new(4, 4));
        assert_eq!(position.step(Direction::Left), Position::new(3, 3));
    }

    #[test]
    fn positions_compare_structurally() {
        assert_eq!(Position::new(1, 2), Position::new(1, 2));
        assert_ne!(Position::new(1, 2), Position::new(2, 1));
    }

    #[test]
    fn display_shows_row_then_column() {
        assert_eq!(Position::new(-1, 7).to_string(), "(-1, 7)");
    }
}
