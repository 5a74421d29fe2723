//! Orthogonal directions of movement on the grid.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// One of the four orthogonal unit vectors of movement.
///
/// Rows grow downwards and columns grow to the right, so `Up` decrements the
/// row and `Right` increments the column.
///
/// # Example
///
/// ```rust
/// use trackwalk::core::{Direction, Position};
///
/// let origin = Position::new(2, 2);
/// assert_eq!(Direction::Up.apply(origin), Position::new(1, 2));
/// assert_eq!(Direction::Left.opposite(), Direction::Right);
/// assert_eq!(Direction::Up.orthogonal(), [Direction::Left, Direction::Right]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// All directions, in probing order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// Row and column displacement of a single step.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (-1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// `true` if the vector is parallel with the x-axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// `true` if the vector is parallel with the y-axis.
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Direction along the same axis pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// The two directions on the other axis.
    pub fn orthogonal(self) -> [Direction; 2] {
        if self.is_horizontal() {
            [Self::Up, Self::Down]
        } else {
            [Self::Left, Self::Right]
        }
    }

    /// The position one step away from `from` in this direction.
    pub fn apply(self, from: Position) -> Position {
        let (d_row, d_col) = self.delta();
        Position::new(from.row + d_row, from.col + d_col)
    }
}
