//! Paths traversed across the grid.
//!
//! A path is immutable: extending it returns a new path and leaves the
//! original untouched, so sibling probes from the same tile never observe
//! each other's progress.

use super::direction::Direction;
use super::position::Position;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when extending a path.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PathError {
    #[error("Path cannot be extended by a negative number of steps ({steps})")]
    NegativeSteps { steps: isize },

    #[error("Path must contain at least its start position")]
    Empty,
}

/// Ordered sequence of positions walked from the start tile.
///
/// A path is never empty: element zero is the start position. Consecutive
/// positions are exactly one orthogonal step apart. A position may appear
/// twice when the track crosses under itself.
///
/// # Example
///
/// ```rust
/// use trackwalk::core::{Direction, Path, Position};
///
/// let path = Path::new(Position::new(0, 0))
///     .extend_by(Direction::Right, 2)
///     .unwrap()
///     .extend(Direction::Down);
///
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.tip(), Position::new(1, 2));
/// assert!(!path.is_tip_revisited());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawPath")]
pub struct Path {
    positions: Vec<Position>,
}

/// Unchecked wire form of a [`Path`].
#[derive(Deserialize)]
struct RawPath {
    positions: Vec<Position>,
}

impl TryFrom<RawPath> for Path {
    type Error = PathError;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        if raw.positions.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self {
            positions: raw.positions,
        })
    }
}

impl Path {
    /// Create a one-element path at `start`.
    pub fn new(start: Position) -> Self {
        Self {
            positions: vec![start],
        }
    }

    /// Extend the path by one step, returning a new path.
    pub fn extend(&self, direction: Direction) -> Self {
        let mut positions = self.positions.clone();
        positions.push(self.tip().step(direction));
        Self { positions }
    }

    /// Extend the path by `steps` steps in `direction`.
    ///
    /// Zero steps yields an equal path. Negative steps are rejected.
    pub fn extend_by(&self, direction: Direction, steps: isize) -> Result<Self, PathError> {
        if steps < 0 {
            return Err(PathError::NegativeSteps { steps });
        }

        let mut positions = self.positions.clone();
        let mut tip = self.tip();
        for _ in 0..steps {
            tip = tip.step(direction);
            positions.push(tip);
        }
        Ok(Self { positions })
    }

    /// The most recently visited position.
    pub fn tip(&self) -> Position {
        // Non-empty by construction.
        self.positions[self.positions.len() - 1]
    }

    /// Number of times `position` occurs in the path.
    pub fn visits(&self, position: Position) -> usize {
        self.positions.iter().filter(|p| **p == position).count()
    }

    /// `true` if the tip already appeared earlier in the path.
    pub fn is_tip_revisited(&self) -> bool {
        self.visits(self.tip()) > 1
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; a path holds at least its start position.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Distinct positions in order of first visit.
    pub fn first_visits(&self) -> Vec<Position> {
        let mut seen = std::collections::HashSet::new();
        self.positions
            .iter()
            .copied()
            .filter(|p| seen.insert(*p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_walks_each_step() {
        let expected = vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(2, 2),
            Position::new(2, 1),
            Position::new(1, 1),
            Position::new(1, 0),
            Position::new(0, 0),
        ];

        let path = Path::new(Position::new(0, 0))
            .extend_by(Direction::Right, 2)
            .unwrap()
            .extend_by(Direction::Down, 2)
            .unwrap()
            .extend(Direction::Left)
            .extend(Direction::Up)
            .extend(Direction::Left)
            .extend(Direction::Up);

        assert_eq!(path.positions(), expected.as_slice());
    }

    #[test]
    fn negative_steps_are_rejected() {
        let path = Path::new(Position::new(0, 0));
        let result = path.extend_by(Direction::Up, -1);

        assert_eq!(result, Err(PathError::NegativeSteps { steps: -1 }));
    }

    #[test]
    fn zero_steps_returns_equal_path() {
        let path = Path::new(Position::new(4, 4)).extend(Direction::Down);
        let same = path.extend_by(Direction::Left, 0).unwrap();

        assert_eq!(path, same);
    }

    #[test]
    fn extend_leaves_original_untouched() {
        let path = Path::new(Position::new(0, 0));
        let extended = path.extend(Direction::Right);

        assert_eq!(path.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn tip_counts_as_revisited_once_seen_before() {
        let path = Path::new(Position::new(0, 0))
            .extend_by(Direction::Right, 2)
            .unwrap()
            .extend_by(Direction::Down, 2)
            .unwrap()
            .extend(Direction::Left)
            .extend(Direction::Up);

        assert!(!path.is_tip_revisited());

        let crossed = path.extend(Direction::Up);
        assert!(crossed.is_tip_revisited());
        assert_eq!(crossed.visits(Position::new(0, 1)), 2);
    }

    #[test]
    fn first_visits_skips_repeats() {
        let path = Path::new(Position::new(0, 0))
            .extend(Direction::Right)
            .extend(Direction::Down)
            .extend(Direction::Left)
            .extend(Direction::Up);

        assert_eq!(
            path.first_visits(),
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn path_serializes_as_positions() {
        let path = Path::new(Position::new(0, 0)).extend(Direction::Right);
        let json = serde_json::to_string(&path).unwrap();
        let restored: Path = serde_json::from_str(&json).unwrap();

        assert_eq!(path, restored);
    }

    #[test]
    fn empty_path_is_rejected_on_deserialize() {
        let result = serde_json::from_str::<Path>(r#"{"positions":[]}"#);

        let err = result.unwrap_err();
        assert!(err
            .to_string()
            .contains("Path must contain at least its start position"));
    }
}
