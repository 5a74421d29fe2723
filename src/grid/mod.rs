//! Immutable character map of a diagram.
//!
//! The grid is built once from the input text and never mutated. Lookups are
//! total: any coordinate not covered by the drawn lines yields the blank
//! symbol, so the walker can probe freely past the diagram's edges.

pub mod error;

pub use error::GridError;

use crate::core::{Position, Tile};
use crate::symbols::Symbols;

/// A diagram as rows of characters.
///
/// Rows may have different lengths.
///
/// # Example
///
/// ```rust
/// use trackwalk::core::Position;
/// use trackwalk::grid::Grid;
///
/// let grid = Grid::new("@-+\n  x");
///
/// assert_eq!(grid.tile_at(0, 1), '-');
/// assert_eq!(grid.tile_at(-3, 40), ' ');
/// assert_eq!(grid.start(), Ok(Position::new(0, 0)));
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    symbols: Symbols,
}

impl Grid {
    /// Build a grid using the default symbols.
    pub fn new(input: &str) -> Self {
        Self::with_symbols(input, Symbols::default())
    }

    /// Build a grid bound to a custom symbol set.
    pub fn with_symbols(input: &str, symbols: Symbols) -> Self {
        let rows = input.lines().map(|line| line.chars().collect()).collect();
        Self { rows, symbols }
    }

    /// Symbol at `row`, `col`, or the blank symbol outside the diagram.
    pub fn tile_at(&self, row: i64, col: i64) -> char {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return self.symbols.blank();
        };

        self.rows
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .unwrap_or(self.symbols.blank())
    }

    /// Symbol at `position`.
    pub fn symbol(&self, position: Position) -> char {
        self.tile_at(position.row, position.col)
    }

    /// Tile class at `position`.
    pub fn tile(&self, position: Position) -> Tile {
        Tile::classify(self.symbol(position), &self.symbols)
    }

    /// Locate the only occurrence of `symbol`.
    ///
    /// Fails with [`GridError::MissingMarker`] if it does not occur and with
    /// [`GridError::AmbiguousMarker`] if it occurs more than once.
    pub fn find_unique_marker(&self, symbol: char) -> Result<Position, GridError> {
        let mut found = self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(move |(_, c)| **c == symbol)
                .map(move |(col, _)| Position::new(row as i64, col as i64))
        });

        let first = found.next().ok_or(GridError::MissingMarker { symbol })?;
        let others = found.count();
        if others > 0 {
            return Err(GridError::AmbiguousMarker {
                symbol,
                count: others + 1,
            });
        }

        Ok(first)
    }

    /// Locate the start marker.
    pub fn start(&self) -> Result<Position, GridError> {
        self.find_unique_marker(self.symbols.start())
    }

    /// Number of rows drawn.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
