//! Projection of a completed path into output strings.

use crate::core::{is_waypoint, Path};
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of a solved diagram.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Solution {
    /// Waypoint letters in order of first visit.
    pub letters: String,
    /// Every tile symbol walked over, repeats included.
    pub tiles: String,
}

impl Solution {
    pub fn new(letters: impl Into<String>, tiles: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            tiles: tiles.into(),
        }
    }

    /// Project a completed path over the grid it was walked on.
    pub fn from_path(grid: &Grid, path: &Path) -> Self {
        Self {
            letters: waypoint_letters(grid, path),
            tiles: tile_symbols(grid, path),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Letters {}", self.letters)?;
        write!(f, "Path as characters {}", self.tiles)
    }
}

/// Symbols of every tile on the path, in walking order.
pub fn tile_symbols(grid: &Grid, path: &Path) -> String {
    path.positions().iter().map(|p| grid.symbol(*p)).collect()
}

/// Waypoint letters in order of first visit; a letter crossed twice counts once.
pub fn waypoint_letters(grid: &Grid, path: &Path) -> String {
    path.first_visits()
        .into_iter()
        .map(|p| grid.symbol(p))
        .filter(|c| is_waypoint(*c))
        .collect()
}
