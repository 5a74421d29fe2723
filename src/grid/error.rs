//! Grid lookup errors.

use thiserror::Error;

/// Errors that can occur when locating a marker on the grid
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    /// The marker does not occur anywhere on the grid
    #[error("Marker {symbol:?} not found on the grid")]
    MissingMarker { symbol: char },

    /// The marker occurs more than once
    #[error("Marker {symbol:?} occurs {count} times, expected exactly one")]
    AmbiguousMarker { symbol: char, count: usize },
}
