//! Core value types of the walker.
//!
//! This module contains the pure building blocks of a traversal:
//! - Directions and positions on an unbounded grid
//! - Immutable paths that grow by copy-on-extend
//! - Tile classification of grid symbols
//!
//! Nothing in this module performs I/O or holds shared mutable state.

mod direction;
mod path;
mod position;
mod tile;

pub use direction::Direction;
pub use path::{Path, PathError};
pub use position::Position;
pub use tile::{is_waypoint, Tile};
