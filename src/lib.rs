//! Trackwalk: follow an ASCII track diagram from start to end.
//!
//! A diagram is a single network of track drawn with `-`, `|` and `+`, with
//! one start marker `@`, an end marker `x` and uppercase waypoint letters.
//! Trackwalk decides whether exactly one well-formed path connects start to
//! end, and if so reports the letters collected and the tiles walked over.
//!
//! # Core Concepts
//!
//! - **Grid**: Immutable character map; everything outside is blank
//! - **Path**: Immutable sequence of positions, extended by copy
//! - **Walker**: Recursive tile dispatch returning a [`Verdict`]
//! - **Verdict**: Dead end, fork, or a complete path; never conflated
//!
//! Every failure (no start, several starts, dead end, fork, unknown symbol)
//! collapses into "no solution" for [`solve`]. Use [`Solver::try_solve`] to
//! learn why a diagram was rejected.
//!
//! # Example
//!
//! ```rust
//! use trackwalk::{solve, Solution};
//!
//! let input = [
//!     "@---A---+",
//!     "        |",
//!     "x-B-+   C",
//!     "    |   |",
//!     "    +---+",
//! ]
//! .join("\n");
//!
//! assert_eq!(
//!     solve(&input),
//!     Some(Solution::new("ACB", "@---A---+|C|+---+|+-B-x"))
//! );
//!
//! // A corner must turn.
//! assert_eq!(solve("@-A-+-B-x"), None);
//! ```

pub mod core;
pub mod grid;
pub mod solution;
pub mod solver;
pub mod symbols;
pub mod walker;

// Re-export commonly used types
pub use crate::core::{Direction, Path, Position, Tile};
pub use grid::{Grid, GridError};
pub use solution::Solution;
pub use solver::{solve, SolveError, Solver};
pub use symbols::{Symbols, SymbolsBuilder};
pub use walker::{Verdict, Walker};
