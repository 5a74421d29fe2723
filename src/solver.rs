//! Top-level entry points.

use crate::grid::{Grid, GridError};
use crate::solution::Solution;
use crate::symbols::Symbols;
use crate::walker::{Verdict, Walker};
use thiserror::Error;
use tracing::debug;

/// Why a diagram could not be solved.
///
/// Callers of [`solve`] only see "no solution"; this taxonomy is exposed
/// through [`Solver::try_solve`] for diagnostics.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Track ends before reaching the end marker")]
    DeadEnd,

    #[error("Track forks or is malformed")]
    Ambiguous,
}

/// Solves diagrams drawn with a given symbol set.
///
/// # Example
///
/// ```rust
/// use trackwalk::{Solution, Solver, SolveError, Symbols};
///
/// let symbols = Symbols::builder().start('>').end('<').build().unwrap();
/// let solver = Solver::with_symbols(symbols);
///
/// assert_eq!(solver.solve(">-A-<"), Some(Solution::new("A", ">-A-<")));
/// assert_eq!(solver.try_solve(">-A-"), Err(SolveError::Ambiguous));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    symbols: Symbols,
}

impl Solver {
    /// Create a solver for the default symbols.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbols(symbols: Symbols) -> Self {
        Self { symbols }
    }

    /// Solve `input`, returning `None` for any failure.
    pub fn solve(&self, input: &str) -> Option<Solution> {
        self.try_solve(input).ok()
    }

    /// Solve `input`, reporting why it failed.
    pub fn try_solve(&self, input: &str) -> Result<Solution, SolveError> {
        let grid = Grid::with_symbols(input, self.symbols);
        let start = grid.start()?;
        debug!(start = %start, rows = grid.height(), cols = grid.width(), "walking grid");

        match Walker::new(&grid).walk(start) {
            Verdict::Complete(path) => {
                let solution = Solution::from_path(&grid, &path);
                debug!(letters = %solution.letters, steps = path.len(), "solved");
                Ok(solution)
            }
            Verdict::NoPath => Err(SolveError::DeadEnd),
            Verdict::Ambiguous => Err(SolveError::Ambiguous),
        }
    }
}

/// Solve a diagram drawn with the default symbols.
///
/// Returns `None` if the start marker is missing or duplicated, or if the
/// track does not lead unambiguously to the end marker.
///
/// # Example
///
/// ```rust
/// let input = "\
/// @---A---+
///         |
/// x-B-+   C
///     |   |
///     +---+";
///
/// let solution = trackwalk::solve(input).unwrap();
/// assert_eq!(solution.letters, "ACB");
/// assert_eq!(solution.tiles, "@---A---+|C|+---+|+-B-x");
/// ```
pub fn solve(input: &str) -> Option<Solution> {
    Solver::new().solve(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_start_is_reported() {
        let result = Solver::new().try_solve("-A-x");

        assert_eq!(
            result,
            Err(SolveError::Grid(GridError::MissingMarker { symbol: '@' }))
        );
    }

    #[test]
    fn duplicate_start_is_reported() {
        let result = Solver::new().try_solve("@-@");

        assert!(matches!(
            result,
            Err(SolveError::Grid(GridError::AmbiguousMarker { count: 2, .. }))
        ));
    }

    #[test]
    fn dead_end_is_reported() {
        assert_eq!(Solver::new().try_solve("@---"), Err(SolveError::DeadEnd));
    }

    #[test]
    fn fork_is_reported() {
        assert_eq!(Solver::new().try_solve("x-@-x"), Err(SolveError::Ambiguous));
    }

    #[test]
    fn failures_collapse_to_none() {
        assert_eq!(solve(""), None);
        assert_eq!(solve("@---"), None);
        assert_eq!(solve("x-@-x"), None);
    }

    #[test]
    fn custom_symbols_are_used() {
        let symbols = Symbols::builder()
            .start('s')
            .end('e')
            .horizontal('=')
            .build()
            .unwrap();
        let solver = Solver::with_symbols(symbols);

        assert_eq!(solver.solve("s==B==e"), Some(Solution::new("B", "s==B==e")));
        assert_eq!(solver.solve("s--B--e"), None);
    }

    #[test]
    fn error_messages_are_readable() {
        let err = Solver::new().try_solve("").unwrap_err();
        assert_eq!(err.to_string(), "Marker '@' not found on the grid");
        assert_eq!(
            SolveError::DeadEnd.to_string(),
            "Track ends before reaching the end marker"
        );
    }
}
