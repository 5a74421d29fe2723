//! Tile-by-tile recursive walker.

use crate::core::{Direction, Path, Position, Tile};
use crate::grid::Grid;
use crate::walker::verdict::Verdict;
use tracing::{debug, trace};

/// Most times a single position may appear in a path.
///
/// A second visit is a crossing under the earlier pass; a third can only come
/// from malformed or cyclic track.
pub const MAX_VISITS: usize = 2;

/// Walks a grid from a start position, one tile at a time.
///
/// Every dispatch is a pure function of the grid, the path so far and the
/// direction of arrival. Each probe receives its own extended copy of the
/// path, so sibling probes from a tile are independent.
///
/// # Limits
///
/// Each step is one level of recursion, and each level holds its own copy of
/// the path. Stack depth therefore grows linearly with track length, and time
/// and memory grow quadratically. A corridor of some tens of thousands of
/// tiles overflows a default 2 MiB thread stack; run very large diagrams on a
/// thread spawned with a bigger stack.
///
/// # Example
///
/// ```rust
/// use trackwalk::grid::Grid;
/// use trackwalk::walker::{Verdict, Walker};
///
/// let grid = Grid::new("@-A-+\n    |\n    x");
/// let start = grid.start().unwrap();
///
/// let verdict = Walker::new(&grid).walk(start);
/// assert!(verdict.is_complete());
///
/// let forked = Grid::new("x-@-x");
/// let verdict = Walker::new(&forked).walk(forked.start().unwrap());
/// assert_eq!(verdict, Verdict::Ambiguous);
/// ```
pub struct Walker<'g> {
    grid: &'g Grid,
}

impl<'g> Walker<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Probe all four directions from `start` and merge the outcomes.
    pub fn walk(&self, start: Position) -> Verdict {
        let path = Path::new(start);
        let verdict = self.probe_all(&path, Direction::ALL);

        debug!(
            start = %start,
            complete = verdict.is_complete(),
            ambiguous = verdict.is_ambiguous(),
            "walk finished"
        );
        verdict
    }

    /// Step once in `direction` and apply the rule of the tile reached.
    pub fn advance(&self, path: &Path, direction: Direction) -> Verdict {
        let next = path.extend(direction);
        let tip = next.tip();

        if next.visits(tip) > MAX_VISITS {
            trace!(at = %tip, "position visited too often");
            return Verdict::Ambiguous;
        }

        let tile = self.grid.tile(tip);
        trace!(at = %tip, ?direction, ?tile, "dispatching tile");

        match tile {
            Tile::Blank => Verdict::NoPath,
            Tile::Horizontal => self.straight(&next, direction, direction.is_horizontal()),
            Tile::Vertical => self.straight(&next, direction, direction.is_vertical()),
            Tile::Corner => self.corner(&next, direction),
            Tile::Waypoint(_) => self.waypoint(&next, direction),
            Tile::End => self.end(&next, direction),
            Tile::Start | Tile::Unknown(_) => Verdict::Ambiguous,
        }
    }

    /// Track tiles continue along their own axis, or across it when the
    /// line passes under an earlier visit.
    fn straight(&self, path: &Path, direction: Direction, along_axis: bool) -> Verdict {
        if along_axis || path.is_tip_revisited() {
            self.advance(path, direction)
        } else {
            trace!(at = %path.tip(), ?direction, "track entered across its axis");
            Verdict::Ambiguous
        }
    }

    fn corner(&self, path: &Path, direction: Direction) -> Verdict {
        if self.advance(path, direction).is_continuation() {
            debug!(at = %path.tip(), "track runs straight through a corner");
            return Verdict::Ambiguous;
        }
        self.turn(path, direction)
    }

    fn turn(&self, path: &Path, direction: Direction) -> Verdict {
        self.probe_all(path, direction.orthogonal())
    }

    /// A waypoint behaves as a horizontal, vertical or corner tile, whichever
    /// completes the path.
    fn waypoint(&self, path: &Path, direction: Direction) -> Verdict {
        // Arrival is on one axis or the other, so exactly one of the
        // horizontal and vertical rules allows going straight.
        match self.advance(path, direction) {
            Verdict::Complete(completed) => {
                if path.is_tip_revisited() || self.is_clean_pass(path, direction, &completed) {
                    Verdict::Complete(completed)
                } else {
                    debug!(at = %path.tip(), "fork centred on a waypoint");
                    Verdict::Ambiguous
                }
            }
            Verdict::Ambiguous => Verdict::Ambiguous,
            Verdict::NoPath => match self.turn(path, direction) {
                complete @ Verdict::Complete(_) => complete,
                Verdict::NoPath | Verdict::Ambiguous => Verdict::Ambiguous,
            },
        }
    }

    /// A straight pass over a waypoint must not leave a branch behind.
    ///
    /// One live side is a T-fork. Two live sides form a crossroad, which is
    /// only legal when the completed path comes back through it.
    fn is_clean_pass(&self, path: &Path, direction: Direction, completed: &Path) -> bool {
        let live_sides = direction
            .orthogonal()
            .into_iter()
            .filter(|side| self.advance(path, *side).is_continuation())
            .count();

        match live_sides {
            0 => true,
            1 => false,
            _ => completed.visits(path.tip()) >= MAX_VISITS,
        }
    }

    /// The end marker completes the path only if nothing continues past it.
    fn end(&self, path: &Path, direction: Direction) -> Verdict {
        let behind = direction.opposite();
        let continues = Direction::ALL
            .into_iter()
            .filter(|d| *d != behind)
            .any(|d| self.advance(path, d).is_continuation());

        if continues {
            debug!(at = %path.tip(), "track continues past the end marker");
            Verdict::Ambiguous
        } else {
            Verdict::Complete(path.clone())
        }
    }

    fn probe_all<I>(&self, path: &Path, directions: I) -> Verdict
    where
        I: IntoIterator<Item = Direction>,
    {
        Verdict::merge(directions.into_iter().map(|d| self.advance(path, d)))
    }
}
