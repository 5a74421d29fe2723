//! Outcome of probing the track from a tile.

use crate::core::Path;

/// Result of a single dispatch step.
///
/// `NoPath` and `Ambiguous` are both failures once they reach the top, but
/// they must stay distinct during recursion: merging sibling probes discards
/// dead ends and fails on forks.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Dead end, the track does not continue.
    NoPath,

    /// The track forks or is malformed at some tile.
    Ambiguous,

    /// A single continuation reaching the end marker.
    Complete(Path),
}

impl Verdict {
    /// Collapse the verdicts of sibling probes from one tile into one.
    ///
    /// Dead ends are discarded. No survivors is a dead end, more than one
    /// survivor is a fork (even if every survivor is complete), and a single
    /// survivor is returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trackwalk::core::{Path, Position};
    /// use trackwalk::walker::Verdict;
    ///
    /// let done = Verdict::Complete(Path::new(Position::new(0, 0)));
    ///
    /// assert_eq!(Verdict::merge([Verdict::NoPath, Verdict::NoPath]), Verdict::NoPath);
    /// assert_eq!(Verdict::merge([Verdict::NoPath, done.clone()]), done);
    /// assert_eq!(Verdict::merge([done.clone(), done]), Verdict::Ambiguous);
    /// ```
    pub fn merge<I>(verdicts: I) -> Verdict
    where
        I: IntoIterator<Item = Verdict>,
    {
        let mut survivors = verdicts.into_iter().filter(Verdict::is_continuation);

        match (survivors.next(), survivors.next()) {
            (None, _) => Verdict::NoPath,
            (Some(only), None) => only,
            (Some(_), Some(_)) => Verdict::Ambiguous,
        }
    }

    /// `true` unless this is a dead end.
    pub fn is_continuation(&self) -> bool {
        !self.is_no_path()
    }

    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPath)
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The completed path, if any.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Complete(path) => Some(path),
            Self::NoPath | Self::Ambiguous => None,
        }
    }
}
