//! The symbol set a diagram is drawn with.
//!
//! Symbols are bound once into a [`Grid`](crate::grid::Grid) at construction,
//! so the walker never consults ambient globals. Custom sets are created with
//! [`SymbolsBuilder`], which validates the whole set and reports every
//! violation at once rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use trackwalk::symbols::{BuildError, Symbols};
//!
//! let symbols = Symbols::builder().start('S').build();
//! assert!(matches!(symbols, Err(BuildError::InvalidSymbols(_))));
//!
//! let symbols = Symbols::builder().start('>').end('<').build().unwrap();
//! assert_eq!(symbols.start(), '>');
//! ```

pub mod builder;
pub mod error;

pub use builder::SymbolsBuilder;
pub use error::{BuildError, SymbolViolation};

use serde::Serialize;

pub const DEFAULT_START: char = '@';
pub const DEFAULT_END: char = 'x';
pub const DEFAULT_BLANK: char = ' ';
pub const DEFAULT_HORIZONTAL: char = '-';
pub const DEFAULT_VERTICAL: char = '|';
pub const DEFAULT_CORNER: char = '+';

/// Symbols recognised in a diagram, apart from waypoint letters.
///
/// Only the default set and [`SymbolsBuilder::build`] produce values, so every
/// `Symbols` has passed validation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Symbols {
    start: char,
    end: char,
    blank: char,
    horizontal: char,
    vertical: char,
    corner: char,
}

impl Symbols {
    pub fn builder() -> SymbolsBuilder {
        SymbolsBuilder::new()
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    /// Returned for every lookup outside the drawn diagram.
    pub fn blank(&self) -> char {
        self.blank
    }

    pub fn horizontal(&self) -> char {
        self.horizontal
    }

    pub fn vertical(&self) -> char {
        self.vertical
    }

    pub fn corner(&self) -> char {
        self.corner
    }

    /// Each role paired with its symbol, in a fixed order.
    pub(crate) fn roles(&self) -> [(&'static str, char); 6] {
        [
            ("start", self.start),
            ("end", self.end),
            ("blank", self.blank),
            ("horizontal", self.horizontal),
            ("vertical", self.vertical),
            ("corner", self.corner),
        ]
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            blank: DEFAULT_BLANK,
            horizontal: DEFAULT_HORIZONTAL,
            vertical: DEFAULT_VERTICAL,
            corner: DEFAULT_CORNER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_set_exposes_configured_roles() {
        let symbols = Symbols::builder()
            .start('>')
            .end('<')
            .corner('*')
            .build()
            .unwrap();

        assert_eq!(symbols.start(), '>');
        assert_eq!(symbols.end(), '<');
        assert_eq!(symbols.corner(), '*');
        assert_eq!(symbols.horizontal(), DEFAULT_HORIZONTAL);
    }

    #[test]
    fn rejected_set_never_reaches_the_caller() {
        let result = Symbols::builder().end(DEFAULT_CORNER).build();

        assert!(matches!(result, Err(BuildError::InvalidSymbols(_))));
    }
}
