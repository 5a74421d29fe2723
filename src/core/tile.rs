//! Classification of grid symbols into tile classes.

use crate::symbols::Symbols;

/// The class of a single grid tile.
///
/// Every symbol maps to exactly one class; anything the symbol set does not
/// recognise becomes [`Tile::Unknown`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Blank,
    Horizontal,
    Vertical,
    Corner,
    /// An uppercase letter collected along the way.
    Waypoint(char),
    Start,
    End,
    Unknown(char),
}

impl Tile {
    /// Classify `symbol` against the given symbol set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trackwalk::core::Tile;
    /// use trackwalk::Symbols;
    ///
    /// let symbols = Symbols::default();
    /// assert_eq!(Tile::classify('+', &symbols), Tile::Corner);
    /// assert_eq!(Tile::classify('Q', &symbols), Tile::Waypoint('Q'));
    /// assert_eq!(Tile::classify('#', &symbols), Tile::Unknown('#'));
    /// ```
    pub fn classify(symbol: char, symbols: &Symbols) -> Self {
        if symbol == symbols.blank() {
            Self::Blank
        } else if symbol == symbols.horizontal() {
            Self::Horizontal
        } else if symbol == symbols.vertical() {
            Self::Vertical
        } else if symbol == symbols.corner() {
            Self::Corner
        } else if symbol == symbols.start() {
            Self::Start
        } else if symbol == symbols.end() {
            Self::End
        } else if is_waypoint(symbol) {
            Self::Waypoint(symbol)
        } else {
            Self::Unknown(symbol)
        }
    }
}

/// Waypoints are ASCII uppercase letters.
pub fn is_waypoint(symbol: char) -> bool {
    symbol.is_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_symbols_classify() {
        let symbols = Symbols::default();

        assert_eq!(Tile::classify(' ', &symbols), Tile::Blank);
        assert_eq!(Tile::classify('-', &symbols), Tile::Horizontal);
        assert_eq!(Tile::classify('|', &symbols), Tile::Vertical);
        assert_eq!(Tile::classify('+', &symbols), Tile::Corner);
        assert_eq!(Tile::classify('@', &symbols), Tile::Start);
        assert_eq!(Tile::classify('x', &symbols), Tile::End);
        assert_eq!(Tile::classify('A', &symbols), Tile::Waypoint('A'));
    }

    #[test]
    fn lowercase_and_punctuation_are_unknown() {
        let symbols = Symbols::default();

        assert_eq!(Tile::classify('a', &symbols), Tile::Unknown('a'));
        assert_eq!(Tile::classify('*', &symbols), Tile::Unknown('*'));
        assert_eq!(Tile::classify('Ä', &symbols), Tile::Unknown('Ä'));
    }

    #[test]
    fn custom_symbols_are_respected() {
        let symbols = Symbols::builder().start('S').end('E').build();
        assert!(symbols.is_err());

        let symbols = Symbols::builder().start('s').end('e').build().unwrap();
        assert_eq!(Tile::classify('s', &symbols), Tile::Start);
        assert_eq!(Tile::classify('e', &symbols), Tile::End);
        assert_eq!(Tile::classify('@', &symbols), Tile::Unknown('@'));
    }
}
