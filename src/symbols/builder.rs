//! Builder API for creating symbol sets.

use crate::core::is_waypoint;
use crate::symbols::error::{BuildError, SymbolViolation};
use crate::symbols::Symbols;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<SymbolViolation>>;

/// Builder for creating symbol sets.
///
/// Starts from the default symbols; every setter overrides one role.
/// `build` validates the whole set and reports every violation at once.
#[derive(Clone, Debug)]
pub struct SymbolsBuilder {
    symbols: Symbols,
}

impl SymbolsBuilder {
    pub fn new() -> Self {
        Self {
            symbols: Symbols::default(),
        }
    }

    /// Set the start marker
    pub fn start(mut self, symbol: char) -> Self {
        self.symbols.start = symbol;
        self
    }

    /// Set the end marker
    pub fn end(mut self, symbol: char) -> Self {
        self.symbols.end = symbol;
        self
    }

    /// Set the symbol standing for empty space
    pub fn blank(mut self, symbol: char) -> Self {
        self.symbols.blank = symbol;
        self
    }

    /// Set the horizontal track symbol
    pub fn horizontal(mut self, symbol: char) -> Self {
        self.symbols.horizontal = symbol;
        self
    }

    /// Set the vertical track symbol
    pub fn vertical(mut self, symbol: char) -> Self {
        self.symbols.vertical = symbol;
        self
    }

    /// Set the corner symbol
    pub fn corner(mut self, symbol: char) -> Self {
        self.symbols.corner = symbol;
        self
    }

    /// Validate the symbol set, accumulating ALL violations.
    pub fn validate(&self) -> Check {
        let roles = self.symbols.roles();
        let mut checks: Vec<Check> = Vec::new();

        for (i, (first, symbol)) in roles.iter().enumerate() {
            for (second, other) in &roles[i + 1..] {
                let check = if symbol == other {
                    Validation::fail(SymbolViolation::DuplicateSymbol {
                        symbol: *symbol,
                        first: *first,
                        second: *second,
                    })
                } else {
                    Validation::success(())
                };
                checks.push(check);
            }
        }

        for (role, symbol) in roles {
            if is_waypoint(symbol) {
                checks.push(Validation::fail(SymbolViolation::ReservedForWaypoints {
                    role,
                    symbol,
                }));
            }
            if symbol.is_control() {
                checks.push(Validation::fail(SymbolViolation::ControlCharacter {
                    role,
                    symbol,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the symbol set.
    /// Returns an error listing every violation if the set is invalid.
    pub fn build(self) -> Result<Symbols, BuildError> {
        match self.validate() {
            Validation::Success(_) => Ok(self.symbols),
            Validation::Failure(errors) => Err(BuildError::InvalidSymbols(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

impl Default for SymbolsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
