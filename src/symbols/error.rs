//! Symbol set validation errors.

use thiserror::Error;

/// A single problem found while validating a symbol set.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SymbolViolation {
    #[error("Symbol {symbol:?} is used for both {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: &'static str,
        second: &'static str,
    },

    #[error("Symbol {symbol:?} for {role} is an uppercase letter, which is reserved for waypoints")]
    ReservedForWaypoints { role: &'static str, symbol: char },

    #[error("Symbol for {role} is a control character ({symbol:?})")]
    ControlCharacter { role: &'static str, symbol: char },
}

/// Errors that can occur when building a symbol set.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid symbol set: {}", describe(.0))]
    InvalidSymbols(Vec<SymbolViolation>),
}

fn describe(violations: &[SymbolViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
