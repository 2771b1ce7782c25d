//! This crate estimates DNA melting temperatures along a sequence.
//! A fixed size window is slid across the sequence and for every position one or
//! more melting temperature formulas are evaluated on the bases inside the window.
//! The crate is divided into this base module, a tm module, an analysis module and a util module.
//! In the base module the types for bases and sequences, as well as the validation of
//! raw input, have been implemented (Base, Sequence, SequenceExt).
//! The tm module contains the melting temperature formulas.
//! The analysis module contains the sliding window scanner together with functions
//! computing extrema and regions above a threshold over the resulting signals.
//! The util module contains some utility functions for reading sequence data from a file.
//!
use self::Base::*;

pub mod analysis;
pub mod config;
pub mod error;
pub mod tm;
pub mod util;

pub use error::{Result, TmError};

/// Enumeration representing the individual bases of a genome sequence.
/// The discriminants are used as indices into per base tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Base {
    /// Case insensitive conversion of a single character.
    pub fn from_char(c: char) -> Option<Base> {
        match c.to_ascii_uppercase() {
            'A' => Some(A),
            'C' => Some(C),
            'G' => Some(G),
            'T' => Some(T),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            A => 'A',
            C => 'C',
            G => 'G',
            T => 'T',
        }
    }
}

/// A type alias for Sequence to a Vector of bases. Note that a Vector is a
/// heap allocated dynamically resizing array.
pub type Sequence = Vec<Base>;

/// Since Sequence is only a type alias, methods can not be directly implemented in it.
/// To circumvent this, a trait SequenceExt is defined which contains useful methods on
/// Sequences like parse().
pub trait SequenceExt {
    /// Parses the input string into a Sequence. Lowercase letters are accepted and
    /// normalized, every other character than A, C, G or T is rejected with its position.
    /// Nothing is skipped, so whitespace or ambiguity codes like N are errors as well.
    fn parse(input: &str) -> Result<Sequence> {
        if input.is_empty() {
            return Err(TmError::EmptySequence);
        }
        input
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Base::from_char(symbol).ok_or_else(|| TmError::InvalidSymbol { position, symbol })
            })
            .collect()
    }

    /// Renders the sequence as an uppercase string.
    fn to_string_upper(&self) -> String;
}

impl SequenceExt for Sequence {
    fn to_string_upper(&self) -> String {
        self.iter().map(|base| base.as_char()).collect()
    }
}

/// Validates a raw string and returns the canonical sequence.
pub fn validate(raw: &str) -> Result<Sequence> {
    Sequence::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_is_normalized() {
        let lower = validate("acgt").unwrap();
        let upper = validate("ACGT").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, vec![A, C, G, T]);
        assert_eq!(lower.to_string_upper(), "ACGT");
    }

    #[test]
    fn invalid_symbol_reports_position() {
        match validate("ACGX") {
            Err(TmError::InvalidSymbol { position, symbol }) => {
                assert_eq!(position, 3);
                assert_eq!(symbol, 'X');
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn whitespace_and_ambiguity_codes_are_rejected() {
        assert!(matches!(
            validate("AC GT"),
            Err(TmError::InvalidSymbol { position: 2, symbol: ' ' })
        ));
        assert!(matches!(
            validate("nACG"),
            Err(TmError::InvalidSymbol { position: 0, symbol: 'n' })
        ));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(validate(""), Err(TmError::EmptySequence)));
    }
}
