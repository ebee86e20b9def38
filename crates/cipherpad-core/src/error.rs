//! Core error types.
//!
//! The transforms themselves are total and never fail. Errors only arise
//! when a caller builds an alphabet or mapping from malformed parts, or
//! addresses a letter the mapping does not cover.

use thiserror::Error;

/// Errors from building an [`Alphabet`](crate::Alphabet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The alphabet has no letters.
    #[error("alphabet is empty")]
    Empty,

    /// A letter appears more than once.
    #[error("duplicate letter in alphabet: {letter:?}")]
    Duplicate {
        /// The repeated letter.
        letter: char,
    },

    /// A letter belongs to the reserved uppercase class.
    #[error("reserved letter in alphabet: {letter:?}")]
    Reserved {
        /// The reserved letter.
        letter: char,
    },
}

/// Errors from addressing or building a [`Mapping`](crate::Mapping).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The key is not a member of the mapping's alphabet.
    #[error("letter outside alphabet: {letter:?}")]
    LetterOutsideAlphabet {
        /// The offending key.
        letter: char,
    },

    /// A prebuilt mapping tried to store a reserved value.
    #[error("reserved value {value:?} for letter {letter:?}")]
    ReservedValue {
        /// The key being assigned.
        letter: char,
        /// The rejected value.
        value: char,
    },
}

/// Error from parsing a [`Mode`](crate::Mode) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode: {input:?} (expected \"encrypt\" or \"decrypt\")")]
pub struct ParseModeError {
    /// The unrecognised input.
    pub input: String,
}
