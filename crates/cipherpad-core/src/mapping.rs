//! Letter-to-replacement mapping.
//!
//! A [`Mapping`] is total over its alphabet: every letter always has exactly
//! one entry, which is either a single replacement character or unset. It is
//! not required to be a bijection, so several letters may share a value and
//! a letter may map to itself.

use tracing::trace;

use crate::{
    alphabet::{Alphabet, is_reserved},
    env::{Environment, shuffle},
    error::MappingError,
};

/// Result of a [`Mapping::set`] call on a valid letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The entry now holds `value`.
    Updated {
        /// The stored replacement.
        value: char,
    },

    /// The input was empty; the entry is now unset.
    Cleared,

    /// The input ended in a reserved character; the entry is unchanged.
    Rejected {
        /// The character that was refused.
        input: char,
    },
}

impl SetOutcome {
    /// Check if the write changed the entry's slot (even to the same value).
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// Total mapping from alphabet letters to optional replacement characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    alphabet: Alphabet,
    /// One slot per letter, in alphabet order. `None` means unset.
    values: Vec<Option<char>>,
}

impl Mapping {
    /// Mapping with every entry unset.
    pub fn unset(alphabet: Alphabet) -> Self {
        let values = vec![None; alphabet.len()];
        Self { alphabet, values }
    }

    /// Mapping sending every letter to itself.
    pub fn identity(alphabet: Alphabet) -> Self {
        let values = alphabet.iter().map(Some).collect();
        Self { alphabet, values }
    }

    /// Mapping whose values are a uniformly random permutation of the
    /// alphabet.
    ///
    /// Letters may land on themselves; no derangement is enforced.
    pub fn shuffled<E: Environment>(alphabet: Alphabet, env: &E) -> Self {
        let mut letters: Vec<char> = alphabet.iter().collect();
        shuffle(&mut letters, env);

        let values = letters.into_iter().map(Some).collect();
        Self { alphabet, values }
    }

    /// Build a mapping from explicit `(letter, value)` pairs; letters not
    /// named stay unset. Later pairs override earlier ones.
    ///
    /// # Errors
    ///
    /// - [`MappingError::LetterOutsideAlphabet`] if a key is not a member
    /// - [`MappingError::ReservedValue`] if a value is uppercase Latin
    pub fn from_pairs(
        alphabet: Alphabet,
        pairs: impl IntoIterator<Item = (char, char)>,
    ) -> Result<Self, MappingError> {
        let mut mapping = Self::unset(alphabet);
        for (letter, value) in pairs {
            let index = mapping.index_of(letter)?;
            if is_reserved(value) {
                return Err(MappingError::ReservedValue { letter, value });
            }
            mapping.values[index] = Some(value);
        }
        Ok(mapping)
    }

    /// The alphabet this mapping covers.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Current value for `letter`.
    ///
    /// `None` both for unset entries and for letters outside the alphabet.
    pub fn get(&self, letter: char) -> Option<char> {
        self.alphabet.position(letter).and_then(|index| self.values[index])
    }

    /// All entries in alphabet order.
    pub fn entries(&self) -> impl Iterator<Item = (char, Option<char>)> + '_ {
        self.alphabet.iter().zip(self.values.iter().copied())
    }

    /// Check whether every letter is set and no two letters share a value.
    pub fn is_bijective(&self) -> bool {
        let mut seen = Vec::with_capacity(self.values.len());
        for value in &self.values {
            match value {
                Some(v) if !seen.contains(v) => seen.push(*v),
                _ => return false,
            }
        }
        true
    }

    /// Apply a raw edit to the entry for `letter`.
    ///
    /// Only the last character of `raw_input` is considered, matching an input
    /// box that grows one keystroke at a time. An empty input clears the
    /// entry; a reserved final character is silently refused and the previous
    /// value kept.
    ///
    /// # Errors
    ///
    /// [`MappingError::LetterOutsideAlphabet`] if `letter` is not a member.
    /// The mapping is left untouched in that case.
    pub fn set(&mut self, letter: char, raw_input: &str) -> Result<SetOutcome, MappingError> {
        let index = self.index_of(letter)?;

        let outcome = match raw_input.chars().next_back() {
            None => {
                self.values[index] = None;
                SetOutcome::Cleared
            },
            Some(input) if is_reserved(input) => {
                trace!(%letter, %input, "refusing reserved mapping value");
                SetOutcome::Rejected { input }
            },
            Some(value) => {
                self.values[index] = Some(value);
                SetOutcome::Updated { value }
            },
        };

        Ok(outcome)
    }

    /// Forward substitution of a single character.
    ///
    /// Characters outside the alphabet and letters whose entry is unset pass
    /// through unchanged.
    pub fn encrypt_char(&self, c: char) -> char {
        self.get(c).unwrap_or(c)
    }

    /// Inverse substitution of a single character.
    ///
    /// Scans entries in alphabet order and returns the first letter whose
    /// value is `c`, so shared values always resolve to the earliest letter.
    /// Characters no entry maps to pass through unchanged.
    pub fn decrypt_char(&self, c: char) -> char {
        self.entries().find(|&(_, value)| value == Some(c)).map_or(c, |(letter, _)| letter)
    }

    fn index_of(&self, letter: char) -> Result<usize, MappingError> {
        self.alphabet.position(letter).ok_or(MappingError::LetterOutsideAlphabet { letter })
    }
}
