//! Ordered letter domains.
//!
//! An [`Alphabet`] fixes both the key set of a mapping and the canonical
//! order used when decryption has to choose between letters that share a
//! value.

use std::sync::Arc;

use crate::error::AlphabetError;

/// Returns true if `c` belongs to the reserved value class (`A`..=`Z`).
///
/// Reserved characters are never stored as mapping values and are stripped
/// from messages.
pub fn is_reserved(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Ordered, duplicate-free set of letters.
///
/// Cheap to clone; the letters are shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: Arc<[char]>,
}

impl Alphabet {
    /// The 26 lowercase Latin letters, `a` through `z`.
    pub fn latin() -> Self {
        Self { letters: ('a'..='z').collect() }
    }

    /// Build an alphabet from an ordered sequence of letters.
    ///
    /// # Errors
    ///
    /// - [`AlphabetError::Empty`] if no letters are given
    /// - [`AlphabetError::Duplicate`] if a letter repeats
    /// - [`AlphabetError::Reserved`] if a letter is uppercase Latin, since
    ///   the alphabet also seeds the initial mapping values
    pub fn new(letters: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let mut seen: Vec<char> = Vec::new();
        for letter in letters {
            if is_reserved(letter) {
                return Err(AlphabetError::Reserved { letter });
            }
            if seen.contains(&letter) {
                return Err(AlphabetError::Duplicate { letter });
            }
            seen.push(letter);
        }

        if seen.is_empty() {
            return Err(AlphabetError::Empty);
        }

        Ok(Self { letters: seen.into() })
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; alphabets hold at least one letter.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether `c` is a letter of this alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// Index of `c` in canonical order. `None` if not a member.
    pub fn position(&self, c: char) -> Option<usize> {
        self.letters.iter().position(|&letter| letter == c)
    }

    /// Letters in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Letters in canonical order, as a slice.
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_is_a_to_z_in_order() {
        let alphabet = Alphabet::latin();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.iter().collect::<String>(), "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(alphabet.position('a'), Some(0));
        assert_eq!(alphabet.position('z'), Some(25));
        assert_eq!(alphabet.position('A'), None);
    }

    #[test]
    fn custom_alphabet_keeps_order() {
        let alphabet = Alphabet::new("qwe".chars()).unwrap();
        assert_eq!(alphabet.as_slice(), &['q', 'w', 'e']);
        assert!(alphabet.contains('w'));
        assert!(!alphabet.contains('a'));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Alphabet::new(Vec::<char>::new()), Err(AlphabetError::Empty));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(Alphabet::new("abca".chars()), Err(AlphabetError::Duplicate { letter: 'a' }));
    }

    #[test]
    fn rejects_reserved() {
        assert_eq!(Alphabet::new("abC".chars()), Err(AlphabetError::Reserved { letter: 'C' }));
    }

    #[test]
    fn reserved_class_is_ascii_uppercase_only() {
        assert!(is_reserved('A'));
        assert!(is_reserved('Z'));
        assert!(!is_reserved('a'));
        assert!(!is_reserved('1'));
        assert!(!is_reserved(' '));
        // Non-Latin uppercase passes through
        assert!(!is_reserved('É'));
        assert!(!is_reserved('Ω'));
    }
}
