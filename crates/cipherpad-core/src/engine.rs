//! Mapping engine.
//!
//! The `MappingEngine` owns the mapping for the lifetime of a session. The
//! presentation layer holds the engine (or a reference to it), forwards edits
//! through [`MappingEngine::set_mapping`] and asks for output through
//! [`MappingEngine::transform`]. No other code mutates the mapping.

use tracing::debug;

use crate::{
    alphabet::Alphabet,
    env::Environment,
    error::MappingError,
    mapping::{Mapping, SetOutcome},
    message::Message,
    mode::Mode,
    transform::transform,
};

/// Owner of a session's substitution mapping.
///
/// # Type Parameters
///
/// - `E`: Environment implementation for randomness
pub struct MappingEngine<E: Environment> {
    /// Current mapping.
    mapping: Mapping,

    /// Environment for randomness.
    env: E,
}

impl<E: Environment> MappingEngine<E> {
    /// Create an engine whose mapping is a random permutation of `alphabet`.
    pub fn new(env: E, alphabet: Alphabet) -> Self {
        let mapping = Mapping::shuffled(alphabet, &env);
        debug!(letters = mapping.alphabet().len(), "initialized shuffled mapping");
        Self { mapping, env }
    }

    /// Create an engine around an existing mapping.
    pub fn with_mapping(env: E, mapping: Mapping) -> Self {
        Self { mapping, env }
    }

    /// The alphabet the mapping covers.
    pub fn alphabet(&self) -> &Alphabet {
        self.mapping.alphabet()
    }

    /// The current mapping.
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Replace the mapping wholesale with a fresh random permutation.
    pub fn reinitialize(&mut self) -> &Mapping {
        self.mapping = Mapping::shuffled(self.mapping.alphabet().clone(), &self.env);
        debug!("reinitialized mapping");
        &self.mapping
    }

    /// Apply a raw edit to one entry. See [`Mapping::set`].
    ///
    /// # Errors
    ///
    /// [`MappingError::LetterOutsideAlphabet`] if `letter` is not covered.
    pub fn set_mapping(&mut self, letter: char, raw_input: &str) -> Result<SetOutcome, MappingError> {
        let outcome = self.mapping.set(letter, raw_input)?;
        if !outcome.is_applied() {
            debug!(%letter, "ignored reserved mapping value");
        }
        Ok(outcome)
    }

    /// Filter raw text into a [`Message`].
    pub fn set_message(raw_text: &str) -> Message {
        Message::new(raw_text)
    }

    /// Transform `message` with the current mapping.
    pub fn transform(&self, message: &str, mode: Mode) -> String {
        transform(message, &self.mapping, mode)
    }
}
