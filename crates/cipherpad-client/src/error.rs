//! Workbench error types.

use cipherpad_core::MappingError;
use thiserror::Error;

/// Errors from workbench operations.
///
/// Reserved input is never an error; it is dropped and logged. These only
/// cover caller mistakes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkbenchError {
    /// Configuration cannot produce a usable workbench.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Mapping edit addressed a letter outside the alphabet.
    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = WorkbenchError::from(MappingError::LetterOutsideAlphabet { letter: '#' });
        assert_eq!(err.to_string(), "mapping error: letter outside alphabet: '#'");

        let err = WorkbenchError::InvalidConfig { reason: "groups must be at least 1".to_string() };
        assert_eq!(err.to_string(), "invalid config: groups must be at least 1");
    }
}
