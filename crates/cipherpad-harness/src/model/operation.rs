//! Operations for model-based testing.
//!
//! Operations represent every user gesture the workbench accepts. They are
//! generated randomly by proptest or the fuzzer and applied to both the
//! model and the real implementation.

use arbitrary::Arbitrary;

/// Letters an edit may target: the Latin alphabet plus a few non-members so
/// the out-of-alphabet path gets exercised.
const LETTER_POOL: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '0', 'A', '!',
];

/// Characters typed into editor and message boxes.
const INPUT_PALETTE: &[char] = &[
    'a', 'b', 'e', 'q', 'z', 'A', 'X', 'Z', '0', '7', ' ', '.', 'é', '世',
];

/// Upper bound on typed characters per input.
const MAX_INPUT_LEN: usize = 6;

/// Edit target, reduced onto [`LETTER_POOL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct ModelLetter(pub u8);

impl ModelLetter {
    /// The targeted character.
    pub fn to_char(self) -> char {
        LETTER_POOL[usize::from(self.0) % LETTER_POOL.len()]
    }
}

/// Small typed input.
///
/// Each pick selects one character from a fixed palette mixing letters,
/// reserved characters, digits, punctuation and non-Latin text.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub struct SmallInput {
    /// Palette indices.
    pub picks: Vec<u8>,
}

impl SmallInput {
    /// Expand to the typed string.
    pub fn to_text(&self) -> String {
        self.picks
            .iter()
            .take(MAX_INPUT_LEN)
            .map(|&pick| INPUT_PALETTE[usize::from(pick) % INPUT_PALETTE.len()])
            .collect()
    }
}

/// Operations that can be applied to the workbench.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Type into the editor box of a letter.
    EditMapping {
        /// Targeted letter.
        letter: ModelLetter,
        /// Box contents.
        input: SmallInput,
    },

    /// Type into the message box.
    EditMessage {
        /// Box contents.
        raw: SmallInput,
    },

    /// Press the process button.
    Process,

    /// Press the mode toggle.
    ToggleMode,

    /// Replace the mapping with a fresh shuffle.
    ///
    /// The model cannot predict the permutation; after applying this the
    /// caller hands the real mapping to [`ModelWorkbench::adopt_mapping`].
    ///
    /// [`ModelWorkbench::adopt_mapping`]: crate::ModelWorkbench::adopt_mapping
    Reshuffle,
}

/// Result of applying an operation.
///
/// Used to compare model and real system behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded.
    Ok,

    /// Operation failed with expected error.
    Error(OperationError),
}

/// Expected errors that can occur during operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Edit addressed a letter outside the alphabet.
    LetterOutsideAlphabet,
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, OperationResult::Ok)
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
}
