//! Workbench configuration.

use cipherpad_core::{Alphabet, Mode};

/// Default number of column groups in the mapping editor.
pub const DEFAULT_GROUPS: usize = 3;

/// How the workbench seeds its mapping on startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialMapping {
    /// Random permutation of the alphabet.
    #[default]
    Shuffled,

    /// Every letter maps to itself.
    Identity,

    /// Every entry starts unset.
    Unset,
}

/// Workbench configuration.
#[derive(Debug, Clone)]
pub struct WorkbenchConfig {
    /// Letters covered by the mapping.
    pub alphabet: Alphabet,

    /// Number of column groups the mapping editor is split into. Must be
    /// between 1 and the alphabet length.
    pub groups: usize,

    /// Mode the workbench starts in.
    pub initial_mode: Mode,

    /// Starting mapping.
    pub initial_mapping: InitialMapping,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::latin(),
            groups: DEFAULT_GROUPS,
            initial_mode: Mode::Encrypt,
            initial_mapping: InitialMapping::Shuffled,
        }
    }
}
