//! Presentation data for front ends.
//!
//! Everything here is derived from workbench state; nothing feeds back into
//! the engine.

use cipherpad_core::{Alphabet, Mapping, Mode};
use serde::Serialize;

/// One row of the mapping editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MappingRow {
    /// Alphabet letter.
    pub letter: char,
    /// Current value, `None` when unset (rendered as an empty box).
    pub value: Option<char>,
}

/// User-facing labels that depend on the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeLabels {
    /// Section heading.
    pub heading: &'static str,
    /// Message box placeholder.
    pub placeholder: &'static str,
    /// Process button.
    pub process: &'static str,
    /// Mode toggle button.
    pub toggle: &'static str,
    /// Caption above the output.
    pub output: &'static str,
}

impl ModeLabels {
    /// Labels for `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Encrypt => Self {
                heading: "Message Encryption",
                placeholder: "Enter message to encrypt",
                process: "Encrypt",
                toggle: "Switch to Decryption",
                output: "Encrypted Message:",
            },
            Mode::Decrypt => Self {
                heading: "Message Decryption",
                placeholder: "Enter message to decrypt",
                process: "Decrypt",
                toggle: "Switch to Encryption",
                output: "Decrypted Message:",
            },
        }
    }
}

/// Split `alphabet` into `groups` editor columns.
///
/// Each column holds `ceil(len / groups)` letters; trailing columns may be
/// shorter or empty. `groups` is capped at the alphabet length, so there is
/// never more than one column per letter. Returns no columns when `groups`
/// is 0.
pub fn editor_groups(alphabet: &Alphabet, groups: usize) -> Vec<Vec<char>> {
    let letters = alphabet.as_slice();
    let groups = groups.min(letters.len());
    if groups == 0 {
        return Vec::new();
    }

    let size = letters.len().div_ceil(groups);
    (0..groups)
        .map(|i| {
            let start = (i * size).min(letters.len());
            let end = ((i + 1) * size).min(letters.len());
            letters[start..end].to_vec()
        })
        .collect()
}

/// Everything a front end needs to draw the workbench.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkbenchSnapshot {
    /// Current mode.
    pub mode: Mode,
    /// Mode-dependent labels.
    pub labels: ModeLabels,
    /// Mapping editor rows, split into columns.
    pub columns: Vec<Vec<MappingRow>>,
    /// Filtered message.
    pub message: String,
    /// Output of the last transform.
    pub output: String,
}

impl WorkbenchSnapshot {
    /// Build a snapshot from workbench state.
    pub fn new(mapping: &Mapping, groups: usize, mode: Mode, message: &str, output: &str) -> Self {
        let columns = editor_groups(mapping.alphabet(), groups)
            .into_iter()
            .map(|column| {
                column
                    .into_iter()
                    .map(|letter| MappingRow { letter, value: mapping.get(letter) })
                    .collect()
            })
            .collect();

        Self {
            mode,
            labels: ModeLabels::for_mode(mode),
            columns,
            message: message.to_string(),
            output: output.to_string(),
        }
    }

    /// All rows in alphabet order.
    pub fn rows(&self) -> impl Iterator<Item = &MappingRow> + '_ {
        self.columns.iter().flatten()
    }
}
