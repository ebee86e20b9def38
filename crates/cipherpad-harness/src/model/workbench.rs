//! Model workbench - the reference implementation.

use cipherpad_core::Mode;

use super::operation::{Operation, OperationError, OperationResult};

/// Observable state for oracle comparison.
///
/// This is the subset of workbench state that can be compared against the
/// real implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Mapping entries in alphabet order.
    pub mapping: Vec<(char, Option<char>)>,
    /// Stored message.
    pub message: String,
    /// Last output.
    pub output: String,
    /// Current mode.
    pub mode: Mode,
}

/// Model workbench.
///
/// Values are strings that are either empty or one character long; the
/// first entry in the list whose value matches wins on decryption.
#[derive(Debug, Clone)]
pub struct ModelWorkbench {
    /// `(letter, value)` in alphabet order.
    entries: Vec<(char, String)>,
    message: String,
    output: String,
    encrypting: bool,
}

impl ModelWorkbench {
    /// Create a model starting from the given mapping entries.
    pub fn new(entries: impl IntoIterator<Item = (char, Option<char>)>, mode: Mode) -> Self {
        let entries = entries
            .into_iter()
            .map(|(letter, value)| (letter, value.map(String::from).unwrap_or_default()))
            .collect();

        Self {
            entries,
            message: String::new(),
            output: String::new(),
            encrypting: mode == Mode::Encrypt,
        }
    }

    /// Apply an operation and return the result.
    ///
    /// This is the main entry point for model-based testing.
    /// The result should match the real implementation's result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::EditMapping { letter, input } => {
                self.apply_edit_mapping(letter.to_char(), &input.to_text())
            },
            Operation::EditMessage { raw } => {
                self.message = raw.to_text().chars().filter(|c| !is_upper(*c)).collect();
                OperationResult::Ok
            },
            Operation::Process => {
                self.output = self.message.chars().map(|c| self.process_char(c)).collect();
                OperationResult::Ok
            },
            Operation::ToggleMode => {
                self.encrypting = !self.encrypting;
                OperationResult::Ok
            },
            // Mapping arrives through adopt_mapping; nothing else changes
            Operation::Reshuffle => OperationResult::Ok,
        }
    }

    /// Replace every mapping value with the real workbench's after a
    /// reshuffle. Letters keep their order; message, output and mode stay.
    pub fn adopt_mapping(&mut self, entries: impl IntoIterator<Item = (char, Option<char>)>) {
        self.entries = entries
            .into_iter()
            .map(|(letter, value)| (letter, value.map(String::from).unwrap_or_default()))
            .collect();
    }

    /// Current observable state.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            mapping: self
                .entries
                .iter()
                .map(|(letter, value)| (*letter, value.chars().next()))
                .collect(),
            message: self.message.clone(),
            output: self.output.clone(),
            mode: if self.encrypting { Mode::Encrypt } else { Mode::Decrypt },
        }
    }

    fn apply_edit_mapping(&mut self, letter: char, input: &str) -> OperationResult {
        let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == letter) else {
            return OperationResult::Error(OperationError::LetterOutsideAlphabet);
        };

        let last: String = input.chars().last().map(String::from).unwrap_or_default();
        let rejected = !last.is_empty() && last.chars().all(is_upper);
        if !rejected {
            slot.1 = last;
        }

        OperationResult::Ok
    }

    fn process_char(&self, c: char) -> char {
        let text = c.to_string();
        if self.encrypting {
            for (key, value) in &self.entries {
                if *key == c && !value.is_empty() {
                    return value.chars().next().unwrap_or(c);
                }
            }
            c
        } else {
            for (key, value) in &self.entries {
                if *value == text {
                    return *key;
                }
            }
            c
        }
    }
}

fn is_upper(c: char) -> bool {
    ('A'..='Z').contains(&c)
}
