//! Workbench events and actions.

use cipherpad_core::Mode;

use crate::view::WorkbenchSnapshot;

/// Events fed into the workbench by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchEvent {
    /// The editor box for `letter` now holds `input`.
    ///
    /// Only the last character counts; empty input clears the entry.
    EditMapping {
        /// Alphabet letter being edited.
        letter: char,
        /// Raw contents of the editor box.
        input: String,
    },

    /// The message box now holds `raw`.
    EditMessage {
        /// Raw, unfiltered text.
        raw: String,
    },

    /// Run the transform in the current mode.
    Process,

    /// Switch between encryption and decryption.
    ToggleMode,

    /// Replace the mapping with a fresh random permutation.
    Reshuffle,
}

/// Actions produced by the workbench for the front end to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchAction {
    /// A mapping entry changed.
    MappingChanged {
        /// The edited letter.
        letter: char,
        /// New value, `None` if cleared.
        value: Option<char>,
    },

    /// The stored (filtered) message changed.
    MessageChanged {
        /// The filtered message.
        message: String,
    },

    /// The mode changed.
    ModeChanged {
        /// The new mode.
        mode: Mode,
    },

    /// A transform completed.
    OutputReady {
        /// Mode the transform ran in.
        mode: Mode,
        /// Transformed text.
        text: String,
    },

    /// Re-render from this snapshot.
    Render(WorkbenchSnapshot),

    /// Informational message for the front end's log.
    Log {
        /// Log text.
        message: String,
    },
}
