//! CLI error types.

use cipherpad_client::WorkbenchError;
use thiserror::Error;

/// Errors that can occur in the front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// A `--set` argument is not of the form `letter=input`.
    #[error("invalid assignment {input:?}: expected LETTER=INPUT")]
    InvalidAssignment {
        /// The malformed argument.
        input: String,
    },

    /// The workbench refused an event or configuration.
    #[error("workbench error: {0}")]
    Workbench(#[from] WorkbenchError),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
