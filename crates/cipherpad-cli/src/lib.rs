//! Cipherpad terminal front end.
//!
//! Drives a [`Workbench`] with events built from command-line arguments and
//! writes the resulting mapping table and output text.
//!
//! ## Architecture
//!
//! ```text
//! cipherpad-cli
//!   ├─ CliEnv            (system or seeded Environment impl)
//!   ├─ Assignment        (`a=x` mapping edits from --set)
//!   ├─ render            (mapping editor as a text table)
//!   └─ run               (events in, actions logged, output written)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assignment;
mod env;
mod error;
pub mod render;
mod system_env;

use std::io::Write;

pub use assignment::Assignment;
use cipherpad_client::{Workbench, WorkbenchAction, WorkbenchEvent};
pub use env::CliEnv;
pub use error::CliError;
pub use system_env::SystemEnv;

/// One invocation's worth of input.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Mapping edits, applied in order.
    pub assignments: Vec<Assignment>,
    /// Raw message text.
    pub message: String,
    /// Write the mapping table before the output.
    pub show_map: bool,
}

/// Apply `session` to `workbench` and write the result to `out`.
///
/// Rejected mapping edits are logged and skipped. Writes the mapping table
/// (when requested) followed by the transformed message on its own line.
///
/// # Errors
///
/// - [`CliError::Workbench`] if an assignment targets a letter outside the
///   alphabet
/// - [`CliError::Io`] if writing to `out` fails
pub fn run<E, W>(workbench: &mut Workbench<E>, session: &Session, out: &mut W) -> Result<(), CliError>
where
    E: cipherpad_client::Environment,
    W: Write,
{
    for assignment in &session.assignments {
        let event = WorkbenchEvent::EditMapping {
            letter: assignment.letter,
            input: assignment.input.clone(),
        };
        log_actions(&workbench.handle(event)?);
    }

    log_actions(&workbench.handle(WorkbenchEvent::EditMessage { raw: session.message.clone() })?);
    log_actions(&workbench.handle(WorkbenchEvent::Process)?);

    if session.show_map {
        write!(out, "{}", render::editor_table(&workbench.snapshot()))?;
        writeln!(out)?;
    }
    writeln!(out, "{}", workbench.output())?;

    Ok(())
}

/// Drop one trailing line ending (`\n` or `\r\n`) from piped input.
///
/// Only the terminator added by `echo` or a final Enter is removed; any
/// further blank lines belong to the message.
pub fn strip_line_ending(input: &str) -> &str {
    input.strip_suffix("\r\n").or_else(|| input.strip_suffix('\n')).unwrap_or(input)
}

fn log_actions(actions: &[WorkbenchAction]) {
    for action in actions {
        match action {
            WorkbenchAction::MappingChanged { letter, value } => {
                tracing::debug!(%letter, ?value, "mapping changed");
            },
            WorkbenchAction::MessageChanged { message } => {
                tracing::debug!(chars = message.chars().count(), "message changed");
            },
            WorkbenchAction::ModeChanged { mode } => tracing::debug!(%mode, "mode changed"),
            WorkbenchAction::OutputReady { mode, text } => {
                tracing::info!(%mode, chars = text.chars().count(), "output ready");
            },
            WorkbenchAction::Log { message } => tracing::warn!("{message}"),
            WorkbenchAction::Render(_) => {},
        }
    }
}
