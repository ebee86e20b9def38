//! Cipherpad Client
//!
//! Action-based workbench state machine for cipherpad front ends. Owns the
//! mapping engine, the current message, the mode and the last output.
//!
//! # Architecture
//!
//! The workbench is a pure state machine that:
//! - Receives events from the front end (mapping edits, message edits,
//!   process, mode toggles)
//! - Produces actions for the front end to apply (render a snapshot, show
//!   output, log)
//! - Uses the `Environment` trait for randomness (deterministic testing)
//!
//! Front ends never touch the mapping directly; they re-render from the
//! [`WorkbenchSnapshot`] carried by [`WorkbenchAction::Render`].
//!
//! # Components
//!
//! - [`Workbench`]: Top-level state machine
//! - [`WorkbenchEvent`]: Events fed into the workbench
//! - [`WorkbenchAction`]: Actions produced by the workbench
//! - [`WorkbenchConfig`]: Alphabet, editor layout and initial state

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
mod event;
pub mod view;
mod workbench;

pub use cipherpad_core::{Alphabet, Environment, Mapping, Message, Mode};
pub use config::{DEFAULT_GROUPS, InitialMapping, WorkbenchConfig};
pub use error::WorkbenchError;
pub use event::{WorkbenchAction, WorkbenchEvent};
pub use view::{MappingRow, ModeLabels, WorkbenchSnapshot};
pub use workbench::Workbench;
