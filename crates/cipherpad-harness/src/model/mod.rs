//! Reference model for model-based testing.
//!
//! The model is a deliberately naive rendition of the workbench: mapping
//! values are plain strings, lookups are linear scans and nothing is cached.
//! It serves as the oracle against which the real workbench is verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Behaviour not structure: Captures WHAT, not HOW
//! - Deterministic: Same inputs produce same outputs

pub mod operation;
mod workbench;

pub use operation::{ModelLetter, Operation, OperationError, OperationResult, SmallInput};
pub use workbench::{ModelWorkbench, ObservableState};
