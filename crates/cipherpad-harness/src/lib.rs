//! Deterministic test harness for cipherpad.
//!
//! A seeded implementation of the `Environment` trait so shuffled mappings
//! are reproducible, plus a reference model of the workbench.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation for model-based
//! testing. Operations are applied to both the model and real workbench,
//! and their observable states are compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod sim_env;

pub use model::{
    ModelLetter, ModelWorkbench, ObservableState, Operation, OperationError, OperationResult,
    SmallInput,
};
pub use sim_env::SimEnv;
