//! Fuzz target for [`Workbench`] against the reference model
//!
//! Divergence between the workbench and its model
//!
//! # Strategy
//!
//! - Operation sequences: Arbitrary mapping edits, message edits, process
//!   toggle and reshuffle operations from the harness
//! - Seeds: Arbitrary seed for the shuffled starting mapping
//!
//! # Invariants
//!
//! - Operation results match the model
//! - Observable state (mapping, message, output, mode) matches the model
//!   after every operation
//! - NEVER panic on any operation sequence

#![no_main]

use arbitrary::Arbitrary;
use cipherpad_client::{Workbench, WorkbenchConfig, WorkbenchEvent};
use cipherpad_harness::{
    ModelWorkbench, ObservableState, Operation, OperationError, OperationResult, SimEnv,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    seed: u64,
    ops: Vec<Operation>,
}

fn observe(workbench: &Workbench<SimEnv>) -> ObservableState {
    ObservableState {
        mapping: workbench.mapping().entries().collect(),
        message: workbench.message().as_str().to_string(),
        output: workbench.output().to_string(),
        mode: workbench.mode(),
    }
}

fuzz_target!(|input: Input| {
    let Ok(mut workbench) = Workbench::new(SimEnv::with_seed(input.seed), WorkbenchConfig::default())
    else {
        return;
    };
    let mut model = ModelWorkbench::new(workbench.mapping().entries(), workbench.mode());

    for op in input.ops.iter().take(128) {
        let event = match op {
            Operation::EditMapping { letter, input } => {
                WorkbenchEvent::EditMapping { letter: letter.to_char(), input: input.to_text() }
            },
            Operation::EditMessage { raw } => WorkbenchEvent::EditMessage { raw: raw.to_text() },
            Operation::Process => WorkbenchEvent::Process,
            Operation::ToggleMode => WorkbenchEvent::ToggleMode,
            Operation::Reshuffle => WorkbenchEvent::Reshuffle,
        };

        let real_result = match workbench.handle(event) {
            Ok(_) => OperationResult::Ok,
            Err(_) => OperationResult::Error(OperationError::LetterOutsideAlphabet),
        };

        assert_eq!(model.apply(op), real_result, "result divergence on {op:?}");
        if *op == Operation::Reshuffle {
            assert!(workbench.mapping().is_bijective());
            model.adopt_mapping(workbench.mapping().entries());
        }
        assert_eq!(model.observable_state(), observe(&workbench), "state divergence on {op:?}");
    }
});
