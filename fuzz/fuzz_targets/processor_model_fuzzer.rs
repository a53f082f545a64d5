//! Fuzz target comparing the Processor against the reference model
//!
//! # Strategy
//!
//! - Known actions in any order and any count
//! - Raw tags across the full `u8` range, mostly out of range
//!
//! # Invariants
//!
//! - Processor and model agree on symbol, result and error flag after every
//!   operation
//! - Exactly one notification per operation
//! - A Space that raises the error flag leaves an empty symbol

#![no_main]

use std::cell::Cell;

use dotdash_core::{Processor, ProcessorState};
use dotdash_harness::{ModelAction, ModelProcessor, Operation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|ops: Vec<Operation>| {
    let notifications = Cell::new(0usize);
    let mut real =
        Processor::with_observer(|_: &ProcessorState| notifications.set(notifications.get() + 1));
    let mut model = ModelProcessor::new();

    for op in ops {
        match op {
            Operation::Act(action) => real.process(action.into()),
            Operation::Tag(tag) => {
                let _ = real.process_tag(tag);
            },
        }
        model.apply(op);

        assert_eq!(real.current_symbol(), model.current_symbol());
        assert_eq!(real.result(), model.result());
        assert_eq!(real.is_error(), model.is_error());
        assert_eq!(notifications.get(), model.notifications());
        if matches!(op, Operation::Act(ModelAction::Space) | Operation::Tag(2)) {
            assert!(real.current_symbol().is_empty());
        }
    }
});
