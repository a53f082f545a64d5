//! Model-based property tests.
//!
//! These tests generate random operation sequences and verify that the real
//! processor behaves identically to the reference model.
//!
//! # Architecture
//!
//! ```text
//! proptest generates: Vec<Operation>
//!                          │
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!    ModelProcessor    Processor       Compare
//!      (reference)      (real)       Observable state
//! ```

use std::cell::Cell;

use dotdash_core::{Processor, ProcessorState};
use dotdash_harness::{ModelAction, ModelProcessor, Operation};
use proptest::prelude::*;

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => prop::sample::select(vec![ModelAction::Dot, ModelAction::Hyphen])
            .prop_map(Operation::Act),
        2 => Just(Operation::Act(ModelAction::Space)),
        1 => prop::sample::select(vec![ModelAction::Reset, ModelAction::CloseAlert])
            .prop_map(Operation::Act),
        1 => (0u8..10).prop_map(Operation::Tag),
    ]
}

fn apply_real<O: dotdash_core::StateObserver>(processor: &mut Processor<O>, op: Operation) {
    match op {
        Operation::Act(action) => processor.process(action.into()),
        Operation::Tag(tag) => {
            let _ = processor.process_tag(tag);
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_processor_matches_model(ops in prop::collection::vec(operation_strategy(), 0..100)) {
        let notifications = Cell::new(0usize);
        let mut real =
            Processor::with_observer(|_: &ProcessorState| notifications.set(notifications.get() + 1));
        let mut model = ModelProcessor::new();

        for (step, op) in ops.into_iter().enumerate() {
            apply_real(&mut real, op);
            model.apply(op);

            prop_assert_eq!(real.current_symbol(), model.current_symbol(), "step {}", step);
            prop_assert_eq!(real.result(), model.result(), "step {}", step);
            prop_assert_eq!(real.is_error(), model.is_error(), "step {}", step);
            prop_assert_eq!(notifications.get(), model.notifications(), "step {}", step);
        }
    }
}
