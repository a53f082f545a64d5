//! State-changed notification.

use crate::ProcessorState;

/// Receives one notification per processed input.
///
/// Called synchronously after the mutation completes and before
/// [`crate::Processor::process`] returns. Closures taking
/// `&ProcessorState` implement this trait.
pub trait StateObserver {
    /// The processor finished handling an input.
    fn state_changed(&mut self, state: &ProcessorState);
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl StateObserver for NoopObserver {
    fn state_changed(&mut self, _state: &ProcessorState) {}
}

impl<F> StateObserver for F
where
    F: FnMut(&ProcessorState),
{
    fn state_changed(&mut self, state: &ProcessorState) {
        self(state);
    }
}
