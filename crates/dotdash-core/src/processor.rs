//! Symbol processor state machine.
//!
//! This module defines the [`Processor`], which owns the [`ProcessorState`]
//! and applies one [`Action`] at a time:
//!
//! | Action     | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | Dot        | append `.` to the current symbol                           |
//! | Hyphen     | append `-` to the current symbol                           |
//! | Space      | decode; hit appends to result, miss raises the error flag  |
//! | Reset      | clear current symbol and result, error flag untouched      |
//! | CloseAlert | clear the error flag                                       |
//!
//! Both outcomes of Space clear the current symbol. The observer is notified
//! exactly once per call, including calls with an unknown tag.

use crate::{Action, NoopObserver, ProcessorState, StateObserver, UnknownAction, morse};

/// Morse symbol processor.
///
/// Pure state machine with a synchronous observer. No I/O dependencies.
#[derive(Debug, Clone, Default)]
pub struct Processor<O = NoopObserver> {
    state: ProcessorState,
    observer: O,
}

impl Processor {
    /// Create a processor without an observer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: StateObserver> Processor<O> {
    /// Create a processor that notifies `observer` after every input.
    pub fn with_observer(observer: O) -> Self {
        Self { state: ProcessorState::new(), observer }
    }

    /// Apply an action, then notify the observer.
    pub fn process(&mut self, action: Action) {
        tracing::info!(%action, "processing action");

        match action {
            Action::Dot => self.state.current_symbol.push(morse::DOT),
            Action::Hyphen => self.state.current_symbol.push(morse::HYPHEN),
            Action::Space => self.process_space(),
            Action::Reset => self.process_reset(),
            Action::CloseAlert => self.state.is_error = false,
        }

        tracing::debug!(
            current = %self.state.current_symbol,
            result = %self.state.result,
            is_error = self.state.is_error,
            "processed action"
        );
        self.notify();
    }

    /// Resolve a button tag and apply the action.
    ///
    /// An unknown tag leaves the state untouched but still notifies the
    /// observer, then returns [`UnknownAction::Tag`].
    pub fn process_tag(&mut self, tag: u8) -> Result<(), UnknownAction> {
        match Action::from_tag(tag) {
            Ok(action) => {
                self.process(action);
                Ok(())
            },
            Err(err) => {
                tracing::warn!(tag, "ignoring unknown action tag");
                self.notify();
                Err(err)
            },
        }
    }

    /// Current observable state.
    pub fn state(&self) -> &ProcessorState {
        &self.state
    }

    /// Pattern accumulated since the last space.
    pub fn current_symbol(&self) -> &str {
        self.state.current_symbol()
    }

    /// Characters decoded so far.
    pub fn result(&self) -> &str {
        self.state.result()
    }

    /// Last completed symbol failed to decode.
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Registered observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Registered observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn process_space(&mut self) {
        let pattern = std::mem::take(&mut self.state.current_symbol);
        match morse::decode(&pattern) {
            Ok(c) => {
                tracing::info!(%pattern, decoded = %c, "decoded symbol");
                self.state.result.push(c);
            },
            Err(err) => {
                tracing::warn!(%err, "discarding symbol");
                self.state.is_error = true;
            },
        }
    }

    fn process_reset(&mut self) {
        tracing::info!("resetting input");
        self.state.current_symbol.clear();
        self.state.result.clear();
    }

    fn notify(&mut self) {
        self.observer.state_changed(&self.state);
    }
}
