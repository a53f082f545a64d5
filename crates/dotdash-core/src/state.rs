//! Observable processor state.
//!
//! [`ProcessorState`] is what the presentation layer reads after each
//! notification. Fields are private; only the [`crate::Processor`] mutates
//! them, which keeps the invariants below intact:
//!
//! - `current_symbol` contains only `.` and `-`.
//! - `is_error` implies `current_symbol` is empty.

/// Symbol buffer, decoded result and error flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessorState {
    pub(crate) current_symbol: String,
    pub(crate) result: String,
    pub(crate) is_error: bool,
}

impl ProcessorState {
    /// Create empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern accumulated since the last space.
    pub fn current_symbol(&self) -> &str {
        &self.current_symbol
    }

    /// Characters decoded so far.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Last completed symbol failed to decode and the alert is not yet closed.
    pub fn is_error(&self) -> bool {
        self.is_error
    }
}
