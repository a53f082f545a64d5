//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the App at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use dotdash_app::App;

/// Snapshot of the App's observable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSnapshot {
    /// Pattern accumulated since the last space.
    pub current_symbol: String,
    /// Characters decoded so far.
    pub result: String,
    /// Decode error flag.
    pub is_error: bool,
    /// Focused button index.
    pub focus: usize,
}

impl AppSnapshot {
    /// Capture the observable state of `app`.
    pub fn from_app(app: &App) -> Self {
        Self {
            current_symbol: app.current_symbol().to_string(),
            result: app.result().to_string(),
            is_error: app.is_alert_visible(),
            focus: app.focus(),
        }
    }

    /// Set the current symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.current_symbol = symbol.into();
        self
    }

    /// Set the decoded result.
    #[must_use]
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = result.into();
        self
    }

    /// Set the error flag.
    #[must_use]
    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    /// Set the focused button index.
    #[must_use]
    pub fn with_focus(mut self, focus: usize) -> Self {
        self.focus = focus;
        self
    }
}
