//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine: keyboard input, button presses routed by
//! tag, terminal resizes and periodic ticks.

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// A button was pressed.
    ButtonPressed {
        /// Tag carried by the button.
        tag: u8,
    },

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
