//! On-screen buttons and focus navigation.
//!
//! The screen carries the three signal buttons on one row with the reset
//! button underneath. Focus is an index into [`BUTTONS`].

use dotdash_core::Action;

/// Buttons in focus order.
pub const BUTTONS: [Action; 4] = [Action::Dot, Action::Hyphen, Action::Space, Action::Reset];

/// Number of buttons on the signal row.
pub const ROW_LEN: usize = 3;

/// Index of the reset button.
pub const RESET_INDEX: usize = 3;

/// Next focus index, wrapping around.
pub fn next(focus: usize) -> usize {
    if focus + 1 >= BUTTONS.len() { 0 } else { focus + 1 }
}

/// Previous focus index, wrapping around.
pub fn prev(focus: usize) -> usize {
    if focus == 0 { BUTTONS.len() - 1 } else { focus - 1 }
}

/// Focus index one row down. The signal row moves to reset.
pub fn down(focus: usize) -> usize {
    if focus < ROW_LEN { RESET_INDEX } else { focus }
}

/// Focus index one row up. Reset moves to the first signal button.
pub fn up(focus: usize) -> usize {
    if focus >= ROW_LEN { 0 } else { focus }
}
